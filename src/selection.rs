use crate::identity::{EdgeId, NodeId};
use crate::serialization::SelectionRecord;
use std::collections::HashSet;

/// A selectable scene item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemId {
    Node(NodeId),
    Edge(EdgeId),
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SelectionManager {
    nodes: HashSet<NodeId>,
    edges: HashSet<EdgeId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle selection of an item (node or edge) based on interaction modifiers
    pub fn handle_interaction(&mut self, item: ItemId, shift_held: bool) {
        if shift_held {
            if self.contains(item) {
                self.remove(item);
            } else {
                self.insert(item);
            }
        } else {
            if self.len() == 1 && self.contains(item) {
                return;
            }
            self.clear();
            self.insert(item);
        }
    }

    pub fn insert(&mut self, item: ItemId) {
        match item {
            ItemId::Node(id) => self.nodes.insert(id),
            ItemId::Edge(id) => self.edges.insert(id),
        };
    }

    pub fn remove(&mut self, item: ItemId) {
        match item {
            ItemId::Node(id) => self.nodes.remove(&id),
            ItemId::Edge(id) => self.edges.remove(&id),
        };
    }

    /// Clear the current selection
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Replace the current selection with a new set of items
    ///
    /// Useful for box selection sync
    pub fn replace_selection<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.clear();
        self.extend(items);
    }

    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        for item in items {
            self.insert(item);
        }
    }

    pub fn contains(&self, item: ItemId) -> bool {
        match item {
            ItemId::Node(id) => self.nodes.contains(&id),
            ItemId::Edge(id) => self.edges.contains(&id),
        }
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Sorted id lists, so equal selections produce equal records.
    pub fn to_record(&self) -> SelectionRecord {
        let mut nodes: Vec<u64> = self.nodes.iter().map(|id| id.raw()).collect();
        let mut edges: Vec<u64> = self.edges.iter().map(|id| id.raw()).collect();
        nodes.sort_unstable();
        edges.sort_unstable();
        SelectionRecord { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> ItemId {
        ItemId::Node(NodeId::fresh())
    }

    // ========================================================================
    // SelectionManager::new() and Default
    // ========================================================================

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionManager::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    // ========================================================================
    // handle_interaction() - State Machine Behavior
    // ========================================================================

    #[test]
    fn test_handle_interaction_click_replaces_selection() {
        let mut selection = SelectionManager::new();
        let (a, b) = (node(), node());
        selection.handle_interaction(a, false);
        selection.handle_interaction(b, false);

        assert!(!selection.contains(a));
        assert!(selection.contains(b));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_handle_interaction_click_on_already_selected_single_is_noop() {
        let mut selection = SelectionManager::new();
        let a = node();
        selection.handle_interaction(a, false);
        selection.handle_interaction(a, false);

        assert!(selection.contains(a));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_handle_interaction_click_in_multi_collapses() {
        let mut selection = SelectionManager::new();
        let (a, b) = (node(), node());
        selection.handle_interaction(a, true);
        selection.handle_interaction(b, true);
        assert_eq!(selection.len(), 2);

        selection.handle_interaction(a, false);
        assert!(selection.contains(a));
        assert!(!selection.contains(b));
    }

    #[test]
    fn test_handle_interaction_shift_click_toggles() {
        let mut selection = SelectionManager::new();
        let a = node();
        let e = ItemId::Edge(EdgeId::fresh());
        selection.handle_interaction(a, false);
        selection.handle_interaction(e, true);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(e));

        selection.handle_interaction(e, true);
        assert!(!selection.contains(e));
        assert!(selection.contains(a));
    }

    // ========================================================================
    // Records
    // ========================================================================

    #[test]
    fn test_to_record_is_sorted() {
        let mut selection = SelectionManager::new();
        let ids = [NodeId::restore(30), NodeId::restore(10), NodeId::restore(20)];
        selection.replace_selection(ids.iter().map(|&id| ItemId::Node(id)));
        selection.insert(ItemId::Edge(EdgeId::restore(5)));

        let record = selection.to_record();
        assert_eq!(record.nodes, vec![10, 20, 30]);
        assert_eq!(record.edges, vec![5]);
    }
}
