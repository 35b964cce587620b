//! The graph container.
//!
//! [`Scene`] owns every [`Node`] (which in turn owns its sockets) and every
//! [`Edge`]. Edges only reference sockets by id, and sockets only reference
//! their node and edges by id, so there is a single owner for each entity.
//!
//! Invariant: every socket referenced by an edge in the scene belongs to a
//! node in the scene. Node removal therefore cascades to the node's edges
//! before the node is dropped.

use crate::config::{EditorConfig, NodeMetrics};
use crate::edge::{Edge, EdgeType};
use crate::error::{EditorError, Result};
use crate::geometry::Point;
use crate::identity::{EdgeId, IdMap, NodeId, SceneId, SocketId};
use crate::node::Node;
use crate::path::EdgePath;
use crate::selection::{ItemId, SelectionManager};
use crate::serialization::{self, EdgeRecord, NodeRecord, SceneRecord, SelectionRecord};
use crate::socket::Socket;
use std::fmt;
use std::path::Path;

/// Notification for the rendering side: an item entered or left the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    NodeAdded(NodeId),
    NodeRemoved(NodeId),
    EdgeAdded(EdgeId),
    EdgeRemoved(EdgeId),
}

type ModifiedListener = Box<dyn FnMut()>;
type ItemListener = Box<dyn FnMut(&SceneEvent)>;

pub struct Scene {
    id: SceneId,
    scene_width: i64,
    scene_height: i64,
    metrics: NodeMetrics,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selection: SelectionManager,
    modified: bool,
    modified_listeners: Vec<ModifiedListener>,
    item_listeners: Vec<ItemListener>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("id", &self.id)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("modified", &self.modified)
            .finish()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            id: SceneId::fresh(),
            scene_width: config.scene_width,
            scene_height: config.scene_height,
            metrics: config.node,
            nodes: Vec::new(),
            edges: Vec::new(),
            selection: SelectionManager::new(),
            modified: false,
            modified_listeners: Vec::new(),
            item_listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn scene_width(&self) -> i64 {
        self.scene_width
    }

    pub fn scene_height(&self) -> i64 {
        self.scene_height
    }

    pub fn metrics(&self) -> &NodeMetrics {
        &self.metrics
    }

    // === Lookup ===

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn socket(&self, id: SocketId) -> Option<&Socket> {
        self.nodes.iter().find_map(|n| n.socket(id))
    }

    fn socket_mut(&mut self, id: SocketId) -> Option<&mut Socket> {
        self.nodes.iter_mut().find_map(|n| n.socket_mut(id))
    }

    /// Scene-space anchor of a socket, computed from its node's layout.
    pub fn socket_anchor(&self, id: SocketId) -> Option<Point> {
        let owner = self.node(self.socket(id)?.node())?;
        owner.socket_anchor(&self.metrics, id)
    }

    /// Start and end points of an edge. A dragging edge ends at its drag
    /// position, or at its start when it has not moved yet.
    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(Point, Point)> {
        let edge = self.edge(id)?;
        let start = self.socket_anchor(edge.start?)?;
        let end = match edge.end {
            Some(end) => self.socket_anchor(end)?,
            None => edge.drag_position.unwrap_or(start),
        };
        Some((start, end))
    }

    pub fn edge_path(&self, id: EdgeId, bezier_min_offset: f64) -> Option<EdgePath> {
        let (start, end) = self.edge_endpoints(id)?;
        let edge_type = self.edge(id)?.edge_type;
        Some(EdgePath::new(edge_type, start, end, bezier_min_offset))
    }

    /// Edges attached to any socket of `node`.
    pub fn edges_of_node(&self, node: NodeId) -> Vec<EdgeId> {
        let Some(node) = self.node(node) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|e| node.sockets().any(|s| e.touches(s.id())))
            .map(|e| e.id)
            .collect()
    }

    // === Selection ===

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.selection
    }

    /// Nodes in scene order that are currently selected.
    pub fn selected_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .map(Node::id)
            .filter(|&id| self.selection.contains_node(id))
            .collect()
    }

    /// Edges in scene order that are currently selected.
    pub fn selected_edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .map(|e| e.id)
            .filter(|&id| self.selection.contains_edge(id))
            .collect()
    }

    /// Select exactly the items named in `record`. Ids that no longer exist
    /// are skipped.
    pub fn restore_selection(&mut self, record: &SelectionRecord) {
        self.selection.clear();
        for &raw in &record.nodes {
            if let Some(node) = self.nodes.iter().find(|n| n.id().raw() == raw) {
                self.selection.insert(ItemId::Node(node.id()));
            }
        }
        for &raw in &record.edges {
            if let Some(edge) = self.edges.iter().find(|e| e.id.raw() == raw) {
                self.selection.insert(ItemId::Edge(edge.id));
            }
        }
    }

    // === Modified flag ===

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Listeners run once on each clean → modified transition.
    pub fn set_modified(&mut self, value: bool) {
        if value && !self.modified {
            self.modified = true;
            for listener in &mut self.modified_listeners {
                listener();
            }
        } else if !value {
            self.modified = false;
        }
    }

    pub fn add_modified_listener<F: FnMut() + 'static>(&mut self, listener: F) {
        self.modified_listeners.push(Box::new(listener));
    }

    pub fn add_item_listener<F: FnMut(&SceneEvent) + 'static>(&mut self, listener: F) {
        self.item_listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: SceneEvent) {
        for listener in &mut self.item_listeners {
            listener(&event);
        }
    }

    // === Nodes ===

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.insert_node(node);
        self.set_modified(true);
        id
    }

    fn insert_node(&mut self, node: Node) -> NodeId {
        let id = node.id();
        tracing::debug!(node = %id, title = node.title(), "adding node");
        self.nodes.push(node);
        self.emit(SceneEvent::NodeAdded(id));
        id
    }

    pub fn set_node_position(&mut self, id: NodeId, pos: Point) -> Result<()> {
        let node = self.node_mut(id).ok_or(EditorError::UnknownNode(id))?;
        node.set_pos(pos);
        Ok(())
    }

    /// Move every listed node by `delta`; unknown ids are ignored.
    pub fn translate_nodes(&mut self, ids: &[NodeId], delta: Point) {
        for node in self.nodes.iter_mut().filter(|n| ids.contains(&n.id())) {
            let pos = node.pos();
            node.set_pos(pos + delta);
        }
    }

    /// Remove a node after removing every edge attached to its sockets.
    ///
    /// Returns `false` (and logs a warning) when the node is not in the scene.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let removed = self.remove_node_cascade(id);
        if removed {
            self.set_modified(true);
        }
        removed
    }

    fn remove_node_cascade(&mut self, id: NodeId) -> bool {
        let Some(node) = self.node(id) else {
            tracing::warn!(node = %id, "Scene::remove_node: node is not in the scene");
            return false;
        };
        tracing::debug!(node = %id, "removing node");

        let sockets: Vec<SocketId> = node.sockets().map(Socket::id).collect();
        for socket in sockets {
            self.remove_all_socket_edges_inner(socket);
        }

        self.nodes.retain(|n| n.id() != id);
        self.selection.remove(ItemId::Node(id));
        self.emit(SceneEvent::NodeRemoved(id));
        true
    }

    // === Edges ===

    /// Create an edge from `start`, optionally already bound to `end`.
    ///
    /// Without an end socket the edge is in dragging state; it lives in the
    /// edge collection but does not count as a change to the graph.
    pub fn create_edge(&mut self, start: SocketId, end: Option<SocketId>, edge_type: EdgeType) -> Result<EdgeId> {
        let id = self.insert_edge(EdgeId::fresh(), start, end, edge_type)?;
        if end.is_some() {
            self.set_modified(true);
        }
        Ok(id)
    }

    fn insert_edge(&mut self, id: EdgeId, start: SocketId, end: Option<SocketId>, edge_type: EdgeType) -> Result<EdgeId> {
        if end == Some(start) {
            return Err(EditorError::SelfLoop { edge: id.raw(), socket: start.raw() });
        }
        for socket in std::iter::once(start).chain(end) {
            if self.socket(socket).is_none() {
                return Err(EditorError::UnknownSocket(socket));
            }
        }

        self.edges.push(Edge::new(id, edge_type));
        self.rewire(id, Some(start), false)?;
        self.rewire(id, end, true)?;
        tracing::debug!(edge = %id, start = %start, end = ?end.map(|s| s.raw()), "adding edge");
        self.emit(SceneEvent::EdgeAdded(id));
        Ok(id)
    }

    pub fn set_edge_start(&mut self, edge: EdgeId, socket: Option<SocketId>) -> Result<()> {
        self.rewire(edge, socket, false)?;
        self.mark_if_bound(edge);
        Ok(())
    }

    pub fn set_edge_end(&mut self, edge: EdgeId, socket: Option<SocketId>) -> Result<()> {
        self.rewire(edge, socket, true)?;
        self.mark_if_bound(edge);
        Ok(())
    }

    fn mark_if_bound(&mut self, edge: EdgeId) {
        if self.edge(edge).is_some_and(Edge::is_bound) {
            self.set_modified(true);
        }
    }

    /// Detach `edge` from its current start/end socket, then attach it to
    /// `socket`. The socket's edge list never holds the edge twice.
    fn rewire(&mut self, edge: EdgeId, socket: Option<SocketId>, end: bool) -> Result<()> {
        if let Some(s) = socket {
            if self.socket(s).is_none() {
                return Err(EditorError::UnknownSocket(s));
            }
            let other = self.edge(edge).and_then(|e| if end { e.start } else { e.end });
            if other == Some(s) {
                return Err(EditorError::SelfLoop { edge: edge.raw(), socket: s.raw() });
            }
        }

        let Some(e) = self.edges.iter_mut().find(|e| e.id == edge) else {
            tracing::warn!(edge = %edge, "Scene::rewire: edge is not in the scene");
            return Ok(());
        };
        let slot = if end { &mut e.end } else { &mut e.start };
        let previous = std::mem::replace(slot, socket);
        if socket.is_some() && end {
            e.drag_position = None;
        }

        if let Some(old) = previous.and_then(|old| self.socket_mut(old)) {
            old.remove_edge(edge);
        }
        if let Some(new) = socket.and_then(|new| self.socket_mut(new)) {
            new.add_edge(edge);
        }
        Ok(())
    }

    /// Move the free end of a dragging edge.
    pub fn set_drag_position(&mut self, edge: EdgeId, pos: Point) {
        if let Some(e) = self.edges.iter_mut().find(|e| e.id == edge) {
            e.drag_position = Some(pos);
        }
    }

    /// Detach an edge from both sockets and drop it.
    ///
    /// Removing an edge that is already gone is a no-op; node cascades and
    /// direct deletion can both reach the same edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let was_bound = self.edge(id).is_some_and(Edge::is_bound);
        let removed = self.remove_edge_inner(id);
        if removed && was_bound {
            self.set_modified(true);
        }
        removed
    }

    fn remove_edge_inner(&mut self, id: EdgeId) -> bool {
        if self.edge(id).is_none() {
            tracing::debug!(edge = %id, "edge already removed");
            return false;
        }
        // Sockets are checked before detaching, so neither call can fail
        let _ = self.rewire(id, None, true);
        let _ = self.rewire(id, None, false);

        self.edges.retain(|e| e.id != id);
        self.selection.remove(ItemId::Edge(id));
        self.emit(SceneEvent::EdgeRemoved(id));
        true
    }

    /// Remove every edge attached to `socket`.
    pub fn remove_all_socket_edges(&mut self, socket: SocketId) {
        let had_edges = self.socket(socket).is_some_and(Socket::has_edge);
        self.remove_all_socket_edges_inner(socket);
        if had_edges {
            self.set_modified(true);
        }
    }

    fn remove_all_socket_edges_inner(&mut self, socket: SocketId) {
        // Always re-read the head: removing one edge may remove others.
        while let Some(head) = self.socket(socket).and_then(|s| s.edges().first().copied()) {
            if !self.remove_edge_inner(head) {
                tracing::warn!(socket = %socket, edge = %head, "socket lists an edge the scene does not own");
                if let Some(s) = self.socket_mut(socket) {
                    s.remove_edge(head);
                }
            }
        }
    }

    // === Whole scene ===

    /// Remove every node (cascading to edges) and reset the modified flag.
    pub fn clear(&mut self) {
        while let Some(first) = self.nodes.first().map(Node::id) {
            self.remove_node_cascade(first);
        }
        let leftovers: Vec<EdgeId> = self.edges.iter().map(|e| e.id).collect();
        for edge in leftovers {
            tracing::warn!(edge = %edge, "edge survived node removal");
            self.remove_edge_inner(edge);
        }
        self.selection.clear();
        self.set_modified(false);
    }

    pub fn serialize(&self) -> Result<SceneRecord> {
        Ok(SceneRecord {
            id: self.id.raw(),
            scene_width: self.scene_width,
            scene_height: self.scene_height,
            nodes: self.nodes.iter().map(Node::serialize).collect(),
            edges: self.edges.iter().map(Edge::serialize).collect::<Result<Vec<_>>>()?,
        })
    }

    /// Replace the whole graph with `record`.
    ///
    /// Edge references are validated first; on error the scene is untouched.
    pub fn deserialize(&mut self, record: &SceneRecord, restore_id: bool) -> Result<()> {
        serialization::validate_edges(&record.nodes, &record.edges)?;

        self.clear();
        if restore_id {
            self.id = SceneId::restore(record.id);
        }
        self.scene_width = record.scene_width;
        self.scene_height = record.scene_height;

        self.insert_records(&record.nodes, &record.edges, restore_id, Point::default())?;
        self.set_modified(false);
        Ok(())
    }

    /// Rebuild nodes, then edges, with one fresh [`IdMap`] for the pass.
    ///
    /// `offset` is added to every node position. Callers validate the
    /// records beforehand.
    pub(crate) fn insert_records(
        &mut self,
        nodes: &[NodeRecord],
        edges: &[EdgeRecord],
        restore_id: bool,
        offset: Point,
    ) -> Result<(Vec<NodeId>, Vec<EdgeId>)> {
        let mut id_map = IdMap::new();

        let mut node_ids = Vec::with_capacity(nodes.len());
        for record in nodes {
            let mut node = Node::deserialize(record, &mut id_map, restore_id);
            node.set_pos(node.pos() + offset);
            node_ids.push(self.insert_node(node));
        }

        let mut edge_ids = Vec::with_capacity(edges.len());
        for record in edges {
            let resolve = |socket: u64| {
                id_map
                    .socket(socket)
                    .ok_or(EditorError::UnresolvedSocket { edge: record.id, socket })
            };
            let start = resolve(record.start)?;
            let end = resolve(record.end)?;
            let id = if restore_id { EdgeId::restore(record.id) } else { EdgeId::fresh() };
            edge_ids.push(self.insert_edge(id, start, Some(end), record.edge_type)?);
        }

        Ok((node_ids, edge_ids))
    }

    // === Persistence ===

    pub fn to_json(&self) -> Result<String> {
        serialization::to_pretty_json(&self.serialize()?)
    }

    /// Parse `text` and replace the scene with it, adopting its ids.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let record: SceneRecord = serde_json::from_str(text)?;
        self.deserialize(&record, true)
    }

    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json()?;
        std::fs::write(path, text)?;
        self.set_modified(false);
        tracing::info!(path = %path.display(), "saved scene");
        Ok(())
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        self.load_from_str(&text)?;
        tracing::info!(path = %path.display(), nodes = self.nodes.len(), edges = self.edges.len(), "loaded scene");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Two nodes, output of `a` connected to first input of `b`.
    fn two_connected() -> (Scene, NodeId, NodeId, EdgeId) {
        let mut scene = Scene::new();
        let a = scene.add_node(Node::new("A", &[1], &[1]));
        let b = scene.add_node(Node::new("B", &[1], &[1]).with_pos(300.0, 0.0));
        let out = scene.node(a).unwrap().outputs()[0].id();
        let inp = scene.node(b).unwrap().inputs()[0].id();
        let e = scene.create_edge(out, Some(inp), EdgeType::Bezier).unwrap();
        (scene, a, b, e)
    }

    // ========================================================================
    // Edge wiring
    // ========================================================================

    #[test]
    fn test_create_edge_attaches_to_both_sockets() {
        let (scene, a, b, e) = two_connected();
        let out = &scene.node(a).unwrap().outputs()[0];
        let inp = &scene.node(b).unwrap().inputs()[0];
        assert_eq!(out.edges(), &[e]);
        assert_eq!(inp.edges(), &[e]);
        assert!(scene.edge(e).unwrap().is_bound());
    }

    #[test]
    fn test_create_edge_unknown_socket_is_error() {
        let mut scene = Scene::new();
        let result = scene.create_edge(SocketId::fresh(), None, EdgeType::Direct);
        assert!(matches!(result, Err(EditorError::UnknownSocket(_))));
        assert!(scene.edges().is_empty());
    }

    #[test]
    fn test_rewire_detaches_before_attaching() {
        let (mut scene, a, b, e) = two_connected();
        let old_end = scene.node(b).unwrap().inputs()[0].id();
        let new_end = scene.node(a).unwrap().inputs()[0].id();

        scene.set_edge_end(e, Some(new_end)).unwrap();
        assert!(!scene.socket(old_end).unwrap().has_edge());
        assert_eq!(scene.socket(new_end).unwrap().edges(), &[e]);

        // Same socket again must not double count
        scene.set_edge_end(e, Some(new_end)).unwrap();
        assert_eq!(scene.socket(new_end).unwrap().edges(), &[e]);
    }

    #[test]
    fn test_create_edge_onto_its_own_start_is_error() {
        let (mut scene, a, _, e) = two_connected();
        scene.set_modified(false);
        let out = scene.node(a).unwrap().outputs()[0].id();

        let result = scene.create_edge(out, Some(out), EdgeType::Direct);
        assert!(matches!(result, Err(EditorError::SelfLoop { .. })));
        assert_eq!(scene.edges().len(), 1);
        assert_eq!(scene.socket(out).unwrap().edges(), &[e]);
        assert!(!scene.is_modified());
    }

    #[test]
    fn test_rewire_onto_other_end_is_error() {
        let (mut scene, a, b, e) = two_connected();
        let out = scene.node(a).unwrap().outputs()[0].id();
        let inp = scene.node(b).unwrap().inputs()[0].id();

        let result = scene.set_edge_end(e, Some(out));
        assert!(matches!(result, Err(EditorError::SelfLoop { .. })));
        assert_eq!(scene.socket(out).unwrap().edges(), &[e]);
        assert_eq!(scene.edge(e).unwrap().end_socket(), Some(inp));
    }

    #[test]
    fn test_remove_edge_twice_is_noop() {
        let (mut scene, _, _, e) = two_connected();
        assert!(scene.remove_edge(e));
        assert!(!scene.remove_edge(e));
        assert!(scene.edges().is_empty());
    }

    // ========================================================================
    // Cascade removal
    // ========================================================================

    #[test]
    fn test_remove_node_cascades_edges() {
        let (mut scene, a, b, _) = two_connected();
        assert!(scene.remove_node(a));
        assert!(scene.edges().is_empty());
        assert!(scene.node(b).unwrap().sockets().all(|s| !s.has_edge()));
    }

    #[test]
    fn test_remove_missing_node_is_noop() {
        let (mut scene, _, _, _) = two_connected();
        assert!(!scene.remove_node(NodeId::fresh()));
        assert_eq!(scene.nodes().len(), 2);
    }

    #[test]
    fn test_remove_all_socket_edges() {
        let (mut scene, a, b, _) = two_connected();
        let out = scene.node(a).unwrap().outputs()[0].id();
        let other = scene.node(b).unwrap().outputs()[0].id();
        scene.create_edge(out, Some(other), EdgeType::Direct).unwrap();
        assert_eq!(scene.socket(out).unwrap().edges().len(), 2);

        scene.remove_all_socket_edges(out);
        assert!(!scene.socket(out).unwrap().has_edge());
        assert!(scene.edges().is_empty());
    }

    #[test]
    fn test_removal_deselects() {
        let (mut scene, a, _, e) = two_connected();
        scene.selection_mut().insert(ItemId::Node(a));
        scene.selection_mut().insert(ItemId::Edge(e));
        scene.remove_node(a);
        assert!(scene.selection().is_empty());
    }

    #[test]
    fn test_clear_empties_and_resets_modified() {
        let (mut scene, _, _, _) = two_connected();
        assert!(scene.is_modified());
        scene.clear();
        assert!(scene.nodes().is_empty());
        assert!(scene.edges().is_empty());
        assert!(!scene.is_modified());
    }

    // ========================================================================
    // Dragging edges
    // ========================================================================

    #[test]
    fn test_dragging_edge_follows_drag_position() {
        let (mut scene, a, _, _) = two_connected();
        scene.set_modified(false);
        let out = scene.node(a).unwrap().outputs()[0].id();
        let drag = scene.create_edge(out, None, EdgeType::Bezier).unwrap();
        assert!(!scene.is_modified());

        let start = scene.socket_anchor(out).unwrap();
        assert_eq!(scene.edge_endpoints(drag), Some((start, start)));

        scene.set_drag_position(drag, Point::new(500.0, 500.0));
        assert_eq!(scene.edge_endpoints(drag), Some((start, Point::new(500.0, 500.0))));

        scene.remove_edge(drag);
        assert!(!scene.is_modified());
    }

    #[test]
    fn test_serialize_with_dragging_edge_fails() {
        let (mut scene, a, _, _) = two_connected();
        let out = scene.node(a).unwrap().outputs()[0].id();
        scene.create_edge(out, None, EdgeType::Bezier).unwrap();
        assert!(matches!(scene.serialize(), Err(EditorError::UnboundEdge(_))));
    }

    // ========================================================================
    // Modified flag
    // ========================================================================

    #[test]
    fn test_modified_listener_runs_once_per_burst() {
        let mut scene = Scene::new();
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        scene.add_modified_listener(move || *c.borrow_mut() += 1);

        scene.add_node(Node::new("A", &[], &[]));
        scene.add_node(Node::new("B", &[], &[]));
        scene.set_modified(true);
        assert_eq!(*calls.borrow(), 1);

        scene.set_modified(false);
        scene.add_node(Node::new("C", &[], &[]));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_item_listener_sees_cascade() {
        let (mut scene, a, _, e) = two_connected();
        let events = Rc::new(RefCell::new(Vec::new()));
        let ev = events.clone();
        scene.add_item_listener(move |event| ev.borrow_mut().push(*event));

        scene.remove_node(a);
        assert_eq!(
            *events.borrow(),
            vec![SceneEvent::EdgeRemoved(e), SceneEvent::NodeRemoved(a)]
        );
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    #[test]
    fn test_deserialize_restores_ids() {
        let (scene, a, _, e) = two_connected();
        let record = scene.serialize().unwrap();

        let mut other = Scene::new();
        other.deserialize(&record, true).unwrap();
        assert_eq!(other.id(), scene.id());
        assert!(other.node(a).is_some());
        assert!(other.edge(e).is_some());
        assert!(!other.is_modified());
        assert_eq!(other.serialize().unwrap(), record);
    }

    #[test]
    fn test_deserialize_invalid_record_leaves_scene_untouched() {
        let (mut scene, _, _, _) = two_connected();
        let mut record = scene.serialize().unwrap();
        record.edges[0].end = 123_456_789;

        let before = scene.serialize().unwrap();
        assert!(scene.deserialize(&record, true).is_err());
        assert_eq!(scene.serialize().unwrap(), before);
    }

    #[test]
    fn test_load_from_str_rejects_missing_edges_key() {
        let (mut scene, _, _, _) = two_connected();
        let text = r#"{"id": 1, "scene_width": 10, "scene_height": 10, "nodes": []}"#;
        assert!(matches!(scene.load_from_str(text), Err(EditorError::Parse(_))));
        assert_eq!(scene.nodes().len(), 2);
    }
}
