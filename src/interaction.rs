//! Pointer and keyboard gesture handling.
//!
//! [`InteractionState`] is a small state machine driven by pointer-down,
//! pointer-move, pointer-up and key events in scene coordinates. The item
//! under the pointer is resolved once per event into a
//! [`HitTarget`](crate::hit_test::HitTarget) and dispatched by `match`.
//!
//! Completed gestures push exactly one history entry; abandoned gestures
//! (edge released off-target, same-socket release, Escape) push none.

use crate::config::EditorConfig;
use crate::edge::Edge;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::hit_test::{self, HitTarget};
use crate::history::SceneHistory;
use crate::identity::{EdgeId, NodeId, SocketId};
use crate::scene::Scene;
use crate::selection::{ItemId, SelectionManager};

pub const HISTORY_EDGE_CREATED: &str = "Created new edge by dragging";
pub const HISTORY_EDGES_CUT: &str = "Delete cut edges";
pub const HISTORY_DELETE_SELECTED: &str = "Delete selected";
pub const HISTORY_SELECTION_CHANGED: &str = "Selection changed";
pub const HISTORY_NODE_MOVED: &str = "Node moved";

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Toggle / extend selection.
    pub shift: bool,
    /// Precise-select: on empty canvas, starts a cut line.
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true };
}

/// Keys the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
}

/// Coarse gesture state, for views and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    DraggingEdge,
    Cutting,
    RubberBand,
    DraggingNodes,
}

#[derive(Debug, Default)]
enum DragMode {
    #[default]
    Idle,
    EdgeDrag {
        origin: SocketId,
        edge: EdgeId,
    },
    Cutting {
        points: Vec<Point>,
    },
    RubberBand {
        origin: Point,
        current: Point,
        extend: bool,
        selection_before: SelectionManager,
    },
    NodeDrag {
        last: Point,
        total: Point,
        /// Node to collapse the selection to if the press ends as a click.
        collapse_to: Option<NodeId>,
        selection_before: SelectionManager,
    },
}

#[derive(Debug)]
pub struct InteractionState {
    config: EditorConfig,
    mode: DragMode,
    text_editing: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl InteractionState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            mode: DragMode::Idle,
            text_editing: false,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        match self.mode {
            DragMode::Idle => InteractionMode::Idle,
            DragMode::EdgeDrag { .. } => InteractionMode::DraggingEdge,
            DragMode::Cutting { .. } => InteractionMode::Cutting,
            DragMode::RubberBand { .. } => InteractionMode::RubberBand,
            DragMode::NodeDrag { .. } => InteractionMode::DraggingNodes,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, DragMode::Idle)
    }

    /// The transient edge following the pointer, if an edge drag is active.
    pub fn dragging_edge(&self) -> Option<EdgeId> {
        match self.mode {
            DragMode::EdgeDrag { edge, .. } => Some(edge),
            _ => None,
        }
    }

    /// Points of the cut line being drawn; empty when not cutting.
    pub fn cut_line(&self) -> &[Point] {
        match &self.mode {
            DragMode::Cutting { points } => points,
            _ => &[],
        }
    }

    pub fn rubber_band(&self) -> Option<Rect> {
        match self.mode {
            DragMode::RubberBand { origin, current, .. } => Some(Rect::from_corners(origin, current)),
            _ => None,
        }
    }

    /// While a text field has focus, Delete/Backspace belong to it.
    pub fn set_text_editing(&mut self, editing: bool) {
        self.text_editing = editing;
    }

    pub fn is_text_editing(&self) -> bool {
        self.text_editing
    }

    // === Pointer events ===

    pub fn pointer_down(&mut self, scene: &mut Scene, history: &mut SceneHistory, point: Point, modifiers: Modifiers) -> Result<()> {
        if !self.is_idle() {
            tracing::debug!(mode = ?self.mode(), "pointer down during gesture, cancelling it");
            self.cancel(scene);
        }

        match hit_test::resolve_target(scene, point, &self.config) {
            HitTarget::Socket(origin) => {
                let edge = scene.create_edge(origin, None, self.config.default_edge_type)?;
                scene.set_drag_position(edge, point);
                tracing::debug!(socket = %origin, edge = %edge, "edge drag started");
                self.mode = DragMode::EdgeDrag { origin, edge };
            }
            HitTarget::Node(node) => {
                let selection_before = scene.selection().clone();
                let item = ItemId::Node(node);
                // Pressing an already selected node keeps the group so it can be dragged together
                let collapse_to = if !modifiers.shift && scene.selection().contains(item) {
                    Some(node)
                } else {
                    scene.selection_mut().handle_interaction(item, modifiers.shift);
                    None
                };
                self.mode = DragMode::NodeDrag {
                    last: point,
                    total: Point::default(),
                    collapse_to,
                    selection_before,
                };
            }
            HitTarget::Edge(edge) => {
                let selection_before = scene.selection().clone();
                scene.selection_mut().handle_interaction(ItemId::Edge(edge), modifiers.shift);
                if *scene.selection() != selection_before {
                    history.store(scene, HISTORY_SELECTION_CHANGED, false)?;
                }
            }
            HitTarget::Empty if modifiers.ctrl => {
                tracing::debug!("cut line started");
                self.mode = DragMode::Cutting { points: vec![point] };
            }
            HitTarget::Empty => {
                self.mode = DragMode::RubberBand {
                    origin: point,
                    current: point,
                    extend: modifiers.shift,
                    selection_before: scene.selection().clone(),
                };
            }
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, scene: &mut Scene, point: Point) {
        match &mut self.mode {
            DragMode::Idle => {}
            DragMode::EdgeDrag { edge, .. } => scene.set_drag_position(*edge, point),
            DragMode::Cutting { points } => points.push(point),
            DragMode::RubberBand { current, .. } => {
                *current = point;
                self.apply_rubber_band(scene);
            }
            DragMode::NodeDrag { last, total, .. } => {
                let delta = point - *last;
                *last = point;
                *total = *total + delta;
                scene.translate_nodes(&scene.selected_nodes(), delta);
            }
        }
    }

    pub fn pointer_up(&mut self, scene: &mut Scene, history: &mut SceneHistory, point: Point) -> Result<()> {
        if let DragMode::RubberBand { current, .. } = &mut self.mode {
            *current = point;
        }

        match std::mem::take(&mut self.mode) {
            DragMode::Idle => Ok(()),
            DragMode::EdgeDrag { origin, edge } => self.finish_edge_drag(scene, history, origin, edge, point),
            DragMode::Cutting { mut points } => {
                if points.last() != Some(&point) {
                    points.push(point);
                }
                self.finish_cut(scene, history, &points)
            }
            mode @ DragMode::RubberBand { .. } => {
                self.mode = mode;
                self.apply_rubber_band(scene);
                let DragMode::RubberBand {
                    origin,
                    current,
                    selection_before,
                    ..
                } = std::mem::take(&mut self.mode)
                else {
                    return Ok(());
                };
                // A swept box always commits; a click on empty canvas only when it cleared something
                let swept = self.exceeds_click_tolerance(Rect::from_corners(origin, current));
                if swept || *scene.selection() != selection_before {
                    history.store(scene, HISTORY_SELECTION_CHANGED, false)?;
                }
                Ok(())
            }
            DragMode::NodeDrag {
                total,
                collapse_to,
                selection_before,
                ..
            } => {
                if total != Point::default() {
                    return history.store(scene, HISTORY_NODE_MOVED, true);
                }
                if let Some(node) = collapse_to {
                    scene.selection_mut().handle_interaction(ItemId::Node(node), false);
                }
                if *scene.selection() != selection_before {
                    history.store(scene, HISTORY_SELECTION_CHANGED, false)?;
                }
                Ok(())
            }
        }
    }

    fn finish_edge_drag(
        &mut self,
        scene: &mut Scene,
        history: &mut SceneHistory,
        origin: SocketId,
        drag_edge: EdgeId,
        point: Point,
    ) -> Result<()> {
        let edge_type = scene.edge(drag_edge).map(Edge::edge_type).unwrap_or(self.config.default_edge_type);
        scene.remove_edge(drag_edge);

        let target = hit_test::find_socket_at(scene, point, self.config.socket_hit_radius);
        let Some(target) = target.filter(|&t| t != origin) else {
            tracing::debug!(socket = %origin, "edge drag released off target");
            return Ok(());
        };

        // Disconnect first so a single-edge socket ends up with exactly one edge
        if scene.socket(target).is_some_and(|s| !s.is_multi_edges()) {
            scene.remove_all_socket_edges(target);
        }
        if scene.socket(origin).is_some_and(|s| !s.is_multi_edges()) {
            scene.remove_all_socket_edges(origin);
        }

        let edge = scene.create_edge(origin, Some(target), edge_type)?;
        tracing::debug!(edge = %edge, start = %origin, end = %target, "edge connected");
        history.store(scene, HISTORY_EDGE_CREATED, true)
    }

    fn finish_cut(&mut self, scene: &mut Scene, history: &mut SceneHistory, points: &[Point]) -> Result<()> {
        let crossed = hit_test::edges_crossing_polyline(
            scene,
            points,
            self.config.bezier_min_offset,
            self.config.edge_hit_samples,
        );
        tracing::debug!(edges = crossed.len(), "cut line finished");
        for edge in crossed {
            scene.remove_edge(edge);
        }
        history.store(scene, HISTORY_EDGES_CUT, true)
    }

    fn apply_rubber_band(&self, scene: &mut Scene) {
        let DragMode::RubberBand {
            origin,
            current,
            extend,
            selection_before,
        } = &self.mode
        else {
            return;
        };

        let rect = Rect::from_corners(*origin, *current);
        let mut selection = if *extend {
            selection_before.clone()
        } else {
            SelectionManager::new()
        };

        if self.exceeds_click_tolerance(rect) {
            let nodes = hit_test::nodes_in_selection_box(scene, rect);
            let edges = hit_test::edges_in_selection_box(scene, rect);
            selection.extend(nodes.into_iter().map(ItemId::Node));
            selection.extend(edges.into_iter().map(ItemId::Edge));
        }
        *scene.selection_mut() = selection;
    }

    fn exceeds_click_tolerance(&self, rect: Rect) -> bool {
        let tolerance = self.config.selection_click_tolerance;
        rect.width > tolerance || rect.height > tolerance
    }

    // === Keyboard ===

    /// Returns `true` when the key was consumed.
    pub fn key_down(&mut self, scene: &mut Scene, history: &mut SceneHistory, key: Key) -> Result<bool> {
        match key {
            Key::Delete | Key::Backspace => {
                if self.text_editing {
                    return Ok(false);
                }
                self.delete_selected(scene, history)?;
                Ok(true)
            }
            Key::Escape => {
                let active = !self.is_idle();
                self.cancel(scene);
                Ok(active)
            }
        }
    }

    /// Abandon the current gesture as if it never started.
    ///
    /// A dragging edge is discarded, a cut line dropped, a rubber band's
    /// selection reverted and dragged nodes moved back. No history is stored.
    pub fn cancel(&mut self, scene: &mut Scene) {
        match std::mem::take(&mut self.mode) {
            DragMode::Idle => {}
            DragMode::EdgeDrag { edge, .. } => {
                scene.remove_edge(edge);
            }
            DragMode::Cutting { .. } => {}
            DragMode::RubberBand { selection_before, .. } => {
                *scene.selection_mut() = selection_before;
            }
            DragMode::NodeDrag {
                total,
                selection_before,
                ..
            } => {
                let back = Point::default() - total;
                scene.translate_nodes(&scene.selected_nodes(), back);
                *scene.selection_mut() = selection_before;
            }
        }
    }

    /// Remove the selection and store "Delete selected".
    ///
    /// Returns `false` without touching history when nothing is selected.
    pub fn delete_selected(&mut self, scene: &mut Scene, history: &mut SceneHistory) -> Result<bool> {
        self.cancel(scene);
        if !remove_selected(scene) {
            return Ok(false);
        }
        history.store(scene, HISTORY_DELETE_SELECTED, true)?;
        Ok(true)
    }
}

/// Remove every selected edge and node (nodes cascade to their edges).
///
/// Returns `false` when the selection was empty. Does not touch history.
pub fn remove_selected(scene: &mut Scene) -> bool {
    let edges = scene.selected_edges();
    let nodes = scene.selected_nodes();
    if edges.is_empty() && nodes.is_empty() {
        return false;
    }
    for edge in edges {
        scene.remove_edge(edge);
    }
    for node in nodes {
        scene.remove_node(node);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeType;
    use crate::node::Node;

    /// A at (0, 0), B at (400, 0). A.out anchors at (180, 38), B.in at (400, 226).
    struct Fixture {
        scene: Scene,
        history: SceneHistory,
        state: InteractionState,
        a: NodeId,
        b: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut scene = Scene::new();
            let a = scene.add_node(Node::new("A", &[1], &[1]));
            let b = scene.add_node(Node::new("B", &[1], &[1]).with_pos(400.0, 0.0));
            scene.set_modified(false);
            let mut history = SceneHistory::default();
            history.store_initial_stamp(&mut scene).unwrap();
            Self {
                scene,
                history,
                state: InteractionState::default(),
                a,
                b,
            }
        }

        fn drag(&mut self, from: Point, to: Point, modifiers: Modifiers) {
            self.state
                .pointer_down(&mut self.scene, &mut self.history, from, modifiers)
                .unwrap();
            self.state.pointer_move(&mut self.scene, to);
            self.state.pointer_up(&mut self.scene, &mut self.history, to).unwrap();
        }

        fn a_out(&self) -> SocketId {
            self.scene.node(self.a).unwrap().outputs()[0].id()
        }

        fn b_in(&self) -> SocketId {
            self.scene.node(self.b).unwrap().inputs()[0].id()
        }
    }

    const A_OUT: Point = Point::new(180.0, 38.0);
    const B_IN: Point = Point::new(400.0, 226.0);

    // ========================================================================
    // Edge dragging
    // ========================================================================

    #[test]
    fn test_pointer_down_on_socket_starts_edge_drag() {
        let mut f = Fixture::new();
        f.state
            .pointer_down(&mut f.scene, &mut f.history, A_OUT, Modifiers::NONE)
            .unwrap();
        assert_eq!(f.state.mode(), InteractionMode::DraggingEdge);
        let edge = f.state.dragging_edge().unwrap();
        assert!(!f.scene.edge(edge).unwrap().is_bound());

        f.state.pointer_move(&mut f.scene, Point::new(300.0, 300.0));
        assert_eq!(f.scene.edge(edge).unwrap().drag_position(), Some(Point::new(300.0, 300.0)));
        assert!(!f.scene.is_modified());
    }

    #[test]
    fn test_drag_to_socket_creates_fresh_edge() {
        let mut f = Fixture::new();
        f.state
            .pointer_down(&mut f.scene, &mut f.history, A_OUT, Modifiers::NONE)
            .unwrap();
        let drag_edge = f.state.dragging_edge().unwrap();
        f.state.pointer_up(&mut f.scene, &mut f.history, B_IN).unwrap();

        assert!(f.state.is_idle());
        assert_eq!(f.scene.edges().len(), 1);
        let edge = &f.scene.edges()[0];
        assert_ne!(edge.id(), drag_edge);
        assert_eq!(edge.start_socket(), Some(f.a_out()));
        assert_eq!(edge.end_socket(), Some(f.b_in()));
        assert_eq!(f.history.current_description(), Some(HISTORY_EDGE_CREATED));
        assert!(f.scene.is_modified());
    }

    #[test]
    fn test_drag_released_off_target_discards_edge() {
        let mut f = Fixture::new();
        f.drag(A_OUT, Point::new(300.0, 600.0), Modifiers::NONE);
        assert!(f.scene.edges().is_empty());
        assert_eq!(f.history.len(), 1);
        assert!(!f.scene.is_modified());
    }

    #[test]
    fn test_drag_released_on_origin_is_noop() {
        let mut f = Fixture::new();
        f.drag(A_OUT, Point::new(181.0, 39.0), Modifiers::NONE);
        assert!(f.scene.edges().is_empty());
        assert_eq!(f.history.len(), 1);
    }

    #[test]
    fn test_single_edge_input_is_replaced() {
        let mut f = Fixture::new();
        f.drag(A_OUT, B_IN, Modifiers::NONE);
        // B.out (580, 38) into the same single-edge B.in
        f.drag(Point::new(580.0, 38.0), B_IN, Modifiers::NONE);

        let b_in = f.scene.socket(f.b_in()).unwrap();
        assert_eq!(b_in.edges().len(), 1);
        assert_eq!(f.scene.edges().len(), 1);
        assert!(!f.scene.socket(f.a_out()).unwrap().has_edge());
    }

    #[test]
    fn test_dragging_from_single_edge_input_replaces_its_edge() {
        let mut f = Fixture::new();
        f.drag(A_OUT, B_IN, Modifiers::NONE);
        // From B.in back to B.out: B.in drops its old edge first
        f.drag(B_IN, Point::new(580.0, 38.0), Modifiers::NONE);
        assert_eq!(f.scene.socket(f.b_in()).unwrap().edges().len(), 1);
        assert_eq!(f.scene.edges().len(), 1);
    }

    #[test]
    fn test_escape_cancels_edge_drag() {
        let mut f = Fixture::new();
        f.state
            .pointer_down(&mut f.scene, &mut f.history, A_OUT, Modifiers::NONE)
            .unwrap();
        assert!(f.state.key_down(&mut f.scene, &mut f.history, Key::Escape).unwrap());
        assert!(f.state.is_idle());
        assert!(f.scene.edges().is_empty());
        assert_eq!(f.history.len(), 1);
    }

    // ========================================================================
    // Cutting
    // ========================================================================

    #[test]
    fn test_cut_line_removes_crossed_edges() {
        let mut f = Fixture::new();
        f.scene.create_edge(f.a_out(), Some(f.b_in()), EdgeType::Direct).unwrap();
        f.history.store(&mut f.scene, "connect", true).unwrap();

        f.state
            .pointer_down(&mut f.scene, &mut f.history, Point::new(290.0, 0.0), Modifiers::CTRL)
            .unwrap();
        assert_eq!(f.state.mode(), InteractionMode::Cutting);
        f.state.pointer_move(&mut f.scene, Point::new(290.0, 150.0));
        assert_eq!(f.state.cut_line().len(), 2);
        f.state
            .pointer_up(&mut f.scene, &mut f.history, Point::new(290.0, 300.0))
            .unwrap();

        assert!(f.scene.edges().is_empty());
        assert_eq!(f.history.current_description(), Some(HISTORY_EDGES_CUT));
        assert!(f.state.cut_line().is_empty());
    }

    // ========================================================================
    // Node dragging and selection
    // ========================================================================

    #[test]
    fn test_node_drag_moves_and_stores() {
        let mut f = Fixture::new();
        f.drag(Point::new(90.0, 120.0), Point::new(110.0, 150.0), Modifiers::NONE);
        assert_eq!(f.scene.node(f.a).unwrap().pos(), Point::new(20.0, 30.0));
        assert_eq!(f.history.current_description(), Some(HISTORY_NODE_MOVED));
        assert!(f.scene.is_modified());
    }

    #[test]
    fn test_click_on_node_stores_selection_change_only() {
        let mut f = Fixture::new();
        let p = Point::new(90.0, 120.0);
        f.drag(p, p, Modifiers::NONE);
        assert!(f.scene.selection().contains_node(f.a));
        assert_eq!(f.history.current_description(), Some(HISTORY_SELECTION_CHANGED));
        assert!(!f.scene.is_modified());

        // Clicking it again changes nothing
        f.drag(p, p, Modifiers::NONE);
        assert_eq!(f.history.len(), 2);
    }

    #[test]
    fn test_group_drag_keeps_multi_selection() {
        let mut f = Fixture::new();
        f.scene.selection_mut().insert(ItemId::Node(f.a));
        f.scene.selection_mut().insert(ItemId::Node(f.b));
        f.drag(Point::new(90.0, 120.0), Point::new(100.0, 120.0), Modifiers::NONE);

        assert_eq!(f.scene.node(f.a).unwrap().pos(), Point::new(10.0, 0.0));
        assert_eq!(f.scene.node(f.b).unwrap().pos(), Point::new(410.0, 0.0));
        assert_eq!(f.scene.selection().len(), 2);
    }

    #[test]
    fn test_rubber_band_selects_and_stores() {
        let mut f = Fixture::new();
        f.drag(Point::new(-50.0, -50.0), Point::new(50.0, 50.0), Modifiers::NONE);
        assert!(f.scene.selection().contains_node(f.a));
        assert!(!f.scene.selection().contains_node(f.b));
        assert_eq!(f.history.current_description(), Some(HISTORY_SELECTION_CHANGED));
    }

    #[test]
    fn test_rubber_band_stores_even_without_selection_change() {
        let mut f = Fixture::new();
        f.scene.selection_mut().insert(ItemId::Node(f.a));
        f.history.store(&mut f.scene, "select A", false).unwrap();
        let before = f.history.len();

        // Sweeps only A, which is already the whole selection
        f.drag(Point::new(-50.0, -50.0), Point::new(50.0, 50.0), Modifiers::NONE);
        assert_eq!(f.scene.selection().len(), 1);
        assert_eq!(f.history.len(), before + 1);
        assert_eq!(f.history.current_description(), Some(HISTORY_SELECTION_CHANGED));
    }

    #[test]
    fn test_click_on_empty_canvas_with_nothing_selected_stores_nothing() {
        let mut f = Fixture::new();
        let p = Point::new(300.0, 600.0);
        f.drag(p, p, Modifiers::NONE);
        assert_eq!(f.history.len(), 1);
    }

    #[test]
    fn test_click_on_empty_canvas_clears_selection() {
        let mut f = Fixture::new();
        f.scene.selection_mut().insert(ItemId::Node(f.a));
        let p = Point::new(300.0, 600.0);
        f.drag(p, p, Modifiers::NONE);
        assert!(f.scene.selection().is_empty());
    }

    #[test]
    fn test_escape_reverts_node_drag() {
        let mut f = Fixture::new();
        f.state
            .pointer_down(&mut f.scene, &mut f.history, Point::new(90.0, 120.0), Modifiers::NONE)
            .unwrap();
        f.state.pointer_move(&mut f.scene, Point::new(150.0, 150.0));
        f.state.cancel(&mut f.scene);
        assert_eq!(f.scene.node(f.a).unwrap().pos(), Point::new(0.0, 0.0));
        assert!(f.scene.selection().is_empty());
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    #[test]
    fn test_delete_key_removes_selection() {
        let mut f = Fixture::new();
        let e = f.scene.create_edge(f.a_out(), Some(f.b_in()), EdgeType::Direct).unwrap();
        f.scene.selection_mut().insert(ItemId::Node(f.a));
        f.scene.selection_mut().insert(ItemId::Edge(e));

        assert!(f.state.key_down(&mut f.scene, &mut f.history, Key::Delete).unwrap());
        assert!(f.scene.node(f.a).is_none());
        assert!(f.scene.edges().is_empty());
        assert_eq!(f.history.current_description(), Some(HISTORY_DELETE_SELECTED));
    }

    #[test]
    fn test_delete_key_ignored_while_text_editing() {
        let mut f = Fixture::new();
        f.scene.selection_mut().insert(ItemId::Node(f.a));
        f.state.set_text_editing(true);
        assert!(!f.state.key_down(&mut f.scene, &mut f.history, Key::Backspace).unwrap());
        assert!(f.scene.node(f.a).is_some());
    }

    #[test]
    fn test_delete_with_empty_selection_stores_nothing() {
        let mut f = Fixture::new();
        assert!(!f.state.delete_selected(&mut f.scene, &mut f.history).unwrap());
        assert_eq!(f.history.len(), 1);
    }
}
