//! Test harness around a [`NodeEditor`].
//!
//! Builds graphs with default node metrics and simulates pointer gestures.
//! With the default 180x240 node box, a node at `(x, y)` has its first input
//! anchored at `(x, y + 226)` and its first output at `(x + 180, y + 38)`.

#![allow(dead_code)]

use super::EventTracker;
use slint_node_scene::{
    EdgeId, EdgeType, Modifiers, Node, NodeEditor, NodeId, Point, SocketId,
};

pub struct EditorHarness {
    pub editor: NodeEditor,
    pub tracker: EventTracker,
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHarness {
    pub fn new() -> Self {
        let mut editor = NodeEditor::default();
        let tracker = EventTracker::new();
        tracker.attach(editor.scene_mut());
        Self { editor, tracker }
    }

    /// Three nodes in a row, A(0,0) -> B(400,0) -> C(800,0), connected
    /// output to input, recorded as one history entry.
    pub fn chain() -> (Self, [NodeId; 3], [EdgeId; 2]) {
        let mut h = Self::new();
        let a = h.add_node("A", 0.0, 0.0);
        let b = h.add_node("B", 400.0, 0.0);
        let c = h.add_node("C", 800.0, 0.0);
        let ab = h.connect_on_scene(h.output(a, 0), h.input(b, 0));
        let bc = h.connect_on_scene(h.output(b, 0), h.input(c, 0));
        h.editor.store_history("Build chain", true).unwrap();
        h.tracker.clear();
        (h, [a, b, c], [ab, bc])
    }

    /// Node with one input of type 1 and one output of type 1.
    pub fn add_node(&mut self, title: &str, x: f64, y: f64) -> NodeId {
        self.editor
            .scene_mut()
            .add_node(Node::new(title, &[1], &[1]).with_pos(x, y))
    }

    pub fn input(&self, node: NodeId, index: usize) -> SocketId {
        self.editor.scene().node(node).unwrap().inputs()[index].id()
    }

    pub fn output(&self, node: NodeId, index: usize) -> SocketId {
        self.editor.scene().node(node).unwrap().outputs()[index].id()
    }

    pub fn anchor(&self, socket: SocketId) -> Point {
        self.editor.scene().socket_anchor(socket).unwrap()
    }

    /// Bezier edge created directly on the scene, bypassing gestures.
    pub fn connect_on_scene(&mut self, start: SocketId, end: SocketId) -> EdgeId {
        self.editor
            .scene_mut()
            .create_edge(start, Some(end), EdgeType::Bezier)
            .unwrap()
    }

    /// Press at `from`, move to `to`, release at `to`.
    pub fn drag(&mut self, from: Point, to: Point, modifiers: Modifiers) {
        self.editor.pointer_down(from, modifiers).unwrap();
        self.editor.pointer_move(to);
        self.editor.pointer_up(to).unwrap();
    }

    pub fn click(&mut self, at: Point, modifiers: Modifiers) {
        self.drag(at, at, modifiers);
    }

    /// Drag an edge from one socket anchor to another.
    pub fn drag_edge(&mut self, from: SocketId, to: SocketId) {
        let (from, to) = (self.anchor(from), self.anchor(to));
        self.drag(from, to, Modifiers::NONE);
    }

    /// Draw a cut line through `points` with the precise-select modifier.
    pub fn cut(&mut self, points: &[Point]) {
        let (first, rest) = points.split_first().unwrap();
        self.editor.pointer_down(*first, Modifiers::CTRL).unwrap();
        for p in rest {
            self.editor.pointer_move(*p);
        }
        self.editor.pointer_up(*points.last().unwrap()).unwrap();
    }

    /// A point inside the node's body, clear of its sockets.
    pub fn body(&self, node: NodeId) -> Point {
        let pos = self.editor.scene().node(node).unwrap().pos();
        pos + Point::new(90.0, 120.0)
    }

    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }

    pub fn last_history(&self) -> Option<String> {
        self.editor.history().current_description().map(str::to_string)
    }
}
