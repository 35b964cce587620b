use crate::config::NodeMetrics;
use crate::geometry::{Point, Rect};
use crate::identity::{pick_id, IdMap, NodeId, SocketId};
use crate::serialization::{NodeRecord, SocketRecord};
use crate::socket::{Socket, SocketPosition};
use serde_json::Value;

/// A box on the canvas owning its input and output sockets.
///
/// Inputs sit on the left, stacked up from the bottom corner and accept a
/// single edge each. Outputs sit on the right, stacked down from the title
/// and accept any number of edges.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    title: String,
    pos: Point,
    inputs: Vec<Socket>,
    outputs: Vec<Socket>,
    content: Value,
}

impl Node {
    /// Create a node with one input socket per entry of `inputs` and one
    /// output socket per entry of `outputs`; the entries are socket types.
    pub fn new(title: impl Into<String>, inputs: &[u8], outputs: &[u8]) -> Self {
        let id = NodeId::fresh();
        let inputs = inputs
            .iter()
            .enumerate()
            .map(|(i, &t)| Socket::new(id, i, SocketPosition::LeftBottom, t, false))
            .collect();
        let outputs = outputs
            .iter()
            .enumerate()
            .map(|(i, &t)| Socket::new(id, i, SocketPosition::RightTop, t, true))
            .collect();

        Self {
            id,
            title: title.into(),
            pos: Point::default(),
            inputs,
            outputs,
            content: Value::Object(Default::default()),
        }
    }

    pub fn with_pos(mut self, x: f64, y: f64) -> Self {
        self.pos = Point::new(x, y);
        self
    }

    pub fn with_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn set_content(&mut self, content: Value) {
        self.content = content;
    }

    pub fn inputs(&self) -> &[Socket] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Socket] {
        &self.outputs
    }

    /// Inputs followed by outputs.
    pub fn sockets(&self) -> impl Iterator<Item = &Socket> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    pub fn socket(&self, id: SocketId) -> Option<&Socket> {
        self.sockets().find(|s| s.id() == id)
    }

    pub(crate) fn socket_mut(&mut self, id: SocketId) -> Option<&mut Socket> {
        self.inputs
            .iter_mut()
            .chain(self.outputs.iter_mut())
            .find(|s| s.id() == id)
    }

    pub fn rect(&self, metrics: &NodeMetrics) -> Rect {
        Rect::new(self.pos.x, self.pos.y, metrics.width, metrics.height)
    }

    /// Anchor of the socket at `index` on `position`, relative to the node's
    /// top-left corner.
    ///
    /// Index 0 is nearest the corner: bottom columns stack upward from the
    /// bottom edge, top columns stack downward from below the title.
    pub fn socket_offset(metrics: &NodeMetrics, index: usize, position: SocketPosition) -> Point {
        let x = if position.is_left() { 0.0 } else { metrics.width };
        let step = index as f64 * metrics.socket_spacing;
        let y = if position.is_bottom() {
            metrics.height - metrics.edge_size - metrics.padding - step
        } else {
            metrics.title_height + metrics.padding + metrics.edge_size + step
        };
        Point::new(x, y)
    }

    /// Scene-space anchor of one of this node's sockets.
    pub fn socket_anchor(&self, metrics: &NodeMetrics, socket: SocketId) -> Option<Point> {
        let s = self.socket(socket)?;
        Some(self.pos + Self::socket_offset(metrics, s.index(), s.position()))
    }

    pub fn serialize(&self) -> NodeRecord {
        NodeRecord {
            id: self.id.raw(),
            title: self.title.clone(),
            pos_x: self.pos.x,
            pos_y: self.pos.y,
            inputs: self.inputs.iter().map(Socket::serialize).collect(),
            outputs: self.outputs.iter().map(Socket::serialize).collect(),
            content: self.content.clone(),
        }
    }

    /// Rebuild a node and its sockets, registering every socket in `id_map`.
    pub fn deserialize(record: &NodeRecord, id_map: &mut IdMap, restore_id: bool) -> Self {
        let id = pick_id(record.id, restore_id, NodeId::restore, NodeId::fresh);

        let mut rebuild = |records: &[SocketRecord]| -> Vec<Socket> {
            let mut sorted: Vec<&SocketRecord> = records.iter().collect();
            sorted.sort_by_key(|s| s.sort_key());
            sorted
                .into_iter()
                .map(|s| Socket::deserialize(id, s, id_map, restore_id))
                .collect()
        };
        let inputs = rebuild(&record.inputs);
        let outputs = rebuild(&record.outputs);

        Self {
            id,
            title: record.title.clone(),
            pos: Point::new(record.pos_x, record.pos_y),
            inputs,
            outputs,
            content: record.content.clone(),
        }
    }
}
