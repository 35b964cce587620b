use crate::error::{EditorError, Result};
use crate::geometry::Point;
use crate::identity::{EdgeId, SocketId};
use crate::serialization::EdgeRecord;
use serde::{Deserialize, Serialize};

/// Render style of an edge. Persisted as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EdgeType {
    Direct = 1,
    #[default]
    Bezier = 2,
}

impl From<u8> for EdgeType {
    /// Unknown styles render as bezier.
    fn from(value: u8) -> Self {
        match value {
            1 => EdgeType::Direct,
            _ => EdgeType::Bezier,
        }
    }
}

impl From<EdgeType> for u8 {
    fn from(value: EdgeType) -> Self {
        value as u8
    }
}

/// Connection between two sockets.
///
/// An edge without an end socket is being dragged: it follows the pointer via
/// [`drag_position`](Self::drag_position) and is not yet part of the committed
/// graph. Socket assignment goes through
/// [`Scene::set_edge_start`](crate::Scene::set_edge_start) /
/// [`Scene::set_edge_end`](crate::Scene::set_edge_end) so both sides stay in
/// sync.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) start: Option<SocketId>,
    pub(crate) end: Option<SocketId>,
    pub(crate) edge_type: EdgeType,
    pub(crate) drag_position: Option<Point>,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, edge_type: EdgeType) -> Self {
        Self {
            id,
            start: None,
            end: None,
            edge_type,
            drag_position: None,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn start_socket(&self) -> Option<SocketId> {
        self.start
    }

    pub fn end_socket(&self) -> Option<SocketId> {
        self.end
    }

    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    pub fn set_edge_type(&mut self, edge_type: EdgeType) {
        self.edge_type = edge_type;
    }

    /// Free endpoint of a dragging edge.
    pub fn drag_position(&self) -> Option<Point> {
        self.drag_position
    }

    pub fn is_bound(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn touches(&self, socket: SocketId) -> bool {
        self.start == Some(socket) || self.end == Some(socket)
    }

    pub fn serialize(&self) -> Result<EdgeRecord> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(EdgeRecord {
                id: self.id.raw(),
                edge_type: self.edge_type,
                start: start.raw(),
                end: end.raw(),
            }),
            _ => Err(EditorError::UnboundEdge(self.id)),
        }
    }
}
