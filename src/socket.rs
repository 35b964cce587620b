use crate::identity::{pick_id, EdgeId, IdMap, NodeId, SocketId};
use crate::serialization::SocketRecord;
use serde::{Deserialize, Serialize};

/// Which corner of the node box a socket column is anchored to.
///
/// Persisted as an integer 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SocketPosition {
    LeftTop = 1,
    LeftBottom = 2,
    RightTop = 3,
    RightBottom = 4,
}

impl SocketPosition {
    pub fn is_left(self) -> bool {
        matches!(self, SocketPosition::LeftTop | SocketPosition::LeftBottom)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, SocketPosition::LeftBottom | SocketPosition::RightBottom)
    }
}

impl TryFrom<u8> for SocketPosition {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SocketPosition::LeftTop),
            2 => Ok(SocketPosition::LeftBottom),
            3 => Ok(SocketPosition::RightTop),
            4 => Ok(SocketPosition::RightBottom),
            other => Err(format!("invalid socket position {}", other)),
        }
    }
}

impl From<SocketPosition> for u8 {
    fn from(value: SocketPosition) -> Self {
        value as u8
    }
}

/// Connection point owned by a [`Node`](crate::Node).
///
/// The socket keeps the edges terminating at it in connection order. The list
/// is maintained exclusively through [`add_edge`](Self::add_edge) and
/// [`remove_edge`](Self::remove_edge), which the scene calls while rewiring
/// an edge (detach from the old socket, then attach to the new one).
#[derive(Debug, Clone)]
pub struct Socket {
    id: SocketId,
    node: NodeId,
    index: usize,
    position: SocketPosition,
    socket_type: u8,
    multi_edges: bool,
    edges: Vec<EdgeId>,
}

impl Socket {
    pub fn new(
        node: NodeId,
        index: usize,
        position: SocketPosition,
        socket_type: u8,
        multi_edges: bool,
    ) -> Self {
        Self::with_id(SocketId::fresh(), node, index, position, socket_type, multi_edges)
    }

    fn with_id(
        id: SocketId,
        node: NodeId,
        index: usize,
        position: SocketPosition,
        socket_type: u8,
        multi_edges: bool,
    ) -> Self {
        Self {
            id,
            node,
            index,
            position,
            socket_type,
            multi_edges,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> SocketId {
        self.id
    }

    /// The node this socket belongs to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> SocketPosition {
        self.position
    }

    /// Color tag, 1..=6.
    pub fn socket_type(&self) -> u8 {
        self.socket_type
    }

    pub fn is_multi_edges(&self) -> bool {
        self.multi_edges
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn has_edge(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn add_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    /// Returns `false` (and logs) when the edge was not attached here.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|&e| e == edge) {
            Some(i) => {
                self.edges.remove(i);
                true
            }
            None => {
                tracing::warn!(socket = %self.id, edge = %edge, "Socket::remove_edge: edge is not attached to this socket");
                false
            }
        }
    }

    pub fn serialize(&self) -> SocketRecord {
        SocketRecord {
            id: self.id.raw(),
            index: self.index,
            multi_edges: self.multi_edges,
            position: self.position,
            socket_type: self.socket_type,
        }
    }

    /// Rebuild a socket for `node` and register it in `id_map`.
    pub fn deserialize(node: NodeId, record: &SocketRecord, id_map: &mut IdMap, restore_id: bool) -> Self {
        let id = pick_id(record.id, restore_id, SocketId::restore, SocketId::fresh);
        id_map.insert_socket(record.id, id);
        Self::with_id(
            id,
            node,
            record.index,
            record.position,
            record.socket_type,
            record.multi_edges,
        )
    }
}
