//! Error type shared by every fallible scene operation.
//!
//! Structural races (removing an edge twice, removing a node that is already
//! gone) are deliberately *not* represented here. Those are logged with
//! `tracing::warn!` and treated as no-ops. Only malformed external input and
//! I/O problems surface as [`EditorError`].

use crate::identity::{EdgeId, NodeId, SocketId};

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Corrupt JSON or a record missing one of its required keys.
    #[error("failed to parse graph data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge record names a socket that no node in the same payload defines.
    #[error("edge {edge} references socket {socket} which is not part of the payload")]
    UnresolvedSocket { edge: u64, socket: u64 },

    /// An edge may not start and end on the same socket.
    #[error("edge {edge} starts and ends on socket {socket}")]
    SelfLoop { edge: u64, socket: u64 },

    #[error("socket {0} does not exist in the scene")]
    UnknownSocket(SocketId),

    #[error("node {0} does not exist in the scene")]
    UnknownNode(NodeId),

    /// Only committed edges can be serialized; a dragging edge has no end socket.
    #[error("edge {0} has no end socket and cannot be serialized")]
    UnboundEdge(EdgeId),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
