//! Persisted record shapes.
//!
//! Files, clipboard payloads and history snapshots all share these records.
//! Parsing into typed structs means a missing key or a wrong value type is
//! rejected by `serde_json` before anything touches the live scene.

use crate::edge::EdgeType;
use crate::error::{EditorError, Result};
use crate::socket::SocketPosition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketRecord {
    pub id: u64,
    pub index: usize,
    pub multi_edges: bool,
    pub position: SocketPosition,
    pub socket_type: u8,
}

impl SocketRecord {
    /// Rebuild order: sockets are stacked by position first, then index.
    pub fn sort_key(&self) -> usize {
        self.index + u8::from(self.position) as usize * 10000
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u64,
    pub title: String,
    pub pos_x: f64,
    pub pos_y: f64,
    pub inputs: Vec<SocketRecord>,
    pub outputs: Vec<SocketRecord>,
    /// Opaque payload of the node's content widget.
    pub content: serde_json::Value,
}

impl NodeRecord {
    pub fn sockets(&self) -> impl Iterator<Item = &SocketRecord> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: u64,
    pub edge_type: EdgeType,
    pub start: u64,
    pub end: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    pub id: u64,
    pub scene_width: i64,
    pub scene_height: i64,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Subgraph payload exchanged through the text clipboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipboardRecord {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Ids of the selected nodes and edges, stored alongside history snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub nodes: Vec<u64>,
    pub edges: Vec<u64>,
}

/// Check that every edge references sockets defined by `nodes` and does not
/// start and end on the same socket.
///
/// Runs before any mutation so a bad reference aborts the whole load or
/// paste instead of leaving a half-built graph behind.
pub fn validate_edges(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> Result<()> {
    let sockets: HashSet<u64> = nodes.iter().flat_map(|n| n.sockets().map(|s| s.id)).collect();
    for edge in edges {
        if edge.start == edge.end {
            return Err(EditorError::SelfLoop { edge: edge.id, socket: edge.start });
        }
        for socket in [edge.start, edge.end] {
            if !sockets.contains(&socket) {
                return Err(EditorError::UnresolvedSocket { edge: edge.id, socket });
            }
        }
    }
    Ok(())
}

pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
