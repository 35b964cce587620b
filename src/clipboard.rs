//! Copy, cut and paste of subgraphs.
//!
//! A payload is a [`ClipboardRecord`] rendered as JSON text, so it can travel
//! through any plain-text clipboard.

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::history::SceneHistory;
use crate::identity::{EdgeId, NodeId, SocketId};
use crate::interaction;
use crate::scene::Scene;
use crate::selection::ItemId;
use crate::serialization::{self, ClipboardRecord};
use std::collections::HashSet;

pub const HISTORY_CUT: &str = "Cut out elements";
pub const HISTORY_PASTE: &str = "Pasted elements";

/// Ids of the items created by a paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pasted {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SceneClipboard;

impl SceneClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the selected nodes plus the selected edges whose both ends
    /// belong to selected nodes.
    ///
    /// With `delete`, the selection is then removed and "Cut out elements" is
    /// stored.
    pub fn serialize_selected(&self, scene: &mut Scene, history: &mut SceneHistory, delete: bool) -> Result<ClipboardRecord> {
        let mut record = ClipboardRecord::default();
        let mut sockets: HashSet<SocketId> = HashSet::new();

        for id in scene.selected_nodes() {
            if let Some(node) = scene.node(id) {
                sockets.extend(node.sockets().map(|s| s.id()));
                record.nodes.push(node.serialize());
            }
        }

        for id in scene.selected_edges() {
            let Some(edge) = scene.edge(id) else { continue };
            let inside = |s: Option<SocketId>| s.is_some_and(|s| sockets.contains(&s));
            if inside(edge.start_socket()) && inside(edge.end_socket()) {
                record.edges.push(edge.serialize()?);
            } else {
                tracing::debug!(edge = %id, "edge leaves the selection, not copied");
            }
        }

        tracing::debug!(nodes = record.nodes.len(), edges = record.edges.len(), delete, "copied selection");

        if delete && interaction::remove_selected(scene) {
            history.store(scene, HISTORY_CUT, true)?;
        }
        Ok(record)
    }

    /// [`serialize_selected`](Self::serialize_selected) rendered as clipboard text.
    pub fn copy_to_text(&self, scene: &mut Scene, history: &mut SceneHistory, delete: bool) -> Result<String> {
        let record = self.serialize_selected(scene, history, delete)?;
        serialization::to_pretty_json(&record)
    }

    /// Parse clipboard text and paste it centered on `pointer`.
    ///
    /// Text that is not a complete payload is rejected before the scene is
    /// touched.
    pub fn deserialize_from_clipboard(&self, scene: &mut Scene, history: &mut SceneHistory, text: &str, pointer: Point) -> Result<Pasted> {
        let record: ClipboardRecord = serde_json::from_str(text)?;
        self.paste(scene, history, &record, pointer)
    }

    /// Insert copies of the payload with fresh ids, moved so the bounding box
    /// of the node positions is centered on `pointer`. The pasted items
    /// become the selection.
    pub fn paste(&self, scene: &mut Scene, history: &mut SceneHistory, record: &ClipboardRecord, pointer: Point) -> Result<Pasted> {
        serialization::validate_edges(&record.nodes, &record.edges)?;

        let positions = record.nodes.iter().map(|n| Point::new(n.pos_x, n.pos_y));
        let Some(bounds) = Rect::bounding(positions) else {
            tracing::debug!("clipboard payload has no nodes, nothing pasted");
            return Ok(Pasted::default());
        };
        let offset = pointer - bounds.center();

        let (nodes, edges) = scene.insert_records(&record.nodes, &record.edges, false, offset)?;
        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "pasted elements");

        scene.selection_mut().replace_selection(
            nodes
                .iter()
                .map(|&n| ItemId::Node(n))
                .chain(edges.iter().map(|&e| ItemId::Edge(e))),
        );
        history.store(scene, HISTORY_PASTE, true)?;
        Ok(Pasted { nodes, edges })
    }
}
