//! Editor configuration.
//!
//! Every value has a default, so a host can start from
//! [`EditorConfig::default()`] and override only what it needs, or load a
//! partial JSON document with [`EditorConfig::from_json_str`].

use crate::edge::EdgeType;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Box metrics of a node, in scene units.
///
/// Socket anchors are derived from these values (see
/// [`Node::socket_offset`](crate::Node::socket_offset)), so changing them
/// moves every socket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMetrics {
    pub width: f64,
    pub height: f64,
    /// Corner rounding and inner margin of the node box.
    pub edge_size: f64,
    pub title_height: f64,
    pub padding: f64,
    /// Vertical distance between two stacked sockets.
    pub socket_spacing: f64,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        Self {
            width: 180.0,
            height: 240.0,
            edge_size: 10.0,
            title_height: 24.0,
            padding: 4.0,
            socket_spacing: 22.0,
        }
    }
}

/// Verbosity and formatting for [`logging::init`](crate::logging::init).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `"info"` or `"slint_node_scene=debug"`.
    pub level: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo steps kept.
    pub history_limit: usize,
    pub scene_width: i64,
    pub scene_height: i64,
    pub node: NodeMetrics,
    /// Pointer distance within which a socket counts as hit.
    pub socket_hit_radius: f64,
    /// Pointer distance within which an edge counts as hit.
    pub edge_hover_distance: f64,
    /// Samples used when flattening curved edges for hit testing and cutting.
    pub edge_hit_samples: usize,
    /// Minimum horizontal control point offset of bezier edges.
    pub bezier_min_offset: f64,
    /// Render style given to edges created by dragging.
    pub default_edge_type: EdgeType,
    /// A rubber band smaller than this in both directions is treated as a click.
    pub selection_click_tolerance: f64,
    pub log: LogConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: 32,
            scene_width: 16000,
            scene_height: 16000,
            node: NodeMetrics::default(),
            socket_hit_radius: 10.0,
            edge_hover_distance: 5.0,
            edge_hit_samples: 20,
            bezier_min_offset: 0.0,
            default_edge_type: EdgeType::Bezier,
            selection_click_tolerance: 2.0,
            log: LogConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
