//! Slint model mirror of a scene.
//!
//! [`SceneView`] owns one `VecModel` per item kind. [`SceneView::sync`]
//! recomputes the rows from the editor state and writes them into the models,
//! updating rows in place and only touching rows that changed, so a window
//! bound to the models redraws only what moved.
//!
//! Everything is in scene coordinates, narrowed to Slint's `f32`; the window
//! applies zoom and pan.

use crate::editor::{NodeEditor, TextClipboard};
use crate::geometry::{Point, Rect};
use crate::identity::EdgeId;
use crate::scene::Scene;
use slint::{Color, Model, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Socket colors by socket type 1..=6.
const SOCKET_COLORS: [(u8, u8, u8); 6] = [
    (0xFF, 0x77, 0x00),
    (0x52, 0xE2, 0x20),
    (0x00, 0x56, 0xA6),
    (0xA8, 0x6D, 0xB1),
    (0xB5, 0x47, 0x47),
    (0xDB, 0xE2, 0x20),
];

/// Color for a socket type; types outside 1..=6 wrap around the palette.
pub fn socket_color(socket_type: u8) -> Color {
    let (r, g, b) = SOCKET_COLORS[socket_type.wrapping_sub(1) as usize % SOCKET_COLORS.len()];
    Color::from_rgb_u8(r, g, b)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeView {
    pub id: SharedString,
    pub title: SharedString,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocketView {
    pub id: SharedString,
    pub node_id: SharedString,
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeView {
    pub id: SharedString,
    pub path_commands: SharedString,
    pub selected: bool,
    pub dragging: bool,
}

/// Gesture feedback drawn above the graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayView {
    pub cut_line: SharedString,
    pub rubber_band: Option<Rect>,
    pub window_title: SharedString,
}

/// SVG commands for an open polyline, empty for fewer than two points.
pub fn polyline_commands(points: &[Point]) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut commands = format!("M {} {}", points[0].x, points[0].y);
    for p in &points[1..] {
        commands.push_str(&format!(" L {} {}", p.x, p.y));
    }
    commands
}

/// Write `rows` into `model`, leaving unchanged rows alone.
fn sync_model<T: Clone + PartialEq + 'static>(model: &VecModel<T>, rows: Vec<T>) {
    let len = rows.len();
    for (i, row) in rows.into_iter().enumerate() {
        if i < model.row_count() {
            if model.row_data(i).as_ref() != Some(&row) {
                model.set_row_data(i, row);
            }
        } else {
            model.push(row);
        }
    }
    while model.row_count() > len {
        model.remove(model.row_count() - 1);
    }
}

pub struct SceneView {
    nodes: Rc<VecModel<NodeView>>,
    sockets: Rc<VecModel<SocketView>>,
    edges: Rc<VecModel<EdgeView>>,
    overlay: RefCell<OverlayView>,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneView {
    pub fn new() -> Self {
        Self {
            nodes: Rc::new(VecModel::default()),
            sockets: Rc::new(VecModel::default()),
            edges: Rc::new(VecModel::default()),
            overlay: RefCell::new(OverlayView::default()),
        }
    }

    pub fn nodes(&self) -> ModelRc<NodeView> {
        ModelRc::from(self.nodes.clone())
    }

    pub fn sockets(&self) -> ModelRc<SocketView> {
        ModelRc::from(self.sockets.clone())
    }

    pub fn edges(&self) -> ModelRc<EdgeView> {
        ModelRc::from(self.edges.clone())
    }

    pub fn overlay(&self) -> OverlayView {
        self.overlay.borrow().clone()
    }

    pub fn sync<C: TextClipboard>(&self, editor: &NodeEditor<C>) {
        let scene = editor.scene();
        let interaction = editor.interaction();

        sync_model(&self.nodes, Self::node_rows(scene));
        sync_model(&self.sockets, Self::socket_rows(scene));
        sync_model(
            &self.edges,
            Self::edge_rows(scene, interaction.dragging_edge(), editor.config().bezier_min_offset),
        );

        *self.overlay.borrow_mut() = OverlayView {
            cut_line: polyline_commands(interaction.cut_line()).into(),
            rubber_band: interaction.rubber_band(),
            window_title: editor.window_title().into(),
        };
    }

    fn node_rows(scene: &Scene) -> Vec<NodeView> {
        let metrics = scene.metrics();
        scene
            .nodes()
            .iter()
            .map(|node| {
                let rect = node.rect(metrics);
                NodeView {
                    id: node.id().to_string().into(),
                    title: node.title().into(),
                    x: rect.x as f32,
                    y: rect.y as f32,
                    width: rect.width as f32,
                    height: rect.height as f32,
                    selected: scene.selection().contains_node(node.id()),
                }
            })
            .collect()
    }

    fn socket_rows(scene: &Scene) -> Vec<SocketView> {
        let metrics = scene.metrics();
        scene
            .nodes()
            .iter()
            .flat_map(|node| {
                node.sockets().filter_map(move |socket| {
                    let anchor = node.socket_anchor(metrics, socket.id())?;
                    Some(SocketView {
                        id: socket.id().to_string().into(),
                        node_id: node.id().to_string().into(),
                        x: anchor.x as f32,
                        y: anchor.y as f32,
                        color: socket_color(socket.socket_type()),
                        connected: socket.has_edge(),
                    })
                })
            })
            .collect()
    }

    fn edge_rows(scene: &Scene, dragging: Option<EdgeId>, bezier_min_offset: f64) -> Vec<EdgeView> {
        scene
            .edges()
            .iter()
            .filter_map(|edge| {
                let path = scene.edge_path(edge.id(), bezier_min_offset)?;
                Some(EdgeView {
                    id: edge.id().to_string().into(),
                    path_commands: path.svg_commands().into(),
                    selected: scene.selection().contains_edge(edge.id()),
                    dragging: dragging == Some(edge.id()),
                })
            })
            .collect()
    }
}
