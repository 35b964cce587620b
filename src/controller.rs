//! High-level controller wiring a [`NodeEditor`] to a Slint window.
//!
//! The [`NodeEditorController`] owns the editor and its [`SceneView`], converts
//! screen-space pointer positions to scene space using the current viewport,
//! and re-syncs the view models after every event.
//!
//! # Example
//!
//! ```ignore
//! use slint_node_scene::NodeEditorController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = NodeEditorController::new(Default::default());
//!
//!     window.set_nodes(ctrl.view().nodes());
//!     window.set_sockets(ctrl.view().sockets());
//!     window.set_edges(ctrl.view().edges());
//!
//!     window.on_pointer_down(ctrl.pointer_down_callback());
//!     window.on_pointer_move(ctrl.pointer_move_callback());
//!     window.on_pointer_up(ctrl.pointer_up_callback());
//!     window.on_key_pressed(ctrl.key_pressed_callback());
//!
//!     window.on_update_viewport({
//!         let ctrl = ctrl.clone();
//!         move |zoom, pan_x, pan_y| ctrl.set_viewport(zoom, pan_x, pan_y)
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::EditorConfig;
use crate::editor::{EditorKey, NodeEditor};
use crate::error::Result;
use crate::geometry::Point;
use crate::interaction::{Key, Modifiers};
use crate::view::SceneView;
use slint::SharedString;
use std::cell::RefCell;
use std::rc::Rc;

/// Map Slint key event text to an editor key.
///
/// Slint encodes special keys as private characters: Backspace `\u{8}`,
/// Escape `\u{1b}`, Delete `\u{7f}`.
pub fn editor_key_from_text(text: &str) -> Option<EditorKey> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(match c {
        '\u{8}' => EditorKey::Named(Key::Backspace),
        '\u{1b}' => EditorKey::Named(Key::Escape),
        '\u{7f}' => EditorKey::Named(Key::Delete),
        c => EditorKey::Char(c),
    })
}

/// Controller that owns the editor and provides callback implementations.
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct NodeEditorController {
    editor: Rc<RefCell<NodeEditor>>,
    view: Rc<SceneView>,
    zoom: Rc<RefCell<f32>>,
    pan_x: Rc<RefCell<f32>>,
    pan_y: Rc<RefCell<f32>>,
    status: Rc<RefCell<SharedString>>,
}

impl Default for NodeEditorController {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl NodeEditorController {
    pub fn new(config: EditorConfig) -> Self {
        Self::from_editor(NodeEditor::new(config))
    }

    pub fn from_editor(editor: NodeEditor) -> Self {
        let ctrl = Self {
            editor: Rc::new(RefCell::new(editor)),
            view: Rc::new(SceneView::new()),
            zoom: Rc::new(RefCell::new(1.0)),
            pan_x: Rc::new(RefCell::new(0.0)),
            pan_y: Rc::new(RefCell::new(0.0)),
            status: Rc::new(RefCell::new(SharedString::default())),
        };
        ctrl.sync();
        ctrl
    }

    pub fn editor(&self) -> Rc<RefCell<NodeEditor>> {
        self.editor.clone()
    }

    pub fn view(&self) -> Rc<SceneView> {
        self.view.clone()
    }

    /// Last error message to show the user, empty after a successful command.
    pub fn status(&self) -> SharedString {
        self.status.borrow().clone()
    }

    pub fn zoom(&self) -> f32 {
        *self.zoom.borrow()
    }

    /// Set viewport state: zoom, pan_x, pan_y.
    pub fn set_viewport(&self, zoom: f32, pan_x: f32, pan_y: f32) {
        *self.zoom.borrow_mut() = zoom;
        *self.pan_x.borrow_mut() = pan_x;
        *self.pan_y.borrow_mut() = pan_y;
    }

    /// Screen position to scene position under the current viewport.
    pub fn screen_to_scene(&self, x: f32, y: f32) -> Point {
        let zoom = *self.zoom.borrow();
        let z = f64::from(if zoom > 0.0 { zoom } else { 1.0 });
        let pan_x = f64::from(*self.pan_x.borrow());
        let pan_y = f64::from(*self.pan_y.borrow());
        Point::new((f64::from(x) - pan_x) / z, (f64::from(y) - pan_y) / z)
    }

    pub fn sync(&self) {
        let editor = self.editor.borrow();
        self.view.sync(&*editor);
    }

    /// Run `command` on the editor, record its error for the user and re-sync.
    pub fn run<T>(&self, command: impl FnOnce(&mut NodeEditor) -> Result<T>) -> Option<T> {
        let result = command(&mut *self.editor.borrow_mut());
        let value = match result {
            Ok(value) => {
                *self.status.borrow_mut() = SharedString::default();
                Some(value)
            }
            Err(err) => {
                tracing::warn!(%err, "editor command failed");
                *self.status.borrow_mut() = err.to_string().into();
                None
            }
        };
        self.sync();
        value
    }

    // === Direct handlers ===

    pub fn handle_pointer_down(&self, x: f32, y: f32, shift: bool, ctrl: bool) {
        let point = self.screen_to_scene(x, y);
        self.run(|editor| editor.pointer_down(point, Modifiers { shift, ctrl }));
    }

    pub fn handle_pointer_move(&self, x: f32, y: f32) {
        let point = self.screen_to_scene(x, y);
        self.editor.borrow_mut().pointer_move(point);
        self.sync();
    }

    pub fn handle_pointer_up(&self, x: f32, y: f32) {
        let point = self.screen_to_scene(x, y);
        self.run(|editor| editor.pointer_up(point));
    }

    /// Returns `true` when the key was consumed.
    pub fn handle_key(&self, text: &str, shift: bool, ctrl: bool) -> bool {
        let Some(key) = editor_key_from_text(text) else {
            return false;
        };
        self.run(|editor| editor.key_down(key, Modifiers { shift, ctrl }))
            .unwrap_or(false)
    }

    pub fn set_text_editing(&self, editing: bool) {
        self.editor.borrow_mut().set_text_editing(editing);
    }

    // === Callback factories ===

    /// Returns a callback for `pointer-down(x, y, shift, ctrl)`.
    pub fn pointer_down_callback(&self) -> impl Fn(f32, f32, bool, bool) {
        let ctrl = self.clone();
        move |x, y, shift, control| ctrl.handle_pointer_down(x, y, shift, control)
    }

    /// Returns a callback for `pointer-move(x, y)`.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_move(x, y)
    }

    /// Returns a callback for `pointer-up(x, y)`.
    pub fn pointer_up_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_up(x, y)
    }

    /// Returns a callback for `key-pressed(text, shift, ctrl) -> bool`.
    pub fn key_pressed_callback(&self) -> impl Fn(SharedString, bool, bool) -> bool {
        let ctrl = self.clone();
        move |text, shift, control| ctrl.handle_key(text.as_str(), shift, control)
    }

    /// Returns a callback for `text-editing-changed(editing)`.
    pub fn text_editing_callback(&self) -> impl Fn(bool) {
        let ctrl = self.clone();
        move |editing| ctrl.set_text_editing(editing)
    }
}
