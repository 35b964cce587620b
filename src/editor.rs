//! Editor facade tying scene, history, gestures and clipboard together.
//!
//! [`NodeEditor`] is what a window talks to: it receives pointer and key
//! events, runs file commands and exposes the window title. It does not know
//! about Slint; see [`NodeEditorController`](crate::NodeEditorController) for
//! the binding.

use crate::clipboard::{Pasted, SceneClipboard};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::history::SceneHistory;
use crate::interaction::{InteractionState, Key, Modifiers};
use crate::scene::Scene;
use std::path::{Path, PathBuf};

/// Plain-text clipboard the editor copies to and pastes from.
pub trait TextClipboard {
    fn set_text(&mut self, text: String);
    fn text(&self) -> Option<String>;
}

/// Process-local clipboard, used by default and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl TextClipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }
}

/// A key press as seen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Named(Key),
    Char(char),
}

pub struct NodeEditor<C: TextClipboard = MemoryClipboard> {
    config: EditorConfig,
    scene: Scene,
    history: SceneHistory,
    interaction: InteractionState,
    clipboard: SceneClipboard,
    text_clipboard: C,
    filename: Option<PathBuf>,
    last_pointer: Point,
}

impl NodeEditor<MemoryClipboard> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_clipboard(config, MemoryClipboard::default())
    }
}

impl Default for NodeEditor<MemoryClipboard> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<C: TextClipboard> NodeEditor<C> {
    pub fn with_clipboard(config: EditorConfig, text_clipboard: C) -> Self {
        let mut scene = Scene::with_config(&config);
        let mut history = SceneHistory::new(config.history_limit);
        if let Err(err) = history.store_initial_stamp(&mut scene) {
            tracing::warn!(%err, "could not store initial history stamp");
        }
        Self {
            interaction: InteractionState::new(config.clone()),
            config,
            scene,
            history,
            clipboard: SceneClipboard::new(),
            text_clipboard,
            filename: None,
            last_pointer: Point::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Direct scene access for building graphs programmatically. Changes made
    /// here are not recorded until [`store_history`](Self::store_history).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn history(&self) -> &SceneHistory {
        &self.history
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn text_clipboard(&self) -> &C {
        &self.text_clipboard
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.scene.is_modified()
    }

    pub fn store_history(&mut self, desc: &str, set_modified: bool) -> Result<()> {
        self.interaction.cancel(&mut self.scene);
        self.history.store(&mut self.scene, desc, set_modified)
    }

    /// "Node Editor - <file name or New>", with `*` when there are unsaved
    /// changes.
    pub fn window_title(&self) -> String {
        let name = self
            .filename
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "New".to_string());
        let dirty = if self.is_modified() { "*" } else { "" };
        format!("Node Editor - {}{}", name, dirty)
    }

    // === Input ===

    pub fn set_text_editing(&mut self, editing: bool) {
        self.interaction.set_text_editing(editing);
    }

    pub fn pointer_down(&mut self, point: Point, modifiers: Modifiers) -> Result<()> {
        self.last_pointer = point;
        self.interaction
            .pointer_down(&mut self.scene, &mut self.history, point, modifiers)
    }

    pub fn pointer_move(&mut self, point: Point) {
        self.last_pointer = point;
        self.interaction.pointer_move(&mut self.scene, point);
    }

    pub fn pointer_up(&mut self, point: Point) -> Result<()> {
        self.last_pointer = point;
        self.interaction.pointer_up(&mut self.scene, &mut self.history, point)
    }

    /// Dispatch a key press; returns `true` when it was consumed.
    ///
    /// Ctrl+Z undo, Ctrl+Shift+Z or Ctrl+Y redo, Ctrl+C/X/V clipboard.
    /// Other keys go to the gesture state machine.
    pub fn key_down(&mut self, key: EditorKey, modifiers: Modifiers) -> Result<bool> {
        match key {
            EditorKey::Named(key) => self.interaction.key_down(&mut self.scene, &mut self.history, key),
            EditorKey::Char(c) if modifiers.ctrl => match c.to_ascii_lowercase() {
                'z' if modifiers.shift => self.redo().map(|_| true),
                'z' => self.undo().map(|_| true),
                'y' => self.redo().map(|_| true),
                'c' => self.copy().map(|_| true),
                'x' => self.cut().map(|_| true),
                'v' => self.paste().map(|_| true),
                _ => Ok(false),
            },
            EditorKey::Char(_) => Ok(false),
        }
    }

    // === Commands ===

    pub fn delete_selected(&mut self) -> Result<bool> {
        self.interaction.delete_selected(&mut self.scene, &mut self.history)
    }

    pub fn undo(&mut self) -> Result<bool> {
        self.interaction.cancel(&mut self.scene);
        self.history.undo(&mut self.scene)
    }

    pub fn redo(&mut self) -> Result<bool> {
        self.interaction.cancel(&mut self.scene);
        self.history.redo(&mut self.scene)
    }

    pub fn copy(&mut self) -> Result<()> {
        self.copy_or_cut(false)
    }

    pub fn cut(&mut self) -> Result<()> {
        self.copy_or_cut(true)
    }

    fn copy_or_cut(&mut self, delete: bool) -> Result<()> {
        self.interaction.cancel(&mut self.scene);
        let text = self
            .clipboard
            .copy_to_text(&mut self.scene, &mut self.history, delete)?;
        self.text_clipboard.set_text(text);
        Ok(())
    }

    /// Paste the clipboard text centered on the last pointer position.
    pub fn paste(&mut self) -> Result<Pasted> {
        self.paste_at(self.last_pointer)
    }

    pub fn paste_at(&mut self, point: Point) -> Result<Pasted> {
        self.interaction.cancel(&mut self.scene);
        let Some(text) = self.text_clipboard.text() else {
            return Ok(Pasted::default());
        };
        self.clipboard
            .deserialize_from_clipboard(&mut self.scene, &mut self.history, &text, point)
    }

    // === Files ===

    pub fn new_file(&mut self) -> Result<()> {
        self.interaction.cancel(&mut self.scene);
        self.scene.clear();
        self.filename = None;
        self.reset_history()
    }

    /// Load `path`. On error the current scene, file name and history are kept.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.interaction.cancel(&mut self.scene);
        self.scene.load_from_file(path)?;
        self.filename = Some(path.to_path_buf());
        self.reset_history()
    }

    /// Save to the current file. Returns `false` when there is none yet and
    /// the host should ask for a name and call [`save_as`](Self::save_as).
    pub fn save(&mut self) -> Result<bool> {
        let Some(path) = self.filename.clone() else {
            return Ok(false);
        };
        self.save_as(path)?;
        Ok(true)
    }

    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.interaction.cancel(&mut self.scene);
        self.scene.save_to_file(path)?;
        self.filename = Some(path.to_path_buf());
        Ok(())
    }

    fn reset_history(&mut self) -> Result<()> {
        self.history.clear();
        self.history.store_initial_stamp(&mut self.scene)
    }
}
