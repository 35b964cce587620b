//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_node_scene::{Scene, SceneEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Records the notifications a scene sends to its collaborators.
#[derive(Default, Clone)]
pub struct EventTracker {
    /// Item added/removed events, in order
    pub events: Rc<RefCell<Vec<SceneEvent>>>,
    /// Count of clean -> modified transitions
    pub modified: Rc<RefCell<usize>>,
}

impl EventTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register this tracker's listeners on `scene`.
    pub fn attach(&self, scene: &mut Scene) {
        let events = self.events.clone();
        scene.add_item_listener(move |event| events.borrow_mut().push(*event));
        let modified = self.modified.clone();
        scene.add_modified_listener(move || *modified.borrow_mut() += 1);
    }

    pub fn modified_count(&self) -> usize {
        *self.modified.borrow()
    }

    pub fn count(&self, pred: impl Fn(&SceneEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    /// Clear all recorded notifications.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        *self.modified.borrow_mut() = 0;
    }
}
