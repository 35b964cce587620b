//! Undo/redo history.
//!
//! Every entry is a full snapshot of the serialized scene plus the current
//! selection. Restoring replaces the whole graph instead of applying an
//! inverse operation, reusing the serialization contract. The cost is
//! O(graph size) memory per step, bounded by [`SceneHistory::limit`]; large
//! graphs with deep histories would need a diff-based log instead.

use crate::error::Result;
use crate::scene::Scene;
use crate::serialization::{SceneRecord, SelectionRecord};
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStamp {
    pub desc: String,
    pub snapshot: SceneRecord,
    pub selection: SelectionRecord,
}

impl HistoryStamp {
    pub fn capture(scene: &Scene, desc: &str) -> Result<Self> {
        Ok(Self {
            desc: desc.to_string(),
            snapshot: scene.serialize()?,
            selection: scene.selection().to_record(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SceneHistory {
    stack: VecDeque<HistoryStamp>,
    current_step: Option<usize>,
    limit: usize,
}

impl Default for SceneHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl SceneHistory {
    /// A limit of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            stack: VecDeque::new(),
            current_step: None,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Index of the entry matching the scene's current state.
    pub fn current_step(&self) -> Option<usize> {
        self.current_step
    }

    pub fn current(&self) -> Option<&HistoryStamp> {
        self.stack.get(self.current_step?)
    }

    pub fn current_description(&self) -> Option<&str> {
        self.current().map(|s| s.desc.as_str())
    }

    pub fn stamps(&self) -> impl Iterator<Item = &HistoryStamp> {
        self.stack.iter()
    }

    pub fn can_undo(&self) -> bool {
        self.current_step.is_some_and(|step| step > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.current_step.map_or(0, |step| step + 1) < self.stack.len()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.current_step = None;
    }

    /// Record the state right after a new/load as the bottom of the stack.
    pub fn store_initial_stamp(&mut self, scene: &mut Scene) -> Result<()> {
        self.store(scene, "Initial history stamp", false)
    }

    /// Push a snapshot of `scene` after a completed action.
    ///
    /// Redo entries past the current step are discarded. When the stack is
    /// full the oldest entry is evicted.
    pub fn store(&mut self, scene: &mut Scene, desc: &str, set_modified: bool) -> Result<()> {
        if set_modified {
            scene.set_modified(true);
        }
        let stamp = HistoryStamp::capture(scene, desc)?;

        let keep = self.current_step.map_or(0, |step| step + 1);
        self.stack.truncate(keep);
        if self.stack.len() >= self.limit {
            self.stack.pop_front();
        }

        tracing::debug!(desc, step = self.stack.len(), "storing history");
        self.stack.push_back(stamp);
        self.current_step = Some(self.stack.len() - 1);
        Ok(())
    }

    /// Step back one entry. Returns `false` when already at the first entry.
    pub fn undo(&mut self, scene: &mut Scene) -> Result<bool> {
        match self.current_step {
            Some(step) if step > 0 => {
                self.restore_step(scene, step - 1)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Step forward one entry. Returns `false` when already at the last entry.
    pub fn redo(&mut self, scene: &mut Scene) -> Result<bool> {
        let next = self.current_step.map_or(0, |step| step + 1);
        if next < self.stack.len() {
            self.restore_step(scene, next)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn restore_step(&mut self, scene: &mut Scene, step: usize) -> Result<()> {
        if let Some(stamp) = self.stack.get(step) {
            tracing::debug!(desc = stamp.desc.as_str(), step, "restoring history");
            Self::restore(scene, stamp)?;
            self.current_step = Some(step);
        }
        Ok(())
    }

    /// Replace the scene with `stamp` and reselect its selection.
    pub fn restore(scene: &mut Scene, stamp: &HistoryStamp) -> Result<()> {
        scene.deserialize(&stamp.snapshot, true)?;
        scene.restore_selection(&stamp.selection);
        scene.set_modified(true);
        Ok(())
    }
}
