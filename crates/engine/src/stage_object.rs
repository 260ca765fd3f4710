//! Stage manager frame object.
//!
//! Owns a [`StageManagerSlot`] and forwards the frame hooks to its manager.
//! Construction creates the manager; dropping the object deletes it, after
//! an optional JSON dump of the final stage.
//!
//! A missing manager is logged at `error` the first time a hook runs into
//! it and at `debug` after that; the host retries `start` every frame.

use std::cell::Cell;
use std::path::PathBuf;

use crate::core::types::StageError;
use crate::core::{RenderContext, StageManager, StageManagerSlot};
use crate::dump::write_stage_json;
use crate::object::FrameObject;

pub struct StageManagerObject {
    slot: StageManagerSlot,
    dump_path: Option<PathBuf>,
    absent_reported: Cell<bool>,
}

impl StageManagerObject {
    pub fn new() -> Self {
        let mut slot = StageManagerSlot::new();
        slot.create_instance();
        Self {
            slot,
            dump_path: None,
            absent_reported: Cell::new(false),
        }
    }

    /// Write the stage snapshot to `path` when this object is dropped.
    pub fn with_dump_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(path.into());
        self
    }

    pub fn manager(&self) -> Result<&StageManager, StageError> {
        self.slot.instance()
    }

    pub fn manager_mut(&mut self) -> Result<&mut StageManager, StageError> {
        self.slot.instance_mut()
    }

    /// Direct access to the slot, e.g. to release the manager early.
    pub fn slot_mut(&mut self) -> &mut StageManagerSlot {
        &mut self.slot
    }

    fn report_absent(&self, hook: &str, e: StageError) {
        if self.absent_reported.replace(true) {
            log::debug!("stage {}: {}", hook, e);
        } else {
            log::error!("stage {}: {}", hook, e);
        }
    }
}

impl Default for StageManagerObject {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameObject for StageManagerObject {
    fn start(&mut self) -> bool {
        match self.slot.instance_mut() {
            Ok(manager) => {
                manager.start();
                self.absent_reported.set(false);
                true
            }
            Err(e) => {
                self.report_absent("start", e);
                false
            }
        }
    }

    fn update(&mut self) {
        match self.slot.instance_mut() {
            Ok(manager) => manager.update(),
            Err(e) => self.report_absent("update", e),
        }
    }

    fn render(&self, rc: &mut RenderContext) {
        match self.slot.instance() {
            Ok(manager) => manager.render(rc),
            Err(e) => self.report_absent("render", e),
        }
    }

    fn name(&self) -> &str {
        "stage"
    }
}

impl Drop for StageManagerObject {
    fn drop(&mut self) {
        if let (Some(path), Ok(manager)) = (&self.dump_path, self.slot.instance()) {
            match write_stage_json(path, &manager.snapshot()) {
                Ok(()) => log::info!("stage dumped to {}", path.display()),
                Err(e) => log::error!("stage dump to {} failed: {:#}", path.display(), e),
            }
        }
        self.slot.delete_instance();
    }
}
