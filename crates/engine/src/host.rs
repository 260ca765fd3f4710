//! Frame host - drives frame objects in a fixed per-frame order
//!
//! One call to [`FrameHost::step`] is one frame:
//!
//! 1. `start()` on every object that has not started yet (in spawn order)
//! 2. `update()` on every started object
//! 3. `render()` on every started object into a freshly cleared context
//!
//! An object that starts during step 1 is updated and rendered in the same
//! frame. The host is single-threaded and never blocks; pacing is the
//! caller's job.

use crate::core::RenderContext;
use crate::object::FrameObject;

/// Index of a spawned object, stable for the host's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

struct Entry {
    object: Box<dyn FrameObject>,
    started: bool,
}

pub struct FrameHost {
    entries: Vec<Entry>,
    rc: RenderContext,
    frame: u64,
}

impl FrameHost {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            rc: RenderContext::new(),
            frame: 0,
        }
    }

    /// Add an object. Its `start` runs on the next `step`.
    pub fn spawn(&mut self, object: Box<dyn FrameObject>) -> ObjectId {
        log::debug!("spawn {}", object.name());
        self.entries.push(Entry {
            object,
            started: false,
        });
        ObjectId(self.entries.len() - 1)
    }

    /// Run one frame and return its draw list.
    pub fn step(&mut self) -> &RenderContext {
        self.frame += 1;

        for entry in self.entries.iter_mut().filter(|e| !e.started) {
            entry.started = entry.object.start();
            if entry.started {
                log::info!("{} started on frame {}", entry.object.name(), self.frame);
            }
        }

        for entry in self.entries.iter_mut().filter(|e| e.started) {
            entry.object.update();
        }

        self.rc.begin_frame(self.frame);
        for entry in self.entries.iter().filter(|e| e.started) {
            entry.object.render(&mut self.rc);
        }

        &self.rc
    }

    /// Draw list of the last frame.
    pub fn render_context(&self) -> &RenderContext {
        &self.rc
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_started(&self, id: ObjectId) -> bool {
        self.entries.get(id.0).map(|e| e.started).unwrap_or(false)
    }
}

impl Default for FrameHost {
    fn default() -> Self {
        Self::new()
    }
}
