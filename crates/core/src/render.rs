//! Render context - the per-frame draw list
//!
//! Frame objects never touch an output device. They push draw commands here
//! and a back end (see the `term` crate) rasterizes the list afterwards.
//! The context is cleared at the start of every frame; its allocation is
//! reused.

use std::rc::Rc;

use crate::types::Vec3;

/// One entry in the draw list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A sprite quad with its lower-left corner at `position`.
    Sprite {
        asset: Rc<str>,
        position: Vec3,
        width: f32,
        height: f32,
    },
    /// Marker for an empty stage cell (drawn as a dim dot).
    Guide { position: Vec3, size: f32 },
}

impl DrawCommand {
    pub fn position(&self) -> Vec3 {
        match self {
            DrawCommand::Sprite { position, .. } | DrawCommand::Guide { position, .. } => *position,
        }
    }

    /// Width and height in world units.
    pub fn extent(&self) -> (f32, f32) {
        match self {
            DrawCommand::Sprite { width, height, .. } => (*width, *height),
            DrawCommand::Guide { size, .. } => (*size, *size),
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderContext {
    commands: Vec<DrawCommand>,
    frame: u64,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the draw list for a new frame.
    pub fn begin_frame(&mut self, frame: u64) {
        self.commands.clear();
        self.frame = frame;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn draw_sprite(&mut self, asset: Rc<str>, position: Vec3, width: f32, height: f32) {
        self.commands.push(DrawCommand::Sprite {
            asset,
            position,
            width,
            height,
        });
    }

    pub fn draw_guide(&mut self, position: Vec3, size: f32) {
        self.commands.push(DrawCommand::Guide { position, size });
    }

    /// Number of sprite commands (guides excluded).
    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }
}
