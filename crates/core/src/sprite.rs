//! Sprite resource - a textured quad placed in world space
//!
//! A sprite is identified by its asset path and has a size in world units.
//! Positioning is two-phase: `set_position` stages a new position and
//! `update` commits it, so a draw always uses the position that was current
//! at the last update.

use std::rc::Rc;

use crate::render::RenderContext;
use crate::types::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRender {
    asset: Option<Rc<str>>,
    width: f32,
    height: f32,
    pending: Vec3,
    committed: Vec3,
}

impl SpriteRender {
    /// Create an uninitialized sprite. It draws nothing until `init`.
    pub fn new() -> Self {
        Self {
            asset: None,
            width: 0.0,
            height: 0.0,
            pending: Vec3::new(0.0, 0.0, 0.0),
            committed: Vec3::new(0.0, 0.0, 0.0),
        }
    }

    /// Bind the sprite to an asset path and size.
    ///
    /// Re-initializing replaces the asset and size but keeps the position.
    pub fn init(&mut self, path: &str, width: f32, height: f32) {
        self.asset = Some(Rc::from(path));
        self.width = width;
        self.height = height;
    }

    pub fn is_initialized(&self) -> bool {
        self.asset.is_some()
    }

    pub fn asset(&self) -> Option<&str> {
        self.asset.as_deref()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Stage a new position; takes effect on the next `update`.
    pub fn set_position(&mut self, position: Vec3) {
        self.pending = position;
    }

    /// Position used by `draw`.
    pub fn position(&self) -> Vec3 {
        self.committed
    }

    /// Commit the staged position.
    pub fn update(&mut self) {
        self.committed = self.pending;
    }

    /// Draw at the committed position.
    pub fn draw(&self, rc: &mut RenderContext) {
        self.draw_at(rc, self.committed);
    }

    /// Draw at an explicit position, ignoring the sprite's own.
    ///
    /// Stage cells use this to draw a shared block sprite at every cell
    /// that references it.
    pub fn draw_at(&self, rc: &mut RenderContext, position: Vec3) {
        let Some(asset) = &self.asset else {
            log::trace!("skipping draw of uninitialized sprite");
            return;
        };
        rc.draw_sprite(Rc::clone(asset), position, self.width, self.height);
    }
}

impl Default for SpriteRender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;

    #[test]
    fn uninitialized_sprite_draws_nothing() {
        let sprite = SpriteRender::new();
        assert!(!sprite.is_initialized());
        assert_eq!(sprite.asset(), None);
        assert_eq!(sprite.size(), (0.0, 0.0));

        let mut rc = RenderContext::new();
        sprite.draw(&mut rc);
        assert!(rc.commands().is_empty());
    }

    #[test]
    fn reinit_replaces_asset_and_size_but_keeps_position() {
        let mut sprite = SpriteRender::new();
        sprite.init("Assets/spriteData/mino/S.dds", 30.0, 30.0);
        sprite.set_position(Vec3::new(0.0, 90.0, 0.0));
        sprite.update();
        assert!(sprite.is_initialized());

        sprite.init("Assets/spriteData/mino/Z.dds", 15.0, 45.0);
        assert_eq!(sprite.asset(), Some("Assets/spriteData/mino/Z.dds"));
        assert_eq!(sprite.size(), (15.0, 45.0));
        assert_eq!(sprite.position(), Vec3::new(0.0, 90.0, 0.0));
    }

    #[test]
    fn position_takes_effect_after_update() {
        let mut sprite = SpriteRender::new();
        sprite.init("Assets/spriteData/mino/O.dds", 30.0, 30.0);
        sprite.set_position(Vec3::new(60.0, 0.0, 0.0));
        assert_eq!(sprite.position(), Vec3::new(0.0, 0.0, 0.0));

        sprite.update();
        assert_eq!(sprite.position(), Vec3::new(60.0, 0.0, 0.0));

        let mut rc = RenderContext::new();
        sprite.draw(&mut rc);
        match &rc.commands()[0] {
            DrawCommand::Sprite {
                asset,
                position,
                width,
                height,
            } => {
                assert_eq!(&**asset, "Assets/spriteData/mino/O.dds");
                assert_eq!(*position, Vec3::new(60.0, 0.0, 0.0));
                assert_eq!((*width, *height), (30.0, 30.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
