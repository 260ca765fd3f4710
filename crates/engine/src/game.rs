//! Game entry object.
//!
//! Draws a row of sample I blocks along the world x axis. It does not touch
//! the stage.

use arrayvec::ArrayVec;

use crate::core::mino::asset_path;
use crate::core::types::{MinoKind, Vec3, MINO_BLOCK_SIZE, SAMPLE_SPRITE_COUNT};
use crate::core::{RenderContext, SpriteRender};
use crate::object::FrameObject;

pub struct Game {
    sprites: ArrayVec<SpriteRender, SAMPLE_SPRITE_COUNT>,
}

impl Game {
    pub fn new() -> Self {
        let mut sprites = ArrayVec::new();
        for _ in 0..SAMPLE_SPRITE_COUNT {
            sprites.push(SpriteRender::new());
        }
        Self { sprites }
    }

    pub fn sprites(&self) -> &[SpriteRender] {
        &self.sprites
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameObject for Game {
    fn start(&mut self) -> bool {
        let path = asset_path(MinoKind::I);
        for (i, sprite) in self.sprites.iter_mut().enumerate() {
            sprite.init(path, MINO_BLOCK_SIZE, MINO_BLOCK_SIZE);
            sprite.set_position(Vec3::new(i as f32 * MINO_BLOCK_SIZE, 0.0, 0.0));
            sprite.update();
        }
        true
    }

    fn update(&mut self) {}

    fn render(&self, rc: &mut RenderContext) {
        for sprite in &self.sprites {
            sprite.draw(rc);
        }
    }

    fn name(&self) -> &str {
        "game"
    }
}
