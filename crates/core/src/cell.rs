//! Stage cell record

use std::rc::{Rc, Weak};

use crate::sprite::SpriteRender;
use crate::types::Vec3;

/// One playfield cell.
///
/// `position` is written only by the grid's setup pass. The sprite link is
/// non-owning: dropping the sprite elsewhere leaves a dead link that reads
/// as "no sprite".
#[derive(Debug, Clone)]
pub struct StageCell {
    position: Vec3,
    pub(crate) blocked: bool,
    pub(crate) sprite: Option<Weak<SpriteRender>>,
}

impl Default for StageCell {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            blocked: false,
            sprite: None,
        }
    }
}

impl StageCell {
    pub(crate) fn reset(&mut self, position: Vec3) {
        self.position = position;
        self.blocked = false;
        self.sprite = None;
    }

    /// World-space placement of the cell.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// True if settled material occupies the cell.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// The referenced sprite, if one is attached and still alive.
    pub fn sprite(&self) -> Option<Rc<SpriteRender>> {
        self.sprite.as_ref().and_then(Weak::upgrade)
    }

    /// True if a live sprite is attached.
    pub fn has_sprite(&self) -> bool {
        self.sprite().is_some()
    }
}
