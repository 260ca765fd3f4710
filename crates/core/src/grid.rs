//! Stage grid - the 10x22 playfield
//!
//! Cells live in a flat array in row-major order (`y * WIDTH + x`).
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges
//! 0..21 (bottom to top in world space, since world `y` grows upwards).
//!
//! Every accessor is bounds-checked and reports [`StageError::OutOfBounds`]
//! instead of reading a neighbouring cell.

use std::iter::FusedIterator;
use std::rc::Rc;

use crate::cell::StageCell;
use crate::sprite::SpriteRender;
use crate::types::{StageError, Vec3, STAGE_CELL_COUNT, STAGE_HEIGHT, STAGE_WIDTH};

/// Row-major iterator over every stage coordinate.
///
/// Yields `(x, y)` with `y` as the outer loop and `x` as the inner loop, both
/// ascending. It borrows nothing, so a fresh one (or a clone) restarts the
/// traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCoords {
    next: usize,
}

impl StageCoords {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl Default for StageCoords {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for StageCoords {
    type Item = (i8, i8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= STAGE_CELL_COUNT {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let width = STAGE_WIDTH as usize;
        Some(((i % width) as i8, (i / width) as i8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = STAGE_CELL_COUNT - self.next.min(STAGE_CELL_COUNT);
        (left, Some(left))
    }
}

impl ExactSizeIterator for StageCoords {}

impl FusedIterator for StageCoords {}

/// The playfield: fixed-size, fully populated, never resized.
#[derive(Debug, Clone)]
pub struct StageGrid {
    cells: [StageCell; STAGE_CELL_COUNT],
    origin: Vec3,
    block_size: f32,
}

impl StageGrid {
    /// Create a grid and run setup, so every cell is placed and empty.
    pub fn new(origin: Vec3, block_size: f32) -> Self {
        let mut grid = Self::unplaced(origin, block_size);
        grid.setup();
        grid
    }

    /// Create a grid whose cells all sit at world zero.
    ///
    /// The manager holds one of these until its `start` runs setup.
    pub(crate) fn unplaced(origin: Vec3, block_size: f32) -> Self {
        Self {
            cells: std::array::from_fn(|_| StageCell::default()),
            origin,
            block_size,
        }
    }

    /// Flat index for (x, y), or `None` if out of bounds
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= STAGE_WIDTH as i8 || y < 0 || y >= STAGE_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (STAGE_WIDTH as usize) + (x as usize))
    }

    fn checked_index(x: i8, y: i8) -> Result<usize, StageError> {
        Self::index(x, y).ok_or(StageError::OutOfBounds {
            x: x as i32,
            y: y as i32,
        })
    }

    /// Place every cell and clear its contents.
    ///
    /// This is the only place cell geometry is computed. It walks the grid
    /// in `coords()` order.
    pub fn setup(&mut self) {
        let origin = self.origin;
        let block = self.block_size;
        for (x, y) in StageCoords::new() {
            let position = Vec3::new(
                origin.x + x as f32 * block,
                origin.y + y as f32 * block,
                0.0,
            );
            let idx = (y as usize) * (STAGE_WIDTH as usize) + (x as usize);
            self.cells[idx].reset(position);
        }
    }

    pub fn width(&self) -> u8 {
        STAGE_WIDTH
    }

    pub fn height(&self) -> u8 {
        STAGE_HEIGHT
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> StageCoords {
        StageCoords::new()
    }

    /// Call `visitor(x, y)` for every cell, in `coords()` order.
    pub fn for_each_cell(&self, mut visitor: impl FnMut(i8, i8)) {
        for (x, y) in self.coords() {
            visitor(x, y);
        }
    }

    /// Cell at (x, y)
    pub fn get(&self, x: i8, y: i8) -> Result<&StageCell, StageError> {
        Self::checked_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Mark a cell as occupied (or free).
    pub fn set_blocked(&mut self, x: i8, y: i8, blocked: bool) -> Result<(), StageError> {
        let idx = Self::checked_index(x, y)?;
        self.cells[idx].blocked = blocked;
        Ok(())
    }

    /// Link a sprite to a cell without taking ownership of it.
    pub fn attach_sprite(
        &mut self,
        x: i8,
        y: i8,
        sprite: &Rc<SpriteRender>,
    ) -> Result<(), StageError> {
        let idx = Self::checked_index(x, y)?;
        self.cells[idx].sprite = Some(Rc::downgrade(sprite));
        Ok(())
    }

    /// Remove a cell's sprite link. Returns the sprite if it was still alive.
    pub fn detach_sprite(&mut self, x: i8, y: i8) -> Result<Option<Rc<SpriteRender>>, StageError> {
        let idx = Self::checked_index(x, y)?;
        Ok(self.cells[idx].sprite.take().and_then(|w| w.upgrade()))
    }

    /// Coordinates and cells of every blocked cell, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = ((i8, i8), &StageCell)> + '_ {
        self.coords()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_blocked())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[StageCell] {
        &self.cells
    }
}
