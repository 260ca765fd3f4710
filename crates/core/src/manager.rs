//! Stage manager - owns the stage grid and drives it per frame
//!
//! There is no global instance. A [`StageManagerSlot`] holds at most one
//! manager and is owned by whoever drives the frame loop (normally the
//! stage frame object), so independent slots can coexist in tests.
//!
//! # Lifecycle
//!
//! ```text
//! slot.create_instance()   -> manager exists, grid unplaced
//! manager.start()          -> setup runs (exactly once)
//! manager.update()         -> every frame
//! manager.render(rc)       -> every frame, after update
//! slot.delete_instance()   -> manager and grid released
//! ```
//!
//! Neither the slot nor the manager is reentrant; both assume the single
//! frame-loop thread. The `Rc`-based sprite links make them `!Send`.

use crate::cell::StageCell;
use crate::grid::StageGrid;
use crate::render::RenderContext;
use crate::snapshot::StageSnapshot;
use crate::types::{StageError, Vec3, MINO_BLOCK_SIZE, STAGE_ORIGIN};

#[derive(Debug)]
pub struct StageManager {
    grid: StageGrid,
    started: bool,
    frames: u64,
}

impl StageManager {
    /// Manager for the standard stage geometry.
    pub fn new() -> Self {
        Self::with_geometry(STAGE_ORIGIN, MINO_BLOCK_SIZE)
    }

    pub fn with_geometry(origin: Vec3, block_size: f32) -> Self {
        Self {
            grid: StageGrid::unplaced(origin, block_size),
            started: false,
            frames: 0,
        }
    }

    /// Run stage setup. Later calls are no-ops.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.grid.setup();
        self.started = true;
        log::debug!(
            "stage set up: {}x{} cells from ({}, {})",
            self.grid.width(),
            self.grid.height(),
            self.grid.origin().x,
            self.grid.origin().y
        );
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        if !self.started {
            return;
        }
        self.frames += 1;
    }

    /// Draw the stage: a guide for each free cell, the linked sprite for
    /// each blocked one.
    pub fn render(&self, rc: &mut RenderContext) {
        if !self.started {
            return;
        }
        let block = self.grid.block_size();
        for cell in self.grid.cells() {
            if !cell.is_blocked() {
                rc.draw_guide(cell.position(), block);
                continue;
            }
            match cell.sprite() {
                Some(sprite) => sprite.draw_at(rc, cell.position()),
                None => log::trace!("blocked cell at {:?} has no live sprite", cell.position()),
            }
        }
    }

    /// Read-only view of cell (x, y).
    pub fn stage_data(&self, x: i8, y: i8) -> Result<&StageCell, StageError> {
        if !self.started {
            return Err(StageError::NotSetUp);
        }
        self.grid.get(x, y)
    }

    pub fn grid(&self) -> &StageGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut StageGrid {
        &mut self.grid
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Frames advanced since `start`.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot::capture(&self.grid, self.frames)
    }
}

impl Default for StageManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Holder for at most one [`StageManager`].
///
/// Creation and deletion are explicit and idempotent. Access to an empty
/// slot reports [`StageError::ManagerAbsent`]; nothing is created
/// implicitly.
#[derive(Debug, Default)]
pub struct StageManagerSlot {
    instance: Option<StageManager>,
}

impl StageManagerSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Create the manager if the slot is empty.
    pub fn create_instance(&mut self) {
        if self.instance.is_some() {
            return;
        }
        self.instance = Some(StageManager::new());
        log::debug!("stage manager created");
    }

    pub fn instance(&self) -> Result<&StageManager, StageError> {
        self.instance.as_ref().ok_or(StageError::ManagerAbsent)
    }

    pub fn instance_mut(&mut self) -> Result<&mut StageManager, StageError> {
        self.instance.as_mut().ok_or(StageError::ManagerAbsent)
    }

    /// Release the manager (and its grid) if present.
    pub fn delete_instance(&mut self) {
        if self.instance.take().is_some() {
            log::debug!("stage manager deleted");
        }
    }

    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }
}
