use serde::{Deserialize, Serialize};

use crate::grid::StageGrid;
use crate::types::{STAGE_HEIGHT, STAGE_WIDTH};

const W: usize = STAGE_WIDTH as usize;
const H: usize = STAGE_HEIGHT as usize;

/// Plain-data copy of the stage, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub width: u8,
    pub height: u8,
    pub origin: [f32; 3],
    pub block_size: f32,
    pub blocked: [[bool; W]; H],
    pub sprites: [[bool; W]; H],
    pub frames: u64,
    /// FNV-1a 64 over `blocked`, row-major, one byte per cell.
    pub cells_hash: u64,
}

impl StageSnapshot {
    pub fn capture(grid: &StageGrid, frames: u64) -> Self {
        let mut blocked = [[false; W]; H];
        let mut sprites = [[false; W]; H];
        for ((x, y), cell) in grid.coords().zip(grid.cells()) {
            blocked[y as usize][x as usize] = cell.is_blocked();
            sprites[y as usize][x as usize] = cell.has_sprite();
        }
        let origin = grid.origin();
        Self {
            width: grid.width(),
            height: grid.height(),
            origin: [origin.x, origin.y, origin.z],
            block_size: grid.block_size(),
            cells_hash: cells_hash(&blocked),
            blocked,
            sprites,
            frames,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.blocked.iter().flatten().filter(|b| **b).count()
    }
}

/// Stable 64-bit FNV-1a over the blocked flags.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions, so
/// the hash is spelled out.
pub fn cells_hash(blocked: &[[bool; W]; H]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut h = OFFSET_BASIS;
    for &b in blocked.iter().flatten() {
        h ^= b as u64;
        h = h.wrapping_mul(PRIME);
    }
    h
}
