//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace:
//! stage dimensions and geometry, the mino kinds, and the precondition error
//! type. Nothing here performs I/O.
//!
//! # Stage Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21)
//! - **Block size**: 30 world units per block edge
//! - **Origin**: world position of cell (0, 0), `(-45, 50, 0)`
//!
//! Cell `(x, y)` sits at `origin + (x * block, y * block, 0)`. World `y`
//! grows upwards.
//!
//! # Examples
//!
//! ```
//! use tetris_stage_types::{MinoKind, STAGE_HEIGHT, STAGE_WIDTH};
//!
//! let kind = MinoKind::from_str("t").unwrap();
//! assert_eq!(kind, MinoKind::T);
//! assert_eq!(kind.letter(), 'T');
//!
//! assert_eq!(STAGE_WIDTH, 10);
//! assert_eq!(STAGE_HEIGHT, 22);
//! ```

use std::fmt;

/// World-space coordinate used for sprite and cell placement.
pub type Vec3 = cgmath::Vector3<f32>;

/// Stage width in cells (10 columns)
pub const STAGE_WIDTH: u8 = 10;

/// Stage height in cells (22 rows, two above the visible 20)
pub const STAGE_HEIGHT: u8 = 22;

/// Total number of cells in the stage
pub const STAGE_CELL_COUNT: usize = (STAGE_WIDTH as usize) * (STAGE_HEIGHT as usize);

/// Edge length of one mino block in world units
pub const MINO_BLOCK_SIZE: f32 = 30.0;

/// World position of stage cell (0, 0)
pub const STAGE_ORIGIN: Vec3 = Vec3 {
    x: -45.0,
    y: 50.0,
    z: 0.0,
};

/// Directory holding one texture per mino kind
pub const MINO_ASSET_DIR: &str = "Assets/spriteData/mino";

/// Default host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Number of sample sprites drawn by the game entry object
pub const SAMPLE_SPRITE_COUNT: usize = 4;

/// The seven mino (tetromino) kinds
///
/// Declaration order matches the numeric encoding used by the asset table:
/// I=0, O=1, J=2, L=3, S=4, Z=5, T=6. "No mino" is `Option::<MinoKind>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinoKind {
    I,
    O,
    J,
    L,
    S,
    Z,
    T,
}

impl MinoKind {
    /// All kinds in table order
    pub const ALL: [MinoKind; 7] = [
        MinoKind::I,
        MinoKind::O,
        MinoKind::J,
        MinoKind::L,
        MinoKind::S,
        MinoKind::Z,
        MinoKind::T,
    ];

    /// Number of valid kinds
    pub const COUNT: usize = 7;

    /// Raw encoding of the "no mino" sentinel
    pub const NONE_INDEX: i32 = -1;

    /// Table index of this kind
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a raw table index
    ///
    /// Returns `None` for the sentinel (`-1`) and anything outside `0..7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stage_types::MinoKind;
    ///
    /// assert_eq!(MinoKind::from_index(0), Some(MinoKind::I));
    /// assert_eq!(MinoKind::from_index(6), Some(MinoKind::T));
    /// assert_eq!(MinoKind::from_index(MinoKind::NONE_INDEX), None);
    /// assert_eq!(MinoKind::from_index(7), None);
    /// ```
    pub fn from_index(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parse mino kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let [b] = s.as_bytes() else {
            return None;
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.letter() as u8 == b.to_ascii_uppercase())
    }

    /// Uppercase letter, as used in asset file names
    pub fn letter(&self) -> char {
        match self {
            MinoKind::I => 'I',
            MinoKind::O => 'O',
            MinoKind::J => 'J',
            MinoKind::L => 'L',
            MinoKind::S => 'S',
            MinoKind::Z => 'Z',
            MinoKind::T => 'T',
        }
    }
}

/// Precondition violations reported by stage operations
///
/// None of these are I/O failures; each one means a caller broke an access
/// contract and gets a value back instead of a stale or undefined read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// Coordinates outside `0..STAGE_WIDTH` x `0..STAGE_HEIGHT`
    OutOfBounds { x: i32, y: i32 },
    /// The stage manager slot holds no instance
    ManagerAbsent,
    /// The stage manager exists but `start` has not run setup yet
    NotSetUp,
    /// Raw mino index that names no kind (including the `-1` sentinel)
    UnknownMino(i32),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::OutOfBounds { x, y } => write!(
                f,
                "stage coordinate ({}, {}) is outside {}x{}",
                x, y, STAGE_WIDTH, STAGE_HEIGHT
            ),
            StageError::ManagerAbsent => write!(f, "stage manager instance does not exist"),
            StageError::NotSetUp => write!(f, "stage data has not been set up"),
            StageError::UnknownMino(raw) => write!(f, "no mino kind for index {}", raw),
        }
    }
}

impl std::error::Error for StageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_geometry_defaults() {
        assert_eq!(STAGE_CELL_COUNT, 220);
        assert_eq!(MINO_BLOCK_SIZE, 30.0);
        assert_eq!(STAGE_ORIGIN, Vec3::new(-45.0, 50.0, 0.0));
    }

    #[test]
    fn mino_index_roundtrip_follows_table_order() {
        for (i, kind) in MinoKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(MinoKind::from_index(i as i32), Some(*kind));
        }
        assert_eq!(MinoKind::ALL.len(), MinoKind::COUNT);
    }

    #[test]
    fn mino_from_str_is_case_insensitive() {
        assert_eq!(MinoKind::from_str("L"), Some(MinoKind::L));
        assert_eq!(MinoKind::from_str("l"), Some(MinoKind::L));
        assert_eq!(MinoKind::from_str("none"), None);
        assert_eq!(MinoKind::from_str(""), None);
        assert_eq!(MinoKind::from_str("tt"), None);
        assert_eq!(MinoKind::from_str("x"), None);
    }

    #[test]
    fn stage_error_messages() {
        assert_eq!(
            StageError::OutOfBounds { x: 10, y: 0 }.to_string(),
            "stage coordinate (10, 0) is outside 10x22"
        );
        assert_eq!(
            StageError::UnknownMino(-1).to_string(),
            "no mino kind for index -1"
        );
    }
}
