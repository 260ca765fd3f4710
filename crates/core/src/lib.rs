//! Core stage module - pure, deterministic, and testable
//!
//! This crate holds the playfield data model and everything that touches it
//! per frame. It has **no dependencies** on terminals or any other output
//! device: drawing means pushing commands into a [`RenderContext`].
//!
//! # Module Structure
//!
//! - [`cell`]: a single stage cell (position, occupancy, sprite link)
//! - [`grid`]: the 10x22 stage grid and its row-major coordinate iterator
//! - [`manager`]: the stage manager and the slot that owns it
//! - [`mino`]: mino kind to asset path catalog
//! - [`render`]: the per-frame draw list
//! - [`snapshot`]: serializable copy of the stage
//! - [`sprite`]: sprite resource placed in world space
//!
//! # Example
//!
//! ```
//! use tetris_stage_core::StageManagerSlot;
//! use tetris_stage_core::types::{StageError, STAGE_ORIGIN};
//!
//! let mut slot = StageManagerSlot::new();
//! slot.create_instance();
//! slot.instance_mut().unwrap().start();
//!
//! let cell = slot.instance().unwrap().stage_data(0, 0).unwrap();
//! assert_eq!(cell.position(), STAGE_ORIGIN);
//! assert!(!cell.is_blocked());
//!
//! slot.delete_instance();
//! assert_eq!(slot.instance().unwrap_err(), StageError::ManagerAbsent);
//! ```

pub mod cell;
pub mod grid;
pub mod manager;
pub mod mino;
pub mod render;
pub mod snapshot;
pub mod sprite;

pub use tetris_stage_types as types;

// Re-export commonly used types for convenience
pub use cell::StageCell;
pub use grid::{StageCoords, StageGrid};
pub use manager::{StageManager, StageManagerSlot};
pub use mino::{asset_path, asset_path_for_index, kind_for_asset_path};
pub use render::{DrawCommand, RenderContext};
pub use snapshot::StageSnapshot;
pub use sprite::SpriteRender;
