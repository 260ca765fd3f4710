//! Frame engine - the host side of the frame-object protocol
//!
//! This crate provides the pieces that sit between the stage model in
//! `tetris-stage-core` and an output device:
//!
//! - [`object`]: the [`FrameObject`] trait (`start` / `update` / `render`)
//! - [`host`]: [`FrameHost`], which drives objects one frame at a time
//! - [`stage_object`]: the stage manager as a frame object
//! - [`game`]: the game entry object (sample sprites)
//! - [`config`]: environment-driven [`HostConfig`]
//! - [`logging`]: `env_logger` setup
//! - [`dump`]: JSON stage snapshots
//!
//! # Example
//!
//! ```
//! use tetris_stage_engine::{FrameHost, Game, StageManagerObject};
//!
//! let mut host = FrameHost::new();
//! host.spawn(Box::new(Game::new()));
//! host.spawn(Box::new(StageManagerObject::new()));
//!
//! let rc = host.step();
//! // Four sample sprites plus one guide per free stage cell.
//! assert_eq!(rc.sprite_count(), 4);
//! assert_eq!(rc.commands().len(), 4 + 220);
//! ```

pub mod config;
pub mod dump;
pub mod game;
pub mod host;
pub mod logging;
pub mod object;
pub mod stage_object;

pub use tetris_stage_core as core;
pub use tetris_stage_types as types;

pub use config::HostConfig;
pub use dump::{read_stage_json, write_stage_json};
pub use game::Game;
pub use host::{FrameHost, ObjectId};
pub use logging::init_logging;
pub use object::FrameObject;
pub use stage_object::StageManagerObject;
