//! Tetris stage (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can write `tetris_stage::{core, engine, term, types}`.

pub use tetris_stage_core as core;
pub use tetris_stage_engine as engine;
pub use tetris_stage_term as term;
pub use tetris_stage_types as types;
