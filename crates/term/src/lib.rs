//! Terminal back end for the frame host.
//!
//! Frame objects fill a [`RenderContext`](crate::core::RenderContext) with
//! world-space draw commands. This crate turns that list into terminal
//! cells ([`SceneView`] into a [`FrameBuffer`]) and flushes the cells with
//! `crossterm` ([`TerminalRenderer`]). Textures are never loaded: a sprite
//! is a block colored by the mino kind its asset path names.

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tetris_stage_core as core;
pub use tetris_stage_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use scene_view::{SceneView, Viewport, WorldBounds};
