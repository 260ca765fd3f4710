//! SceneView: rasterizes a frame's draw list into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World space has `y` growing upwards; terminal rows grow downwards. The
//! bounding box of all draw commands is centered in the viewport, so the
//! picture stays put as long as the set of drawn things does.
//!
//! `render_into` does not allocate once the framebuffer has its size.

use std::fmt::Write;

use arrayvec::ArrayString;

use crate::core::{kind_for_asset_path, DrawCommand, RenderContext};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::MINO_BLOCK_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// World-space rectangle covered by a draw list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl WorldBounds {
    /// Bounds of every command, or `None` for an empty list.
    pub fn of(commands: &[DrawCommand]) -> Option<Self> {
        commands.iter().fold(None, |acc, cmd| {
            let p = cmd.position();
            let (w, h) = cmd.extent();
            let b = WorldBounds {
                min_x: p.x,
                min_y: p.y,
                max_x: p.x + w,
                max_y: p.y + h,
            };
            Some(match acc {
                None => b,
                Some(a) => WorldBounds {
                    min_x: a.min_x.min(b.min_x),
                    min_y: a.min_y.min(b.min_y),
                    max_x: a.max_x.max(b.max_x),
                    max_y: a.max_y.max(b.max_y),
                },
            })
        })
    }
}

const BG: Rgb = Rgb::new(30, 30, 40);

pub struct SceneView {
    /// World units per terminal column.
    col_units: f32,
    /// World units per terminal row.
    row_units: f32,
}

impl Default for SceneView {
    fn default() -> Self {
        // One block = 2x1 cells, compensating for the glyph aspect ratio.
        Self::new(MINO_BLOCK_SIZE / 2.0, MINO_BLOCK_SIZE)
    }
}

impl SceneView {
    pub fn new(col_units: f32, row_units: f32) -> Self {
        Self {
            col_units,
            row_units,
        }
    }

    /// Rasterize `rc` into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, rc: &RenderContext, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let Some(bounds) = WorldBounds::of(rc.commands()) else {
            return;
        };

        let cols = self.cols(bounds.max_x - bounds.min_x);
        let rows = self.rows(bounds.max_y - bounds.min_y);
        let left = viewport.width.saturating_sub(cols) / 2;
        let top = viewport.height.saturating_sub(rows) / 2;

        for cmd in rc.commands() {
            let p = cmd.position();
            let (w, h) = cmd.extent();
            let x = left.saturating_add(self.cols(p.x - bounds.min_x));
            let y = top.saturating_add(self.rows(bounds.max_y - (p.y + h)));
            let span_w = self.cols(w).max(1);
            let span_h = self.rows(h).max(1);

            match cmd {
                DrawCommand::Guide { .. } => {
                    let style = CellStyle::plain(Rgb::new(90, 90, 100), BG).dimmed();
                    fb.fill_rect(x, y, span_w, span_h, '·', style);
                }
                DrawCommand::Sprite { asset, .. } => {
                    let (glyph, fg) = match kind_for_asset_path(asset) {
                        Some(kind) => ('█', Rgb::mino(kind)),
                        None => {
                            log::trace!("no mino color for asset {}", asset);
                            ('?', Rgb::new(160, 160, 160))
                        }
                    };
                    let style = CellStyle {
                        bold: true,
                        ..CellStyle::plain(fg, BG)
                    };
                    fb.fill_rect(x, y, span_w, span_h, glyph, style);
                }
            }
        }

        if top > 0 {
            self.draw_status(fb, rc);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, rc: &RenderContext, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(rc, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, rc: &RenderContext) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let mut text = ArrayString::<64>::new();
        // Two u64-sized numbers plus labels fit; a failed write only truncates.
        let _ = write!(text, "FRAME {}  SPRITES {}", rc.frame(), rc.sprite_count());
        fb.put_str(0, 0, &text, label);
    }

    fn cols(&self, world: f32) -> u16 {
        (world / self.col_units).round() as u16
    }

    fn rows(&self, world: f32) -> u16 {
        (world / self.row_units).round() as u16
    }
}
