//! Terminal scene tests over a full host frame

use tetris_stage::engine::{FrameHost, Game, StageManagerObject};
use tetris_stage::term::{changed_runs, FrameBuffer, SceneView, Viewport};

fn first_frame() -> FrameHost {
    let mut host = FrameHost::new();
    host.spawn(Box::new(Game::new()));
    host.spawn(Box::new(StageManagerObject::new()));
    host.step();
    host
}

fn glyph_rows(fb: &FrameBuffer, glyph: char) -> Vec<u16> {
    (0..fb.height())
        .filter(|&y| (0..fb.width()).any(|x| fb.get(x, y).map(|c| c.ch) == Some(glyph)))
        .collect()
}

fn glyph_count(fb: &FrameBuffer, glyph: char) -> usize {
    fb.cells().iter().filter(|c| c.ch == glyph).count()
}

#[test]
fn test_full_frame_shows_stage_guides_and_game_sprites() {
    let host = first_frame();
    let fb = SceneView::default().render(host.render_context(), Viewport::new(40, 30));

    // 220 cells, two columns each.
    assert_eq!(glyph_count(&fb, '·'), 440);
    // Four sprites, two columns each.
    assert_eq!(glyph_count(&fb, '█'), 8);

    assert_eq!(glyph_rows(&fb, '·').len(), 22);
    assert_eq!(glyph_rows(&fb, '█').len(), 1);
}

#[test]
fn test_sample_row_sits_below_the_stage() {
    let host = first_frame();
    let fb = SceneView::default().render(host.render_context(), Viewport::new(40, 30));

    let lowest_stage_row = glyph_rows(&fb, '·').into_iter().max().unwrap();
    let sprite_row = glyph_rows(&fb, '█')[0];
    assert!(sprite_row > lowest_stage_row);
}

#[test]
fn test_status_line_reports_frame_and_sprites() {
    let mut host = first_frame();
    host.step();
    host.step();
    let fb = SceneView::default().render(host.render_context(), Viewport::new(40, 30));
    assert!(fb.row_text(0).starts_with("FRAME 3  SPRITES 4"));
}

#[test]
fn test_steady_frames_only_change_the_status_line() {
    let mut host = first_frame();
    let view = SceneView::default();
    let viewport = Viewport::new(40, 30);

    let before = view.render(host.render_context(), viewport);
    host.step();
    let after = view.render(host.render_context(), viewport);

    let runs = changed_runs(&before, &after);
    assert!(!runs.is_empty());
    assert!(runs.iter().all(|run| run.y == 0));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let host = first_frame();
    let view = SceneView::default();
    for (w, h) in [(0, 0), (1, 1), (3, 2), (80, 1)] {
        let fb = view.render(host.render_context(), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
