//! Terminal stage runner (default binary).
//!
//! Drives the frame host at a fixed interval and shows each frame's draw
//! list in the terminal. Quit with `q`, `Esc` or Ctrl-C.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tetris_stage::engine::{init_logging, FrameHost, Game, HostConfig, StageManagerObject};
use tetris_stage::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: could not initialize logger: {:#}", e);
    }
    log::info!("starting with {:?}", config);

    let mut host = build_host(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut host, config.frame_duration());

    // Always try to restore terminal state.
    let _ = term.exit();

    // Dropping the host releases the stage (and writes the dump, if any)
    // after the terminal is back to normal.
    drop(host);
    result
}

fn build_host(config: &HostConfig) -> FrameHost {
    let mut stage = StageManagerObject::new();
    if let Some(path) = &config.dump_path {
        stage = stage.with_dump_path(path.clone());
    }

    let mut host = FrameHost::new();
    host.spawn(Box::new(Game::new()));
    host.spawn(Box::new(stage));
    host
}

fn run(term: &mut TerminalRenderer, host: &mut FrameHost, frame: Duration) -> Result<()> {
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    host.step();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(host.render_context(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    log::info!("quit after {} frames", host.frame());
                    return Ok(());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            host.step();
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
