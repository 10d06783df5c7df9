//! Terminal tile puzzle runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from `term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use tui_tiles::app::App;
use tui_tiles::config::AppConfig;
use tui_tiles::input::{translate_event, InputEvent};
use tui_tiles::logging;
use tui_tiles::store::FileScoreStore;
use tui_tiles::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_tiles::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: AppConfig) -> Result<()> {
    let store = FileScoreStore::new(config.scores_dir.clone());
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, store, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        // Clock first, then input, so a click never lands after the timer expired.
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;
        app.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));

        app.render_into(&mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            // Drain everything that is already queued before the next frame.
            loop {
                let ev = event::read()?;
                if let Some(input) = translate_event(&ev) {
                    if let InputEvent::Resize { .. } = input {
                        term.invalidate();
                    }
                    app.handle_event(input);
                }
                if app.should_quit() || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }

    Ok(())
}
