//! Terminal runner (default binary).
//!
//! Fixed 16 ms timestep: poll crossterm for keys until the next tick, feed the
//! held-key state into the core, log its events, redraw.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use puyo_drop::core::{GameSnapshot, GameState};
use puyo_drop::input::{should_quit, InputHandler};
use puyo_drop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use puyo_drop::types::TICK_MS;
use puyo_drop::{EventLog, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    let mut log = match config.event_log_path.as_deref() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut game = GameState::with_config(config.game_config());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            eprintln!("[Game] event log flush failed: {e:#}");
        }
    }
    match &result {
        Ok(()) => eprintln!(
            "[Game] seed={} pieces={} cells_locked={} phase={}",
            game.config().seed,
            game.pieces_spawned(),
            game.cells_locked(),
            game.phase().as_str()
        ),
        Err(e) => eprintln!("[Game] stopped: {e:#}"),
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    mut log: Option<&mut EventLog<BufWriter<File>>>,
) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new().with_release_events(term.reports_key_release());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    game.start();
    if let Some(log) = log.as_deref_mut() {
        log.record_all(0, &game.take_events())?;
    }

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.handle_press_event(key, now_ms());
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now = now_ms();

            game.tick(now, TICK_MS, input.frame(now))?;

            let events = game.take_events();
            if let Some(log) = log.as_deref_mut() {
                log.record_all(now, &events)?;
            }
        }
    }
}
