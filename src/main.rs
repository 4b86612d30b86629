//! Terminal runner (default binary).
//!
//! Drives one `Game` at a fixed timestep: key presses are collected into an
//! intent batch between ticks, and each tick hands the batch plus the elapsed
//! time to the rules engine before redrawing.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameConfig, GameSnapshot};
use blockfall::input::{handle_key_event, is_restart, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Intent, BASE_FALL_INTERVAL_MS, COLUMNS, LINES_PER_LEVEL, ROWS, TICK_MS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Playfield width in cells
    #[arg(long, default_value_t = COLUMNS, value_name = "COLS")]
    columns: u16,

    /// Playfield height in cells
    #[arg(long, default_value_t = ROWS, value_name = "ROWS")]
    rows: u16,

    /// Piece generator seed (defaults to the clock)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Gravity interval at level 1
    #[arg(long, default_value_t = BASE_FALL_INTERVAL_MS, value_name = "MS")]
    fall_ms: u64,

    /// Lines cleared per level-up
    #[arg(long, default_value_t = LINES_PER_LEVEL, value_name = "N")]
    lines_per_level: u32,

    /// Lock the piece as soon as it is hard-dropped
    #[arg(long)]
    hard_drop_locks: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_size(self.columns, self.rows)
            .with_seed(self.seed.unwrap_or_else(clock_seed));
        let base = Duration::from_millis(self.fall_ms);
        config.progression.base_fall_interval = base;
        // A fast start lowers the floor with it.
        config.progression.min_fall_interval = config.progression.min_fall_interval.min(base);
        config.progression.lines_per_level = self.lines_per_level;
        config.lock_on_hard_drop = self.hard_drop_locks;
        config
    }
}

fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let game = Game::new(args.config()).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut intents: Vec<Intent> = Vec::with_capacity(16);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        log::info!(
                            "quit at score {}, level {}",
                            game.score(),
                            game.level()
                        );
                        return Ok(());
                    }
                    if is_restart(key) && game.is_over() {
                        game.restart(clock_seed());
                        intents.clear();
                    } else if let Some(intent) = handle_key_event(key) {
                        intents.push(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            let outcome = game.tick(elapsed, &intents);
            intents.clear();
            if outcome.lines_cleared > 0 {
                log::debug!(
                    "cleared {} line(s) for {} points",
                    outcome.lines_cleared,
                    outcome.score_gained
                );
            }
        }
    }
}
