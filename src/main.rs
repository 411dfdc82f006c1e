//! BLOCKFALL headless driver
//!
//! Plays a seeded game with random inputs, pacing ticks from the speed table
//! the way an interactive front end would.

use anyhow::Context;
use blockfall::{EngineError, Game, GameState, Settings, TickOutcome};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "blockfall", about = "Run a headless falling-block game")]
struct Args {
    /// Piece seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Settings file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sleep the tick interval between ticks
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Input the autoplayer may send before a tick
#[derive(Debug, Clone, Copy)]
enum Input {
    None,
    Left,
    Right,
    Rotate,
    Down,
}

fn random_input(rng: &mut ChaCha8Rng) -> Input {
    match rng.gen_range(0..8) {
        0 | 1 => Input::Left,
        2 | 3 => Input::Right,
        4 => Input::Rotate,
        5 => Input::Down,
        _ => Input::None,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_dir = std::env::temp_dir().join("blockfall");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log dir {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, "blockfall.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blockfall=debug".parse()?),
        )
        .with_ansi(false)
        .init();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => match Settings::load() {
            Err(EngineError::NoConfigDir) => Settings::default(),
            loaded => loaded.context("loading settings")?,
        },
    };
    let seed = args.seed.or(settings.seed).unwrap_or_else(rand::random);
    settings.seed = Some(seed);

    tracing::info!(seed, log = %log_dir.display(), "BLOCKFALL starting up");

    let mut game = Game::from_settings(&settings)?;
    let mut input_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(999));
    let mut interval = settings.speed.interval_for(0);
    let mut ticks = 0u64;

    while game.state() == GameState::Playing && ticks < args.max_ticks {
        match random_input(&mut input_rng) {
            Input::Left => {
                game.move_left();
            }
            Input::Right => {
                game.move_right();
            }
            Input::Rotate => {
                game.rotate();
            }
            Input::Down => {
                game.move_down();
            }
            Input::None => {}
        }

        if let TickOutcome::Locked(report) = game.tick() {
            if report.rows_cleared > 0 {
                tracing::info!(
                    rows = report.rows_cleared,
                    points = report.points_awarded,
                    total = game.score(),
                    "rows cleared"
                );
            }
        }
        ticks += 1;

        // Difficulty follows lines cleared after every update
        let next = settings.speed.interval_for(game.lines_cleared());
        if next != interval {
            tracing::info!(
                lines = game.lines_cleared(),
                interval_ms = next.as_millis() as u64,
                "speed up"
            );
            interval = next;
        }
        if args.realtime {
            std::thread::sleep(interval);
        }
    }

    tracing::info!(ticks, score = game.score(), lines = game.lines_cleared(), "finished");

    let snapshot = game.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.to_ascii());
        println!();
        println!("Seed: {seed}");
        println!("Ticks: {ticks} | Tick interval: {}", format_interval(interval));
        println!("Final Score: {}", game.score());
        println!("Lines: {}", game.lines_cleared());
        if game.is_game_over() {
            println!("Game over");
        }
    }

    Ok(())
}

fn format_interval(interval: Duration) -> String {
    format!("{}ms", interval.as_millis())
}
