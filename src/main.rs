//! Kandi Runner headless entry point
//!
//! Runs sessions without a window: frames are drawn onto an in-memory
//! surface and an autopilot holds the jump button. `--realtime` paces the
//! loop with the fixed-delay fallback timer instead of a display refresh.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use kandi_runner::audio::RecordingAudio;
use kandi_runner::consts::FRAME_MS;
use kandi_runner::platform::{Action, InputState, RecordingSurface};
use kandi_runner::sim::GameState;
use kandi_runner::{Session, Tuning};

#[derive(Parser)]
#[command(name = "kandi-runner", about = "Headless endless-runner simulation")]
struct Cli {
    /// RNG seed for the session
    #[arg(short, long, default_value = "42")]
    seed: u64,
    /// Give up on a run after this many frames
    #[arg(short, long, default_value = "20000")]
    ticks: u64,
    /// Number of runs; every run after the first is a restart
    #[arg(short, long, default_value = "1")]
    runs: u32,
    /// JSON tuning file overriding the default balance
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Pace frames at 60 Hz instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut session = Session::new(cli.seed, tuning);
    let mut surface = RecordingSurface::new();
    let mut audio = RecordingAudio::new();
    let frame_delay = Duration::from_secs_f64(FRAME_MS / 1000.0);

    for run in 1..=cli.runs {
        if run == 1 {
            session.start_game(&mut audio);
        } else {
            session.restart(&mut audio);
        }

        let mut input = InputState::new();
        let mut frames = 0;
        let mut result = None;
        while frames < cli.ticks {
            let started = Instant::now();

            input.set(Action::Jump, autopilot(session.state()));
            result = session.frame(&input, &mut surface, &mut audio);
            frames += 1;
            if result.is_some() {
                break;
            }

            if cli.realtime {
                if let Some(rest) = frame_delay.checked_sub(started.elapsed()) {
                    thread::sleep(rest);
                }
            }
        }

        match result {
            Some(report) => println!(
                "run {run} (seed {}): {}m ({:?}) after {frames} frames, top speed {}",
                session.seed(),
                report.score,
                report.cause,
                session.state().player.speed
            ),
            None => println!(
                "run {run} (seed {}): still running at {}m after {frames} frames",
                session.seed(),
                session.score()
            ),
        }
    }

    Ok(())
}

/// Hold jump when the ground ahead drops away or a hazard is close
///
/// Looks one jump's worth of scroll ahead of the avatar's leading edge. Keeps
/// holding while rising so the jump reaches full height.
fn autopilot(state: &GameState) -> bool {
    let player = &state.player;
    if player.dy() < 0.0 {
        return true;
    }

    let body = &player.body;
    let speed = player.speed as f32;
    let feet = body.bottom();
    let look = body.right() + speed * 4.0;

    let ground_ahead = state.platforms.iter().any(|tile| {
        tile.body.pos.x <= look
            && tile.body.right() >= look
            && (tile.body.pos.y - feet).abs() < 16.0
    });
    let hazard_ahead = state.enemies.iter().any(|enemy| {
        let gap = enemy.body.pos.x - body.right();
        gap > 0.0 && gap < speed * 6.0
    });

    !ground_ahead || hazard_ahead
}
