//! Headless tick driver
//!
//! Builds a session from a seed and tunables, holds a fixed set of
//! directions, and ticks it a given number of times. With `realtime` set the
//! loop sleeps between ticks to approximate a display's refresh rate.

use std::time::Duration;

use anyhow::{Result, bail};
use hamlet_core::entity::Direction;
use hamlet_core::render::{FrameOutput, SceneRenderer};
use hamlet_core::world::{Session, SessionParams, WorldGenConfig, WorldGenerator};
use web_time::Instant;

/// How to run the session
#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub ticks: u64,
    /// Directions held for the whole run
    pub hold: Vec<Direction>,
    /// Sleep between ticks to match `ticks_per_second`
    pub realtime: bool,
    pub ticks_per_second: u32,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            ticks: 600,
            hold: Vec::new(),
            realtime: false,
            ticks_per_second: 60,
        }
    }
}

/// Outcome of a driver run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks: u64,
    pub last_frame: Option<FrameOutput>,
    pub elapsed: Duration,
}

/// Parse a comma-separated direction list such as `up,right`
pub fn parse_hold(list: &str) -> Result<Vec<Direction>> {
    let mut hold = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match Direction::from_name(name) {
            Some(direction) if !hold.contains(&direction) => hold.push(direction),
            Some(_) => {}
            None => bail!("Unknown direction '{}' (expected up, down, left or right)", name),
        }
    }
    Ok(hold)
}

/// Resolve the seed: a fixed one wins, otherwise draw from entropy
pub fn resolve_seed(fixed: Option<u64>) -> u64 {
    match fixed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            log::info!("No seed given, using {}", seed);
            seed
        }
    }
}

/// Generate the scenery and build a session around it
pub fn build_session(params: SessionParams, worldgen: WorldGenConfig, seed: u64) -> Session {
    let layout = WorldGenerator::with_config(seed, worldgen).generate();
    Session::new(params, layout)
}

/// Run the session for `options.ticks` ticks, presenting every frame
pub fn run<R: SceneRenderer + ?Sized>(
    session: &mut Session,
    renderer: &mut R,
    options: &DriverOptions,
) -> RunSummary {
    let start = Instant::now();
    let tick_interval = Duration::from_secs_f64(1.0 / f64::from(options.ticks_per_second.max(1)));

    session.build_scene(renderer);
    for &direction in &options.hold {
        session.press(direction);
    }

    log::info!(
        "Running {} ticks holding {:?}{}",
        options.ticks,
        options.hold,
        if options.realtime { " (realtime)" } else { "" }
    );

    let mut last_frame = None;
    for _ in 0..options.ticks {
        let tick_start = Instant::now();
        last_frame = Some(session.tick_and_present(renderer));

        if options.realtime {
            let spent = tick_start.elapsed();
            if spent < tick_interval {
                std::thread::sleep(tick_interval - spent);
            }
        }
    }

    let elapsed = start.elapsed();
    if let Some(frame) = &last_frame {
        log::info!(
            "Finished after {} ticks in {:.1}ms at {:?}",
            frame.tick,
            elapsed.as_secs_f64() * 1000.0,
            frame.pose.position
        );
    }

    RunSummary {
        ticks: options.ticks,
        last_frame,
        elapsed,
    }
}
