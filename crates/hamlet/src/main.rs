use anyhow::{Context, bail};
use clap::Parser;
use hamlet::LogRenderer;
use hamlet::config::GameConfig;
use hamlet::driver::{self, DriverOptions};
use hamlet::scenario::{ScenarioDefinition, ScenarioExecutor, ScenarioExecutorConfig};
use hamlet::world::WorldGenConfig;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (random when omitted and not set in config)
    #[arg(long)]
    seed: Option<u64>,

    /// World generation preset: village, forest, empty
    #[arg(long)]
    preset: Option<String>,

    /// Config file to use instead of ./hamlet.ron
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a scripted scenario from a RON file
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Write the scenario report to this RON file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// Directions to hold, comma separated (e.g. up,right)
    #[arg(long, default_value = "")]
    hold: String,

    /// Pace ticks at the configured rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// List available world generation presets
    #[arg(long)]
    list_presets: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Handle --list-presets flag
    if args.list_presets {
        for name in WorldGenConfig::PRESET_NAMES {
            let preset = WorldGenConfig::preset(name)?;
            println!(
                "{:<8} {} houses, {} trees",
                name,
                preset.houses.sites.len(),
                preset.trees.count
            );
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::load()?,
    };
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(preset) = &args.preset {
        config.world.preset = preset.clone();
    }

    if let Some(path) = &args.scenario {
        return run_scenario(&args, config, path);
    }

    let seed = driver::resolve_seed(config.world.seed);
    let worldgen = config.worldgen()?;
    log::info!("Starting Hamlet: preset '{}', seed {}", worldgen.name, seed);

    let mut session = driver::build_session(config.session_params(), worldgen, seed);
    let mut renderer = LogRenderer::new(config.debug.log_every);
    let options = DriverOptions {
        ticks: args.ticks,
        hold: driver::parse_hold(&args.hold)?,
        realtime: args.realtime,
        ticks_per_second: config.world.ticks_per_second,
    };

    let summary = driver::run(&mut session, &mut renderer, &options);
    if let Some(frame) = summary.last_frame {
        let p = frame.pose.position;
        println!(
            "tick {} position ({:.3}, {:.3}, {:.3}) facing {:.3}",
            frame.tick, p.x, p.y, p.z, frame.pose.facing
        );
    }

    Ok(())
}

fn run_scenario(args: &Args, mut config: GameConfig, path: &Path) -> anyhow::Result<()> {
    let scenario = ScenarioDefinition::from_file(path)?;

    // Scenario world settings override config, command line overrides both
    if args.seed.is_none()
        && let Some(seed) = scenario.seed
    {
        config.world.seed = Some(seed);
    }
    if args.preset.is_none()
        && let Some(preset) = &scenario.preset
    {
        config.world.preset = preset.clone();
    }

    let seed = driver::resolve_seed(config.world.seed);
    let mut session = driver::build_session(config.session_params(), config.worldgen()?, seed);
    let mut renderer = LogRenderer::new(config.debug.log_every);

    let mut executor = ScenarioExecutor::with_config(ScenarioExecutorConfig {
        verbose: config.debug.verbose_logging,
    });
    let report = executor
        .execute_scenario(&scenario, &mut session, &mut renderer)
        .with_context(|| format!("Scenario '{}' aborted", scenario.name))?;

    if let Some(report_path) = &args.report {
        report.save_ron(report_path)?;
        log::info!("Report written to {}", report_path.display());
    }

    for failure in &report.verification_failures {
        eprintln!("FAILED: {}", failure.message);
    }
    if !report.passed {
        bail!(
            "Scenario '{}' failed {} of {} verifications",
            scenario.name,
            report.verification_failures.len(),
            scenario.verify.len()
        );
    }

    println!(
        "Scenario '{}' passed ({} ticks)",
        scenario.name, report.ticks_executed
    );
    Ok(())
}
