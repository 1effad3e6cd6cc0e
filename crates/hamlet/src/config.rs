//! Host configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `hamlet.ron` file (if exists)
//! 3. Environment variables prefixed with `HAMLET_`
//!
//! Example environment variable: `HAMLET_PLAYER__WALK_SPEED=0.1`

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
use std::path::Path;

use anyhow::{Context, Result, bail};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use glam::Vec3;
use hamlet_core::animation::{GaitParams, OrbitLimits};
use hamlet_core::world::{SessionParams, WorldGenConfig};
use serde::{Deserialize, Serialize};

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub gait: GaitConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Character movement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Distance per tick on each held axis
    pub walk_speed: f32,
    /// Height of the character root above the ground
    pub spawn_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 0.05,
            spawn_height: 0.5,
        }
    }
}

/// Walk-cycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaitConfig {
    /// Clock advance per moving tick
    pub clock_step: f32,
    pub frequency: f32,
    /// Peak leg swing in radians
    pub leg_amplitude: f32,
    /// Peak arm swing in radians
    pub arm_amplitude: f32,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            clock_step: 0.1,
            frequency: 0.1,
            leg_amplitude: FRAC_PI_4,
            arm_amplitude: FRAC_PI_6,
        }
    }
}

/// Follow camera and orbit bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Look-at height above the character root
    pub eye_offset: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Largest angle from straight up, in radians
    pub max_polar_angle: f32,
    /// Initial camera height above the character
    pub start_height: f32,
    /// Initial camera distance behind the character
    pub start_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_offset: 1.0,
            min_distance: 5.0,
            max_distance: 20.0,
            max_polar_angle: FRAC_PI_2 - 0.1,
            start_height: 5.0,
            start_distance: 10.0,
        }
    }
}

/// World generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Fixed seed; a random one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Named world generation preset
    pub preset: String,
    /// Tick rate used when pacing in real time
    pub ticks_per_second: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            preset: "village".to_string(),
            ticks_per_second: 60,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log one frame summary every this many ticks (0 disables)
    pub log_every: u64,
    /// Enable verbose scenario logging
    pub verbose_logging: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_every: 60,
            verbose_logging: false,
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `hamlet.ron` file (if exists)
    /// 3. Environment variables prefixed with `HAMLET_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("hamlet")
                    .format(FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (HAMLET_PLAYER__WALK_SPEED, etc.)
            .add_source(Self::environment());

        Self::finish(builder)
    }

    /// Load with an explicit config file in place of `hamlet.ron`; the file
    /// must exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        let builder = Self::defaults()?
            .add_source(File::from(path).format(FileFormat::Ron).required(true))
            .add_source(Self::environment());

        Self::finish(builder)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// `HAMLET_` then `__` between nesting levels. The prefix separator must be
    /// set on its own, otherwise it follows `separator` and becomes `__` too.
    fn environment() -> Environment {
        Environment::with_prefix("HAMLET")
            .prefix_separator("_")
            .separator("__")
    }

    /// Layer 1: compiled defaults
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let d = GameConfig::default();

        let builder = Config::builder()
            .set_default("player.walk_speed", f64::from(d.player.walk_speed))?
            .set_default("player.spawn_height", f64::from(d.player.spawn_height))?
            .set_default("gait.clock_step", f64::from(d.gait.clock_step))?
            .set_default("gait.frequency", f64::from(d.gait.frequency))?
            .set_default("gait.leg_amplitude", f64::from(d.gait.leg_amplitude))?
            .set_default("gait.arm_amplitude", f64::from(d.gait.arm_amplitude))?
            .set_default("camera.eye_offset", f64::from(d.camera.eye_offset))?
            .set_default("camera.min_distance", f64::from(d.camera.min_distance))?
            .set_default("camera.max_distance", f64::from(d.camera.max_distance))?
            .set_default("camera.max_polar_angle", f64::from(d.camera.max_polar_angle))?
            .set_default("camera.start_height", f64::from(d.camera.start_height))?
            .set_default("camera.start_distance", f64::from(d.camera.start_distance))?
            .set_default("world.preset", d.world.preset)?
            .set_default("world.ticks_per_second", i64::from(d.world.ticks_per_second))?
            .set_default("debug.log_every", d.debug.log_every as i64)?
            .set_default("debug.verbose_logging", d.debug.verbose_logging)?;

        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build().context("Failed to build configuration")?;

        let game_config: GameConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        game_config.validate()?;
        Ok(game_config)
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.player.walk_speed.is_finite() || self.player.walk_speed < 0.0 {
            bail!(
                "player.walk_speed must be a non-negative number, got {}",
                self.player.walk_speed
            );
        }
        if self.camera.min_distance > self.camera.max_distance {
            bail!(
                "camera.min_distance ({}) exceeds camera.max_distance ({})",
                self.camera.min_distance,
                self.camera.max_distance
            );
        }
        if self.world.ticks_per_second == 0 {
            bail!("world.ticks_per_second must be at least 1");
        }
        Ok(())
    }

    /// Session tunables described by this configuration
    pub fn session_params(&self) -> SessionParams {
        SessionParams {
            walk_speed: self.player.walk_speed,
            spawn_position: Vec3::new(0.0, self.player.spawn_height, 0.0),
            gait: GaitParams {
                clock_step: self.gait.clock_step,
                frequency: self.gait.frequency,
                leg_amplitude: self.gait.leg_amplitude,
                arm_amplitude: self.gait.arm_amplitude,
            },
            eye_offset: self.camera.eye_offset,
            camera_start_offset: Vec3::new(
                0.0,
                self.camera.start_height,
                self.camera.start_distance,
            ),
            orbit: OrbitLimits {
                min_distance: self.camera.min_distance,
                max_distance: self.camera.max_distance,
                max_polar_angle: self.camera.max_polar_angle,
            },
        }
    }

    /// World generation preset named by `world.preset`
    pub fn worldgen(&self) -> Result<WorldGenConfig> {
        WorldGenConfig::preset(&self.world.preset)
            .with_context(|| format!("Invalid world.preset '{}'", self.world.preset))
    }
}
