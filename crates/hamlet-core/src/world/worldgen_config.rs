//! World generation configuration - serializable parameters for the village
//!
//! Captures every tunable of the scenery generators so that layouts can be
//! described as RON presets. The seed is NOT part of the config: same config
//! plus a different seed gives a different village.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete world generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Display name for this configuration
    pub name: String,

    /// Ground plane extent
    pub terrain: TerrainParams,

    /// House sites and dimension ranges
    pub houses: HouseParams,

    /// Tree scatter parameters
    pub trees: TreeParams,
}

/// Flat ground settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Side length of the square ground plane centred on the origin (default: 200)
    pub ground_size: f32,
}

/// Half-open uniform range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..self.max).contains(&value)
    }

    /// Finite and non-inverted
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// House generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseParams {
    /// Ground coordinates (x, z) that each receive one house
    pub sites: Vec<Vec2>,
    /// Base footprint width (default: [2, 4))
    pub width: Span,
    /// Base footprint depth (default: [2, 4))
    pub depth: Span,
    /// Wall height (default: [2, 3))
    pub height: Span,
    /// Probability that a house gets a chimney (default: 0.5)
    pub chimney_chance: f32,
}

/// Tree scatter parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Number of trees to scatter (default: 50)
    pub count: usize,
    /// Half extent of the square spawn area on each axis (default: 90)
    pub spawn_bound: f32,
    /// Trunk height (default: [3, 6))
    pub height: Span,
    /// Probability of a conifer rather than a broadleaf tree (default: 0.5)
    pub conifer_chance: f32,
    /// Fewest stacked cones on a conifer (default: 2)
    pub min_levels: u32,
    /// Most stacked cones on a conifer (default: 4)
    pub max_levels: u32,
}

// ============================================================================
// Default implementations
// ============================================================================

/// The seven house sites of the reference village
pub const VILLAGE_SITES: [Vec2; 7] = [
    Vec2::new(10.0, -30.0),
    Vec2::new(-15.0, -20.0),
    Vec2::new(20.0, -10.0),
    Vec2::new(-25.0, 0.0),
    Vec2::new(30.0, 10.0),
    Vec2::new(-20.0, 20.0),
    Vec2::new(15.0, 30.0),
];

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: "Village".to_string(),
            terrain: TerrainParams::default(),
            houses: HouseParams::default(),
            trees: TreeParams::default(),
        }
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self { ground_size: 200.0 }
    }
}

impl Default for HouseParams {
    fn default() -> Self {
        Self {
            sites: VILLAGE_SITES.to_vec(),
            width: Span::new(2.0, 4.0),
            depth: Span::new(2.0, 4.0),
            height: Span::new(2.0, 3.0),
            chimney_chance: 0.5,
        }
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            count: 50,
            spawn_bound: 90.0,
            height: Span::new(3.0, 6.0),
            conifer_chance: 0.5,
            min_levels: 2,
            max_levels: 4,
        }
    }
}

impl HouseParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_span("houses.width", &self.width)?;
        check_span("houses.depth", &self.depth)?;
        check_span("houses.height", &self.height)?;
        check_chance("houses.chimney_chance", self.chimney_chance)?;
        if let Some(site) = self.sites.iter().find(|site| !site.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "houses.sites",
                reason: format!("site {site} is not finite"),
            });
        }
        Ok(())
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spawn_bound.is_finite() || self.spawn_bound <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "trees.spawn_bound",
                reason: format!("{} is not a positive number", self.spawn_bound),
            });
        }
        check_span("trees.height", &self.height)?;
        check_chance("trees.conifer_chance", self.conifer_chance)?;
        if self.min_levels == 0 || self.min_levels > self.max_levels {
            return Err(ConfigError::Invalid {
                field: "trees.min_levels",
                reason: format!(
                    "level range {}..={} must be non-empty and start at 1 or more",
                    self.min_levels, self.max_levels
                ),
            });
        }
        Ok(())
    }
}

fn check_span(field: &'static str, span: &Span) -> Result<(), ConfigError> {
    if span.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("range [{}, {}) is empty or not finite", span.min, span.max),
        })
    }
}

fn check_chance(field: &'static str, chance: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&chance) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("probability {chance} is outside [0, 1]"),
        })
    }
}

// ============================================================================
// Presets and RON loading
// ============================================================================

impl WorldGenConfig {
    pub const PRESET_NAMES: [&'static str; 3] = ["village", "forest", "empty"];

    /// Look up a named preset
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "village" => Ok(Self::default()),
            "forest" => Ok(Self::preset_forest()),
            "empty" => Ok(Self::preset_empty()),
            _ => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }

    /// Dense woodland around a smaller hamlet
    pub fn preset_forest() -> Self {
        Self {
            name: "Forest".to_string(),
            houses: HouseParams {
                sites: VILLAGE_SITES[..3].to_vec(),
                ..HouseParams::default()
            },
            trees: TreeParams {
                count: 200,
                conifer_chance: 0.8,
                ..TreeParams::default()
            },
            ..Self::default()
        }
    }

    /// Bare ground, useful for movement testing
    pub fn preset_empty() -> Self {
        Self {
            name: "Empty".to_string(),
            houses: HouseParams {
                sites: Vec::new(),
                ..HouseParams::default()
            },
            trees: TreeParams {
                count: 0,
                ..TreeParams::default()
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.terrain.ground_size.is_finite() || self.terrain.ground_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "terrain.ground_size",
                reason: format!("{} is not a positive number", self.terrain.ground_size),
            });
        }
        self.houses.validate()?;
        self.trees.validate()
    }

    /// Parse and validate a RON config
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}
