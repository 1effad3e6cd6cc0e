//! Procedural trees
//!
//! Trees are scattered uniformly over a square around the origin with no
//! spacing rules; overlapping trees (and trees inside houses) are accepted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng_trait::WorldRng;
use super::worldgen_config::TreeParams;

/// Trunk height that maps to a scale factor of 1.0
const REFERENCE_HEIGHT: f32 = 4.0;

const TRUNK_TOP_RADIUS: f32 = 0.2;
const TRUNK_BOTTOM_RADIUS: f32 = 0.3;

/// Radius and height of the lowest conifer cone before scaling
const CONE_BASE_SIZE: f32 = 1.5;
/// Per-level shrink of cone radius
const CONE_RADIUS_STEP: f32 = 0.3;
/// Per-level shrink of cone height
const CONE_HEIGHT_STEP: f32 = 0.2;
/// Vertical spacing between cones as a fraction of the cone's own height
const CONE_OVERLAP: f32 = 0.7;

const CROWN_RADIUS: f32 = 1.5;
/// Crown centre above the trunk top, before scaling
const CROWN_LIFT: f32 = 0.5;
const CROWN_STRETCH: f32 = 1.2;

/// Foliage archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foliage {
    /// Stacked cones
    Conifer { levels: u32 },
    /// Single stretched sphere
    Broadleaf,
}

impl Foliage {
    pub fn color(self) -> u32 {
        match self {
            Foliage::Conifer { .. } => 0x2E8B57,
            Foliage::Broadleaf => 0x228B22,
        }
    }
}

/// One generated tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    pub position: Vec2,
    /// Trunk height
    pub height: f32,
    pub foliage: Foliage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trunk {
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub height: f32,
    pub center_y: f32,
}

impl Trunk {
    pub const COLOR: u32 = 0x8B4513;
}

/// A single foliage primitive, positioned relative to the tree origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FoliageShape {
    Cone {
        radius: f32,
        height: f32,
        center_y: f32,
    },
    Sphere {
        radius: f32,
        center_y: f32,
        vertical_stretch: f32,
    },
}

impl TreeSpec {
    /// Size multiplier applied to trunk girth and foliage
    pub fn scale(&self) -> f32 {
        self.height / REFERENCE_HEIGHT
    }

    pub fn trunk(&self) -> Trunk {
        let scale = self.scale();
        Trunk {
            top_radius: TRUNK_TOP_RADIUS * scale,
            bottom_radius: TRUNK_BOTTOM_RADIUS * scale,
            height: self.height,
            center_y: self.height / 2.0,
        }
    }

    /// Foliage primitives, lowest first for conifers
    pub fn foliage_shapes(&self) -> Vec<FoliageShape> {
        let scale = self.scale();
        match self.foliage {
            Foliage::Conifer { levels } => (0..levels)
                .map(|level| {
                    let i = level as f32;
                    let radius = (CONE_BASE_SIZE - i * CONE_RADIUS_STEP) * scale;
                    let height = (CONE_BASE_SIZE - i * CONE_HEIGHT_STEP) * scale;
                    FoliageShape::Cone {
                        radius,
                        height,
                        center_y: self.height - i * height * CONE_OVERLAP,
                    }
                })
                .collect(),
            Foliage::Broadleaf => vec![FoliageShape::Sphere {
                radius: CROWN_RADIUS * scale,
                center_y: self.height + CROWN_LIFT * scale,
                vertical_stretch: CROWN_STRETCH,
            }],
        }
    }
}

/// Scatter `count` trees over `[-bound, bound)` on both axes.
///
/// Draw order per tree: x, z, height, archetype, then level count for
/// conifers. A non-positive or non-finite bound, or invalid params, yields
/// no trees.
pub fn generate_trees<R: WorldRng + ?Sized>(
    count: usize,
    bound: f32,
    params: &TreeParams,
    rng: &mut R,
) -> Vec<TreeSpec> {
    if !bound.is_finite() || bound <= 0.0 {
        log::warn!("Skipping tree generation: spawn bound {} is invalid", bound);
        return Vec::new();
    }
    if let Err(e) = params.validate() {
        log::warn!("Skipping tree generation: {}", e);
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let x = rng.gen_span(-bound, bound);
            let z = rng.gen_span(-bound, bound);
            let height = rng.gen_span(params.height.min, params.height.max);
            let foliage = if rng.check_probability(params.conifer_chance) {
                Foliage::Conifer {
                    levels: rng.gen_inclusive(params.min_levels, params.max_levels),
                }
            } else {
                Foliage::Broadleaf
            };

            log::trace!("Tree at ({:.1}, {:.1}): {:?}", x, z, foliage);

            TreeSpec {
                position: Vec2::new(x, z),
                height,
                foliage,
            }
        })
        .collect()
}
