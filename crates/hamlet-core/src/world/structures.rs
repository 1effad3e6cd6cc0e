//! Procedural houses
//!
//! Each site receives one house with a randomized box base, a four-sided
//! pyramid roof and an optional chimney. Door and windows are not drawn
//! independently: they are placed from the base dimensions alone.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::rng_trait::WorldRng;
use super::worldgen_config::HouseParams;

/// Roof cone height
const ROOF_HEIGHT: f32 = 1.5;
/// Roof cone radius relative to the longer base side
const ROOF_RADIUS_FACTOR: f32 = 0.7;
/// Four-sided cone, twisted so its faces line up with the walls
const ROOF_SIDES: u32 = 4;
const ROOF_TWIST: f32 = FRAC_PI_4;

const DOOR_SIZE: Vec2 = Vec2::new(0.6, 1.2);
const WINDOW_SIZE: Vec2 = Vec2::new(0.5, 0.5);
/// Centre height of every window
const WINDOW_HEIGHT: f32 = 1.2;
/// Offset of each front window from the door axis
const FRONT_WINDOW_SPACING: f32 = 0.6;
/// Gap between an opening and its wall, avoids z-fighting
const FACE_OFFSET: f32 = 0.01;

const CHIMNEY_SIZE: Vec3 = Vec3::new(0.3, 1.0, 0.3);

/// Wall colour variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseColor {
    Whitewash,
    Tan,
}

impl BaseColor {
    pub fn rgb(self) -> u32 {
        match self {
            BaseColor::Whitewash => 0xE0E0E0,
            BaseColor::Tan => 0xD2B48C,
        }
    }
}

/// Roof colour variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofColor {
    SaddleBrown,
    Brown,
}

impl RoofColor {
    pub fn rgb(self) -> u32 {
        match self {
            RoofColor::SaddleBrown => 0x8B4513,
            RoofColor::Brown => 0xA52A2A,
        }
    }
}

/// Chimney box, placed relative to the house origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chimney {
    pub center: Vec3,
    pub size: Vec3,
}

impl Chimney {
    pub const COLOR: u32 = 0x8B4513;

    /// Sits a third of the way along the width, a quarter into the depth
    fn for_base(width: f32, depth: f32, height: f32) -> Self {
        Self {
            center: Vec3::new(width / 3.0, height + 1.0, depth / 4.0),
            size: CHIMNEY_SIZE,
        }
    }
}

/// One generated house
///
/// `position` is the (x, z) ground coordinate; everything else is in the
/// house's local frame before `yaw` is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSpec {
    pub position: Vec2,
    pub yaw: f32,
    pub base_width: f32,
    pub base_depth: f32,
    pub base_height: f32,
    pub base_color: BaseColor,
    pub roof_color: RoofColor,
    pub chimney: Option<Chimney>,
}

/// Pyramid roof cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roof {
    pub radius: f32,
    pub height: f32,
    pub center_y: f32,
    pub sides: u32,
    /// Rotation relative to the base, independent of the house yaw
    pub twist: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningKind {
    Door,
    Window,
}

/// A flat opening quad on one of the walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub kind: OpeningKind,
    pub center: Vec3,
    pub size: Vec2,
    /// Rotation of the quad about +y; 0 faces +z
    pub yaw: f32,
}

impl Opening {
    pub const DOOR_COLOR: u32 = 0x5D4037;
    pub const WINDOW_COLOR: u32 = 0x90CAF9;
}

/// Door and windows of one house
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Openings {
    pub door: Opening,
    pub front_windows: [Opening; 2],
    pub side_windows: [Opening; 2],
}

impl Openings {
    pub fn iter(&self) -> impl Iterator<Item = &Opening> {
        std::iter::once(&self.door)
            .chain(self.front_windows.iter())
            .chain(self.side_windows.iter())
    }
}

impl HouseSpec {
    pub fn roof(&self) -> Roof {
        Roof {
            radius: self.base_width.max(self.base_depth) * ROOF_RADIUS_FACTOR,
            height: ROOF_HEIGHT,
            center_y: self.base_height + ROOF_HEIGHT / 2.0,
            sides: ROOF_SIDES,
            twist: ROOF_TWIST,
        }
    }

    /// Door centred on the front (+z) face, two windows either side of it,
    /// and one window centred on each side face.
    pub fn openings(&self) -> Openings {
        let front_z = self.base_depth / 2.0 + FACE_OFFSET;
        let side_x = self.base_width / 2.0 + FACE_OFFSET;

        let window = |center: Vec3, yaw: f32| Opening {
            kind: OpeningKind::Window,
            center,
            size: WINDOW_SIZE,
            yaw,
        };

        Openings {
            door: Opening {
                kind: OpeningKind::Door,
                center: Vec3::new(0.0, DOOR_SIZE.y / 2.0, front_z),
                size: DOOR_SIZE,
                yaw: 0.0,
            },
            front_windows: [
                window(Vec3::new(-FRONT_WINDOW_SPACING, WINDOW_HEIGHT, front_z), 0.0),
                window(Vec3::new(FRONT_WINDOW_SPACING, WINDOW_HEIGHT, front_z), 0.0),
            ],
            side_windows: [
                window(Vec3::new(side_x, WINDOW_HEIGHT, 0.0), FRAC_PI_2),
                window(Vec3::new(-side_x, WINDOW_HEIGHT, 0.0), FRAC_PI_2),
            ],
        }
    }

    /// Centre of the base box in local coordinates
    pub fn base_center(&self) -> Vec3 {
        Vec3::new(0.0, self.base_height / 2.0, 0.0)
    }
}

/// Generate one house per site.
///
/// Draw order per house: yaw, width, depth, height, wall colour, roof colour,
/// chimney. An invalid parameter set yields no houses.
pub fn generate_houses<R: WorldRng + ?Sized>(
    sites: &[Vec2],
    params: &HouseParams,
    rng: &mut R,
) -> Vec<HouseSpec> {
    if let Err(e) = params.validate() {
        log::warn!("Skipping house generation: {}", e);
        return Vec::new();
    }

    sites
        .iter()
        .map(|&position| {
            let house = generate_house(position, params, rng);
            log::debug!(
                "House at ({:.1}, {:.1}): {:.2}x{:.2}x{:.2}, chimney: {}",
                position.x,
                position.y,
                house.base_width,
                house.base_depth,
                house.base_height,
                house.chimney.is_some()
            );
            house
        })
        .collect()
}

fn generate_house<R: WorldRng + ?Sized>(
    position: Vec2,
    params: &HouseParams,
    rng: &mut R,
) -> HouseSpec {
    let yaw = rng.gen_span(0.0, TAU);
    let base_width = rng.gen_span(params.width.min, params.width.max);
    let base_depth = rng.gen_span(params.depth.min, params.depth.max);
    let base_height = rng.gen_span(params.height.min, params.height.max);

    let base_color = if rng.gen_bool() {
        BaseColor::Whitewash
    } else {
        BaseColor::Tan
    };
    let roof_color = if rng.gen_bool() {
        RoofColor::SaddleBrown
    } else {
        RoofColor::Brown
    };
    let chimney = rng
        .check_probability(params.chimney_chance)
        .then(|| Chimney::for_base(base_width, base_depth, base_height));

    HouseSpec {
        position,
        yaw,
        base_width,
        base_depth,
        base_height,
        base_color,
        roof_color,
        chimney,
    }
}
