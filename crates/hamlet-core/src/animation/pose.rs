//! Walk-cycle limb animation

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::Character;

/// Gait tuning
///
/// The clock advances by `clock_step` per moving tick, so the walk cycle is
/// tied to the tick rate rather than wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaitParams {
    pub clock_step: f32,
    /// Angular frequency shared by arms and legs
    pub frequency: f32,
    pub leg_amplitude: f32,
    pub arm_amplitude: f32,
}

impl Default for GaitParams {
    fn default() -> Self {
        Self {
            clock_step: 0.1,
            frequency: 0.1,
            leg_amplitude: FRAC_PI_4,
            arm_amplitude: FRAC_PI_6,
        }
    }
}

/// Accumulated moving time; pauses while idle and never runs backwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationClock(f32);

impl AnimationClock {
    pub fn new() -> Self {
        Self(0.0)
    }

    /// Negative steps are ignored
    pub fn advance(&mut self, step: f32) {
        if step > 0.0 {
            self.0 += step;
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Pitch of each limb about its pivot, in radians
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LimbAngles {
    pub left_leg: f32,
    pub right_leg: f32,
    pub left_arm: f32,
    pub right_arm: f32,
}

impl LimbAngles {
    pub const NEUTRAL: LimbAngles = LimbAngles {
        left_leg: 0.0,
        right_leg: 0.0,
        left_arm: 0.0,
        right_arm: 0.0,
    };

    /// Gait angles at a given clock value.
    ///
    /// Legs swing in antiphase, and each arm swings against the leg on its
    /// own side.
    pub fn at(clock: f32, gait: &GaitParams) -> Self {
        let phase = (clock * gait.frequency).sin();
        let leg = phase * gait.leg_amplitude;
        let arm = phase * gait.arm_amplitude;

        Self {
            left_leg: leg,
            right_leg: -leg,
            left_arm: -arm,
            right_arm: arm,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Everything a renderer needs to place the figure for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterPose {
    pub position: Vec3,
    pub facing: f32,
    pub limbs: LimbAngles,
}

impl CharacterPose {
    pub fn new(character: &Character, limbs: LimbAngles) -> Self {
        Self {
            position: character.position,
            facing: character.facing,
            limbs,
        }
    }
}

/// Drives the limb angles from the moving/idle state
#[derive(Debug, Clone, Default)]
pub struct PoseAnimator {
    clock: AnimationClock,
    gait: GaitParams,
}

impl PoseAnimator {
    pub fn new(gait: GaitParams) -> Self {
        Self {
            clock: AnimationClock::new(),
            gait,
        }
    }

    /// Advance one tick.
    ///
    /// Moving ticks step the clock and sample the gait; an idle tick snaps
    /// every limb straight back to neutral and leaves the clock where it is.
    pub fn advance(&mut self, is_moving: bool) -> LimbAngles {
        if !is_moving {
            return LimbAngles::NEUTRAL;
        }

        self.clock.advance(self.gait.clock_step);
        LimbAngles::at(self.clock.value(), &self.gait)
    }

    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    pub fn gait(&self) -> &GaitParams {
        &self.gait
    }
}
