//! Orbit camera that keeps its look-at target on the character.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bounds the external orbit controller applies to user rotation and zoom.
///
/// The core only carries these to the renderer; it never clamps the camera
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Largest angle from straight up; keeps the camera above the ground
    pub max_polar_angle: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_distance: 20.0,
            max_polar_angle: FRAC_PI_2 - 0.1,
        }
    }
}

/// Camera follow state.
///
/// `retarget` is called every tick whether or not the character moved, so the
/// target never lags behind the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowCamera {
    /// Height of the look-at point above the character root
    eye_offset: f32,
    target: Vec3,
    /// Initial camera position relative to the character
    start_offset: Vec3,
    limits: OrbitLimits,
}

impl FollowCamera {
    pub const DEFAULT_EYE_OFFSET: f32 = 1.0;
    pub const DEFAULT_START_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

    pub fn new(eye_offset: f32, start_offset: Vec3, limits: OrbitLimits) -> Self {
        Self {
            eye_offset,
            target: Vec3::new(0.0, eye_offset, 0.0),
            start_offset,
            limits,
        }
    }

    /// Point the camera at the character and return the new target
    pub fn retarget(&mut self, character_position: Vec3) -> Vec3 {
        self.target = character_position + Vec3::Y * self.eye_offset;
        self.target
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn eye_offset(&self) -> f32 {
        self.eye_offset
    }

    /// Where the renderer should place the camera before the first tick
    pub fn initial_eye(&self, character_position: Vec3) -> Vec3 {
        Vec3::new(character_position.x, 0.0, character_position.z) + self.start_offset
    }

    pub fn limits(&self) -> &OrbitLimits {
        &self.limits
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_EYE_OFFSET,
            Self::DEFAULT_START_OFFSET,
            OrbitLimits::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retarget_adds_eye_offset() {
        let mut camera = FollowCamera::default();
        let target = camera.retarget(Vec3::new(3.0, 0.5, -2.0));
        assert_eq!(target, Vec3::new(3.0, 1.5, -2.0));
        assert_eq!(camera.target(), target);
    }

    #[test]
    fn test_retarget_is_unconditional() {
        let mut camera = FollowCamera::default();
        let position = Vec3::new(0.0, 0.5, 0.0);
        let first = camera.retarget(position);
        let second = camera.retarget(position);
        assert_eq!(first, second);
    }

    #[test]
    fn test_initial_eye_matches_reference_layout() {
        let camera = FollowCamera::default();
        assert_eq!(
            camera.initial_eye(Vec3::new(0.0, 0.5, 0.0)),
            Vec3::new(0.0, 5.0, 10.0)
        );
    }

    #[test]
    fn test_default_limits() {
        let limits = OrbitLimits::default();
        assert_eq!(limits.min_distance, 5.0);
        assert_eq!(limits.max_distance, 20.0);
        assert!(limits.max_polar_angle < FRAC_PI_2);
    }
}
