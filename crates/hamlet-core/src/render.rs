//! Boundary between the core and whatever draws the scene

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{CharacterPose, FollowCamera};
use crate::world::SceneLayout;

/// What the core emits once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// 1-based tick number
    pub tick: u64,
    pub pose: CharacterPose,
    pub camera_target: Vec3,
    pub is_moving: bool,
}

/// A renderer materializes the static layout once and then presents one
/// frame per tick. Failures belong to the renderer; the core never sees them.
pub trait SceneRenderer {
    /// Called once before the first tick
    fn build_scene(&mut self, layout: &SceneLayout, camera: &FollowCamera);

    /// Called once per tick
    fn present(&mut self, frame: &FrameOutput);
}
