//! Per-tick animation: the walk cycle and the follow camera.

mod camera;
mod pose;

pub use camera::{FollowCamera, OrbitLimits};
pub use pose::{AnimationClock, CharacterPose, GaitParams, LimbAngles, PoseAnimator};
