//! # Hamlet core
//!
//! Locomotion, gait animation and procedural scenery for a small walkable
//! village. Rendering, windowing and raw input wiring live outside this crate;
//! the core consumes directional edges and emits poses, camera targets and a
//! static scene layout.

pub mod animation;
pub mod entity;
pub mod error;
pub mod render;
pub mod world;

pub use error::{ConfigError, ParseEdgeError};

/// Common imports for hosts driving a session
pub mod prelude {
    pub use crate::animation::{CharacterPose, FollowCamera, LimbAngles};
    pub use crate::entity::{Direction, InputEdge, InputState};
    pub use crate::render::{FrameOutput, SceneRenderer};
    pub use crate::world::{SceneLayout, Session, SessionParams, WorldGenConfig, WorldGenerator};
    pub use glam::{Vec2, Vec3};
}
