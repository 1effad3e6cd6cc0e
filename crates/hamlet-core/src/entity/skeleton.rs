//! Fixed joint hierarchy of the walking figure
//!
//! The figure is a root with four limbs hanging off it. Each limb has a fixed
//! pivot in root space and a single pitch angle; the root carries the world
//! position and yaw. Renderers compose these into whatever transform type
//! they use.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::CharacterPose;

/// Named joints of the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    Root,
    LeftLeg,
    RightLeg,
    LeftArm,
    RightArm,
}

impl Joint {
    pub const ALL: [Joint; 5] = [
        Joint::Root,
        Joint::LeftLeg,
        Joint::RightLeg,
        Joint::LeftArm,
        Joint::RightArm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Joint::Root => "root",
            Joint::LeftLeg => "left_leg",
            Joint::RightLeg => "right_leg",
            Joint::LeftArm => "left_arm",
            Joint::RightArm => "right_arm",
        }
    }

    /// Parent joint, `None` for the root
    pub fn parent(self) -> Option<Joint> {
        match self {
            Joint::Root => None,
            _ => Some(Joint::Root),
        }
    }

    /// Pivot relative to the parent joint
    pub fn pivot(self) -> Vec3 {
        match self {
            Joint::Root => Vec3::ZERO,
            Joint::LeftLeg => Vec3::new(0.25, 0.0, 0.0),
            Joint::RightLeg => Vec3::new(-0.25, 0.0, 0.0),
            Joint::LeftArm => Vec3::new(0.6, 0.8, 0.0),
            Joint::RightArm => Vec3::new(-0.6, 0.8, 0.0),
        }
    }
}

/// Local transform of one joint: translation, yaw about +y, pitch about +x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub joint: Joint,
    pub translation: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

pub struct Skeleton;

impl Skeleton {
    /// Local transforms for every joint, root first
    pub fn local_transforms(pose: &CharacterPose) -> [LocalTransform; 5] {
        Joint::ALL.map(|joint| {
            let (translation, yaw, pitch) = match joint {
                Joint::Root => (pose.position, pose.facing, 0.0),
                Joint::LeftLeg => (joint.pivot(), 0.0, pose.limbs.left_leg),
                Joint::RightLeg => (joint.pivot(), 0.0, pose.limbs.right_leg),
                Joint::LeftArm => (joint.pivot(), 0.0, pose.limbs.left_arm),
                Joint::RightArm => (joint.pivot(), 0.0, pose.limbs.right_arm),
            };
            LocalTransform {
                joint,
                translation,
                yaw,
                pitch,
            }
        })
    }
}
