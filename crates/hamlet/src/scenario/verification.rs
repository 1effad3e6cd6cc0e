//! Verification conditions and state checks for scenarios

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use hamlet_core::world::Session;
use serde::{Deserialize, Serialize};

/// Conditions that can be verified against session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerificationCondition {
    // === CHARACTER CHECKS ===
    /// Assert planar character position (with tolerance)
    CharacterPosition { x: f32, z: f32, tolerance: f32 },

    /// Assert facing angle in radians, compared modulo a full turn
    Facing { radians: f32, tolerance: f32 },

    /// Held keys resolve to no movement
    Idle,

    /// Held keys resolve to movement
    Moving,

    /// Camera look-at point sits on the character
    CameraOnCharacter { tolerance: f32 },

    // === SCENERY CHECKS ===
    HouseCount { expected: usize },

    TreeCount { expected: usize },

    // === LOGICAL OPERATORS ===
    /// All conditions must pass
    All {
        conditions: Vec<VerificationCondition>,
    },

    /// Any condition must pass
    Any {
        conditions: Vec<VerificationCondition>,
    },

    /// Condition must NOT pass
    Not {
        condition: Box<VerificationCondition>,
    },
}

/// Result of a verification check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub passed: bool,
    pub message: String,
    pub actual_value: Option<String>, // For debugging
}

/// Smallest signed difference between two angles
fn angle_between(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI { diff - TAU } else { diff }
}

impl VerificationCondition {
    /// Evaluate condition against session state
    pub fn evaluate(&self, session: &Session) -> VerificationResult {
        match self {
            VerificationCondition::CharacterPosition { x, z, tolerance } => {
                let pos = session.character().position;
                let dist = ((pos.x - x).powi(2) + (pos.z - z).powi(2)).sqrt();
                let passed = dist <= *tolerance;

                VerificationResult {
                    passed,
                    message: format!(
                        "Character position: expected ({}, {}) ±{}, got ({:.3}, {:.3}), distance {:.3}",
                        x, z, tolerance, pos.x, pos.z, dist
                    ),
                    actual_value: Some(format!("({:.3}, {:.3})", pos.x, pos.z)),
                }
            }

            VerificationCondition::Facing { radians, tolerance } => {
                let facing = session.character().facing;
                let diff = angle_between(facing, *radians).abs();
                let passed = diff <= *tolerance;

                VerificationResult {
                    passed,
                    message: format!(
                        "Facing: expected {:.3} ±{}, got {:.3}",
                        radians, tolerance, facing
                    ),
                    actual_value: Some(format!("{:.3}", facing)),
                }
            }

            VerificationCondition::Idle => {
                let moving = session.input().is_moving();
                VerificationResult {
                    passed: !moving,
                    message: format!("Character idle: {}", !moving),
                    actual_value: Some(format!("{:?}", session.input())),
                }
            }

            VerificationCondition::Moving => {
                let moving = session.input().is_moving();
                VerificationResult {
                    passed: moving,
                    message: format!("Character moving: {}", moving),
                    actual_value: Some(format!("{:?}", session.input())),
                }
            }

            VerificationCondition::CameraOnCharacter { tolerance } => {
                let camera = session.camera();
                let expected = session.character().position + Vec3::Y * camera.eye_offset();
                let dist = camera.target().distance(expected);
                let passed = dist <= *tolerance;

                VerificationResult {
                    passed,
                    message: format!(
                        "Camera target: expected {:?} ±{}, got {:?}",
                        expected,
                        tolerance,
                        camera.target()
                    ),
                    actual_value: Some(format!("{:.3}", dist)),
                }
            }

            VerificationCondition::HouseCount { expected } => {
                let actual = session.layout().houses.len();
                VerificationResult {
                    passed: actual == *expected,
                    message: format!("House count: expected {}, got {}", expected, actual),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::TreeCount { expected } => {
                let actual = session.layout().trees.len();
                VerificationResult {
                    passed: actual == *expected,
                    message: format!("Tree count: expected {}, got {}", expected, actual),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::All { conditions } => {
                let results: Vec<_> = conditions.iter().map(|c| c.evaluate(session)).collect();
                let failed: Vec<_> = results.iter().filter(|r| !r.passed).collect();

                VerificationResult {
                    passed: failed.is_empty(),
                    message: format!(
                        "All ({} conditions): {} passed, {} failed",
                        results.len(),
                        results.len() - failed.len(),
                        failed.len()
                    ),
                    actual_value: failed.first().map(|r| r.message.clone()),
                }
            }

            VerificationCondition::Any { conditions } => {
                let results: Vec<_> = conditions.iter().map(|c| c.evaluate(session)).collect();
                let passed_count = results.iter().filter(|r| r.passed).count();

                VerificationResult {
                    passed: passed_count > 0,
                    message: format!(
                        "Any ({} conditions): {} passed",
                        results.len(),
                        passed_count
                    ),
                    actual_value: None,
                }
            }

            VerificationCondition::Not { condition } => {
                let inner = condition.evaluate(session);
                VerificationResult {
                    passed: !inner.passed,
                    message: format!("Not ({})", inner.message),
                    actual_value: inner.actual_value,
                }
            }
        }
    }
}
