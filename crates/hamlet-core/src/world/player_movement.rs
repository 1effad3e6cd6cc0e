//! Player movement system - intent to position and facing

use crate::entity::input::Intent;
use crate::entity::player::Character;
use glam::Vec3;

/// Player movement system - planar integration on flat ground
///
/// There is no collision and no boundary: the character can walk past the
/// edge of the generated scenery indefinitely.
pub struct PlayerMovementSystem;

impl PlayerMovementSystem {
    /// Position after one tick of `intent` at `speed` per tick.
    ///
    /// Each held axis contributes `speed` on its own, so diagonals cover
    /// `speed * sqrt(2)`. Height is untouched.
    pub fn step(position: Vec3, intent: &Intent, speed: f32) -> Vec3 {
        if !intent.is_moving {
            return position;
        }

        position
            + Vec3::new(
                f32::from(intent.right) * speed,
                0.0,
                f32::from(intent.forward) * speed,
            )
    }

    /// Update the character for one tick
    ///
    /// # Arguments
    /// * `character` - Mutable reference to the character
    /// * `intent` - Movement intent resolved from the held keys
    /// * `speed` - Distance per tick on each held axis
    pub fn update(character: &mut Character, intent: &Intent, speed: f32) {
        if !intent.is_moving {
            return;
        }

        let next = Self::step(character.position, intent, speed);
        log::trace!(
            "Character: {:?} -> {:?} (facing {:.3})",
            character.position,
            next,
            intent.facing
        );

        character.position = next;
        character.facing = intent.facing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::input::InputState;
    use std::f32::consts::SQRT_2;

    fn intent(up: bool, down: bool, left: bool, right: bool) -> Intent {
        InputState {
            up_pressed: up,
            down_pressed: down,
            left_pressed: left,
            right_pressed: right,
        }
        .intent(0.0)
    }

    #[test]
    fn test_cardinal_step() {
        let next = PlayerMovementSystem::step(Vec3::ZERO, &intent(true, false, false, false), 0.05);
        assert_eq!(next, Vec3::new(0.0, 0.0, 0.05));

        let next = PlayerMovementSystem::step(Vec3::ZERO, &intent(false, false, true, false), 0.05);
        assert_eq!(next, Vec3::new(-0.05, 0.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let start = Vec3::new(1.0, 0.5, 1.0);
        let cardinal = PlayerMovementSystem::step(start, &intent(true, false, false, false), 0.05);
        let diagonal = PlayerMovementSystem::step(start, &intent(true, false, false, true), 0.05);

        let cardinal_len = (cardinal - start).length();
        let diagonal_len = (diagonal - start).length();
        assert!((diagonal_len / cardinal_len - SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn test_height_is_constant() {
        let start = Vec3::new(0.0, 0.5, 0.0);
        let next = PlayerMovementSystem::step(start, &intent(false, true, false, true), 1.0);
        assert_eq!(next.y, 0.5);
    }

    #[test]
    fn test_idle_update_changes_nothing() {
        let mut character = Character::spawn();
        character.facing = 2.0;
        let before = character;

        PlayerMovementSystem::update(&mut character, &InputState::new().intent(2.0), 0.05);
        assert_eq!(character, before);
    }

    #[test]
    fn test_update_sets_facing() {
        let mut character = Character::spawn();
        PlayerMovementSystem::update(&mut character, &intent(false, false, false, true), 0.05);
        assert!((character.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((character.position.x - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_no_boundary_clamp() {
        let mut character = Character::spawn();
        let forward = intent(true, false, false, false);
        for _ in 0..10_000 {
            PlayerMovementSystem::update(&mut character, &forward, 0.05);
        }
        assert!(character.position.z > 400.0);
    }
}
