use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The player-controlled figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub position: Vec3,
    pub facing: f32, // radians, 0 = +z
}

impl Character {
    /// Root height above the ground plane so the legs do not clip
    pub const SPAWN_HEIGHT: f32 = 0.5;

    /// Ground distance covered per moving tick on each held axis
    pub const WALK_SPEED: f32 = 0.05;

    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            facing: 0.0,
        }
    }

    /// Spawn at the world origin, standing on the ground
    pub fn spawn() -> Self {
        Self::new(Vec3::new(0.0, Self::SPAWN_HEIGHT, 0.0))
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::spawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_spawn() {
        let character = Character::spawn();
        assert_eq!(character.position, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(character.facing, 0.0);
    }

    #[test]
    fn test_character_movement() {
        let mut character = Character::new(Vec3::ZERO);
        character.move_by(Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(character.position, Vec3::new(1.0, 0.0, -2.0));
    }
}
