//! Player input state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEdgeError;

/// One of the four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Short lowercase name used in edge names (`up`, `down`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name))
    }

    /// Map a keyboard key name (`ArrowUp`, ...) to a direction
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map an on-screen button id (`up-btn`, ...) to a direction
    pub fn from_button_id(id: &str) -> Option<Self> {
        id.strip_suffix("-btn").and_then(Self::from_name)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A press or release of one direction
///
/// Keyboard keys and on-screen buttons both funnel into these edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEdge {
    pub direction: Direction,
    pub pressed: bool,
}

impl InputEdge {
    pub fn press(direction: Direction) -> Self {
        Self {
            direction,
            pressed: true,
        }
    }

    pub fn release(direction: Direction) -> Self {
        Self {
            direction,
            pressed: false,
        }
    }
}

impl fmt::Display for InputEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.pressed { "press" } else { "release" };
        write!(f, "{}-{}", self.direction, action)
    }
}

impl FromStr for InputEdge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEdgeError(s.to_string());
        let (dir, action) = s.trim().rsplit_once('-').ok_or_else(err)?;
        let direction = Direction::from_name(dir).ok_or_else(err)?;
        match action {
            "press" => Ok(Self::press(direction)),
            "release" => Ok(Self::release(direction)),
            _ => Err(err()),
        }
    }
}

/// Tracks which movement keys are currently held
///
/// Only the current level of each key matters; rapid edges between two ticks
/// collapse into the latest state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up_pressed: bool,
    pub down_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, edge: InputEdge) {
        self.set(edge.direction, edge.pressed);
    }

    pub fn press(&mut self, direction: Direction) {
        self.set(direction, true);
    }

    /// Releasing a key that is not held is a no-op
    pub fn release(&mut self, direction: Direction) {
        self.set(direction, false);
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up_pressed = pressed,
            Direction::Down => self.down_pressed = pressed,
            Direction::Left => self.left_pressed = pressed,
            Direction::Right => self.right_pressed = pressed,
        }
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up_pressed,
            Direction::Down => self.down_pressed,
            Direction::Left => self.left_pressed,
            Direction::Right => self.right_pressed,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// up - down, in {-1, 0, 1}
    pub fn forward_axis(&self) -> i8 {
        i8::from(self.up_pressed) - i8::from(self.down_pressed)
    }

    /// right - left, in {-1, 0, 1}
    pub fn right_axis(&self) -> i8 {
        i8::from(self.right_pressed) - i8::from(self.left_pressed)
    }

    pub fn is_moving(&self) -> bool {
        self.forward_axis() != 0 || self.right_axis() != 0
    }

    /// Resolve the held keys into a movement intent.
    ///
    /// `previous_facing` is carried through unchanged when no net direction is
    /// held, so standing still keeps the last heading.
    pub fn intent(&self, previous_facing: f32) -> Intent {
        let forward = self.forward_axis();
        let right = self.right_axis();
        let is_moving = forward != 0 || right != 0;
        let facing = if is_moving {
            f32::from(right).atan2(f32::from(forward))
        } else {
            previous_facing
        };

        Intent {
            forward,
            right,
            is_moving,
            facing,
        }
    }
}

/// Per-tick movement intent derived from the held keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub forward: i8,
    pub right: i8,
    pub is_moving: bool,
    /// Heading in the ground plane: 0 is +z, pi/2 is +x
    pub facing: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn state(up: bool, down: bool, left: bool, right: bool) -> InputState {
        InputState {
            up_pressed: up,
            down_pressed: down,
            left_pressed: left,
            right_pressed: right,
        }
    }

    #[test]
    fn test_input_state_new() {
        let input = InputState::new();
        for dir in Direction::ALL {
            assert!(!input.is_pressed(dir));
        }
        assert!(!input.is_moving());
    }

    #[test]
    fn test_axes_for_all_flag_combinations() {
        for bits in 0u8..16 {
            let (up, down, left, right) =
                (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let input = state(up, down, left, right);

            assert_eq!(input.forward_axis(), up as i8 - down as i8);
            assert_eq!(input.right_axis(), right as i8 - left as i8);
            assert!((-1..=1).contains(&input.forward_axis()));
            assert!((-1..=1).contains(&input.right_axis()));
        }
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = state(true, true, false, false);
        assert_eq!(input.forward_axis(), 0);
        assert!(!input.is_moving());

        let input = state(false, false, true, true);
        assert_eq!(input.right_axis(), 0);
        assert!(!input.is_moving());

        // Cancelled axis leaves the other one intact
        let input = state(true, true, false, true);
        assert_eq!(input.forward_axis(), 0);
        assert_eq!(input.right_axis(), 1);
    }

    #[test]
    fn test_facing_convention() {
        let intent = state(true, false, false, false).intent(1.0);
        assert_eq!(intent.facing, 0.0);

        let intent = state(false, false, false, true).intent(0.0);
        assert!((intent.facing - FRAC_PI_2).abs() < 1e-6);

        let intent = state(true, false, false, true).intent(0.0);
        assert!((intent.facing - FRAC_PI_4).abs() < 1e-6);

        let intent = state(true, false, true, false).intent(0.0);
        assert!((intent.facing + FRAC_PI_4).abs() < 1e-6);

        let intent = state(false, true, false, false).intent(0.0);
        assert!((intent.facing - PI).abs() < 1e-6);
    }

    #[test]
    fn test_idle_keeps_previous_facing() {
        let intent = InputState::new().intent(1.25);
        assert!(!intent.is_moving);
        assert_eq!(intent.facing, 1.25);

        // Fully cancelled input is idle too
        let intent = state(true, true, true, true).intent(-0.5);
        assert!(!intent.is_moving);
        assert_eq!(intent.facing, -0.5);
    }

    #[test]
    fn test_apply_edges() {
        let mut input = InputState::new();
        input.apply(InputEdge::press(Direction::Up));
        input.apply(InputEdge::press(Direction::Left));
        assert!(input.up_pressed);
        assert!(input.left_pressed);

        input.apply(InputEdge::release(Direction::Up));
        assert!(!input.up_pressed);

        // Releasing twice is harmless
        input.release(Direction::Up);
        assert!(!input.up_pressed);
        assert!(input.left_pressed);

        input.clear();
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_edge_parsing() {
        let edge: InputEdge = "up-press".parse().unwrap();
        assert_eq!(edge, InputEdge::press(Direction::Up));

        let edge: InputEdge = "right-release".parse().unwrap();
        assert_eq!(edge, InputEdge::release(Direction::Right));

        assert_eq!(InputEdge::press(Direction::Left).to_string(), "left-press");

        assert!("up".parse::<InputEdge>().is_err());
        assert!("jump-press".parse::<InputEdge>().is_err());
        assert!("down-hold".parse::<InputEdge>().is_err());
    }

    #[test]
    fn test_key_and_button_bindings() {
        assert_eq!(Direction::from_key_name("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_name("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key_name("KeyW"), None);

        assert_eq!(Direction::from_button_id("down-btn"), Some(Direction::Down));
        assert_eq!(Direction::from_button_id("right-btn"), Some(Direction::Right));
        assert_eq!(Direction::from_button_id("right"), None);
    }
}
