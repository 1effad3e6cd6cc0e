//! Session - the explicit owner of all per-run state
//!
//! One `Session` holds the input flags, the character, the walk-cycle clock,
//! the follow camera and the generated scenery. The host feeds it input edges
//! whenever they arrive and calls `tick` once per displayed frame.

use glam::Vec3;

use super::generation::SceneLayout;
use super::player_movement::PlayerMovementSystem;
use crate::animation::{CharacterPose, FollowCamera, GaitParams, OrbitLimits, PoseAnimator};
use crate::entity::{Character, Direction, InputEdge, InputState};
use crate::render::{FrameOutput, SceneRenderer};

/// Tunables for a session
///
/// Movement and animation advance by fixed amounts per tick: a faster tick
/// rate means a faster walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionParams {
    pub walk_speed: f32,
    pub spawn_position: Vec3,
    pub gait: GaitParams,
    pub eye_offset: f32,
    pub camera_start_offset: Vec3,
    pub orbit: OrbitLimits,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            walk_speed: Character::WALK_SPEED,
            spawn_position: Character::spawn().position,
            gait: GaitParams::default(),
            eye_offset: FollowCamera::DEFAULT_EYE_OFFSET,
            camera_start_offset: FollowCamera::DEFAULT_START_OFFSET,
            orbit: OrbitLimits::default(),
        }
    }
}

pub struct Session {
    input: InputState,
    character: Character,
    animator: PoseAnimator,
    camera: FollowCamera,
    walk_speed: f32,
    layout: SceneLayout,
    tick_count: u64,
}

impl Session {
    pub fn new(params: SessionParams, layout: SceneLayout) -> Self {
        let character = Character::new(params.spawn_position);
        let mut camera = FollowCamera::new(
            params.eye_offset,
            params.camera_start_offset,
            params.orbit,
        );
        camera.retarget(character.position);

        Self {
            input: InputState::new(),
            character,
            animator: PoseAnimator::new(params.gait),
            camera,
            walk_speed: params.walk_speed,
            layout,
            tick_count: 0,
        }
    }

    /// Apply an input edge; takes effect on the next tick
    pub fn apply_edge(&mut self, edge: InputEdge) {
        log::debug!("Input edge: {}", edge);
        self.input.apply(edge);
    }

    pub fn press(&mut self, direction: Direction) {
        self.apply_edge(InputEdge::press(direction));
    }

    pub fn release(&mut self, direction: Direction) {
        self.apply_edge(InputEdge::release(direction));
    }

    /// Run one tick: intent, movement, limbs, camera
    pub fn tick(&mut self) -> FrameOutput {
        let intent = self.input.intent(self.character.facing);
        PlayerMovementSystem::update(&mut self.character, &intent, self.walk_speed);
        let limbs = self.animator.advance(intent.is_moving);
        let camera_target = self.camera.retarget(self.character.position);
        self.tick_count += 1;

        FrameOutput {
            tick: self.tick_count,
            pose: CharacterPose::new(&self.character, limbs),
            camera_target,
            is_moving: intent.is_moving,
        }
    }

    /// Hand the static scenery to a renderer before the first tick
    pub fn build_scene<R: SceneRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.build_scene(&self.layout, &self.camera);
    }

    /// Tick and present in one step
    pub fn tick_and_present<R: SceneRenderer + ?Sized>(&mut self, renderer: &mut R) -> FrameOutput {
        let frame = self.tick();
        renderer.present(&frame);
        frame
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn animator(&self) -> &PoseAnimator {
        &self.animator
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionParams::default(), SceneLayout::empty(200.0))
    }

    #[test]
    fn test_new_session_targets_character() {
        let session = session();
        assert_eq!(session.character().position, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(session.camera().target(), Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(session.tick_count(), 0);
    }

    #[test]
    fn test_edge_applies_on_next_tick() {
        let mut session = session();
        session.press(Direction::Right);
        assert_eq!(session.character().position.x, 0.0);

        let frame = session.tick();
        assert!(frame.is_moving);
        assert!((frame.pose.position.x - 0.05).abs() < 1e-6);
        assert_eq!(frame.tick, 1);
    }

    #[test]
    fn test_rapid_edges_collapse_to_level() {
        let mut session = session();
        session.press(Direction::Up);
        session.release(Direction::Up);
        session.press(Direction::Up);

        let frame = session.tick();
        assert!((frame.pose.position.z - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_camera_follows_every_tick() {
        let mut session = session();
        session.press(Direction::Down);
        for _ in 0..3 {
            let frame = session.tick();
            assert_eq!(frame.camera_target, frame.pose.position + Vec3::Y);
        }

        session.release(Direction::Down);
        let frame = session.tick();
        assert_eq!(frame.camera_target, frame.pose.position + Vec3::Y);
    }
}
