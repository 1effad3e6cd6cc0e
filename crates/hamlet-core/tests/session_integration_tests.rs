//! Integration tests for the tick pipeline and world generation
//!
//! These drive a full `Session` the way a host does: edges in, frames out.

use std::f32::consts::SQRT_2;

use glam::Vec3;
use hamlet_core::animation::{FollowCamera, LimbAngles};
use hamlet_core::entity::{Direction, InputEdge, Skeleton};
use hamlet_core::render::{FrameOutput, SceneRenderer};
use hamlet_core::world::{
    SceneLayout, Session, SessionParams, WorldGenConfig, WorldGenerator,
};

fn empty_session() -> Session {
    Session::new(SessionParams::default(), SceneLayout::empty(200.0))
}

#[derive(Default)]
struct RecordingRenderer {
    built: Option<(usize, usize)>,
    frames: Vec<FrameOutput>,
}

impl SceneRenderer for RecordingRenderer {
    fn build_scene(&mut self, layout: &SceneLayout, _camera: &FollowCamera) {
        self.built = Some((layout.houses.len(), layout.trees.len()));
    }

    fn present(&mut self, frame: &FrameOutput) {
        self.frames.push(*frame);
    }
}

// ============================================================================
// Walking
// ============================================================================

#[test]
fn test_hold_up_for_ten_ticks_then_release() {
    let mut session = empty_session();
    session.apply_edge("up-press".parse().unwrap());

    let mut frames = Vec::new();
    for _ in 0..10 {
        frames.push(session.tick());
    }

    let last = frames.last().unwrap();
    assert!((last.pose.position.z - 0.5).abs() < 1e-5);
    assert_eq!(last.pose.position.x, 0.0);
    assert_eq!(last.pose.position.y, 0.5);
    assert_eq!(last.pose.facing, 0.0);

    for frame in &frames {
        assert!(frame.is_moving);
        assert_eq!(frame.pose.limbs.right_leg, -frame.pose.limbs.left_leg);
        assert_eq!(frame.pose.limbs.right_arm, -frame.pose.limbs.left_arm);
        assert!(frame.pose.limbs.left_leg != 0.0);
    }

    // Limbs keep swinging further into the stride
    assert!(frames[9].pose.limbs.left_leg > frames[0].pose.limbs.left_leg);

    session.apply_edge("up-release".parse().unwrap());
    let idle = session.tick();
    assert!(!idle.is_moving);
    assert_eq!(idle.pose.limbs, LimbAngles::NEUTRAL);
    assert_eq!(idle.pose.position, last.pose.position);

    let still_idle = session.tick();
    assert_eq!(still_idle.pose.position, last.pose.position);
}

#[test]
fn test_diagonal_is_faster_by_sqrt_two() {
    let mut cardinal = empty_session();
    cardinal.press(Direction::Up);
    let start = cardinal.character().position;
    let cardinal_delta = (cardinal.tick().pose.position - start).length();

    let mut diagonal = empty_session();
    diagonal.press(Direction::Up);
    diagonal.press(Direction::Right);
    let diagonal_delta = (diagonal.tick().pose.position - start).length();

    assert!((diagonal_delta - cardinal_delta * SQRT_2).abs() < 1e-6);
}

#[test]
fn test_facing_survives_idle() {
    let mut session = empty_session();
    session.press(Direction::Right);
    session.tick();
    session.release(Direction::Right);

    for _ in 0..5 {
        let frame = session.tick();
        assert!((frame.pose.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(frame.pose.limbs.is_neutral());
    }
}

#[test]
fn test_opposing_keys_stand_still() {
    let mut session = empty_session();
    session.press(Direction::Up);
    session.press(Direction::Down);

    let frame = session.tick();
    assert!(!frame.is_moving);
    assert_eq!(frame.pose.position, Vec3::new(0.0, 0.5, 0.0));
    assert!(frame.pose.limbs.is_neutral());
}

#[test]
fn test_walk_cycle_resumes_from_paused_clock() {
    let mut session = empty_session();
    session.press(Direction::Left);
    for _ in 0..4 {
        session.tick();
    }
    let clock_after_walk = session.animator().clock().value();

    session.release(Direction::Left);
    session.tick();
    assert_eq!(session.animator().clock().value(), clock_after_walk);

    session.apply_edge(InputEdge::press(Direction::Left));
    session.tick();
    assert!(session.animator().clock().value() > clock_after_walk);
}

#[test]
fn test_skeleton_from_frame() {
    let mut session = empty_session();
    session.press(Direction::Up);
    let frame = session.tick();

    let transforms = Skeleton::local_transforms(&frame.pose);
    assert_eq!(transforms.len(), 5);
    assert_eq!(transforms[0].translation, frame.pose.position);
}

// ============================================================================
// Scenery and renderer seam
// ============================================================================

#[test]
fn test_renderer_receives_layout_and_frames() {
    let layout = WorldGenerator::new(42).generate();
    let mut session = Session::new(SessionParams::default(), layout);
    let mut renderer = RecordingRenderer::default();

    session.build_scene(&mut renderer);
    assert_eq!(renderer.built, Some((7, 50)));

    session.press(Direction::Up);
    for _ in 0..3 {
        session.tick_and_present(&mut renderer);
    }
    assert_eq!(renderer.frames.len(), 3);
    assert_eq!(renderer.frames[2].tick, 3);
}

#[test]
fn test_layout_is_static_while_walking() {
    let layout = WorldGenerator::new(9).generate();
    let mut session = Session::new(SessionParams::default(), layout.clone());

    session.press(Direction::Up);
    for _ in 0..100 {
        session.tick();
    }
    assert_eq!(session.layout(), &layout);
}

#[test]
fn test_seed_reproduces_layout_from_ron_config() {
    let config = WorldGenConfig::preset_forest();
    let reloaded = WorldGenConfig::from_ron(&config.to_ron().unwrap()).unwrap();

    let a = WorldGenerator::with_config(77, config).generate();
    let b = WorldGenerator::with_config(77, reloaded).generate();
    assert_eq!(a, b);
    assert_eq!(a.houses.len(), 3);
    assert_eq!(a.trees.len(), 200);
}

#[test]
fn test_houses_only_depend_on_their_own_base() {
    let layout = WorldGenerator::new(123).generate();
    for house in &layout.houses {
        let openings = house.openings();
        let front_z = house.base_depth / 2.0 + 0.01;
        assert!((openings.door.center.z - front_z).abs() < 1e-6);
        for window in openings.side_windows {
            assert!((window.center.x.abs() - (house.base_width / 2.0 + 0.01)).abs() < 1e-6);
        }
    }
}
