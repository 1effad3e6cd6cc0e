//! Headless renderer that logs the scene and the latest frame

use hamlet_core::animation::FollowCamera;
use hamlet_core::render::{FrameOutput, SceneRenderer};
use hamlet_core::world::{Foliage, SceneLayout};

/// Counts taken from the layout when the scene was built
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneSummary {
    pub ground_size: f32,
    pub houses: usize,
    pub chimneys: usize,
    pub trees: usize,
    pub conifers: usize,
}

impl SceneSummary {
    pub fn from_layout(layout: &SceneLayout) -> Self {
        Self {
            ground_size: layout.ground_size,
            houses: layout.houses.len(),
            chimneys: layout.houses.iter().filter(|h| h.chimney.is_some()).count(),
            trees: layout.trees.len(),
            conifers: layout
                .trees
                .iter()
                .filter(|t| matches!(t.foliage, Foliage::Conifer { .. }))
                .count(),
        }
    }
}

/// Renderer with no window: logs what a real renderer would draw
///
/// Only the latest frame is kept unless the renderer was created with
/// `recording`, so long runs stay in constant memory.
pub struct LogRenderer {
    /// Log every Nth frame at info level (0 disables)
    log_every: u64,
    scene: Option<SceneSummary>,
    last_frame: Option<FrameOutput>,
    frames_presented: u64,
    /// Every presented frame; `None` unless recording
    history: Option<Vec<FrameOutput>>,
}

impl LogRenderer {
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every,
            scene: None,
            last_frame: None,
            frames_presented: 0,
            history: None,
        }
    }

    /// Renderer that also keeps every frame, for tests and short scripted runs
    pub fn recording(log_every: u64) -> Self {
        Self {
            history: Some(Vec::new()),
            ..Self::new(log_every)
        }
    }

    pub fn scene(&self) -> Option<&SceneSummary> {
        self.scene.as_ref()
    }

    /// Recorded frames; empty unless recording
    pub fn frames(&self) -> &[FrameOutput] {
        self.history.as_deref().unwrap_or(&[])
    }

    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last_frame.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SceneRenderer for LogRenderer {
    fn build_scene(&mut self, layout: &SceneLayout, camera: &FollowCamera) {
        let summary = SceneSummary::from_layout(layout);
        log::info!(
            "Scene: {}x{} ground, {} houses ({} with chimneys), {} trees ({} conifers)",
            summary.ground_size,
            summary.ground_size,
            summary.houses,
            summary.chimneys,
            summary.trees,
            summary.conifers
        );

        for house in &layout.houses {
            log::debug!(
                "  House at ({:.1}, {:.1}) {:.2}x{:.2}x{:.2}, {:?}/{:?}",
                house.position.x,
                house.position.y,
                house.base_width,
                house.base_depth,
                house.base_height,
                house.base_color,
                house.roof_color
            );
        }

        let limits = camera.limits();
        log::info!(
            "Camera: target {:?}, orbit {:.1}..{:.1}, max polar {:.3}",
            camera.target(),
            limits.min_distance,
            limits.max_distance,
            limits.max_polar_angle
        );

        self.scene = Some(summary);
    }

    fn present(&mut self, frame: &FrameOutput) {
        if self.log_every > 0 && frame.tick % self.log_every == 0 {
            let p = frame.pose.position;
            log::info!(
                "Tick {}: pos ({:.3}, {:.3}, {:.3}) facing {:.3} {}",
                frame.tick,
                p.x,
                p.y,
                p.z,
                frame.pose.facing,
                if frame.is_moving { "walking" } else { "idle" }
            );
        }
        log::trace!("Frame {}: {:?}", frame.tick, frame.pose.limbs);

        self.last_frame = Some(*frame);
        self.frames_presented += 1;
        if let Some(history) = &mut self.history {
            history.push(*frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamlet_core::world::WorldGenerator;

    #[test]
    fn test_summary_counts() {
        let layout = WorldGenerator::new(5).generate();
        let summary = SceneSummary::from_layout(&layout);
        assert_eq!(summary.houses, 7);
        assert_eq!(summary.trees, 50);
        assert!(summary.chimneys <= summary.houses);
        assert!(summary.conifers <= summary.trees);
        assert_eq!(summary.ground_size, 200.0);
    }

    fn frame(tick: u64) -> FrameOutput {
        let character = hamlet_core::entity::Character::spawn();
        FrameOutput {
            tick,
            pose: hamlet_core::animation::CharacterPose::new(
                &character,
                hamlet_core::animation::LimbAngles::NEUTRAL,
            ),
            camera_target: character.position,
            is_moving: false,
        }
    }

    #[test]
    fn test_default_keeps_only_latest_frame() {
        let mut renderer = LogRenderer::default();
        for tick in 1..=1000 {
            renderer.present(&frame(tick));
        }

        assert!(renderer.frames().is_empty());
        assert_eq!(renderer.frames_presented(), 1000);
        assert_eq!(renderer.last_frame().unwrap().tick, 1000);
    }

    #[test]
    fn test_recording_keeps_every_frame() {
        let mut renderer = LogRenderer::recording(0);
        for tick in 1..=5 {
            renderer.present(&frame(tick));
        }

        assert_eq!(renderer.frames().len(), 5);
        assert_eq!(renderer.frames()[0].tick, 1);
        assert_eq!(renderer.last_frame().unwrap().tick, 5);
    }

    #[test]
    fn test_build_scene_records_summary() {
        let mut renderer = LogRenderer::default();
        assert!(renderer.scene().is_none());

        renderer.build_scene(&SceneLayout::empty(50.0), &FollowCamera::default());
        let scene = renderer.scene().unwrap();
        assert_eq!(scene.houses, 0);
        assert_eq!(scene.ground_size, 50.0);
    }
}
