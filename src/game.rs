//! Frame orchestration
//!
//! One logical thread owns the world. Pointer callbacks only stage state in
//! the input mapper; each frame then runs a strict sequence: read the staged
//! intent, run one simulation step, build the draw list, submit it to the
//! sink. Time is supplied by the caller; the core never reads a clock.

use glam::Vec2;

use crate::config::{ConfigError, MatchConfig};
use crate::input::InputMapper;
use crate::render::{Camera, RenderSink, build_frame};
use crate::sim::{self, GoalEvent, WorldState};

/// A running match: world, input staging and camera rig
pub struct Game {
    world: WorldState,
    input: InputMapper,
    camera: Camera,
    aspect: f32,
}

impl Game {
    pub fn new(
        config: &MatchConfig,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            world: WorldState::new(config)?,
            input: InputMapper::new(viewport_width, viewport_height),
            camera: Camera::default(),
            aspect: viewport_width.max(1.0) / viewport_height.max(1.0),
        })
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.input.set_viewport(width, height);
        self.aspect = width.max(1.0) / height.max(1.0);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.input.pointer_down(Vec2::new(x, y), &mut self.world);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input.pointer_move(Vec2::new(x, y), &self.world);
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up(&mut self.world);
    }

    /// Advance one frame and hand the draw list to the sink
    ///
    /// Returns the goal event, if any, so the host's scoreboard can observe
    /// it; the core keeps no score.
    pub fn frame<S: RenderSink>(&mut self, dt: f32, sink: &mut S) -> Option<GoalEvent> {
        let intent = self.input.current_intent(&self.world);
        let goal = sim::step(&mut self.world, &intent, dt);
        if let Some(event) = goal {
            log::info!("goal at the {:?} end", event.end);
        }

        let frame = build_frame(&self.world, &self.camera, self.aspect);
        sink.submit(&frame);
        goal
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }
}
