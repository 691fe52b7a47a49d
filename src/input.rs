//! Pointer input mapping
//!
//! Converts raw screen-space pointer events into a pitch-space steering
//! target and a roster selection. Platform callbacks write only into this
//! staging state; the world is only touched through its selection helpers,
//! so a frame in progress never sees a half-applied input.

use glam::Vec2;

use crate::config::Field;
use crate::consts::*;
use crate::planar;
use crate::sim::{ControlIntent, WorldState};

/// Maps pointer events onto the pitch and tracks the controlled player
///
/// Holds the selection as a roster index, never a reference into the roster.
pub struct InputMapper {
    viewport: Vec2,
    pointer_down: bool,
    target: Vec2,
}

impl InputMapper {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport: Vec2::new(viewport_width.max(1.0), viewport_height.max(1.0)),
            pointer_down: false,
            target: Vec2::ZERO,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Screen pixels to a point on the pitch plane
    ///
    /// Linear map: the viewport center lands on the center spot, the edges
    /// reach twice the field half-extent on each axis, so every on-pitch
    /// point is reachable with margin. Scaled by the actual field size, not
    /// a fixed magnitude.
    fn screen_to_pitch(&self, screen: Vec2, field: &Field) -> Vec2 {
        let fraction = screen / self.viewport - Vec2::splat(0.5);
        Vec2::new(
            fraction.x * 2.0 * field.width,
            fraction.y * 2.0 * field.height,
        )
    }

    /// Pointer pressed: pick the nearest player under the selection radius
    ///
    /// Equidistant candidates resolve to the lowest roster index (stable
    /// policy). A press that hits nobody clears any previous selection.
    pub fn pointer_down(&mut self, screen: Vec2, world: &mut WorldState) {
        self.pointer_down = true;

        let point = self.screen_to_pitch(screen, &world.field);
        self.target = point;

        let mut best: Option<(usize, f32)> = None;
        for (i, player) in world.players.iter().enumerate() {
            let distance = planar(player.position).distance(point);
            if distance >= SELECT_RADIUS {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((i, distance));
            }
        }

        match best {
            Some((index, _)) => world.select(index),
            None => world.deselect(),
        }
    }

    /// Pointer dragged: retarget the steering point while a run is active
    pub fn pointer_move(&mut self, screen: Vec2, world: &WorldState) {
        if self.pointer_down && world.selected_index().is_some() {
            self.target = self.screen_to_pitch(screen, &world.field);
        }
    }

    /// Pointer released: drop the selection and the intent
    pub fn pointer_up(&mut self, world: &mut WorldState) {
        self.pointer_down = false;
        world.deselect();
    }

    /// The steering command for the coming tick
    pub fn current_intent(&self, world: &WorldState) -> ControlIntent {
        ControlIntent {
            target: self.target,
            active: self.pointer_down && world.selected_index().is_some(),
        }
    }
}
