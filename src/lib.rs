//! Touchline - a touch-controlled 3D soccer sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world state)
//! - `input`: Pointer-to-pitch mapping and player selection
//! - `render`: Camera, draw-list building and startup geometry
//! - `config`: Data-driven match configuration
//!
//! The renderer and the windowing platform are external collaborators: the
//! library produces a [`render::Frame`] per tick and hands it to whatever
//! [`render::RenderSink`] the host provides.

pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, Field, MatchConfig};
pub use game::Game;

use glam::{Vec2, Vec3};

/// Game tuning constants
pub mod consts {
    /// Maximum frame delta in seconds (spiral of death guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field defaults (world units)
    pub const FIELD_WIDTH: f32 = 20.0;
    pub const FIELD_HEIGHT: f32 = 30.0;
    pub const GOAL_WIDTH: f32 = 5.0;
    pub const GOAL_DEPTH: f32 = 2.0;

    /// Roster defaults
    pub const PLAYERS_PER_TEAM: usize = 11;
    pub const PLAYER_SIZE: f32 = 0.5;
    /// Steering speed of the controlled player (units/s)
    pub const PLAYER_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.3;

    /// Downward acceleration on the airborne ball (units/s²)
    pub const GRAVITY: f32 = -9.8;
    /// Per-tick planar velocity retention
    pub const FRICTION: f32 = 0.98;
    /// Vertical/lateral restitution on bounces
    pub const BOUNCE_DAMPING: f32 = 0.7;
    /// Vertical speed below which a bouncing ball settles
    pub const REST_EPSILON: f32 = 0.1;

    /// Planar impulse a player imparts on ball contact (units/s)
    pub const KICK_IMPULSE: f32 = 5.0;
    /// Upward velocity added on ball contact (units/s)
    pub const KICK_LIFT: f32 = 2.0;

    /// Maximum pick distance for player selection (world units)
    pub const SELECT_RADIUS: f32 = 5.0;
    /// Steering is ignored inside this distance to the target
    pub const STEER_DEADZONE: f32 = 0.1;

    /// Camera rig defaults
    pub const CAMERA_HEIGHT: f32 = 15.0;
    pub const CAMERA_DISTANCE: f32 = 25.0;
    pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 100.0;

    /// Default viewport (pixels)
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;
}

/// Project a world position onto the pitch plane (X/Z)
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Planar (X/Z) separation from `b` to `a`
#[inline]
pub fn planar_delta(a: Vec3, b: Vec3) -> Vec2 {
    Vec2::new(a.x - b.x, a.z - b.z)
}
