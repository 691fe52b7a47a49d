//! Camera and draw-list building
//!
//! Derives the per-frame view/projection from the ball position and flattens
//! the world into renderer-agnostic draw entries.

use glam::{Mat4, Vec3};

use crate::consts::*;
use crate::sim::{Team, WorldState};

use super::vertex::colors;

/// Avatar color for a team
fn team_color(team: Team) -> [f32; 4] {
    match team {
        Team::Red => colors::TEAM_RED,
        Team::Blue => colors::TEAM_BLUE,
    }
}

/// Which startup mesh a draw entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshId {
    Field,
    PlayerCube,
    BallSphere,
}

/// One renderer instruction: where, what, which color
#[derive(Debug, Clone, Copy)]
pub struct DrawEntry {
    pub transform: Mat4,
    pub mesh: MeshId,
    pub color: [f32; 4],
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub view: Mat4,
    pub projection: Mat4,
    pub entries: Vec<DrawEntry>,
}

/// Third-person rig trailing the ball
///
/// The eye snaps to the ball offset every frame; there is no smoothing or
/// interpolation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Eye height above the pitch
    pub height: f32,
    /// Eye offset behind the ball on +Z
    pub distance: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Negate the projection Y column for Vulkan-style clip space;
    /// backend-dependent, off for GL-style conventions
    pub flip_y: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            height: CAMERA_HEIGHT,
            distance: CAMERA_DISTANCE,
            fov_y: CAMERA_FOV_Y,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            flip_y: true,
        }
    }
}

impl Camera {
    /// Eye position for a given ball position
    pub fn eye(&self, ball: Vec3) -> Vec3 {
        Vec3::new(ball.x, self.height, ball.z + self.distance)
    }
}

/// Flatten the world into one frame of draw instructions
///
/// Entry order is stable: field, players in roster order, ball.
pub fn build_frame(world: &WorldState, camera: &Camera, aspect: f32) -> Frame {
    let ball = world.ball.position;
    let view = Mat4::look_at_rh(camera.eye(ball), ball, Vec3::Y);

    let mut projection = Mat4::perspective_rh(camera.fov_y, aspect, camera.near, camera.far);
    if camera.flip_y {
        projection.y_axis.y = -projection.y_axis.y;
    }

    let mut entries = Vec::with_capacity(world.players.len() + 2);
    entries.push(DrawEntry {
        transform: Mat4::IDENTITY,
        mesh: MeshId::Field,
        color: colors::FIELD_GREEN,
    });
    for player in &world.players {
        entries.push(DrawEntry {
            transform: Mat4::from_translation(player.position)
                * Mat4::from_scale(Vec3::splat(player.size)),
            mesh: MeshId::PlayerCube,
            color: team_color(player.team),
        });
    }
    entries.push(DrawEntry {
        transform: Mat4::from_translation(ball),
        mesh: MeshId::BallSphere,
        color: colors::BALL_WHITE,
    });

    Frame {
        view,
        projection,
        entries,
    }
}
