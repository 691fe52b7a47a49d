//! Collision detection and response on the pitch
//!
//! All contact here is planar (X/Z) except the ground, which is a hard floor
//! on Y. Responses are clamp-and-reflect with damping for boundaries, and
//! symmetric positional separation for bodies.

use glam::Vec2;

use crate::config::Field;
use crate::consts::*;
use crate::planar_delta;

use super::state::{Ball, GoalEnd, Player, clamp_into_field};

/// Bounce the ball off the ground plane, settling once vertical speed
/// drops below [`REST_EPSILON`]
pub fn resolve_ground(ball: &mut Ball) {
    if ball.position.y < ball.radius {
        ball.position.y = ball.radius;
        ball.velocity.y = -ball.velocity.y * BOUNCE_DAMPING;
        if ball.velocity.y.abs() < REST_EPSILON {
            ball.velocity.y = 0.0;
            ball.on_ground = true;
        }
    }
}

/// Reflect the ball off the side (X) boundaries
pub fn resolve_side_walls(ball: &mut Ball, field: &Field) {
    let limit = field.half_width() - ball.radius;
    if ball.position.x.abs() > limit {
        ball.position.x = limit.copysign(ball.position.x);
        ball.velocity.x = -ball.velocity.x * BOUNCE_DAMPING;
    }
}

/// Reflect the ball off the goal-line (Z) boundaries
///
/// Returns the crossed end when the contact point is inside the goal mouth
/// (below the bar, between the posts). The caller decides what a goal means;
/// this only detects it.
pub fn resolve_goal_lines(ball: &mut Ball, field: &Field) -> Option<GoalEnd> {
    let limit = field.half_height() - ball.radius;
    if ball.position.z.abs() > limit {
        ball.position.z = limit.copysign(ball.position.z);
        ball.velocity.z = -ball.velocity.z * BOUNCE_DAMPING;

        if field.in_goal_mouth(ball.position.x, ball.position.y) {
            return Some(if ball.position.z > 0.0 {
                GoalEnd::North
            } else {
                GoalEnd::South
            });
        }
    }
    None
}

/// Separation normal for two overlapping bodies
///
/// Falls back to +X when the centers coincide, so the pair always separates
/// along a well-defined axis.
#[inline]
fn separation_normal(delta: Vec2, distance: f32) -> Vec2 {
    if distance > 0.0 {
        delta / distance
    } else {
        Vec2::X
    }
}

/// Resolve a ball-player contact: symmetric push-out plus a kick impulse
///
/// Returns true if there was contact. The player is clamped back into the
/// pitch after the push.
pub fn resolve_ball_player(ball: &mut Ball, player: &mut Player, field: &Field) -> bool {
    let delta = planar_delta(ball.position, player.position);
    let distance = delta.length();
    let min_distance = ball.radius + player.size / 2.0;
    if distance >= min_distance {
        return false;
    }

    let overlap = min_distance - distance;
    let normal = separation_normal(delta, distance);

    ball.position.x += normal.x * overlap * 0.5;
    ball.position.z += normal.y * overlap * 0.5;
    player.position.x -= normal.x * overlap * 0.5;
    player.position.z -= normal.y * overlap * 0.5;
    clamp_into_field(&mut player.position, field, player.size);

    ball.velocity.x += normal.x * KICK_IMPULSE;
    ball.velocity.z += normal.y * KICK_IMPULSE;
    ball.velocity.y += KICK_LIFT;
    ball.on_ground = false;
    true
}

/// Push two crowding players apart, positions only
///
/// No velocity change: this models crowding avoidance, not bouncing.
/// Coincident centers are left alone; the pair threshold is the mean of the
/// two sizes.
pub fn resolve_player_pair(a: &mut Player, b: &mut Player, field: &Field) {
    let delta = planar_delta(a.position, b.position);
    let distance = delta.length();
    let min_distance = (a.size + b.size) / 2.0;
    if distance >= min_distance || distance <= 0.0 {
        return;
    }

    let overlap = min_distance - distance;
    let normal = delta / distance;
    a.position.x += normal.x * overlap * 0.5;
    a.position.z += normal.y * overlap * 0.5;
    b.position.x -= normal.x * overlap * 0.5;
    b.position.z -= normal.y * overlap * 0.5;
    clamp_into_field(&mut a.position, field, a.size);
    clamp_into_field(&mut b.position, field, b.size);
}
