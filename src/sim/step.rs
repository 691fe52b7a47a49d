//! Per-tick simulation step
//!
//! Advances the world by one frame in a fixed order: ball integration and
//! collision resolution first, then crowding separation, then steering of the
//! controlled player. A moving player can therefore still be displaced by a
//! ball contact in the same tick.

use glam::Vec2;

use crate::consts::*;
use crate::planar;

use super::collision;
use super::state::{GoalEvent, WorldState, clamp_into_field};

/// Steering command for a single tick
///
/// Produced by the input mapper from the current pointer state, consumed by
/// [`step`]. Nothing about it persists across ticks beyond "currently
/// active".
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlIntent {
    /// Target point on the pitch plane (world X/Z)
    pub target: Vec2,
    /// True while a pointer is down and a player is selected
    pub active: bool,
}

/// Advance the world by one frame
///
/// `dt` is wall-clock seconds since the previous tick, clamped into
/// `[0, MAX_FRAME_DT]` so a stall cannot destabilize the integration; the
/// clamp silently shortens simulated time instead of reporting an error.
///
/// Returns the goal event if the ball crossed a scoring boundary this tick;
/// the ball is already back on the center spot when that happens.
pub fn step(world: &mut WorldState, intent: &ControlIntent, dt: f32) -> Option<GoalEvent> {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    // Ball free flight
    if !world.ball.on_ground {
        world.ball.velocity.y += GRAVITY * dt;
    }
    world.ball.position += world.ball.velocity * dt;

    collision::resolve_ground(&mut world.ball);
    collision::resolve_side_walls(&mut world.ball, &world.field);

    let mut goal = None;
    if let Some(end) = collision::resolve_goal_lines(&mut world.ball, &world.field) {
        world.ball.reset_to_center();
        goal = Some(GoalEvent { end });
    }

    // A scored ball sits untouched on the spot for the rest of the tick
    if goal.is_none() {
        world.ball.velocity.x *= FRICTION;
        world.ball.velocity.z *= FRICTION;

        for player in &mut world.players {
            collision::resolve_ball_player(&mut world.ball, player, &world.field);
        }
    }

    // Crowding separation, unordered pairs in roster order
    for i in 0..world.players.len() {
        let (head, tail) = world.players.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            collision::resolve_player_pair(a, b, &world.field);
        }
    }

    // Steering of the controlled player
    if intent.active {
        if let Some(index) = world.selected_index() {
            let field = world.field;
            let player = &mut world.players[index];
            let to_target = intent.target - planar(player.position);
            let distance = to_target.length();
            if distance > STEER_DEADZONE {
                let advance = to_target / distance * PLAYER_SPEED * dt;
                player.position.x += advance.x;
                player.position.z += advance.y;
                clamp_into_field(&mut player.position, &field, player.size);
            }
        }
    }

    goal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::sim::state::GoalEnd;
    use glam::Vec3;
    use proptest::prelude::*;

    const DT: f32 = 0.016;

    fn world() -> WorldState {
        WorldState::new(&MatchConfig::default()).unwrap()
    }

    /// Park the roster out of the ball's way
    fn clear_midfield(world: &mut WorldState) {
        let player_count = world.players.len();
        for (i, player) in world.players.iter_mut().enumerate() {
            player.position.x = (world.field.half_width() - 1.0).copysign(player.position.x);
            player.position.z = i as f32 - player_count as f32 / 2.0;
        }
    }

    #[test]
    fn test_straight_bounce_settles() {
        let mut world = world();
        clear_midfield(&mut world);
        world.ball.position = Vec3::new(0.0, 5.0, 0.0);
        world.ball.velocity = Vec3::ZERO;
        world.ball.on_ground = false;

        let intent = ControlIntent::default();
        for _ in 0..5000 {
            step(&mut world, &intent, DT);
            if world.ball.on_ground {
                break;
            }
        }

        assert!(world.ball.on_ground);
        assert_eq!(world.ball.velocity.y, 0.0);
        assert_eq!(world.ball.position.y, world.ball.radius);
    }

    #[test]
    fn test_goal_resets_ball_to_center_spot() {
        let mut world = world();
        clear_midfield(&mut world);
        let half_height = world.field.half_height();
        world.ball.position = Vec3::new(0.0, 0.5, half_height - 0.01);
        world.ball.velocity = Vec3::new(0.0, 0.0, 5.0);
        world.ball.on_ground = false;

        let event = step(&mut world, &ControlIntent::default(), DT);
        assert_eq!(event, Some(GoalEvent { end: GoalEnd::North }));
        assert_eq!(
            world.ball.position,
            Vec3::new(0.0, world.ball.radius, 0.0)
        );
        assert_eq!(world.ball.velocity, Vec3::ZERO);
        assert!(world.ball.on_ground);
    }

    #[test]
    fn test_goal_tick_skips_kick_response() {
        let mut world = world();
        clear_midfield(&mut world);
        // A defender camped on the center spot must not touch the ball on
        // the tick it respawns there
        world.players[0].position = Vec3::new(0.0, PLAYER_SIZE / 2.0, 0.0);
        world.ball.position = Vec3::new(0.0, 0.5, world.field.half_height() - 0.01);
        world.ball.velocity = Vec3::new(0.0, 0.0, 5.0);
        world.ball.on_ground = false;

        let event = step(&mut world, &ControlIntent::default(), DT);
        assert!(event.is_some());
        assert_eq!(world.ball.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_friction_decays_planar_speed_monotonically() {
        let mut world = world();
        clear_midfield(&mut world);
        world.ball.velocity = Vec3::new(3.0, 0.0, 4.0);

        let intent = ControlIntent::default();
        let mut previous = planar(world.ball.velocity).length();
        for _ in 0..200 {
            step(&mut world, &intent, DT);
            let speed = planar(world.ball.velocity).length();
            assert!(speed <= previous + 1e-6);
            previous = speed;
        }
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut a = world();
        let mut b = world();
        for w in [&mut a, &mut b] {
            clear_midfield(w);
            w.ball.position = Vec3::new(0.0, 5.0, 0.0);
            w.ball.velocity = Vec3::new(1.0, 0.0, 1.0);
            w.ball.on_ground = false;
        }

        step(&mut a, &ControlIntent::default(), 10.0);
        step(&mut b, &ControlIntent::default(), MAX_FRAME_DT);
        assert_eq!(a.ball.position, b.ball.position);
        assert_eq!(a.ball.velocity, b.ball.velocity);
    }

    #[test]
    fn test_negative_dt_freezes_the_ball() {
        let mut world = world();
        clear_midfield(&mut world);
        world.ball.velocity = Vec3::new(2.0, 0.0, 2.0);
        let before = world.ball.position;
        step(&mut world, &ControlIntent::default(), -1.0);
        assert_eq!(world.ball.position, before);
    }

    #[test]
    fn test_player_contact_kicks_the_ball() {
        let mut world = world();
        clear_midfield(&mut world);
        world.players[0].position = Vec3::new(0.3, PLAYER_SIZE / 2.0, 0.0);
        world.ball.position = Vec3::new(0.0, BALL_RADIUS, 0.0);

        step(&mut world, &ControlIntent::default(), DT);
        assert!(world.ball.velocity.length() > 0.0);
        assert!(!world.ball.on_ground);
        assert!(world.ball.velocity.y > 0.0);
    }

    #[test]
    fn test_steering_moves_selected_player_and_clamps() {
        let mut world = world();
        world.select(0);
        let start = world.players[0].position;
        // Way past the sideline; the clamp has to stop the run
        let intent = ControlIntent {
            target: Vec2::new(-100.0, start.z),
            active: true,
        };

        for _ in 0..2000 {
            step(&mut world, &intent, DT);
        }
        let player = &world.players[0];
        let margin = world.field.half_width() - player.size / 2.0;
        assert!((player.position.x + margin).abs() < 1e-3);
        assert!(player.position.x < start.x);
    }

    #[test]
    fn test_steering_respects_deadzone() {
        let mut world = world();
        clear_midfield(&mut world);
        world.select(0);
        let start = world.players[0].position;
        let intent = ControlIntent {
            target: planar(start) + Vec2::new(STEER_DEADZONE / 2.0, 0.0),
            active: true,
        };
        step(&mut world, &intent, DT);
        assert_eq!(world.players[0].position, start);
    }

    #[test]
    fn test_inactive_intent_moves_nobody() {
        let mut world = world();
        world.select(0);
        let positions: Vec<_> = world.players.iter().map(|p| p.position).collect();
        let intent = ControlIntent {
            target: Vec2::new(5.0, 5.0),
            active: false,
        };
        step(&mut world, &intent, DT);
        for (player, before) in world.players.iter().zip(&positions) {
            assert_eq!(player.position, *before);
        }
    }

    proptest! {
        #[test]
        fn prop_ground_floor_and_containment(
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
            vz in -20.0f32..20.0,
            tx in -15.0f32..15.0,
            tz in -20.0f32..20.0,
        ) {
            let mut world = world();
            world.ball.velocity = Vec3::new(vx, vy, vz);
            world.ball.on_ground = false;
            world.select(0);
            let intent = ControlIntent {
                target: Vec2::new(tx, tz),
                active: true,
            };

            for _ in 0..120 {
                step(&mut world, &intent, DT);
                prop_assert!(world.ball.position.y >= world.ball.radius - 1e-4);
                for player in &world.players {
                    let mx = world.field.half_width() - player.size / 2.0;
                    let mz = world.field.half_height() - player.size / 2.0;
                    prop_assert!(player.position.x.abs() <= mx + 1e-4);
                    prop_assert!(player.position.z.abs() <= mz + 1e-4);
                }
            }
        }
    }
}
