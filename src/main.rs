//! Touchline headless demo
//!
//! Runs a short scripted match without a GPU: a logging sink stands in for
//! the renderer, and the pointer script dribbles the nearest player through
//! the ball toward the north goal.

use glam::Vec2;

use touchline::consts::*;
use touchline::render::vertex::colors;
use touchline::render::{Frame, RenderSink, shapes};
use touchline::sim::GoalEnd;
use touchline::{ConfigError, Game, MatchConfig, planar};

/// Stand-in renderer: counts submissions, draws nothing
#[derive(Default)]
struct HeadlessSink {
    frames: u64,
}

impl RenderSink for HeadlessSink {
    fn submit(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames == 1 {
            log::debug!("first frame: {} draw entries", frame.entries.len());
        }
    }
}

/// Screen coordinates that land on a pitch point (inverse of the mapper)
fn screen_for(pitch: Vec2, field: &touchline::Field) -> Vec2 {
    Vec2::new(
        (pitch.x / (2.0 * field.width) + 0.5) * VIEWPORT_WIDTH,
        (pitch.y / (2.0 * field.height) + 0.5) * VIEWPORT_HEIGHT,
    )
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = MatchConfig {
        seed: 42,
        ..Default::default()
    };
    let mut game = Game::new(&config, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)?;
    let mut sink = HeadlessSink::default();
    let field = game.world().field;

    // Startup geometry a real backend would upload once
    let cube = shapes::cube(PLAYER_SIZE, colors::TEAM_RED);
    let sphere = shapes::sphere(BALL_RADIUS, colors::BALL_WHITE, 36, 18);
    let pitch = shapes::field(&field);
    log::debug!(
        "meshes ready: cube {} verts, sphere {} verts, field {} verts",
        cube.vertices.len(),
        sphere.vertices.len(),
        pitch.vertices.len()
    );

    log::info!(
        "kickoff: {} players on a {}x{} pitch",
        game.world().players.len(),
        field.width,
        field.height
    );

    // Grab the player nearest the center spot
    let pick = game
        .world()
        .players
        .iter()
        .map(|p| planar(p.position))
        .min_by(|a, b| a.length().total_cmp(&b.length()))
        .unwrap_or(Vec2::ZERO);
    let press = screen_for(pick, &field);
    game.pointer_down(press.x, press.y);

    let goal_line = Vec2::new(0.0, field.half_height());
    let dt = 1.0 / 60.0;
    let mut goals = Vec::new();

    for _ in 0..7200 {
        // Steer through the ball toward the goal mouth
        let ball = planar(game.world().ball.position);
        let behind = ball + (ball - goal_line).normalize_or_zero() * 0.5;
        let drag = screen_for(behind + (goal_line - behind) * 0.2, &field);
        game.pointer_move(drag.x, drag.y);

        if let Some(event) = game.frame(dt, &mut sink) {
            goals.push(event.end);
            if goals.len() >= 3 {
                break;
            }
        }
    }
    game.pointer_up();

    let north = goals.iter().filter(|&&end| end == GoalEnd::North).count();
    println!(
        "simulated {} frames: {} goals ({} north, {} south)",
        sink.frames,
        goals.len(),
        north,
        goals.len() - north
    );
    Ok(())
}
