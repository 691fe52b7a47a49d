//! World state and core simulation types
//!
//! The complete mutable snapshot of a match: roster, ball and pitch. Only the
//! simulation step and the selection helpers mutate it.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, Field, MatchConfig};
use crate::consts::*;

/// Team membership, also the avatar color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

/// A field player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub team: Team,
    /// Bounding half-extent proxy for collision
    pub size: f32,
    pub selected: bool,
}

/// The match ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    /// True once vertical speed has settled after a ground bounce
    pub on_ground: bool,
}

impl Ball {
    fn at_center(radius: f32) -> Self {
        Self {
            position: Vec3::new(0.0, radius, 0.0),
            velocity: Vec3::ZERO,
            radius,
            on_ground: true,
        }
    }

    /// Put the ball back on the center spot, at rest
    pub fn reset_to_center(&mut self) {
        *self = Self::at_center(self.radius);
    }
}

/// Which goal line the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalEnd {
    /// The +Z goal line
    North,
    /// The -Z goal line
    South,
}

/// Discrete notification that the ball crossed a scoring boundary
///
/// The core does not keep score; an external scoreboard observes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEvent {
    pub end: GoalEnd,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub field: Field,
    /// Both rosters, red team first (stable iteration order)
    pub players: Vec<Player>,
    pub ball: Ball,
    /// Index of the controlled player, if any
    selected: Option<usize>,
}

impl WorldState {
    /// Build a world at kickoff from a validated configuration
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = config.field;
        let n = config.players_per_team;
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let mut players = Vec::with_capacity(n * 2);

        for team in [Team::Red, Team::Blue] {
            let line_x = match team {
                Team::Red => -field.width / 4.0,
                Team::Blue => field.width / 4.0,
            };
            for i in 0..n {
                let jitter_x: f32 = rng.random_range(-0.5..0.5);
                let jitter_z: f32 = rng.random_range(-0.5..0.5);
                let x = line_x + jitter_x;
                let z = (i as f32 - n as f32 / 2.0) * 2.0 + jitter_z;
                let mut player = Player {
                    position: Vec3::new(x, PLAYER_SIZE / 2.0, z),
                    velocity: Vec3::ZERO,
                    team,
                    size: PLAYER_SIZE,
                    selected: false,
                };
                clamp_into_field(&mut player.position, &field, player.size);
                players.push(player);
            }
        }

        Ok(Self {
            field,
            players,
            ball: Ball::at_center(BALL_RADIUS),
            selected: None,
        })
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Make `index` the controlled player, dropping any previous selection
    pub fn select(&mut self, index: usize) {
        for (i, player) in self.players.iter_mut().enumerate() {
            player.selected = i == index;
        }
        self.selected = self.players.get(index).map(|_| index);
    }

    pub fn deselect(&mut self) {
        for player in &mut self.players {
            player.selected = false;
        }
        self.selected = None;
    }
}

/// Keep a player center inside the pitch, half its size off every boundary
pub fn clamp_into_field(position: &mut Vec3, field: &Field, size: f32) {
    let margin_x = field.half_width() - size / 2.0;
    let margin_z = field.half_height() - size / 2.0;
    position.x = position.x.clamp(-margin_x, margin_x);
    position.z = position.z.clamp(-margin_z, margin_z);
}
