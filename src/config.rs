//! Match configuration
//!
//! Everything tunable about a session lives here and is validated exactly
//! once, before a world is built. The simulation itself never re-checks its
//! configuration per frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration, reported at construction time
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("roster must have at least one player per team")]
    EmptyRoster,

    #[error("field dimensions must be positive, got {width}x{height}")]
    DegenerateField { width: f32, height: f32 },

    #[error("goal mouth ({goal_width}) wider than the field ({field_width})")]
    GoalWiderThanField { goal_width: f32, field_width: f32 },

    #[error("goal depth must be positive, got {0}")]
    DegenerateGoal(f32),
}

/// Static pitch geometry
///
/// Width spans the X axis, height the Z axis; both goals sit on the Z
/// boundaries, centered on X. Immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
    pub goal_depth: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            goal_width: GOAL_WIDTH,
            goal_depth: GOAL_DEPTH,
        }
    }
}

impl Field {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    #[inline]
    pub fn goal_half_width(&self) -> f32 {
        self.goal_width / 2.0
    }

    /// True if a ball center at (x, y) on a goal line is inside the mouth
    #[inline]
    pub fn in_goal_mouth(&self, x: f32, y: f32) -> bool {
        x.abs() < self.goal_half_width() && y < self.goal_depth
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::DegenerateField {
                width: self.width,
                height: self.height,
            });
        }
        if self.goal_width >= self.width {
            return Err(ConfigError::GoalWiderThanField {
                goal_width: self.goal_width,
                field_width: self.width,
            });
        }
        if self.goal_depth <= 0.0 {
            return Err(ConfigError::DegenerateGoal(self.goal_depth));
        }
        Ok(())
    }
}

/// Complete match setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub field: Field,
    pub players_per_team: usize,
    /// Seed for roster placement jitter (reproducible kickoff layouts)
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field: Field::default(),
            players_per_team: PLAYERS_PER_TEAM,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Check the configuration once; invalid setups never reach the sim
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players_per_team == 0 {
            return Err(ConfigError::EmptyRoster);
        }
        self.field.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
