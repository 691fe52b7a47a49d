//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - Externally supplied time deltas only (never reads a clock)
//! - Seeded RNG only (roster placement)
//! - Stable iteration order (roster index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use state::{Ball, GoalEnd, GoalEvent, Player, Team, WorldState};
pub use step::{ControlIntent, step};
