//! Deterministic session logic
//!
//! All gameplay lives here. This module must be pure and deterministic:
//! - Driven only by explicit external events (frame, score tick, spawn tick,
//!   jump, restart)
//! - No wall clock, no rendering or platform dependencies
//! - Stable obstacle iteration order (oldest first)

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use obstacles::{Obstacle, ObstacleRegistry};
pub use physics::PlayerState;
pub use score::ScoreState;
pub use state::{GameEvent, Session, SessionPhase};
pub use tick::{frame, jump, restart, score_tick, spawn_tick};
