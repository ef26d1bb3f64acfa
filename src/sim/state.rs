//! Session state and outbound events
//!
//! One `Session` owns everything a run needs: player physics, the obstacle
//! registry, scoring, the phase machine, and the background scroll offset.
//! No process-wide state; tests construct sessions freely.

use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleRegistry;
use super::physics::PlayerState;
use super::score::ScoreState;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; waiting for an explicit restart
    GameOver,
}

/// Outbound events for the platform layer (audio, overlay, sprite swap).
///
/// The sim never talks to collaborators directly; it reports what happened
/// and the caller decides what to do about it. Keeps the core replayable in
/// tests without a clock, renderer, or speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Jump started (switch to the jump sprite, play the jump cue)
    Jumped,
    /// Jump finished (switch back to the run sprite, resume the run loop)
    Landed,
    /// Collision ended the run; high score already committed
    GameOver { score: u32, high_score: u32 },
    /// A new run has begun
    Restarted,
}

/// Complete state of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: SessionPhase,
    pub player: PlayerState,
    pub obstacles: ObstacleRegistry,
    pub score: ScoreState,
    /// Accumulated background scroll offset (world units, grows negative)
    pub scroll: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session: grounded player, empty registry, base speed
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Running,
            player: PlayerState::new(),
            obstacles: ObstacleRegistry::new(),
            score: ScoreState::new(),
            scroll: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}
