//! Player jump physics
//!
//! Pure state plus transition functions; no rendering knowledge. Gravity and
//! landing only apply while airborne, so a grounded player is fully inert.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use super::collision::Rect;

/// Vertical state of the player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Vertical position (screen coordinates, down is positive)
    pub y: f32,
    /// Vertical velocity; nonzero only while airborne
    pub vel_y: f32,
    /// True between jump trigger and landing detection
    pub airborne: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Grounded player at the ground line
    pub fn new() -> Self {
        Self {
            y: GROUND_Y,
            vel_y: 0.0,
            airborne: false,
        }
    }

    /// Integrate one frame of gravity. No-op while grounded.
    pub fn apply_gravity(&mut self, gravity: f32) {
        if self.airborne {
            self.vel_y += gravity;
            self.y += self.vel_y;
        }
    }

    /// Clamp to the ground line if the fall has completed.
    ///
    /// Returns true exactly on the airborne-to-grounded transition, so the
    /// caller can emit a landing event (resume run visuals/audio).
    pub fn check_landing(&mut self, ground_y: f32) -> bool {
        if self.airborne && self.y >= ground_y {
            self.y = ground_y;
            self.vel_y = 0.0;
            self.airborne = false;
            return true;
        }
        false
    }

    /// Start a jump. No-op (returns false) if already airborne.
    pub fn trigger_jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.vel_y = impulse;
        true
    }

    /// Bounds of the running sprite, which rides the ground line
    pub fn run_bounds(&self) -> Rect {
        Rect::new(PLAYER_X, GROUND_Y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Bounds of the jumping sprite, which follows the jump arc
    pub fn jump_bounds(&self) -> Rect {
        Rect::new(PLAYER_X, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = PlayerState::new();
        assert!(player.trigger_jump(JUMP_IMPULSE));
        assert!(player.airborne);

        let mut landed = false;
        for _ in 0..200 {
            player.apply_gravity(GRAVITY);
            if player.check_landing(GROUND_Y) {
                landed = true;
                break;
            }
            // The arc must stay above the starting line until landing
            assert!(player.y <= GROUND_Y);
        }
        assert!(landed);
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = PlayerState::new();
        assert!(player.trigger_jump(JUMP_IMPULSE));
        let vel_before = player.vel_y;
        assert!(!player.trigger_jump(JUMP_IMPULSE));
        assert_eq!(player.vel_y, vel_before);
    }

    #[test]
    fn test_grounded_gravity_is_idempotent() {
        let mut player = PlayerState::new();
        for _ in 0..100 {
            player.apply_gravity(GRAVITY);
            player.check_landing(GROUND_Y);
        }
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_landing_signals_once() {
        let mut player = PlayerState::new();
        player.trigger_jump(JUMP_IMPULSE);
        let mut landings = 0;
        for _ in 0..200 {
            player.apply_gravity(GRAVITY);
            if player.check_landing(GROUND_Y) {
                landings += 1;
            }
        }
        assert_eq!(landings, 1);
    }
}
