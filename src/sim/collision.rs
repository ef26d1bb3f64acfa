//! Collision oracle with deliberate hitbox tolerance
//!
//! This is NOT true AABB intersection. The game plays better with a
//! hitbox smaller than the rendered sprite, so both axes apply tolerance:
//! the horizontal test divides widths by 2.5 instead of 2, and the vertical
//! test opens a half-height window past each obstacle edge. Airborne players
//! never collide at all. Tuning values, not geometry - keep them as named
//! constants and resist the urge to "fix" them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HITBOX_HEIGHT_DIVISOR, HITBOX_WIDTH_DIVISOR};

/// Axis-aligned rectangle in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Decide whether the player hitbox collides with an obstacle hitbox.
///
/// Exclusion rules, in order:
/// 1. An airborne player is never hit, regardless of overlap.
/// 2. Vertical window: excluded when the player's half-height midpoint is
///    above the obstacle top, or the player top is more than half an obstacle
///    height below the obstacle bottom.
/// 3. Horizontal window: excluded when the rects are apart by more than each
///    width divided by `HITBOX_WIDTH_DIVISOR`.
///
/// Only if no rule excludes is it a collision.
pub fn overlaps(player: &Rect, obstacle: &Rect, player_airborne: bool) -> bool {
    if player_airborne {
        return false;
    }

    // Vertical tolerance window
    if player.y + player.height / HITBOX_HEIGHT_DIVISOR < obstacle.y {
        return false;
    }
    if player.y > obstacle.bottom() + obstacle.height / HITBOX_HEIGHT_DIVISOR {
        return false;
    }

    // Horizontal tolerance window
    if player.x + player.width / HITBOX_WIDTH_DIVISOR < obstacle.x {
        return false;
    }
    if player.x > obstacle.x + obstacle.width / HITBOX_WIDTH_DIVISOR {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_player_hits_rock_in_window() {
        // Grounded player against an obstacle in the kill window
        let player = Rect::new(50.0, 930.0, 100.0, 100.0);
        let obstacle = Rect::new(60.0, 750.0, 150.0, 150.0);
        assert!(overlaps(&player, &obstacle, false));
    }

    #[test]
    fn test_airborne_always_misses() {
        // Player fully inside the obstacle rectangle, but airborne
        let player = Rect::new(80.0, 770.0, 100.0, 100.0);
        let obstacle = Rect::new(60.0, 750.0, 150.0, 150.0);
        assert!(overlaps(&player, &obstacle, false));
        assert!(!overlaps(&player, &obstacle, true));
    }

    #[test]
    fn test_obstacle_still_ahead() {
        // Obstacle far to the right of the player
        let player = Rect::new(50.0, 930.0, 100.0, 100.0);
        let obstacle = Rect::new(400.0, 750.0, 150.0, 150.0);
        assert!(!overlaps(&player, &obstacle, false));
    }

    #[test]
    fn test_obstacle_passed() {
        // Obstacle far to the left, already behind the player
        let player = Rect::new(500.0, 930.0, 100.0, 100.0);
        let obstacle = Rect::new(100.0, 750.0, 150.0, 150.0);
        assert!(!overlaps(&player, &obstacle, false));
    }

    #[test]
    fn test_horizontal_window_is_narrower_than_sprite() {
        let player = Rect::new(50.0, 930.0, 100.0, 100.0);
        // Right edge of the player sprite (x=150) still touches the obstacle,
        // but the 2.5 divisor excludes anything past x = 50 + 100/2.5 = 90
        let obstacle = Rect::new(95.0, 750.0, 150.0, 150.0);
        assert!(!overlaps(&player, &obstacle, false));
        let obstacle = Rect::new(89.0, 750.0, 150.0, 150.0);
        assert!(overlaps(&player, &obstacle, false));
    }

    #[test]
    fn test_vertical_exclusion_above() {
        // Player well above the obstacle (but not airborne)
        let player = Rect::new(50.0, 100.0, 100.0, 100.0);
        let obstacle = Rect::new(60.0, 750.0, 150.0, 150.0);
        assert!(!overlaps(&player, &obstacle, false));
    }

    #[test]
    fn test_vertical_exclusion_below() {
        // Player far below the obstacle's tolerance window
        let player = Rect::new(50.0, 1100.0, 100.0, 100.0);
        let obstacle = Rect::new(60.0, 100.0, 150.0, 150.0);
        assert!(!overlaps(&player, &obstacle, false));
    }
}
