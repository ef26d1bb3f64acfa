//! Obstacle registry
//!
//! Ordered collection of active obstacles. Obstacles enter at the right edge
//! of the view, slide left by the current speed each frame, and are destroyed
//! once fully off the left edge or when the session restarts. Iteration order
//! is spawn order (oldest first); pruning uses `retain`, so a removal pass
//! can never skip or duplicate survivors.

use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// A single scrolling hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal position; decreases every frame
    pub x: f32,
    /// Vertical position; fixed for the obstacle's lifetime
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Hitbox rect as stored (draw-time anchor offsets do not apply here)
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Active obstacles in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new obstacle at the given spawn position
    pub fn spawn(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.obstacles.push(Obstacle {
            x,
            y,
            width,
            height,
        });
    }

    /// Shift every obstacle left by the current speed
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop every obstacle whose right edge has passed the left view edge
    pub fn prune_offscreen(&mut self) {
        self.obstacles.retain(|o| o.right_edge() >= 0.0);
    }

    /// Empty the registry (session restart)
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::consts::*;

    #[test]
    fn test_spawn_and_advance() {
        let mut registry = ObstacleRegistry::new();
        registry.spawn(VIEW_WIDTH, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        registry.spawn(VIEW_WIDTH, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        registry.advance(6.0);
        for obstacle in registry.iter() {
            assert_eq!(obstacle.x, VIEW_WIDTH - 6.0);
            assert_eq!(obstacle.y, OBSTACLE_Y);
        }
    }

    #[test]
    fn test_prune_removes_only_offscreen() {
        let mut registry = ObstacleRegistry::new();
        registry.spawn(-200.0, OBSTACLE_Y, 150.0, 150.0); // right edge -50, gone
        registry.spawn(-150.0, OBSTACLE_Y, 150.0, 150.0); // right edge 0, kept
        registry.spawn(100.0, OBSTACLE_Y, 150.0, 150.0);
        registry.prune_offscreen();
        let xs: Vec<f32> = registry.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![-150.0, 100.0]);
    }

    #[test]
    fn test_clear() {
        let mut registry = ObstacleRegistry::new();
        registry.spawn(VIEW_WIDTH, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        registry.clear();
        assert!(registry.is_empty());
    }

    proptest! {
        /// Pruning removes exactly the obstacles whose right edge is < 0 and
        /// preserves the relative order of the survivors, for any sequence of
        /// advances.
        #[test]
        fn prop_prune_exact_and_ordered(
            xs in prop::collection::vec(-500.0f32..2000.0, 0..40),
            advances in prop::collection::vec(0.0f32..50.0, 0..20),
        ) {
            let mut registry = ObstacleRegistry::new();
            for &x in &xs {
                registry.spawn(x, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
            }
            let total: f32 = advances.iter().sum();
            for &speed in &advances {
                registry.advance(speed);
            }
            registry.prune_offscreen();

            let expected: Vec<f32> = xs
                .iter()
                .map(|&x| x - total)
                .filter(|&x| x + OBSTACLE_WIDTH >= 0.0)
                .collect();
            let actual: Vec<f32> = registry.iter().map(|o| o.x).collect();
            prop_assert_eq!(actual.len(), expected.len());
            for (a, e) in actual.iter().zip(expected.iter()) {
                prop_assert!((a - e).abs() < 1e-3);
            }
        }
    }
}
