//! Scoring and speed ramp
//!
//! Score advances on a fixed wall-clock cadence (one tick per 100 ms),
//! independent of the render rate. The speed ramp is linear: +0.01 every
//! time the score crosses a multiple of 10. The session high score lives
//! here too; it survives restarts but not the process.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Current run score
    pub score: u32,
    /// Current scroll speed; never decreases within a run
    pub speed: f32,
    /// Best score this session; updated only at the GameOver transition
    pub high_score: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            speed: BASE_SPEED,
            high_score: 0,
        }
    }

    /// One scoring tick: +1 score, speed step at positive multiples of 10
    pub fn tick(&mut self) {
        self.score += 1;
        if self.score.is_multiple_of(SPEED_STEP) {
            self.speed += SPEED_INCREMENT;
        }
    }

    /// Reset for a new run; the high score is deliberately untouched
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed = BASE_SPEED;
    }

    /// Fold the finished run into the high score.
    ///
    /// Called exactly once, at the moment of the GameOver transition.
    /// Returns true if the run set a new record.
    pub fn commit_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_and_speed_ramp() {
        let mut score = ScoreState::new();
        for n in 1..=95u32 {
            score.tick();
            assert_eq!(score.score, n);
            let expected = BASE_SPEED + SPEED_INCREMENT * (n / SPEED_STEP) as f32;
            assert!((score.speed - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_reset_preserves_high_score() {
        let mut score = ScoreState::new();
        for _ in 0..42 {
            score.tick();
        }
        assert!(score.commit_high_score());
        score.reset();
        assert_eq!(score.score, 0);
        assert_eq!(score.speed, BASE_SPEED);
        assert_eq!(score.high_score, 42);
    }

    #[test]
    fn test_commit_requires_strict_improvement() {
        let mut score = ScoreState::new();
        for _ in 0..10 {
            score.tick();
        }
        assert!(score.commit_high_score());
        assert_eq!(score.high_score, 10);

        // An equal score is not a new record
        score.reset();
        for _ in 0..10 {
            score.tick();
        }
        assert!(!score.commit_high_score());
        assert_eq!(score.high_score, 10);

        // A lower one certainly isn't
        score.reset();
        for _ in 0..3 {
            score.tick();
        }
        assert!(!score.commit_high_score());
        assert_eq!(score.high_score, 10);
    }
}
