//! Session controller
//!
//! One entry point per external event kind: the per-frame advancement
//! callback, the two fixed-interval timer ticks (spawn, score), and the two
//! input signals (jump, restart). The host owns scheduling; the sim only
//! reacts. Every entry point is a no-op in phases where it does not apply,
//! so a timer that keeps firing after game over is harmless and suspending
//! the frame callback twice cannot fail.

use crate::consts::*;

use super::collision::overlaps;
use super::state::{GameEvent, Session, SessionPhase};

/// Advance one frame while Running.
///
/// Order matters: physics is applied before collision is evaluated, so the
/// oracle always sees this frame's positions. Spawning is deliberately absent
/// here; it belongs to the spawn timer.
pub fn frame(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.phase == SessionPhase::GameOver {
        return;
    }

    session.player.apply_gravity(GRAVITY);
    if session.player.check_landing(GROUND_Y) {
        events.push(GameEvent::Landed);
    }

    let speed = session.score.speed;
    session.obstacles.advance(speed);
    session.obstacles.prune_offscreen();

    // Both sprites are live hitboxes: the run sprite rides the ground line,
    // the jump sprite follows the arc.
    let airborne = session.player.airborne;
    let run_box = session.player.run_bounds();
    let jump_box = session.player.jump_bounds();
    let hit = session.obstacles.iter().any(|obstacle| {
        let rect = obstacle.bounds();
        overlaps(&run_box, &rect, airborne) || overlaps(&jump_box, &rect, airborne)
    });

    if hit {
        session.phase = SessionPhase::GameOver;
        let record = session.score.commit_high_score();
        if record {
            log::info!("new session high score: {}", session.score.high_score);
        }
        events.push(GameEvent::GameOver {
            score: session.score.score,
            high_score: session.score.high_score,
        });
        return;
    }

    session.scroll -= speed;
}

/// Fixed-interval scoring tick (every 100 ms of wall clock)
pub fn score_tick(session: &mut Session) {
    if session.is_running() {
        session.score.tick();
    }
}

/// Fixed-interval obstacle spawn (every 2000 ms of wall clock)
pub fn spawn_tick(session: &mut Session) {
    if session.is_running() {
        session
            .obstacles
            .spawn(VIEW_WIDTH, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        log::debug!("obstacle count {}", session.obstacles.len());
    }
}

/// Jump intent from the input source. Ignored while airborne or after
/// game over; at most one jump per press.
pub fn jump(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.is_running() && session.player.trigger_jump(JUMP_IMPULSE) {
        events.push(GameEvent::Jumped);
    }
}

/// Explicit restart signal from the restart control. No-op unless the
/// session is in GameOver.
pub fn restart(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.phase != SessionPhase::GameOver {
        return;
    }
    session.player = super::physics::PlayerState::new();
    session.obstacles.clear();
    session.score.reset();
    session.phase = SessionPhase::Running;
    events.push(GameEvent::Restarted);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place an obstacle directly in the grounded player's kill window
    fn session_with_obstacle_at(x: f32) -> Session {
        let mut session = Session::new();
        session
            .obstacles
            .spawn(x, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        session
    }

    #[test]
    fn test_frame_advances_and_scrolls() {
        let mut session = session_with_obstacle_at(VIEW_WIDTH);
        let mut events = Vec::new();
        frame(&mut session, &mut events);
        assert!(session.is_running());
        assert!(events.is_empty());
        let obstacle = session.obstacles.iter().next().unwrap();
        assert_eq!(obstacle.x, VIEW_WIDTH - BASE_SPEED);
        assert_eq!(session.scroll, -BASE_SPEED);
    }

    #[test]
    fn test_collision_ends_run_once() {
        // Obstacle already overlapping the grounded player's window
        let mut session = session_with_obstacle_at(PLAYER_X + BASE_SPEED);
        let mut events = Vec::new();
        frame(&mut session, &mut events);
        assert_eq!(session.phase, SessionPhase::GameOver);
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                score: 0,
                high_score: 0
            }]
        );

        // Further frames are idempotent no-ops
        let scroll = session.scroll;
        let count = session.obstacles.len();
        events.clear();
        frame(&mut session, &mut events);
        frame(&mut session, &mut events);
        assert!(events.is_empty());
        assert_eq!(session.scroll, scroll);
        assert_eq!(session.obstacles.len(), count);
    }

    #[test]
    fn test_physics_runs_before_collision() {
        // Obstacle one advance away from the kill window: the frame must move
        // it first and then detect the hit, all within the same call.
        let mut session = session_with_obstacle_at(PLAYER_X + PLAYER_WIDTH / 2.5 + BASE_SPEED);
        let mut events = Vec::new();
        frame(&mut session, &mut events);
        assert_eq!(session.phase, SessionPhase::GameOver);
    }

    #[test]
    fn test_jump_clears_obstacle() {
        let mut session = session_with_obstacle_at(PLAYER_X);
        let mut events = Vec::new();
        jump(&mut session, &mut events);
        assert_eq!(events, vec![GameEvent::Jumped]);

        // Airborne bypass: overlapping obstacle does not end the run
        events.clear();
        frame(&mut session, &mut events);
        assert!(session.is_running());
    }

    #[test]
    fn test_jump_is_ignored_while_airborne() {
        let mut session = Session::new();
        let mut events = Vec::new();
        jump(&mut session, &mut events);
        jump(&mut session, &mut events);
        assert_eq!(events, vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_landing_emits_event() {
        let mut session = Session::new();
        let mut events = Vec::new();
        jump(&mut session, &mut events);
        events.clear();

        let mut saw_landed = false;
        for _ in 0..200 {
            frame(&mut session, &mut events);
            if events.contains(&GameEvent::Landed) {
                saw_landed = true;
                break;
            }
        }
        assert!(saw_landed);
        assert!(!session.player.airborne);
        assert_eq!(session.player.y, GROUND_Y);
    }

    #[test]
    fn test_timers_gate_on_phase() {
        let mut session = session_with_obstacle_at(PLAYER_X);
        let mut events = Vec::new();
        score_tick(&mut session);
        spawn_tick(&mut session);
        assert_eq!(session.score.score, 1);
        assert_eq!(session.obstacles.len(), 2);

        frame(&mut session, &mut events);
        assert_eq!(session.phase, SessionPhase::GameOver);

        // Timers keep firing after game over; the sim ignores them
        score_tick(&mut session);
        spawn_tick(&mut session);
        assert_eq!(session.score.score, 1);
        assert_eq!(session.obstacles.len(), 2);
    }

    #[test]
    fn test_restart_resets_everything_but_high_score() {
        let mut session = session_with_obstacle_at(PLAYER_X);
        let mut events = Vec::new();
        for _ in 0..25 {
            score_tick(&mut session);
        }
        frame(&mut session, &mut events);
        assert_eq!(session.phase, SessionPhase::GameOver);
        assert_eq!(session.score.high_score, 25);

        events.clear();
        restart(&mut session, &mut events);
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert!(session.is_running());
        assert_eq!(session.score.score, 0);
        assert_eq!(session.score.speed, BASE_SPEED);
        assert_eq!(session.score.high_score, 25);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player.y, GROUND_Y);
        assert!(!session.player.airborne);
    }

    #[test]
    fn test_restart_while_running_is_noop() {
        let mut session = Session::new();
        let mut events = Vec::new();
        for _ in 0..5 {
            score_tick(&mut session);
        }
        restart(&mut session, &mut events);
        assert!(events.is_empty());
        assert_eq!(session.score.score, 5);
    }

    #[test]
    fn test_lower_score_run_keeps_record() {
        let mut session = session_with_obstacle_at(PLAYER_X);
        let mut events = Vec::new();
        for _ in 0..30 {
            score_tick(&mut session);
        }
        frame(&mut session, &mut events);
        assert_eq!(session.score.high_score, 30);

        restart(&mut session, &mut events);
        session
            .obstacles
            .spawn(PLAYER_X, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        for _ in 0..7 {
            score_tick(&mut session);
        }
        frame(&mut session, &mut events);
        assert_eq!(session.phase, SessionPhase::GameOver);
        assert_eq!(session.score.score, 7);
        assert_eq!(session.score.high_score, 30);
    }
}
