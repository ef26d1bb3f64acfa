//! Rock Runner - a side-scrolling runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic session logic (jump physics, obstacles, collision, scoring)
//! - `renderer`: WebGPU rendering pipeline (procedural SDF scene)
//! - `audio`: Procedural Web Audio sound effects and loops
//! - `settings`: User preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameEvent, Session, SessionPhase};

/// Game configuration constants
pub mod consts {
    /// Virtual playfield size; world units are design-resolution pixels
    pub const VIEW_WIDTH: f32 = 1920.0;
    pub const VIEW_HEIGHT: f32 = 1280.0;

    /// Ground line: the player's resting vertical position
    pub const GROUND_Y: f32 = VIEW_HEIGHT - 350.0;

    /// Gravity acceleration per frame while airborne
    pub const GRAVITY: f32 = 1.5;
    /// Jump impulse (negative = upward)
    pub const JUMP_IMPULSE: f32 = -31.0;

    /// Horizontal scroll speed at the start of a run
    pub const BASE_SPEED: f32 = 6.0;
    /// Speed gained each time the score crosses a multiple of SPEED_STEP
    pub const SPEED_INCREMENT: f32 = 0.01;
    /// Score interval between speed increases
    pub const SPEED_STEP: u32 = 10;

    /// Scoring cadence (wall clock, independent of frame rate)
    pub const SCORE_INTERVAL_MS: i32 = 100;
    /// Obstacle spawn cadence (wall clock)
    pub const SPAWN_INTERVAL_MS: i32 = 2000;

    /// Player sprite placement and size
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;

    /// Obstacle sprite placement and size
    pub const OBSTACLE_Y: f32 = 750.0;
    pub const OBSTACLE_WIDTH: f32 = 150.0;
    pub const OBSTACLE_HEIGHT: f32 = 150.0;
    /// Draw-time anchor for obstacle sprites. Hitboxes use the raw rects;
    /// only the rendered quad is shifted by this fraction of the size.
    pub const OBSTACLE_ANCHOR: f32 = 0.4;

    /// Hitbox tuning: widths are divided by this (not 2) in the horizontal
    /// overlap test, shrinking the effective hitbox relative to the sprite.
    /// Deliberate feel tuning, not a geometric derivation.
    pub const HITBOX_WIDTH_DIVISOR: f32 = 2.5;
    /// Hitbox tuning: half-height vertical tolerance window.
    pub const HITBOX_HEIGHT_DIVISOR: f32 = 2.0;
}
