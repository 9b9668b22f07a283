//! Power Pong - a two-paddle arcade game with power-ups
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, scoring, power-ups, opponent AI)
//! - `renderer`: Drawing surface abstraction and WebGPU pipeline
//! - `platform`: Keyboard state, button controls and score displays
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{Difficulty, GameState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (never resized at runtime)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 10.0;
    /// Left edge of the player paddle
    pub const PLAYER_PADDLE_X: f32 = 20.0;
    /// Left edge of the computer paddle
    pub const COMPUTER_PADDLE_X: f32 = FIELD_WIDTH - 30.0;
    /// Ball center at or left of this X is inside the player's hit band
    pub const PLAYER_HIT_BAND: f32 = 30.0;
    /// Ball center at or right of this X is inside the computer's hit band
    pub const COMPUTER_HIT_BAND: f32 = FIELD_WIDTH - 30.0;

    /// Radius of the drawn power-up marker
    pub const POWER_UP_RADIUS: f32 = 12.0;
}

/// Center of the playfield
#[inline]
pub fn field_center() -> glam::Vec2 {
    glam::Vec2::new(consts::FIELD_WIDTH / 2.0, consts::FIELD_HEIGHT / 2.0)
}

/// Clamp a paddle's top Y so the whole paddle stays on the field.
///
/// A paddle taller than the field is pinned to the top.
#[inline]
pub fn clamp_paddle_y(y: f32, height: f32) -> f32 {
    y.min(consts::FIELD_HEIGHT - height).max(0.0)
}
