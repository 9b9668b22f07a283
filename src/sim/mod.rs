//! Simulation module
//!
//! All gameplay logic lives here:
//! - One frame per call, no delta-time
//! - Seeded RNG only, so a run replays from its seed
//! - No rendering or platform dependencies

pub mod powerup;
pub mod state;
pub mod tick;

pub use powerup::PowerUpKind;
pub use state::{Ball, Difficulty, GameEvent, GameState, Paddle, PowerUp, Scores, Side};
pub use tick::{TickInput, apply_input, reset_point, set_difficulty, step, tick};
