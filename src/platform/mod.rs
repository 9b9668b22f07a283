//! Platform abstraction layer
//!
//! Host-facing pieces shared by the browser and native entry points:
//! - Keyboard state (`input`)
//! - Button controls (`controls`)
//! - Score displays (`score`)

pub mod controls;
pub mod input;
pub mod score;

pub use controls::Control;
pub use input::KeyState;
pub use score::{ScoreSink, push_scores};
