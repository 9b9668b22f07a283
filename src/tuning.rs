//! Data-driven game balance
//!
//! Every gameplay number that is not field geometry lives here. The defaults
//! are the shipped balance; a JSON file can override any subset of fields.

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Per-tier opponent and serve settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTuning {
    /// Fraction of the distance to the ball the opponent closes per frame
    pub tracking_gain: f32,
    /// Speed of each velocity component after a point reset
    pub base_speed: f32,
}

/// Game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddles ===
    /// Player paddle movement per frame while a key is held
    pub paddle_step: f32,
    /// Paddle height after every point reset
    pub paddle_height: f32,
    /// Height added by a paddle-grow power-up
    pub paddle_grow: f32,

    // === Ball ===
    /// Ball radius after every point reset
    pub ball_radius: f32,
    /// Smallest radius a ball-shrink power-up can reach
    pub ball_min_radius: f32,
    /// Radius removed by a ball-shrink power-up
    pub ball_shrink: f32,
    /// Velocity multiplier of a ball-speed-up power-up
    pub speed_up_factor: f32,
    /// Horizontal speed added on every paddle hit
    pub paddle_hit_boost: f32,

    // === Opponent ===
    /// Per-frame chance of a random jolt
    pub jolt_chance: f64,
    /// Size of a random jolt
    pub jolt_amount: f32,

    // === Power-ups ===
    /// Per-frame spawn chance while no power-up is active
    pub spawn_chance: f64,
    /// Spawn positions keep this distance from every edge
    pub spawn_margin: f32,
    /// Ball center within this distance on both axes collects the power-up
    pub pickup_tolerance: f32,

    // === Difficulty tiers ===
    pub easy: DifficultyTuning,
    pub medium: DifficultyTuning,
    pub impossible: DifficultyTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_step: 10.0,
            paddle_height: 100.0,
            paddle_grow: 20.0,

            ball_radius: 10.0,
            ball_min_radius: 5.0,
            ball_shrink: 4.0,
            speed_up_factor: 1.2,
            paddle_hit_boost: 1.0,

            jolt_chance: 0.02,
            jolt_amount: 20.0,

            spawn_chance: 0.005,
            spawn_margin: 25.0,
            pickup_tolerance: 12.0,

            easy: DifficultyTuning {
                tracking_gain: 0.1,
                base_speed: 4.0,
            },
            medium: DifficultyTuning {
                tracking_gain: 0.3,
                base_speed: 5.0,
            },
            impossible: DifficultyTuning {
                tracking_gain: 0.8,
                base_speed: 6.0,
            },
        }
    }
}

impl Tuning {
    /// Settings for a difficulty tier
    pub fn difficulty(&self, difficulty: Difficulty) -> &DifficultyTuning {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Impossible => &self.impossible,
        }
    }

    /// Parse a (possibly partial) tuning table and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning table from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("failed to load tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.jolt_chance),
            "jolt_chance must be within [0, 1], got {}",
            self.jolt_chance
        );
        ensure!(
            (0.0..=1.0).contains(&self.spawn_chance),
            "spawn_chance must be within [0, 1], got {}",
            self.spawn_chance
        );
        ensure!(self.paddle_step > 0.0, "paddle_step must be positive");
        ensure!(self.paddle_height > 0.0, "paddle_height must be positive");
        ensure!(self.paddle_grow >= 0.0, "paddle_grow must not be negative");
        ensure!(self.ball_shrink >= 0.0, "ball_shrink must not be negative");
        ensure!(
            self.speed_up_factor >= 1.0,
            "speed_up_factor must be at least 1, got {}",
            self.speed_up_factor
        );
        ensure!(
            self.paddle_hit_boost >= 0.0,
            "paddle_hit_boost must not be negative"
        );
        ensure!(self.jolt_amount >= 0.0, "jolt_amount must not be negative");
        ensure!(
            self.pickup_tolerance >= 0.0,
            "pickup_tolerance must not be negative"
        );
        ensure!(self.ball_min_radius > 0.0, "ball_min_radius must be positive");
        ensure!(
            self.ball_radius >= self.ball_min_radius,
            "ball_radius ({}) is below ball_min_radius ({})",
            self.ball_radius,
            self.ball_min_radius
        );
        ensure!(
            self.spawn_margin >= 0.0
                && self.spawn_margin * 2.0 < crate::consts::FIELD_WIDTH.min(crate::consts::FIELD_HEIGHT),
            "spawn_margin {} leaves no room on the field",
            self.spawn_margin
        );
        for (name, tier) in [
            ("easy", &self.easy),
            ("medium", &self.medium),
            ("impossible", &self.impossible),
        ] {
            ensure!(
                tier.tracking_gain >= 0.0,
                "{name}.tracking_gain must not be negative"
            );
            ensure!(tier.base_speed > 0.0, "{name}.base_speed must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_difficulty_table() {
        let tuning = Tuning::default();
        assert_eq!(tuning.difficulty(Difficulty::Easy).tracking_gain, 0.1);
        assert_eq!(tuning.difficulty(Difficulty::Medium).tracking_gain, 0.3);
        assert_eq!(tuning.difficulty(Difficulty::Impossible).tracking_gain, 0.8);
        assert_eq!(tuning.difficulty(Difficulty::Easy).base_speed, 4.0);
        assert_eq!(tuning.difficulty(Difficulty::Medium).base_speed, 5.0);
        assert_eq!(tuning.difficulty(Difficulty::Impossible).base_speed, 6.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "paddle_step": 15.0, "spawn_chance": 0.0 }"#).unwrap();
        assert_eq!(tuning.paddle_step, 15.0);
        assert_eq!(tuning.spawn_chance, 0.0);
        assert_eq!(tuning.paddle_height, 100.0);
        assert_eq!(tuning.medium.base_speed, 5.0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "jolt_chance": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("jolt_chance"));
    }

    fn assert_rejected(json: &str, field: &str) {
        let err = Tuning::from_json(json).unwrap_err();
        assert!(
            format!("{err:#}").contains(field),
            "expected {field} in error, got: {err:#}"
        );
    }

    #[test]
    fn test_rejects_slowing_speed_up() {
        assert_rejected(r#"{ "speed_up_factor": 0.0 }"#, "speed_up_factor");
        assert_rejected(r#"{ "speed_up_factor": 0.9 }"#, "speed_up_factor");
    }

    #[test]
    fn test_rejects_negative_paddle_grow() {
        assert_rejected(r#"{ "paddle_grow": -300.0 }"#, "paddle_grow");
    }

    #[test]
    fn test_rejects_negative_ball_shrink() {
        assert_rejected(r#"{ "ball_shrink": -4.0 }"#, "ball_shrink");
    }

    #[test]
    fn test_rejects_stalled_paddle_step() {
        assert_rejected(r#"{ "paddle_step": 0.0 }"#, "paddle_step");
        assert_rejected(r#"{ "paddle_step": -10.0 }"#, "paddle_step");
    }

    #[test]
    fn test_rejects_negative_pickup_tolerance() {
        assert_rejected(r#"{ "pickup_tolerance": -1.0 }"#, "pickup_tolerance");
    }

    #[test]
    fn test_rejects_negative_paddle_hit_boost() {
        assert_rejected(r#"{ "paddle_hit_boost": -1.0 }"#, "paddle_hit_boost");
    }

    #[test]
    fn test_rejects_negative_jolt_amount() {
        assert_rejected(r#"{ "jolt_amount": -20.0 }"#, "jolt_amount");
    }

    #[test]
    fn test_accepts_boundary_values() {
        let tuning = Tuning::from_json(
            r#"{ "speed_up_factor": 1.0, "paddle_grow": 0.0, "ball_shrink": 0.0,
                 "pickup_tolerance": 0.0, "paddle_hit_boost": 0.0, "jolt_amount": 0.0 }"#,
        )
        .unwrap();
        assert_eq!(tuning.speed_up_factor, 1.0);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ paddle_step: }").unwrap_err();
        assert!(err.to_string().contains("invalid tuning JSON"));
    }
}
