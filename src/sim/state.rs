//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::powerup::PowerUpKind;
use crate::consts::*;
use crate::field_center;
use crate::tuning::Tuning;

/// Opponent strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Impossible,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Impossible => "impossible",
        }
    }
}

/// Which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

/// A paddle (left edge fixed, moves vertically)
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle vertically centered on the field
    pub fn centered(x: f32, height: f32) -> Self {
        Self {
            x,
            y: FIELD_HEIGHT / 2.0 - height / 2.0,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether a Y coordinate lies within the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }

    /// Largest top Y that keeps the paddle on the field
    pub fn max_y(&self) -> f32 {
        (FIELD_HEIGHT - self.height).max(0.0)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// An uncollected power-up on the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    /// Ball center within `tolerance` on both axes
    pub fn touches(&self, point: Vec2, tolerance: f32) -> bool {
        (point.x - self.pos.x).abs() <= tolerance && (point.y - self.pos.y).abs() <= tolerance
    }
}

/// Running score. Only a page reload clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub player: u32,
    pub computer: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    Scored(Side),
    PowerUpSpawned(PowerUpKind),
    PowerUpCollected(PowerUpKind),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Source of all gameplay randomness
    pub rng: Pcg32,
    /// Balance table
    pub tuning: Tuning,
    /// Active tier; survives point resets
    pub difficulty: Difficulty,
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    /// At most one power-up on the field
    pub power_up: Option<PowerUp>,
    pub scores: Scores,
    /// Frames simulated so far
    pub frame: u64,
}

/// Speed of each velocity component before the first reset
const OPENING_SPEED: f32 = 4.0;

impl GameState {
    /// New game with the default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// New game with a custom balance table.
    ///
    /// The table must pass [`Tuning::validate`]; [`Tuning::from_json`] and
    /// `Tuning::load` already guarantee that.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "invalid tuning: {:?}",
            tuning.validate()
        );
        let paddle_height = tuning.paddle_height;
        let ball_radius = tuning.ball_radius;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            difficulty: Difficulty::default(),
            player: Paddle::centered(PLAYER_PADDLE_X, paddle_height),
            computer: Paddle::centered(COMPUTER_PADDLE_X, paddle_height),
            ball: Ball {
                pos: field_center(),
                vel: Vec2::splat(OPENING_SPEED),
                radius: ball_radius,
            },
            power_up: None,
            scores: Scores::default(),
            frame: 0,
        }
    }

    /// Tracking gain of the active tier
    pub fn tracking_gain(&self) -> f32 {
        self.tuning.difficulty(self.difficulty).tracking_gain
    }

    /// Serve speed of the active tier
    pub fn base_speed(&self) -> f32 {
        self.tuning.difficulty(self.difficulty).base_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_opening() {
        let state = GameState::new(1);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.ball.radius, 10.0);
        assert_eq!(state.player.y, 200.0);
        assert_eq!(state.computer.y, 200.0);
        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.computer.x, 770.0);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.scores, Scores::default());
        assert!(state.power_up.is_none());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_difficulty_names_match_cli_values() {
        use clap::ValueEnum;
        for &level in Difficulty::value_variants() {
            assert_eq!(Difficulty::from_str(level.as_str(), false), Ok(level));
        }
        assert!(Difficulty::from_str("nightmare", false).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid tuning")]
    fn test_with_tuning_rejects_unvalidated_table() {
        let tuning = Tuning {
            spawn_chance: 1.5,
            ..Tuning::default()
        };
        GameState::with_tuning(1, tuning);
    }

    #[test]
    fn test_paddle_span_is_inclusive() {
        let paddle = Paddle { x: 20.0, y: 100.0, height: 100.0 };
        assert!(paddle.spans(100.0));
        assert!(paddle.spans(200.0));
        assert!(!paddle.spans(99.9));
        assert!(!paddle.spans(200.1));
        assert_eq!(paddle.center_y(), 150.0);
    }

    #[test]
    fn test_power_up_tolerance_is_square() {
        let power_up = PowerUp {
            pos: Vec2::new(100.0, 100.0),
            kind: PowerUpKind::BallShrink,
        };
        assert!(power_up.touches(Vec2::new(112.0, 88.0), 12.0));
        assert!(!power_up.touches(Vec2::new(112.1, 100.0), 12.0));
        assert!(!power_up.touches(Vec2::new(100.0, 87.9), 12.0));
    }

    #[test]
    fn test_scores_award() {
        let mut scores = Scores::default();
        scores.award(Side::Computer);
        scores.award(Side::Computer);
        scores.award(Side::Player);
        assert_eq!(scores.get(Side::Computer), 2);
        assert_eq!(scores.get(Side::Player), 1);
    }
}
