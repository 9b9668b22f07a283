//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame. There is no
//! delta-time: ball speed is expressed in field units per frame.

use glam::Vec2;
use rand::Rng;

use super::powerup::PowerUpKind;
use super::state::{Difficulty, GameEvent, GameState, PowerUp, Side};
use crate::consts::*;
use crate::{clamp_paddle_y, field_center};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move the player paddle up
    pub up: bool,
    /// Move the player paddle down
    pub down: bool,
}

impl TickInput {
    /// Steer the player paddle toward the ball (headless runs and demos)
    pub fn autopilot(state: &GameState) -> Self {
        let center = state.player.center_y();
        let dead_zone = state.tuning.paddle_step;
        let ball_y = state.ball.pos.y;
        Self {
            up: ball_y < center - dead_zone,
            down: ball_y > center + dead_zone,
        }
    }
}

/// Advance the game by one frame: input, then simulation
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    apply_input(state, input);
    step(state)
}

/// Move the player paddle one discrete step per held key
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.paddle_step;
    let paddle = &mut state.player;

    if input.up && paddle.y > 0.0 {
        paddle.y -= step;
    }
    if input.down && paddle.y < paddle.max_y() {
        paddle.y += step;
    }
    paddle.y = clamp_paddle_y(paddle.y, paddle.height);
}

/// Advance ball, opponent, scoring and power-ups by one frame
pub fn step(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    // Euler step
    state.ball.pos += state.ball.vel;

    // Top/bottom walls: flip only, no position correction
    let ball = &mut state.ball;
    if ball.pos.y <= 0.0 || ball.pos.y >= FIELD_HEIGHT {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Paddles: center-point test against the hit bands
    let boost = state.tuning.paddle_hit_boost;
    if ball.pos.x <= PLAYER_HIT_BAND && state.player.spans(ball.pos.y) {
        ball.vel.x = ball.vel.x.abs() + boost;
        events.push(GameEvent::PaddleHit(Side::Player));
    } else if ball.pos.x >= COMPUTER_HIT_BAND && state.computer.spans(ball.pos.y) {
        ball.vel.x = -ball.vel.x.abs() - boost;
        events.push(GameEvent::PaddleHit(Side::Computer));
    }

    track_ball(state);

    // Ball out of bounds
    if state.ball.pos.x <= 0.0 {
        score_point(state, Side::Computer, &mut events);
    } else if state.ball.pos.x >= FIELD_WIDTH {
        score_point(state, Side::Player, &mut events);
    }

    if state.power_up.is_none() && state.rng.random_bool(state.tuning.spawn_chance) {
        let power_up = spawn_power_up(state);
        log::debug!(
            "Frame {}: {:?} spawned at ({:.0}, {:.0})",
            state.frame,
            power_up.kind,
            power_up.pos.x,
            power_up.pos.y
        );
        events.push(GameEvent::PowerUpSpawned(power_up.kind));
        state.power_up = Some(power_up);
    }

    if let Some(power_up) = state.power_up {
        if power_up.touches(state.ball.pos, state.tuning.pickup_tolerance) {
            state.power_up = None;
            power_up
                .kind
                .apply(&mut state.player, &mut state.ball, &state.tuning);
            log::debug!("Frame {}: {:?} collected", state.frame, power_up.kind);
            events.push(GameEvent::PowerUpCollected(power_up.kind));
        }
    }

    events
}

/// Opponent follows the ball, with an occasional random jolt
fn track_ball(state: &mut GameState) {
    let gain = state.tracking_gain();
    let paddle = &mut state.computer;
    paddle.y += (state.ball.pos.y - paddle.center_y()) * gain;

    if state.rng.random_bool(state.tuning.jolt_chance) {
        let jolt = state.tuning.jolt_amount;
        paddle.y += if state.rng.random_bool(0.5) { jolt } else { -jolt };
    }

    paddle.y = clamp_paddle_y(paddle.y, paddle.height);
}

fn score_point(state: &mut GameState, side: Side, events: &mut Vec<GameEvent>) {
    state.scores.award(side);
    log::info!(
        "{:?} scores ({} - {})",
        side,
        state.scores.player,
        state.scores.computer
    );
    events.push(GameEvent::Scored(side));
    reset_point(state);
}

/// Pick a kind and a position inside the spawn margin
fn spawn_power_up(state: &mut GameState) -> PowerUp {
    let margin = state.tuning.spawn_margin;
    let x = state.rng.random::<f32>() * (FIELD_WIDTH - margin * 2.0) + margin;
    let y = state.rng.random::<f32>() * (FIELD_HEIGHT - margin * 2.0) + margin;
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    PowerUp {
        pos: Vec2::new(x, y),
        kind,
    }
}

/// Re-serve from the center with default sizes. Scores are kept.
pub fn reset_point(state: &mut GameState) {
    let base = state.base_speed();
    let vx = if state.rng.random_bool(0.5) { base } else { -base };
    let vy = if state.rng.random_bool(0.5) { base } else { -base };

    state.ball.pos = field_center();
    state.ball.vel = Vec2::new(vx, vy);
    state.ball.radius = state.tuning.ball_radius;

    let height = state.tuning.paddle_height;
    state.player.height = height;
    state.computer.height = height;
}

/// Switch tiers and re-serve immediately
pub fn set_difficulty(state: &mut GameState, difficulty: Difficulty) {
    state.difficulty = difficulty;
    log::info!(
        "Difficulty set to {} (base speed {})",
        difficulty.as_str(),
        state.base_speed()
    );
    reset_point(state);
}
