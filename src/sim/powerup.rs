//! Power-up kinds and their effects

use super::state::{Ball, Paddle};
use crate::clamp_paddle_y;
use crate::tuning::Tuning;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Player paddle grows
    PaddleGrow,
    /// Ball velocity scaled up
    BallSpeedUp,
    /// Ball radius shrinks (down to a floor)
    BallShrink,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::PaddleGrow,
        PowerUpKind::BallSpeedUp,
        PowerUpKind::BallShrink,
    ];

    /// Apply the effect. Effects stack and last until the next point reset.
    pub fn apply(&self, player: &mut Paddle, ball: &mut Ball, tuning: &Tuning) {
        match self {
            PowerUpKind::PaddleGrow => {
                player.height += tuning.paddle_grow;
                player.y = clamp_paddle_y(player.y, player.height);
            }
            PowerUpKind::BallSpeedUp => {
                ball.vel *= tuning.speed_up_factor;
            }
            PowerUpKind::BallShrink => {
                ball.radius = (ball.radius - tuning.ball_shrink).max(tuning.ball_min_radius);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn fixtures() -> (Paddle, Ball, Tuning) {
        (
            Paddle { x: 20.0, y: 200.0, height: 100.0 },
            Ball {
                pos: Vec2::new(400.0, 250.0),
                vel: Vec2::new(5.0, -5.0),
                radius: 10.0,
            },
            Tuning::default(),
        )
    }

    #[test]
    fn test_paddle_grow_stacks() {
        let (mut paddle, mut ball, tuning) = fixtures();
        PowerUpKind::PaddleGrow.apply(&mut paddle, &mut ball, &tuning);
        PowerUpKind::PaddleGrow.apply(&mut paddle, &mut ball, &tuning);
        assert_eq!(paddle.height, 140.0);
        assert_eq!(ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_paddle_grow_keeps_paddle_on_field() {
        let (mut paddle, mut ball, tuning) = fixtures();
        paddle.y = 400.0;
        PowerUpKind::PaddleGrow.apply(&mut paddle, &mut ball, &tuning);
        assert_eq!(paddle.y, 380.0);
    }

    #[test]
    fn test_speed_up_compounds() {
        let (mut paddle, mut ball, tuning) = fixtures();
        PowerUpKind::BallSpeedUp.apply(&mut paddle, &mut ball, &tuning);
        assert!((ball.vel.x - 6.0).abs() < 1e-4);
        assert!((ball.vel.y + 6.0).abs() < 1e-4);
        PowerUpKind::BallSpeedUp.apply(&mut paddle, &mut ball, &tuning);
        assert!((ball.vel.x - 7.2).abs() < 1e-4);
        assert_eq!(paddle.height, 100.0);
    }

    #[test]
    fn test_shrink_floors_at_minimum() {
        let (mut paddle, mut ball, tuning) = fixtures();
        PowerUpKind::BallShrink.apply(&mut paddle, &mut ball, &tuning);
        assert_eq!(ball.radius, 6.0);
        PowerUpKind::BallShrink.apply(&mut paddle, &mut ball, &tuning);
        assert_eq!(ball.radius, 5.0);
        PowerUpKind::BallShrink.apply(&mut paddle, &mut ball, &tuning);
        assert_eq!(ball.radius, 5.0);
    }

    proptest! {
        #[test]
        fn shrink_never_goes_below_floor(shrinks in 0usize..50) {
            let (mut paddle, mut ball, tuning) = fixtures();
            for _ in 0..shrinks {
                PowerUpKind::BallShrink.apply(&mut paddle, &mut ball, &tuning);
            }
            prop_assert!(ball.radius >= 5.0);
        }
    }
}
