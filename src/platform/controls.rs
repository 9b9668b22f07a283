//! Button controls

use crate::sim::{Difficulty, GameState, reset_point, set_difficulty};

/// An activation from one of the control buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Re-serve without touching the score
    Reset,
    SetDifficulty(Difficulty),
}

/// Button element ids and the control each one emits
pub const BUTTONS: [(&str, Control); 4] = [
    ("resetBtn", Control::Reset),
    ("easyBtn", Control::SetDifficulty(Difficulty::Easy)),
    ("mediumBtn", Control::SetDifficulty(Difficulty::Medium)),
    ("impossibleBtn", Control::SetDifficulty(Difficulty::Impossible)),
];

impl Control {
    pub fn apply(self, state: &mut GameState) {
        match self {
            Control::Reset => {
                log::info!("Manual reset");
                reset_point(state);
            }
            Control::SetDifficulty(difficulty) => set_difficulty(state, difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_center;

    #[test]
    fn test_difficulty_buttons_reserve_at_tier_speed() {
        let mut state = GameState::new(3);
        state.scores.computer = 2;
        for (_, control) in BUTTONS {
            if let Control::SetDifficulty(difficulty) = control {
                control.apply(&mut state);
                assert_eq!(state.difficulty, difficulty);
                assert_eq!(state.ball.vel.x.abs(), state.base_speed());
                assert_eq!(state.scores.computer, 2);
            }
        }
    }

    #[test]
    fn test_reset_keeps_difficulty_and_scores() {
        let mut state = GameState::new(3);
        state.difficulty = Difficulty::Impossible;
        state.scores.player = 4;
        state.ball.pos.x = 12.0;
        Control::Reset.apply(&mut state);
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel.x.abs(), 6.0);
        assert_eq!(state.difficulty, Difficulty::Impossible);
        assert_eq!(state.scores.player, 4);
    }

    #[test]
    fn test_every_button_is_mapped() {
        let ids: Vec<&str> = BUTTONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, ["resetBtn", "easyBtn", "mediumBtn", "impossibleBtn"]);
    }
}
