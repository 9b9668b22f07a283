//! Score displays

use crate::sim::{GameState, Side};

/// Element id of the player's score display
pub const PLAYER_SCORE_ID: &str = "playerScore";
/// Element id of the computer's score display
pub const COMPUTER_SCORE_ID: &str = "aiScore";

/// Something that shows a score
pub trait ScoreSink {
    fn set_score(&mut self, side: Side, score: u32);
}

/// Push both scores to the displays
pub fn push_scores(state: &GameState, sink: &mut impl ScoreSink) {
    sink.set_score(Side::Player, state.scores.player);
    sink.set_score(Side::Computer, state.scores.computer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Board(HashMap<Side, u32>);

    impl ScoreSink for Board {
        fn set_score(&mut self, side: Side, score: u32) {
            self.0.insert(side, score);
        }
    }

    #[test]
    fn test_push_scores() {
        let mut state = GameState::new(1);
        state.scores.player = 2;
        state.scores.computer = 5;
        let mut board = Board::default();
        push_scores(&state, &mut board);
        assert_eq!(board.0[&Side::Player], 2);
        assert_eq!(board.0[&Side::Computer], 5);
    }
}
