//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board: win detection, draw
//! detection, and the combined outcome. Rules are separated from board
//! storage so the session can recompute the outcome of any history
//! snapshot without carrying redundant state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::types::{Board, Outcome};

/// Evaluates the outcome of a board.
///
/// A winner takes precedence; a full board with no winner is a draw;
/// anything else is in progress.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Won(winner);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::types::Mark;

    fn board_from(moves: &[(Mark, Position)]) -> Board {
        moves.iter().fold(Board::new(), |board, &(mark, pos)| {
            board.place(Move::new(mark, pos)).expect("empty square")
        })
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_win() {
        let board = board_from(&[
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::Center),
            (Mark::X, Position::TopCenter),
            (Mark::O, Position::BottomRight),
            (Mark::X, Position::TopRight),
        ]);
        assert_eq!(outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        // X O X / O X X / O X O
        let board = board_from(&[
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::TopCenter),
            (Mark::X, Position::TopRight),
            (Mark::O, Position::MiddleLeft),
            (Mark::X, Position::Center),
            (Mark::X, Position::MiddleRight),
            (Mark::O, Position::BottomLeft),
            (Mark::X, Position::BottomCenter),
            (Mark::O, Position::BottomRight),
        ]);
        assert_eq!(outcome(&board), Outcome::Draw);
    }
}
