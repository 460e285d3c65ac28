//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};

/// The 8 lines that decide a game, in scan order: rows, columns,
/// diagonals. [`check_winner`] and [`winning_line`] share this constant
/// so their scans can never disagree.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).mark())
}

/// Returns the three cells of the first complete line found, or `None`
/// if no line is complete.
///
/// Scans rows, then columns, then diagonals; under legal play at most
/// one line can be complete, so the order is unobservable in practice.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    fn occupy(board: Board, mark: Mark, positions: &[Position]) -> Board {
        positions.iter().fold(board, |board, &pos| {
            board.place(Move::new(mark, pos)).expect("empty square")
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = occupy(
            Board::new(),
            Mark::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_middle_column() {
        let board = occupy(
            Board::new(),
            Mark::O,
            &[Position::TopCenter, Position::Center, Position::BottomCenter],
        );
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert_eq!(
            winning_line(&board),
            Some([
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter
            ])
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = occupy(
            Board::new(),
            Mark::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = occupy(
            Board::new(),
            Mark::X,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = occupy(
            Board::new(),
            Mark::X,
            &[Position::TopLeft, Position::TopCenter],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .place(Move::new(Mark::X, Position::TopLeft))
            .and_then(|b| b.place(Move::new(Mark::O, Position::TopCenter)))
            .and_then(|b| b.place(Move::new(Mark::X, Position::TopRight)))
            .expect("empty squares");
        assert_eq!(check_winner(&board), None);
    }
}
