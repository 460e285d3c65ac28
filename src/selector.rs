//! One-ply move selection for the computer opponent.

use crate::action::Move;
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Mark};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a move for `mark` on `board`.
///
/// Priority order:
/// 1. For the opponent's mark first, then for `mark` itself: the first
///    empty square (row-major) where placing that mark would complete a
///    line. Blocking an opponent's win is checked before taking an own
///    win, so a square that does both counts as a block.
/// 2. Otherwise a uniformly random empty square from `rng`.
///
/// Returns `None` only when the board is full. One ply deep on
/// purpose: the opponent stays beatable.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    let empties = Position::valid_moves(board);

    for probe in [mark.opponent(), mark] {
        for &pos in &empties {
            let decisive = board
                .place(Move::new(probe, pos))
                .is_ok_and(|next| check_winner(&next).is_some());
            if decisive {
                debug!(?pos, ?probe, "selected decisive square");
                return Some(pos);
            }
        }
    }

    empties.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn occupy(board: Board, mark: Mark, positions: &[Position]) -> Board {
        positions.iter().fold(board, |board, &pos| {
            board.place(Move::new(mark, pos)).expect("empty square")
        })
    }

    #[test]
    fn test_blocks_immediate_opponent_win() {
        // X threatens the top row; O must take Top-right.
        let board = occupy(
            Board::new(),
            Mark::X,
            &[Position::TopLeft, Position::TopCenter],
        );
        let board = occupy(board, Mark::O, &[Position::Center]);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&board, Mark::O, &mut rng),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_takes_own_win_when_opponent_has_none() {
        // O threatens the left column and X threatens nothing.
        let board = occupy(
            Board::new(),
            Mark::O,
            &[Position::TopLeft, Position::MiddleLeft],
        );
        let board = occupy(board, Mark::X, &[Position::Center, Position::MiddleRight]);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&board, Mark::O, &mut rng),
            Some(Position::BottomLeft)
        );
    }

    #[test]
    fn test_prefers_block_over_own_win() {
        // O could win the top row at Top-right, but X threatens the
        // bottom row at Bottom-right; the block is scanned first even
        // though O's own win sits at a lower index.
        let board = occupy(
            Board::new(),
            Mark::O,
            &[Position::TopLeft, Position::TopCenter],
        );
        let board = occupy(
            board,
            Mark::X,
            &[Position::BottomLeft, Position::BottomCenter],
        );

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&board, Mark::O, &mut rng),
            Some(Position::BottomRight)
        );
    }

    #[test]
    fn test_full_board_yields_none() {
        // X O X / O X X / O X O
        let board = occupy(
            Board::new(),
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
        );
        let board = occupy(
            board,
            Mark::O,
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_move(&board, Mark::X, &mut rng), None);
    }

    #[test]
    fn test_random_fallback_picks_an_empty_square() {
        let board = occupy(Board::new(), Mark::X, &[Position::Center]);

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = select_move(&board, Mark::O, &mut rng).expect("board not full");
            assert!(board.is_empty(pos));
        }
    }
}
