//! Move types and the illegal-move error.
//!
//! Moves are domain events, not side effects: they carry the player's
//! intent and can be validated, logged, and replayed independently of
//! the session that applies them.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Attempt to place a mark on an occupied square.
///
/// Reaching this error means the collaborator passed a wrong
/// coordinate; the board itself is still consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("square {} is already occupied", position.label())]
pub struct IllegalMove {
    /// The occupied position.
    pub position: Position,
}
