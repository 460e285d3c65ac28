//! Read-only projection handed to the rendering collaborator.

use crate::position::Position;
use crate::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};

/// One line of the collaborator's move-history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// History step this move produced (1-based for the first move).
    pub step: usize,
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-based coordinates, matching the on-screen history list.
        write!(
            f,
            "Move #{}: {} -> ({},{})",
            self.step,
            self.mark,
            self.position.row() + 1,
            self.position.col() + 1
        )
    }
}

/// Everything the collaborator needs to render one frame.
///
/// Derived from the session's current step; holds no references back
/// into the session, so it can outlive subsequent mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    pub board: Board,
    /// Mark to move next.
    pub next_mark: Mark,
    /// Outcome of the current board.
    pub outcome: Outcome,
    /// Cells of the completed line, when someone has won.
    pub winning_line: Option<[Position; 3]>,
    /// Current step index, for highlighting the history list.
    pub step: usize,
    /// All recorded moves, oldest first.
    pub moves: Vec<MoveRecord>,
}
