//! Game session management: move history, time travel, and turn flow.

use crate::action::Move;
use crate::position::Position;
use crate::rules;
use crate::selector::select_move;
use crate::types::{Board, Mark};
use crate::view::{GameView, MoveRecord};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Play mode for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans sharing the board.
    TwoPlayer,
    /// Human plays X, the computer plays O.
    VsComputer,
}

/// One recorded step of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board snapshot after the move.
    pub board: Board,
    /// Mark to move next from this snapshot.
    pub next_mark: Mark,
    /// The move that produced this entry; `None` for the initial entry.
    pub last_move: Option<Move>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            last_move: None,
        }
    }
}

/// `jump_to_step` index outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("step {} is out of range (history has {} entries)", index, len)]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Number of history entries at the time of the call.
    pub len: usize,
}

/// A single game of tic-tac-toe with navigable move history.
///
/// The session owns an append-only sequence of board snapshots and a
/// step pointer into it. Applying a move from a non-latest step
/// truncates the later entries first (no redo once a new branch is
/// taken). Board and rule evaluation are pure; all mutable state lives
/// here.
///
/// Operations run synchronously to completion. The delay before the
/// computer replies is the collaborator's scheduling concern: it calls
/// [`GameSession::maybe_computer_move`] when it sees fit, and stale
/// invocations are rejected harmlessly by the decided/turn checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: Vec<HistoryEntry>,
    step: usize,
    mode: Mode,
    decided: bool,
}

impl GameSession {
    /// The computer always plays O; the human is X.
    pub const COMPUTER_MARK: Mark = Mark::O;

    /// Creates a new session in the given mode.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "Creating new game session");
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            mode,
            decided: false,
        }
    }

    /// Resets to a single initial entry (empty board, X to move) in
    /// the given mode.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) {
        info!(?mode, "Starting game");
        *self = Self::new(mode);
    }

    /// Changes the play mode. Always restarts the game.
    pub fn set_mode(&mut self, mode: Mode) {
        self.start(mode);
    }

    /// Restarts the game, keeping the current mode.
    pub fn restart(&mut self) {
        self.start(self.mode);
    }

    /// Applies a human move at the given position.
    ///
    /// Silently ignored when the game is decided, the square is
    /// occupied, or it is the computer's turn in vs-computer mode -
    /// the UI does not need defensive checks before forwarding clicks.
    #[instrument(skip(self), fields(mode = ?self.mode, step = self.step))]
    pub fn apply_human_move(&mut self, position: Position) {
        if self.decided {
            debug!(?position, "move ignored: game already decided");
            return;
        }
        let next_mark = self.current_entry().next_mark;
        if self.mode == Mode::VsComputer && next_mark == Self::COMPUTER_MARK {
            debug!(?position, "move ignored: computer to move");
            return;
        }
        self.advance(Move::new(next_mark, position));
    }

    /// Lets the computer move if one is due.
    ///
    /// A no-op unless the mode is [`Mode::VsComputer`], the game is
    /// undecided, and O is to move. The collaborator schedules this
    /// call (typically after a short delay so the reply is visible);
    /// the core itself holds no timers.
    pub fn maybe_computer_move(&mut self) {
        self.maybe_computer_move_with(&mut rand::thread_rng());
    }

    /// [`GameSession::maybe_computer_move`] with a caller-supplied RNG
    /// for the selector's random fallback.
    #[instrument(skip(self, rng), fields(mode = ?self.mode, step = self.step))]
    pub fn maybe_computer_move_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.mode != Mode::VsComputer || self.decided {
            debug!("computer move skipped");
            return;
        }
        let entry = self.current_entry();
        if entry.next_mark != Self::COMPUTER_MARK {
            debug!("computer move skipped: human to move");
            return;
        }
        if let Some(position) = select_move(&entry.board, Self::COMPUTER_MARK, rng) {
            self.advance(Move::new(Self::COMPUTER_MARK, position));
        }
    }

    /// Moves the step pointer to a previously recorded entry without
    /// altering history, and recomputes the decided flag from that
    /// entry's board.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index` is past the last entry.
    #[instrument(skip(self))]
    pub fn jump_to_step(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.history.len() {
            return Err(OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        debug!(from = self.step, to = index, "jumping to step");
        self.step = index;
        self.decided = rules::outcome(&self.history[index].board).is_decided();
        Ok(())
    }

    /// Builds the read-only projection the collaborator renders.
    ///
    /// Purely derived from the current entry; never mutates state.
    pub fn current_view(&self) -> GameView {
        let entry = self.current_entry();
        let moves = self
            .history
            .iter()
            .enumerate()
            .filter_map(|(step, entry)| {
                entry.last_move.map(|mv| MoveRecord {
                    step,
                    mark: mv.mark,
                    position: mv.position,
                })
            })
            .collect();

        GameView {
            board: entry.board,
            next_mark: entry.next_mark,
            outcome: rules::outcome(&entry.board),
            winning_line: rules::winning_line(&entry.board),
            step: self.step,
            moves,
        }
    }

    /// Returns the recorded history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the current step index.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true if the current step's game is over.
    pub fn is_decided(&self) -> bool {
        self.decided
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Returns the mark to move at the current step.
    pub fn next_mark(&self) -> Mark {
        self.current_entry().next_mark
    }

    fn current_entry(&self) -> &HistoryEntry {
        // step is kept in bounds by every mutation.
        &self.history[self.step]
    }

    /// Shared move application: truncate any redo branch, append the
    /// new snapshot, advance the pointer, refresh the decided flag.
    fn advance(&mut self, mv: Move) {
        let board = match self.current_entry().board.place(mv) {
            Ok(board) => board,
            Err(err) => {
                debug!(%err, "move ignored");
                return;
            }
        };
        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry {
            board,
            next_mark: mv.mark.opponent(),
            last_move: Some(mv),
        });
        self.step = self.history.len() - 1;
        self.decided = rules::outcome(&board).is_decided();
        debug!(%mv, step = self.step, decided = self.decided, "move applied");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::TwoPlayer)
    }
}
