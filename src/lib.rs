//! Pure tic-tac-toe game logic.
//!
//! This crate is the rules engine behind a tic-tac-toe UI: it owns the
//! board model, win/draw detection, a one-ply computer opponent, and a
//! session state machine with full move-history navigation. Rendering,
//! input wiring, and scheduling live in the consuming collaborator,
//! which drives the core through [`GameSession`] and reads back
//! [`GameView`] snapshots.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Mode, Position};
//!
//! let mut session = GameSession::new(Mode::VsComputer);
//! session.apply_human_move(Position::Center);
//! session.maybe_computer_move();
//!
//! let view = session.current_view();
//! assert_eq!(view.moves.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod rules;
mod selector;
mod session;
mod types;
mod view;

// Crate-level exports - board model
pub use types::{Board, Mark, Outcome, Square};

// Crate-level exports - positions and moves
pub use action::{IllegalMove, Move};
pub use position::Position;

// Crate-level exports - rules
pub use rules::{check_winner, is_draw, is_full, outcome, winning_line};

// Crate-level exports - computer opponent
pub use selector::select_move;

// Crate-level exports - session state machine
pub use session::{GameSession, HistoryEntry, Mode, OutOfRange};

// Crate-level exports - collaborator-facing view
pub use view::{GameView, MoveRecord};
