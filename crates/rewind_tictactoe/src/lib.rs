//! Rewind Tic-Tac-Toe - game logic with full move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`rules::evaluate`])
//! - **History**: the [`GameHistory`] controller, owning every snapshot and
//!   the cursor into them
//! - **Invariants**: properties of a history, checked in debug builds
//!
//! A presentation layer owns a [`GameHistory`], forwards cell and
//! history selections to it, and reads back the current board, status and
//! move list.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Mark, Position, Status};
//!
//! let mut game = GameHistory::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleRight,
//!     Position::TopRight,
//! ] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! // Rewind and branch.
//! game.jump_to(2).unwrap();
//! assert!(game.apply_move(Position::BottomLeft).changed());
//! assert_eq!(game.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use error::HistoryError;
pub use history::GameHistory;
pub use outcome::{Jump, MoveEntry, MoveOutcome, Placement, Rejection, Status};
pub use position::Position;
pub use types::{Board, Mark, Square};
