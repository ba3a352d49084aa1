//! Results of history operations.
//!
//! Every mutating call on [`GameHistory`](crate::GameHistory) returns a
//! value describing what happened, so the presentation layer can decide
//! whether to redraw without diffing state itself.

use super::{Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A mark successfully placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Placement {
    /// The mark that was placed.
    mark: Mark,
    /// Where it was placed.
    position: Position,
    /// Move number of the new snapshot (1 for the first move).
    move_number: usize,
    /// Future snapshots dropped because the move was made from the past.
    discarded: usize,
}

impl Placement {
    pub(crate) fn new(mark: Mark, position: Position, move_number: usize, discarded: usize) -> Self {
        Self {
            mark,
            position,
            move_number,
            discarded,
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The current snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    Decided(Mark),
    /// The target square is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

/// Outcome of [`GameHistory::apply_move`](crate::GameHistory::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new snapshot.
    Placed(Placement),
    /// The move was ignored; history and cursor are unchanged.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if history or cursor changed.
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }

    /// Returns the placement if the move was accepted.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            MoveOutcome::Placed(placement) => Some(placement),
            MoveOutcome::Rejected(_) => None,
        }
    }
}

/// Cursor movement produced by a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Jump {
    /// Cursor before the jump.
    from: usize,
    /// Cursor after the jump.
    to: usize,
}

impl Jump {
    pub(crate) fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns true if the cursor moved.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Status line for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current snapshot has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; this mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// One entry of the jump-to-move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// "start" for index 0, "move #n" otherwise.
    label: String,
}

impl MoveEntry {
    /// Creates the entry for history index `index`.
    pub fn for_index(index: usize) -> Self {
        let label = if index == 0 {
            "start".to_string()
        } else {
            format!("move #{}", index)
        };
        Self { index, label }
    }
}
