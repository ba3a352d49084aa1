//! Game history controller with time travel.
//!
//! [`GameHistory`] records one immutable [`Board`] snapshot per move and a
//! cursor selecting the snapshot currently shown. Whose turn it is and who
//! has won are always recomputed from `(snapshots, cursor)`; neither is
//! stored, so jumping around the history can never leave them stale.

use super::error::HistoryError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::outcome::{Jump, MoveEntry, MoveOutcome, Placement, Rejection, Status};
use super::rules;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Ordered board snapshots plus the cursor into them.
///
/// Invariants:
/// - `snapshots` is never empty and `snapshots[0]` is the empty board
/// - `snapshots[k]` differs from `snapshots[k - 1]` in exactly one square
/// - `cursor < snapshots.len()`
///
/// Deserialization checks these invariants and fails instead of producing
/// a history that could panic later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Plays the current player's mark at `position`.
    ///
    /// If the current snapshot already has a winner, or `position` is
    /// occupied, nothing changes and a [`MoveOutcome::Rejected`] is
    /// returned. Otherwise every snapshot after the cursor is discarded,
    /// the new board is appended, and the cursor moves to it.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let current = self.current_snapshot();

        if let Some(winner) = rules::evaluate(current) {
            debug!(%winner, "Move ignored, game already decided");
            return MoveOutcome::Rejected(Rejection::Decided(winner));
        }

        if !current.is_empty(position) {
            debug!(%position, "Move ignored, square occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(position));
        }

        let mark = self.player_to_move();
        let next = current.with_mark(position, mark);

        let discarded = self.snapshots.len() - 1 - self.cursor;
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after move"
        );

        info!(%mark, %position, move_number = self.cursor, discarded, "Move placed");
        MoveOutcome::Placed(Placement::new(mark, position, self.cursor, discarded))
    }

    /// Moves the cursor to history entry `index`.
    ///
    /// History is left intact, so later entries stay reachable until the
    /// next successful move.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `index` is not a valid history index.
    /// The cursor is unchanged in that case.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<Jump, HistoryError> {
        if index >= self.snapshots.len() {
            warn!(index, len = self.snapshots.len(), "Jump past end of history");
            return Err(HistoryError::new(format!(
                "Cannot jump to move {} in a history of {} entries",
                index,
                self.snapshots.len()
            )));
        }

        let from = self.cursor;
        self.cursor = index;
        info!(from, to = index, "Jumped in history");
        Ok(Jump::new(from, index))
    }

    /// Steps the cursor one entry back. Returns `None` at the start.
    #[instrument(skip(self))]
    pub fn step_back(&mut self) -> Option<Jump> {
        let target = self.cursor.checked_sub(1)?;
        self.jump_to(target).ok()
    }

    /// Steps the cursor one entry forward. Returns `None` at the latest entry.
    #[instrument(skip(self))]
    pub fn step_forward(&mut self) -> Option<Jump> {
        if self.is_at_latest() {
            return None;
        }
        self.jump_to(self.cursor + 1).ok()
    }

    /// Moves the cursor to the most recent entry.
    #[instrument(skip(self))]
    pub fn jump_to_latest(&mut self) -> Jump {
        let jump = Jump::new(self.cursor, self.snapshots.len() - 1);
        self.cursor = self.snapshots.len() - 1;
        jump
    }

    /// The snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Winner of the current snapshot, if any.
    pub fn current_winner(&self) -> Option<Mark> {
        rules::evaluate(self.current_snapshot())
    }

    /// Mark to play next, derived from cursor parity.
    ///
    /// Meaningless once [`current_winner`](Self::current_winner) is `Some`.
    pub fn player_to_move(&self) -> Mark {
        Mark::for_cursor(self.cursor)
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        match self.current_winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.player_to_move()),
        }
    }

    /// One entry per snapshot, in history order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.snapshots.len()).map(MoveEntry::for_index).collect()
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns true if the cursor is on the most recent snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked serialized form of a [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
        };

        HistoryInvariants::check_all(&history).map_err(|violations| {
            let reasons = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reasons, "Rejected invalid history");
            HistoryError::new(format!("Invalid history: {}", reasons))
        })?;

        Ok(history)
    }
}
