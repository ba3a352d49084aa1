//! Empty origin invariant: history starts from the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: the first snapshot exists and is the empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameHistory> for EmptyOriginInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(EmptyOriginInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_missing_origin_violates() {
        let mut history = GameHistory::new();
        history.snapshots.clear();
        assert!(!EmptyOriginInvariant::holds(&history));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!EmptyOriginInvariant::holds(&history));
    }
}
