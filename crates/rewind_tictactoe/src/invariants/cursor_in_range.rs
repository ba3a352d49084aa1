//! Cursor range invariant.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the cursor always names an existing snapshot.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
