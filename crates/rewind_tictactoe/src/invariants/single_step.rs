//! Single step invariant: each snapshot adds exactly one mark.

use super::super::{GameHistory, Mark, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ by one newly placed mark.
///
/// For every k >= 1, `snapshots[k]` differs from `snapshots[k - 1]` in
/// exactly one square, which went from empty to the mark whose turn it
/// was at cursor `k - 1`. Together with an empty origin this also means
/// the marks alternate X, O, X, O, ...
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                match before.diff(after).as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == Square::Occupied(Mark::for_cursor(k))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player whose turn it was"
    }
}
