//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Nothing here
//! looks at move history or at whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

/// Board Evaluator: the winning mark on `board`, or `None`.
///
/// A full board without a winning line also yields `None`; callers that
/// want to report a draw combine this with [`is_full`].
pub fn evaluate(board: &crate::Board) -> Option<crate::Mark> {
    check_winner(board)
}
