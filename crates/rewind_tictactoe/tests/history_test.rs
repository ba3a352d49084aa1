//! Tests for the game history controller.

use rewind_tictactoe::invariants::{HistoryInvariants, InvariantSet};
use rewind_tictactoe::{
    Board, GameHistory, Mark, MoveOutcome, Position, Rejection, Square, Status,
};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("valid index")
}

fn play(history: &mut GameHistory, indices: &[usize]) {
    for &i in indices {
        assert!(
            history.apply_move(pos(i)).changed(),
            "move at {} rejected",
            i
        );
    }
}

#[test]
fn test_top_row_scenario() {
    let mut history = GameHistory::new();
    let expected_marks = [Mark::X, Mark::O, Mark::X, Mark::O, Mark::X];

    for (&i, mark) in [0, 4, 1, 5, 2].iter().zip(expected_marks) {
        assert_eq!(history.current_winner(), None);
        assert_eq!(history.player_to_move(), mark);
        history.apply_move(pos(i));
        assert_eq!(history.current_snapshot().get(pos(i)), Square::Occupied(mark));
    }

    assert_eq!(history.current_winner(), Some(Mark::X));
    assert_eq!(history.status(), Status::Winner(Mark::X));
    assert_eq!(history.len(), 6);
}

#[test]
fn test_jump_to_start_resets_view() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 4, 8, 2]);

    let jump = history.jump_to(0).expect("in range");
    assert!(jump.changed());
    assert_eq!(*history.current_snapshot(), Board::new());
    assert_eq!(history.player_to_move(), Mark::X);
    assert_eq!(history.len(), 5, "jumping never deletes history");
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut history = GameHistory::new();
    play(&mut history, &[4]);
    let before = history.clone();

    let outcome = history.apply_move(Position::Center);
    assert_eq!(
        outcome,
        MoveOutcome::Rejected(Rejection::Occupied(Position::Center))
    );
    assert_eq!(history, before);
}

#[test]
fn test_decided_game_rejects_every_square() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 4, 1, 5, 2]);
    let before = history.clone();

    for p in Position::ALL {
        let outcome = history.apply_move(p);
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Decided(Mark::X)));
        assert_eq!(history, before);
    }
}

#[test]
fn test_jump_and_inspect_after_decided_game() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 4, 1, 5, 2]);

    history.jump_to(3).expect("in range");
    assert_eq!(history.current_winner(), None);
    assert_eq!(history.status(), Status::NextPlayer(Mark::O));
    assert!(history.apply_move(pos(8)).changed());
}

#[test]
fn test_branch_truncation() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 4, 1, 5]);
    let old = history.snapshots().to_vec();

    let k = 1;
    history.jump_to(k).expect("in range");
    play(&mut history, &[8]);

    assert_eq!(history.len(), k + 2);
    assert_eq!(history.snapshots()[..=k], old[..=k]);
    assert_ne!(history.snapshots()[k + 1], old[k + 1]);
    assert_eq!(history.cursor(), k + 1);
}

#[test]
fn test_jump_does_not_change_turn_rule() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 4, 8]);

    for i in 0..history.len() {
        history.jump_to(i).expect("in range");
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(history.player_to_move(), expected);
    }
}

#[test]
fn test_jump_out_of_range_is_error() {
    let mut history = GameHistory::new();
    play(&mut history, &[0]);

    let err = history.jump_to(7).unwrap_err();
    assert!(err.to_string().contains("Cannot jump to move 7"));
    assert_eq!(history.cursor(), 1);
}

#[test]
fn test_move_list_labels() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 4, 8]);
    history.jump_to(1).expect("in range");

    let labels: Vec<_> = history
        .move_list()
        .iter()
        .map(|entry| entry.label().clone())
        .collect();
    assert_eq!(labels, ["start", "move #1", "move #2", "move #3"]);
}

#[test]
fn test_full_board_without_winner_reports_next_player() {
    let mut history = GameHistory::new();
    // X O X / X O O / O X X
    play(&mut history, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(rewind_tictactoe::rules::is_full(history.current_snapshot()));
    assert_eq!(history.current_winner(), None);
    assert_eq!(history.status(), Status::NextPlayer(Mark::O));
}

/// Walks every legal game from the empty board, checking each move
/// against the single-cell-delta and alternation properties.
#[test]
fn test_every_legal_game_keeps_properties() {
    fn walk(history: &mut GameHistory, visited: &mut usize) {
        *visited += 1;
        assert!(HistoryInvariants::check_all(history).is_ok());

        let decided = history.current_winner().is_some();
        for p in Position::ALL {
            let before = history.clone();
            let mover = history.player_to_move();
            let occupied = !before.current_snapshot().is_empty(p);

            let outcome = history.apply_move(p);
            if decided || occupied {
                assert!(!outcome.changed());
                assert_eq!(*history, before);
                continue;
            }

            assert_eq!(before.current_snapshot().diff(history.current_snapshot()), vec![p]);
            assert_eq!(history.current_snapshot().get(p), Square::Occupied(mover));
            assert_eq!(history.player_to_move(), mover.opponent());
            assert_eq!(history.len(), before.len() + 1);

            walk(history, visited);
            *history = before;
        }
    }

    let mut visited = 0;
    walk(&mut GameHistory::new(), &mut visited);
    // Number of positions reachable along all move sequences,
    // including the empty start.
    assert_eq!(visited, 549_946);
}
