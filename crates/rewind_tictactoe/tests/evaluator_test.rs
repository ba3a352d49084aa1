//! Tests for the board evaluator.

use rewind_tictactoe::rules::{LINES, evaluate, is_full, winning_line};
use rewind_tictactoe::{Board, Mark, Square};

/// Decodes `n` (0..3^9) into a board, one base-3 digit per square.
fn board_from_code(mut n: usize) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match n % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Mark::X),
            _ => Square::Occupied(Mark::O),
        };
        n /= 3;
    }
    Board::from_squares(squares)
}

fn line_mark(board: &Board, line: [rewind_tictactoe::Position; 3]) -> Option<Mark> {
    let [a, b, c] = line;
    let mark = board.get(a).mark()?;
    (board.get(b) == Square::Occupied(mark) && board.get(c) == Square::Occupied(mark))
        .then_some(mark)
}

#[test]
fn test_evaluate_matches_first_uniform_line_on_every_board() {
    for code in 0..3usize.pow(9) {
        let board = board_from_code(code);
        let expected = LINES.iter().find_map(|line| line_mark(&board, *line));
        assert_eq!(evaluate(&board), expected, "board:\n{}", board);

        if let Some(mark) = expected {
            let line = winning_line(&board).expect("line for winner");
            assert_eq!(line_mark(&board, line), Some(mark));
        }
    }
}

#[test]
fn test_full_board_without_line_is_none() {
    let x = Square::Occupied(Mark::X);
    let o = Square::Occupied(Mark::O);
    // X X O / O O X / X O X
    let board = Board::from_squares([x, x, o, o, o, x, x, o, x]);
    assert!(is_full(&board));
    assert_eq!(evaluate(&board), None);
}

#[test]
fn test_evaluate_is_pure() {
    let board = board_from_code(1 + 3 + 9);
    let copy = board;
    assert_eq!(evaluate(&board), Some(Mark::X));
    assert_eq!(evaluate(&board), Some(Mark::X));
    assert_eq!(board, copy);
}
