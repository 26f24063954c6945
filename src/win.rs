//! # Win Detection
//!
//! Determines whether a just-placed piece completed a four-in-a-row.
//!
//! A single placement can only ever complete a line that passes through the
//! placed cell, so it is sufficient to scan the four lines through it (both
//! diagonals, the row, the column) rather than the whole board.

use crate::board::{Board, Player};

/// Checks whether a four-in-a-row passes through (row, col).
///
/// On success the cells of the discovered run are flagged winning (the
/// renderer reads the flag; it plays no part in the detection itself) and
/// the remaining lines are not scanned.
pub fn check_win(board: &mut Board, row: usize, col: usize) -> bool {
    let left = diagonal_left(board, row, col);
    let right = diagonal_right(board, row, col);
    let horizontal = horizontal(board, row);
    let vertical = vertical(board, col);

    scan_line(board, &left)
        || scan_line(board, &right)
        || scan_line(board, &horizontal)
        || scan_line(board, &vertical)
}

/// Walks one line accumulating a run: an unoccupied cell resets it, a
/// different owner restarts it at one, a matching owner extends it. A run of
/// four wins and gets its cells flagged.
fn scan_line(board: &mut Board, line: &[(usize, usize)]) -> bool {
    let mut count = 0;
    let mut last_owner: Option<Player> = None;
    let mut run: Vec<(usize, usize)> = Vec::new();

    for &(row, col) in line {
        let owner = board.cell(row, col).owner();
        match owner {
            None => {
                count = 0;
                run.clear();
            }
            Some(_) if owner == last_owner => {
                count += 1;
                run.push((row, col));
            }
            Some(_) => {
                count = 1;
                run.clear();
                run.push((row, col));
            }
        }
        last_owner = owner;

        if count == 4 {
            for &(win_row, win_col) in &run {
                board.mark_winning(win_row, win_col);
            }
            return true;
        }
    }
    false
}

/// Cells on the top-left to bottom-right diagonal through (row, col), i.e.
/// those where `row - col` is constant, in top-to-bottom order.
fn diagonal_left(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let delta = row as isize - col as isize;
    (0..board.rows())
        .filter_map(|r| {
            let c = r as isize - delta;
            (c >= 0 && (c as usize) < board.cols()).then(|| (r, c as usize))
        })
        .collect()
}

/// Cells on the top-right to bottom-left diagonal through (row, col), i.e.
/// those where `row + col` is constant, in top-to-bottom order.
fn diagonal_right(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let sum = row + col;
    (0..board.rows())
        .filter_map(|r| {
            let c = sum as isize - r as isize;
            (c >= 0 && (c as usize) < board.cols()).then(|| (r, c as usize))
        })
        .collect()
}

fn horizontal(board: &Board, row: usize) -> Vec<(usize, usize)> {
    (0..board.cols()).map(|c| (row, c)).collect()
}

fn vertical(board: &Board, col: usize) -> Vec<(usize, usize)> {
    (0..board.rows()).map(|r| (r, col)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_win_flags_all_four_cells() {
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.place(3, col, Player::Human);
        }

        assert!(check_win(&mut board, 3, 3));
        for col in 0..4 {
            assert!(board.cell(3, col).is_winning());
        }
        assert!(!board.cell(3, 4).is_winning());
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.place(3, col, Player::Human);
        }
        assert!(!check_win(&mut board, 3, 2));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(6, 7);
        for row in 2..6 {
            board.place(row, 5, Player::Computer);
        }

        assert!(check_win(&mut board, 2, 5));
        for row in 2..6 {
            assert!(board.cell(row, 5).is_winning());
        }
    }

    #[test]
    fn test_diagonal_left_win() {
        let mut board = Board::new(6, 7);
        // Top-left to bottom-right: (1,2) (2,3) (3,4) (4,5)
        for (row, col) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
            board.place(row, col, Player::Human);
        }

        assert!(check_win(&mut board, 3, 4));
        for (row, col) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
            assert!(board.cell(row, col).is_winning());
        }
    }

    #[test]
    fn test_diagonal_right_win() {
        let mut board = Board::new(6, 7);
        // Top-right to bottom-left: (1,5) (2,4) (3,3) (4,2)
        for (row, col) in [(1, 5), (2, 4), (3, 3), (4, 2)] {
            board.place(row, col, Player::Computer);
        }

        assert!(check_win(&mut board, 1, 5));
        for (row, col) in [(1, 5), (2, 4), (3, 3), (4, 2)] {
            assert!(board.cell(row, col).is_winning());
        }
    }

    #[test]
    fn test_gap_resets_the_run() {
        let mut board = Board::new(6, 7);
        // Two and two with a hole in the middle of row 5
        for col in [0, 1, 3, 4] {
            board.place(5, col, Player::Human);
        }
        assert!(!check_win(&mut board, 5, 4));
    }

    #[test]
    fn test_opponent_piece_restarts_the_run() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.place(5, col, Player::Human);
        }
        board.place(5, 3, Player::Computer);
        for col in 4..7 {
            board.place(5, col, Player::Human);
        }
        assert!(!check_win(&mut board, 5, 6));
    }

    #[test]
    fn test_win_detected_anywhere_in_the_run() {
        let mut board = Board::new(6, 7);
        for col in 2..6 {
            board.place(5, col, Player::Computer);
        }
        // Checking from the leftmost cell of the run also finds it
        assert!(check_win(&mut board, 5, 2));
    }
}
