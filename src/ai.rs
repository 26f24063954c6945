//! # Computer Opponent
//!
//! Move selection for the computer player: a fixed four-tier heuristic, not
//! a search. For each playable column the heuristic looks at most two
//! placements ahead (its own piece, then the opponent's immediate reply),
//! which keeps the cost at O(columns) per turn.
//!
//! The tiers, best first:
//!
//! 0. the column wins the game outright
//! 1. the column blocks a win the opponent could complete next turn
//! 2. nothing notable happens
//! 3. the column hands the opponent a win on the cell above
//!
//! Candidates are evaluated with hypothetical placements made directly on
//! the borrowed board; every one of them is undone before returning, so the
//! caller gets its board back in exactly the occupancy state it lent out.

use crate::board::{Board, Player};
use crate::win::check_win;
use rand::Rng;

/// Chooses the column for `ai` to play.
///
/// Picks uniformly at random among the columns of the best non-empty tier,
/// using the caller's generator so games are reproducible under a fixed
/// seed. Returns `None` only when every column is full, which callers rule
/// out beforehand via [`Board::is_full`].
pub fn choose_column<R: Rng>(board: &mut Board, ai: Player, rng: &mut R) -> Option<usize> {
    let opponent = ai.opponent();
    let mut tiers: [Vec<usize>; 4] = Default::default();

    for col in 0..board.cols() {
        let Some(row) = board.landing_row(col) else {
            continue; // column full
        };

        board.place(row, col, ai);
        if check_win(board, row, col) {
            tiers[0].push(col);
        } else {
            board.clear(row, col);
            board.place(row, col, opponent);
            if check_win(board, row, col) {
                tiers[1].push(col);
            } else {
                board.clear(row, col);
                board.place(row, col, ai);
                if row > 0 {
                    // With our piece in the landing cell, the cell above is
                    // where the opponent would land next turn.
                    board.place(row - 1, col, opponent);
                    if check_win(board, row - 1, col) {
                        tiers[3].push(col);
                    } else {
                        tiers[2].push(col);
                    }
                    board.clear(row - 1, col);
                } else {
                    // Landing cell is the top row, nothing above to concede
                    tiers[2].push(col);
                }
            }
        }
        board.clear(row, col);
    }

    // Scratch evaluation may have flagged hypothetical wins
    board.clear_winning();

    tiers
        .iter()
        .find(|tier| !tier.is_empty())
        .map(|tier| tier[rng.random_range(0..tier.len())])
}
