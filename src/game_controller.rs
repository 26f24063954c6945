//! # Game Controller - Turn State Machine
//!
//! The `GameController` is the single source of truth for a game: it owns
//! the board and the current phase, applies every placement, runs win
//! detection after each one, and drives the computer opponent.
//!
//! The controller is frame-driven and never blocks. The presentation layer
//! feeds it discrete requests ([`request_move`](GameController::request_move),
//! [`start_new_game`](GameController::start_new_game)) and calls
//! [`advance_time`](GameController::advance_time) once per frame; the only
//! "suspension" is the computer's artificial pre-move pause, modeled as a
//! countdown consumed by successive frames. The computer's column is chosen
//! the moment its turn begins; the pause is purely pacing, not decision
//! time.
//!
//! Invalid play input (a full column, a click during the computer's turn, a
//! move after the game ended) is a silent no-op rather than an error: it
//! originates from a player clicking at an inconvenient time.

use crate::ai;
use crate::board::{Board, Player};
use crate::win::check_win;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Default board height.
pub const DEFAULT_ROWS: usize = 6;
/// Default board width.
pub const DEFAULT_COLS: usize = 7;
/// Default seconds the computer pauses before committing its move.
pub const DEFAULT_AI_DELAY: f32 = 0.5;

/// The phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// Waiting for the given side to move
    AwaitingMove(Player),
    /// The computer has chosen `column` and is pausing before it commits
    AiThinking {
        /// The column the computer will play
        column: usize,
        /// Seconds left before the move commits
        remaining: f32,
    },
    /// Terminal: `winner` is `None` for a tie
    GameOver {
        /// The side that won, or `None` when the board filled up
        winner: Option<Player>,
    },
}

/// Owns one board and one game's state; see the module docs.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    phase: GamePhase,
    ai_delay: f32,
    rng: Xoshiro256PlusPlus,
}

impl GameController {
    /// Creates a controller and starts the first game, seeding the
    /// generator from OS entropy.
    pub fn new(rows: usize, cols: usize, ai_delay: f32) -> Self {
        Self::with_seed(rows, cols, ai_delay, rand::random())
    }

    /// Creates a controller with an explicit seed, so the coin flip and the
    /// computer's tie-breaking are reproducible.
    pub fn with_seed(rows: usize, cols: usize, ai_delay: f32, seed: u64) -> Self {
        let mut controller = Self {
            board: Board::new(rows, cols),
            phase: GamePhase::AwaitingMove(Player::Human),
            ai_delay,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        };
        controller.start_new_game();
        controller
    }

    /// Discards the current game unconditionally (including mid-pause) and
    /// starts a fresh one: empty board, coin flip for the first turn.
    pub fn start_new_game(&mut self) {
        self.board.reset();
        let first = if self.rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Computer
        };
        self.phase = GamePhase::AwaitingMove(first);
        if first == Player::Computer {
            self.begin_ai_turn();
        }
    }

    /// Requests a human move in `col`.
    ///
    /// Honored only while it is the human's turn and the column is
    /// playable; anything else is silently dropped.
    pub fn request_move(&mut self, col: usize) {
        if self.phase != GamePhase::AwaitingMove(Player::Human) {
            return;
        }
        let Some(row) = self.board.landing_row(col) else {
            return;
        };
        self.commit(row, col, Player::Human);
    }

    /// Advances the frame clock by `dt` seconds, counting down the
    /// computer's pause and committing its chosen column when it elapses.
    pub fn advance_time(&mut self, dt: f32) {
        let GamePhase::AiThinking { column, remaining } = self.phase else {
            return;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.phase = GamePhase::AiThinking { column, remaining };
            return;
        }
        // The column was playable when chosen and the board has not changed
        // since, so it still is.
        if let Some(row) = self.board.landing_row(column) {
            self.commit(row, column, Player::Computer);
        }
    }

    /// Highlights the landing cell of `col` for the human while it is their
    /// turn (hover feedback for the renderer).
    pub fn highlight_column(&mut self, col: usize) {
        if self.phase == GamePhase::AwaitingMove(Player::Human) {
            self.board.clear_highlights();
            self.board.set_highlight(col, Player::Human);
        }
    }

    /// Places a piece and resolves the turn: win, tie, or hand-over.
    fn commit(&mut self, row: usize, col: usize, player: Player) {
        self.board.clear_highlights();
        self.board.place(row, col, player);

        if check_win(&mut self.board, row, col) {
            self.phase = GamePhase::GameOver {
                winner: Some(player),
            };
        } else if self.board.is_full() {
            self.phase = GamePhase::GameOver { winner: None };
        } else {
            let next = player.opponent();
            self.phase = GamePhase::AwaitingMove(next);
            if next == Player::Computer {
                self.begin_ai_turn();
            }
        }
    }

    /// Chooses the computer's column now and enters the pre-move pause,
    /// highlighting the target cell for the renderer.
    fn begin_ai_turn(&mut self) {
        match ai::choose_column(&mut self.board, Player::Computer, &mut self.rng) {
            Some(column) => {
                self.board.clear_highlights();
                self.board.set_highlight(column, Player::Computer);
                self.phase = GamePhase::AiThinking {
                    column,
                    remaining: self.ai_delay,
                };
            }
            // Full board; the hand-over path rules this out, but a tie is
            // the only meaningful reading.
            None => self.phase = GamePhase::GameOver { winner: None },
        }
    }

    /// The board, for the renderer's per-frame reads.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// True when the game ended with a full board and no winner. Only
    /// meaningful once [`is_over`](GameController::is_over) is true.
    pub fn is_tied(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { winner: None })
    }

    /// The winning side, if the game ended with one.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            GamePhase::GameOver { winner } => winner,
            _ => None,
        }
    }

    /// Whose turn it is, or `None` once the game is over.
    pub fn current_turn(&self) -> Option<Player> {
        match self.phase {
            GamePhase::AwaitingMove(player) => Some(player),
            GamePhase::AiThinking { .. } => Some(Player::Computer),
            GamePhase::GameOver { .. } => None,
        }
    }
}
