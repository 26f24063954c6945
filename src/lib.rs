//! # Connect Four Game Engine
//!
//! A two-player Connect Four game on a configurable rows x cols grid, one
//! side human and the other a heuristic computer opponent.
//!
//! The engine is the whole of this library:
//! - [`board`]: the grid of cells and their occupancy, pure data plus queries
//! - [`win`]: four-in-a-row detection through a just-placed cell
//! - [`ai`]: the computer's fixed four-tier move heuristic
//! - [`game_controller`]: the turn state machine tying them together
//!
//! Presentation (the `play` binary) is a thin external collaborator: it
//! feeds the [`GameController`] discrete move requests, drives its frame
//! clock, and reads engine state to render it. State lives only for the
//! process lifetime; there is no persistence and no network play.

pub mod ai;
pub mod board;
pub mod game_controller;
pub mod win;

pub use board::{Board, Cell, Player};
pub use game_controller::{GameController, GamePhase};
pub use game_controller::{DEFAULT_AI_DELAY, DEFAULT_COLS, DEFAULT_ROWS};
