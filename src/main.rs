//! # Connect Four
//!
//! Terminal front end for the Connect Four engine. The engine owns all game
//! logic; this binary only renders its state each time it changes, feeds it
//! the human's column picks, and drives its frame clock while the computer
//! pauses before committing a move.
//!
//! ## Usage
//! Run with `cargo run --release`. Pass `--seed` for a reproducible game.

use clap::Parser;
use colored::{ColoredString, Colorize};
use connect_four::{GameController, GamePhase, Player};
use connect_four::{DEFAULT_AI_DELAY, DEFAULT_COLS, DEFAULT_ROWS};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Seconds per simulated frame while the computer is pausing.
const FRAME_SECS: f32 = 1.0 / 30.0;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of board rows
    #[clap(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of board columns
    #[clap(short, long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Seconds the computer pauses before committing its move
    #[clap(short = 'd', long, default_value_t = DEFAULT_AI_DELAY)]
    ai_delay: f32,

    /// Seed for a reproducible game
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut game = match args.seed {
        Some(seed) => GameController::with_seed(args.rows, args.cols, args.ai_delay, seed),
        None => GameController::new(args.rows, args.cols, args.ai_delay),
    };

    let stdin = io::stdin();
    loop {
        render(&game);
        match game.phase() {
            GamePhase::AwaitingMove(Player::Human) => {
                print!(
                    "column (0-{}), n = new game, q = quit: ",
                    game.board().cols() - 1
                );
                io::stdout().flush()?;
                match read_command(&stdin)? {
                    Command::Quit => break,
                    Command::NewGame => game.start_new_game(),
                    Command::Column(col) => game.request_move(col),
                    Command::Noop => {}
                }
            }
            GamePhase::AwaitingMove(Player::Computer) | GamePhase::AiThinking { .. } => {
                // Pump the engine's frame clock until the pause elapses
                while matches!(game.phase(), GamePhase::AiThinking { .. }) {
                    thread::sleep(Duration::from_secs_f32(FRAME_SECS));
                    game.advance_time(FRAME_SECS);
                }
            }
            GamePhase::GameOver { .. } => {
                print!("n = new game, q = quit: ");
                io::stdout().flush()?;
                match read_command(&stdin)? {
                    Command::Quit => break,
                    // Any input after the game ends starts a new one
                    _ => game.start_new_game(),
                }
            }
        }
    }

    Ok(())
}

enum Command {
    Column(usize),
    NewGame,
    Quit,
    Noop,
}

fn read_command(stdin: &io::Stdin) -> io::Result<Command> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(Command::Quit); // EOF
    }
    Ok(match line.trim() {
        "q" => Command::Quit,
        "n" => Command::NewGame,
        text => match text.parse::<usize>() {
            Ok(col) => Command::Column(col),
            Err(_) => Command::Noop,
        },
    })
}

fn render(game: &GameController) {
    let board = game.board();

    println!();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            print!(" {}", cell_glyph(game, row, col));
        }
        println!();
    }
    for col in 0..board.cols() {
        print!(" {}", col % 10);
    }
    println!();

    match game.phase() {
        GamePhase::AwaitingMove(Player::Human) => println!("Your move."),
        GamePhase::AwaitingMove(Player::Computer) => {}
        GamePhase::AiThinking { .. } => {
            println!("{}", "Computer is thinking...".dimmed());
        }
        GamePhase::GameOver { winner } => match winner {
            Some(Player::Human) => println!("{}", "You won!".red().bold()),
            Some(Player::Computer) => println!("{}", "The computer won.".yellow().bold()),
            None => println!("{}", "Draw.".bold()),
        },
    }
}

fn cell_glyph(game: &GameController, row: usize, col: usize) -> ColoredString {
    let cell = game.board().cell(row, col);
    let glyph = match cell.owner() {
        Some(Player::Human) => "●".red(),
        Some(Player::Computer) => "●".yellow(),
        None => match cell.highlight() {
            Some(Player::Human) => "○".red(),
            Some(Player::Computer) => "○".yellow(),
            None => "·".dimmed(),
        },
    };
    if cell.is_winning() {
        glyph.on_blue()
    } else {
        glyph
    }
}
