use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_minimax::*;

mod display;

/// Play Connect 4 against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the opponent's search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// End the game as a draw when the board fills up
    #[arg(long)]
    detect_draws: bool,

    /// Starting position as one-indexed column digits, human first
    #[arg(long)]
    moves: Option<String>,

    /// Print each move result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(depth) = cli.depth {
        config.search_depth = depth;
    }
    if cli.detect_draws {
        config.detect_draws = true;
    }

    let board = match &cli.moves {
        Some(moves) => {
            if moves.len() % 2 != 0 {
                bail!("starting position must leave the human to move");
            }
            Board::from_moves(moves)?
        }
        None => Board::new(),
    };
    let mut session = GameSession::from_board(board, config)?;

    let stdin = stdin();

    println!("Welcome to Connect 4");
    println!("AI searches {} plies ahead\n", session.config().search_depth);

    // game loop
    loop {
        display::draw(session.board())?;

        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Finished(Outcome::Winner(Player::Human)) => println!("You win!"),
            GameStatus::Finished(Outcome::Winner(Player::Opponent)) => println!("AI wins!"),
            GameStatus::Finished(Outcome::Draw) => println!("Draw!"),
        }

        print!("Move input (1-{}, r to reset, q to quit) > ", WIDTH);
        stdout().flush()?;
        let mut input_str = String::new();
        if stdin.read_line(&mut input_str)? == 0 {
            break;
        }

        let input = input_str.trim();
        match input.to_lowercase().chars().next() {
            Some('q') => break,
            Some('r') => {
                session.reset();
                continue;
            }
            _ => {}
        }

        let column = match input.parse::<usize>() {
            Err(_) => {
                println!("Invalid number: {}", input);
                continue;
            }
            // 0 is mapped past the last column so it is reported as out of range
            Ok(column) => column.checked_sub(1).unwrap_or(WIDTH),
        };

        match session.apply_human_move(column) {
            Ok(report) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&report)?);
                }
                if let Some(reply) = report.opponent_column {
                    println!(
                        "AI plays column {} ({} positions searched)",
                        reply + 1,
                        session.last_search_nodes()
                    );
                }
            }
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}
