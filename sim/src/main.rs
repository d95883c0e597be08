use anyhow::Context;
use clap::Parser;
use minesweep_core::{Game, GameConfig};
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::printer::{PrettyPrinter, Printer, PrinterChoice};

mod printer;

/// Plays random moves on a Minesweeper board until the game ends.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width
    #[arg(long, default_value_t = 10)]
    width: u8,

    /// Board height
    #[arg(long, default_value_t = 5)]
    height: u8,

    /// Number of mines
    #[arg(long, default_value_t = 3)]
    mines: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Which printer draws the board after each accepted move
    #[arg(long, value_enum, default_value_t = PrinterChoice::Random)]
    printer: PrinterChoice,

    /// Stop after this many turns even if the game is not over
    #[arg(long)]
    max_turns: Option<u64>,

    /// Print the final xray board as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting simulation");

    let config = GameConfig::new(args.width, args.height, args.mines)
        .context("invalid board configuration")?;
    let mut game = Game::new(config, seed)?;
    // moves use their own stream so the layout only depends on the seed
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let (rows, cols) = game.size();
    let mut turns = 0u64;
    while game.still_playing() {
        if args.max_turns.is_some_and(|max| turns >= max) {
            tracing::warn!(turns, "turn limit reached, stopping");
            break;
        }
        turns += 1;

        let play_at = (rng.random_range(0..rows), rng.random_range(0..cols));
        let flag_at = (rng.random_range(0..rows), rng.random_range(0..cols));
        let valid_move = game.play(play_at)?;
        let valid_flag = game.flag(flag_at)?;
        tracing::debug!(turn = turns, ?play_at, valid_move, ?flag_at, valid_flag);

        if valid_move || valid_flag {
            let printer = args.printer.pick(rng.random_bool(0.5));
            println!("{}", printer.render(&game.board_state(false)));
        }
    }

    tracing::info!(turns, status = ?game.status(), "simulation finished");

    if args.json {
        let snapshot = serde_json::to_string_pretty(&game.board_state(true))
            .context("could not serialize the board")?;
        println!("{snapshot}");
        return Ok(());
    }

    println!("Game over!");
    if game.victory() {
        println!("You won!");
    } else if game.is_dead() {
        println!("You lost! The mines were:");
        print!("{}", PrettyPrinter.render(&game.board_state(true)));
    } else {
        println!("Stopped after {turns} turns.");
    }

    Ok(())
}
