//! Example demonstrating puzzle generation from the command line.
//!
//! # Usage
//!
//! Generate a random puzzle:
//!
//! ```sh
//! cargo run --example generate -- --size 9 --difficulty hard
//! ```
//!
//! Generate the shared daily puzzle for a date key:
//!
//! ```sh
//! cargo run --example generate -- --size 6 --date 2024-09-30
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use cluegrid_core::{Difficulty, GridSize, Puzzle};
use cluegrid_generator::{generate_puzzle, generate_seeded_puzzle};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Expert => Self::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length (6 or 9).
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: u8,

    /// Difficulty tier for random generation.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Date key for deterministic daily generation (overrides --difficulty).
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match GridSize::from_n(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let puzzle = match &args.date {
        Some(date_key) => match generate_seeded_puzzle(size, date_key) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        },
        None => generate_puzzle(size, args.difficulty.into(), &mut rand::rng()),
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &Puzzle) {
    if let Some(seed) = puzzle.seed() {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Difficulty: {}", puzzle.difficulty());
    println!(
        "Clues: {} of {}",
        puzzle.clue_count(),
        puzzle.size().cell_count()
    );
    println!();

    println!("Problem:");
    for line in puzzle.clues().to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution().to_string().lines() {
        println!("  {line}");
    }
}
