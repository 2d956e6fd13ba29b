//! tictoc CLI - enumerate, persist and query the tic-tac-toe game tree

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tictoc::{board_from_text, board_to_text, Alphabet, GameTree, Stats};

#[derive(Parser)]
#[command(name = "tictoc")]
#[command(version, about = "Exhaustive tic-tac-toe game tree toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the full game tree and write it to a file
    Build {
        /// Destination file for the serialized structure
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the legal continuations and outcome census for a position
    Query {
        /// The position as 9 symbols, first symbol = top left corner
        board: String,

        /// The three symbols standing for empty, first mover, second mover
        #[arg(long, default_value = "012")]
        pieces: String,

        /// Load a previously built tree instead of enumerating
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct QueryReport {
    board: String,
    children: Vec<String>,
    stats: Option<Stats>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { output } => build(&output),
        Commands::Query {
            board,
            pieces,
            input,
        } => query(&board, &pieces, input.as_deref()),
    }
}

fn build(output: &std::path::Path) -> Result<()> {
    let tree = GameTree::build();

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    tree.save(&mut writer)
        .with_context(|| format!("failed to write {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "wrote {} positions ({} with children) to {}",
        tree.stats_len(),
        tree.tree_len(),
        output.display()
    );
    Ok(())
}

fn query(board: &str, pieces: &str, input: Option<&std::path::Path>) -> Result<()> {
    let alphabet = parse_alphabet(pieces)?;

    let tree = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            GameTree::load(&mut BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => GameTree::build(),
    };

    let board = board_from_text(board, alphabet)?;
    let report = QueryReport {
        board: board_to_text(board, alphabet),
        children: tree
            .children_of(board)
            .iter()
            .map(|&child| board_to_text(child, alphabet))
            .collect(),
        stats: tree.stats_of(board),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_alphabet(pieces: &str) -> Result<Alphabet> {
    let symbols: Vec<char> = pieces.chars().collect();
    match symbols[..] {
        [empty, first, second] => Ok([empty, first, second]),
        _ => bail!("--pieces must contain exactly 3 symbols, got {}", symbols.len()),
    }
}
