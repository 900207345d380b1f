//! Gamma CLI - terminal drivers for the gamma board game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Gamma - a multi-player territorial board game
#[derive(Parser, Debug)]
#[command(name = "gamma")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play from a line-oriented command protocol on stdin
    Batch,

    /// Play on the terminal with cursor keys
    Interactive {
        /// Board width in cells
        #[arg(long)]
        width: u32,

        /// Board height in cells
        #[arg(long)]
        height: u32,

        /// Number of players
        #[arg(short, long)]
        players: u32,

        /// Maximum number of disjoint areas per player
        #[arg(short, long)]
        areas: u32,

        /// Output format for the final summary: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SummaryFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Batch => cli::batch::execute(),

        Commands::Interactive {
            width,
            height,
            players,
            areas,
            format,
        } => cli::interactive::execute(width, height, players, areas, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
