//! Landgrab CLI - Command-line interface for playing and analysing Landgrab games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Landgrab - A simultaneous-turn grid combat game engine
#[derive(Parser, Debug)]
#[command(name = "landgrab")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a single game between two strategies
    Play {
        /// Strategy for player 1
        #[arg(long, default_value = "greedy")]
        player1: String,

        /// Strategy for player 2
        #[arg(long, default_value = "random")]
        player2: String,

        /// Rules file (JSON, default: standard rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum turns before the game is called (default: 200)
        #[arg(short = 't', long, default_value = "200")]
        max_turns: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Count the legal plays from the opening position
    Count {
        /// Rules file (JSON, default: standard rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Enumeration mode: sequential, parallel, or stream
        #[arg(short, long, default_value = "sequential")]
        mode: cli::CountMode,

        /// Pipeline queue capacity (stream mode)
        #[arg(long)]
        buffer: Option<usize>,

        /// Pipeline worker threads (stream mode, default: CPU count)
        #[arg(short = 'j', long)]
        workers: Option<usize>,
    },

    /// List the available strategies
    Strategies,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Play {
            player1,
            player2,
            rules,
            seed,
            max_turns,
            format,
        } => cli::play::execute(&player1, &player2, rules.as_deref(), seed, max_turns, format),

        Commands::Count {
            rules,
            mode,
            buffer,
            workers,
        } => cli::count::execute(rules.as_deref(), mode, buffer, workers),

        Commands::Strategies => {
            cli::strategies::execute();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
