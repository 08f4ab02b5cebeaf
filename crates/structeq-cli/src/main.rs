//! StructEq CLI
//!
//! Command-line interface for structural YAML comparison

use clap::{Parser, Subcommand};
use structeq_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "structeq")]
#[command(about = "StructEq - structural YAML comparison", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two YAML documents structurally
    Compare(commands::compare::CompareArgs),
    /// Print the canonical form of a YAML document
    Canonical(commands::canonical::CanonicalArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Canonical(args) => commands::canonical::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
