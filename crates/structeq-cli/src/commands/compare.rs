//! Compare command
//!
//! Usage: structeq compare <EXPECTED> <ACTUAL>

use clap::Args;
use std::path::PathBuf;
use structeq_yaml::match_documents;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the expected YAML document
    pub expected: PathBuf,

    /// Path to the actual YAML document
    pub actual: PathBuf,

    /// Print the side-by-side canonical documents on mismatch
    #[arg(long)]
    pub show_documents: bool,
}

/// Execute compare
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let expected_text = std::fs::read_to_string(&args.expected)
        .map_err(|e| format!("failed to read {}: {}", args.expected.display(), e))?;
    let actual_text = std::fs::read_to_string(&args.actual)
        .map_err(|e| format!("failed to read {}: {}", args.actual.display(), e))?;

    let outcome = match_documents(&expected_text, &actual_text)?;

    if outcome.matched() {
        println!("documents match");
        return Ok(());
    }

    if let Some(mismatch) = outcome.mismatch() {
        println!("{}", mismatch);
    }
    if args.show_documents {
        println!("{}", outcome.failure_message());
    }

    Err("documents do not match".into())
}
