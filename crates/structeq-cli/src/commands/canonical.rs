//! Canonical command
//!
//! Usage: structeq canonical <FILE>

use clap::Args;
use std::path::PathBuf;
use structeq_yaml::{canonical, DocumentSide};

#[derive(Debug, Args)]
pub struct CanonicalArgs {
    /// Path to the YAML document to canonicalize
    pub file: PathBuf,
}

/// Execute canonical
pub fn execute(args: CanonicalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("failed to read {}: {}", args.file.display(), e))?;

    let canonical_text = canonical(&text, DocumentSide::Actual)?;
    print!("{}", canonical_text);

    Ok(())
}
