//! StructEq YAML - Document matcher boundary adapter
//!
//! This crate applies the structural comparison engine to YAML documents:
//! - Decoding YAML text into the generic `Value` model (`serde_yaml` is
//!   the codec collaborator; its grammar is not re-specified here)
//! - Canonicalization (decode + re-serialize) for stable message output
//! - Document-level matching with the side-by-side failure message pair
//!
//! Decode failures always surface as [`DocumentError`], never as a
//! structural mismatch.

pub mod codec;
pub mod errors;
pub mod matcher;

// Re-export commonly used items
pub use codec::{canonical, decode, encode};
pub use errors::{DocumentError, DocumentSide, Result};
pub use matcher::{match_documents, MatchOutcome};
