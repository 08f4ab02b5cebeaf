//! StructEq Core - Structural equality with path-annotated diagnostics
//!
//! This crate provides the foundational model and comparison engine for
//! StructEq, including:
//! - Generic `Value` model (scalars with strict type identity, ordered
//!   sequences, key-value mappings)
//! - Recursive structural comparison reporting the first divergence
//! - Structured `Mismatch` paths that are inspectable and serializable
//! - Stable human rendering of mismatches for test-failure output
//! - Logging facility for the outer layers (the comparator itself is
//!   pure and silent)

pub mod compare;
pub mod logging_facility;
pub mod model;
pub mod schema;

// Re-export commonly used types
pub use compare::{compare, render_mismatch, Comparison, LeafMismatch, Mismatch, PathSegment};
pub use model::{Key, Mapping, Scalar, Value};
