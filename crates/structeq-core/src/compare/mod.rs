//! Structural comparison engine.
//!
//! Compares two generic [`Value`](crate::model::Value) trees and produces
//! either equality or a structured, path-annotated report of the first
//! divergence.
//!
//! ## Entry point
//!
//! ```
//! use structeq_core::compare::compare;
//! use structeq_core::model::{Scalar, Value};
//!
//! let expected = Value::Scalar(Scalar::Int(3));
//! let actual = Value::Scalar(Scalar::Int(3));
//! assert!(compare(&expected, &actual).is_equal());
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: no mutation of inputs, no I/O, no logging; the engine
//!   cannot fail, it can only conclude.
//! - **First divergence wins**: mismatches are reported early-exit, never
//!   aggregated; each recursion level prepends exactly one path segment.
//! - **Determinism**: identical inputs produce identical results; with
//!   multiple extra/missing keys the lowest key is reported first.

pub mod engine;
pub mod model;
pub mod render;

pub use engine::compare;
pub use model::{Comparison, LeafMismatch, Mismatch, PathSegment};
pub use render::render_mismatch;
