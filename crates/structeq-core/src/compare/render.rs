//! Human-readable rendering for mismatches.
//!
//! The wording is a stable contract consumed by test-failure output:
//! path segments concatenate outermost to innermost, and the
//! "to contain" / "not to contain" asymmetry between missing and extra
//! reports is deliberate (the actual document is the one being judged).

use crate::compare::model::{LeafMismatch, Mismatch, PathSegment};
use crate::model::{Key, Value};

/// Render a [`Mismatch`] as a single failure line.
///
/// Each path segment contributes `error at slice index <i>: ` or
/// `error at map key "<k>": `, followed by the leaf message.
pub fn render_mismatch(mismatch: &Mismatch) -> String {
    let mut out = String::new();
    for segment in &mismatch.path {
        match segment {
            PathSegment::AtIndex(index) => {
                out.push_str(&format!("error at slice index {}: ", index));
            }
            PathSegment::AtKey(key) => {
                out.push_str(&format!("error at map key {}: ", key));
            }
        }
    }
    out.push_str(&render_leaf(&mismatch.leaf));
    out
}

fn render_leaf(leaf: &LeafMismatch) -> String {
    match leaf {
        LeafMismatch::TypeMismatch { expected, actual } => format!(
            "type mismatch: expected <{}> to be of type <{}>",
            actual, expected
        ),
        LeafMismatch::ValueMismatch { expected, actual } => format!(
            "value mismatch: expected {} to equal {}",
            actual, expected
        ),
        LeafMismatch::ExtraElements { full, extra } => format!(
            "extra elements found: expected {} not to contain elements {}",
            render_values(full),
            render_values(extra)
        ),
        LeafMismatch::MissingElements { full, missing } => format!(
            "missing elements: expected {} to contain elements {}",
            render_values(full),
            render_values(missing)
        ),
        LeafMismatch::ExtraKey { key, actual_keys } => format!(
            "extra key found: expected {} not to contain key {}",
            render_keys(actual_keys),
            key
        ),
        LeafMismatch::MissingKey { key, actual_keys } => format!(
            "missing key: expected {} to contain key {}",
            render_keys(actual_keys),
            key
        ),
    }
}

fn render_values(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

fn render_keys(keys: &[Key]) -> String {
    let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
