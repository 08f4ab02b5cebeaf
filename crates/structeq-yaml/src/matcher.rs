//! Document-level matching.
//!
//! Decodes two YAML documents and delegates the equality judgment to the
//! structural comparison engine. The document-level failure messages show
//! the two canonical texts side by side; the structural mismatch path is
//! carried separately for callers that want the precise location.

use std::time::Instant;

use structeq_core::compare::{compare, Comparison, Mismatch};
use structeq_core::{log_op_end, log_op_error, log_op_start};

use crate::codec::{decode, encode};
use crate::errors::{DocumentSide, Result};

/// The result of matching two YAML documents.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    matched: bool,
    expected_canonical: String,
    actual_canonical: String,
    mismatch: Option<Mismatch>,
}

impl MatchOutcome {
    /// True when the two documents are structurally equal.
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Canonical form of the expected document.
    pub fn expected_canonical(&self) -> &str {
        &self.expected_canonical
    }

    /// Canonical form of the actual document.
    pub fn actual_canonical(&self) -> &str {
        &self.actual_canonical
    }

    /// The structural mismatch, when the documents diverge.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        self.mismatch.as_ref()
    }

    /// Failure message for a positive expectation.
    ///
    /// Shows the two full canonical documents; it deliberately does not
    /// include the structural path annotation.
    pub fn failure_message(&self) -> String {
        format!(
            "expected\n{}\nto match YAML of\n{}",
            indent(&self.actual_canonical),
            indent(&self.expected_canonical)
        )
    }

    /// Failure message for a negated expectation.
    pub fn negated_failure_message(&self) -> String {
        format!(
            "expected\n{}\nnot to match YAML of\n{}",
            indent(&self.actual_canonical),
            indent(&self.expected_canonical)
        )
    }
}

fn indent(text: &str) -> String {
    text.trim_end()
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Match two YAML documents structurally.
///
/// Both documents are decoded and the decoded values compared directly;
/// the canonical re-serializations are produced for the message contract.
/// A codec failure on either side is returned as-is and never converted
/// into a structural mismatch.
pub fn match_documents(expected_text: &str, actual_text: &str) -> Result<MatchOutcome> {
    let started = Instant::now();
    log_op_start!("match_documents");

    let result = run_match(expected_text, actual_text);

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!(
                "match_documents",
                duration_ms = duration_ms,
                matched = outcome.matched
            );
        }
        Err(err) => {
            log_op_error!("match_documents", err, duration_ms = duration_ms);
        }
    }

    result
}

fn run_match(expected_text: &str, actual_text: &str) -> Result<MatchOutcome> {
    let expected = decode(expected_text, DocumentSide::Expected)?;
    let actual = decode(actual_text, DocumentSide::Actual)?;

    let expected_canonical = encode(&expected, DocumentSide::Expected)?;
    let actual_canonical = encode(&actual, DocumentSide::Actual)?;

    let mismatch = match compare(&expected, &actual) {
        Comparison::Equal => None,
        Comparison::Unequal(mismatch) => {
            tracing::debug!(
                mismatch_path = %mismatch,
                "documents diverge"
            );
            Some(mismatch)
        }
    };

    Ok(MatchOutcome {
        matched: mismatch.is_none(),
        expected_canonical,
        actual_canonical,
        mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefixes_each_line() {
        assert_eq!(indent("a: 1\nb: 2\n"), "    a: 1\n    b: 2");
    }

    #[test]
    fn test_matched_outcome_has_no_mismatch() {
        let outcome = match_documents("a: 1", "a: 1").unwrap();
        assert!(outcome.matched());
        assert!(outcome.mismatch().is_none());
    }
}
