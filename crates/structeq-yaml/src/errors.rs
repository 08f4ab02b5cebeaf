use std::fmt;
use thiserror::Error;

/// Result type alias using DocumentError
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Which of the two documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    /// The document the comparison treats as the expectation
    Expected,
    /// The document under judgment
    Actual,
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSide::Expected => write!(f, "expected"),
            DocumentSide::Actual => write!(f, "actual"),
        }
    }
}

/// Error taxonomy for the document boundary.
///
/// These are codec-level failures only; a structural divergence between
/// two well-formed documents is never an error, it is a
/// [`Mismatch`](structeq_core::Mismatch) carried in the match outcome.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document text is not parseable YAML
    #[error("{side} document is not valid YAML: {source}")]
    Decode {
        side: DocumentSide,
        #[source]
        source: serde_yaml::Error,
    },

    /// The decoded document failed to re-serialize to canonical text
    #[error("{side} document could not be re-serialized: {source}")]
    Serialize {
        side: DocumentSide,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parses but uses constructs outside the comparable
    /// model (non-scalar mapping keys, YAML tags, duplicate keys)
    #[error("{side} document is outside the comparable model: {reason}")]
    Unsupported { side: DocumentSide, reason: String },
}

impl DocumentError {
    /// The document side the error refers to.
    pub fn side(&self) -> DocumentSide {
        match self {
            DocumentError::Decode { side, .. } => *side,
            DocumentError::Serialize { side, .. } => *side,
            DocumentError::Unsupported { side, .. } => *side,
        }
    }
}
