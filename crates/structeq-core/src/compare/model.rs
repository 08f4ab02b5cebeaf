//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`
//! so a mismatch is inspectable and machine-consumable rather than only
//! stringified.

use crate::model::{Key, Scalar, Value};
use serde::{Deserialize, Serialize};

/// The verdict of a structural comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Comparison {
    /// The two values are structurally identical
    Equal,
    /// The values diverge; the mismatch locates the first divergence
    Unequal(Mismatch),
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    /// The mismatch, if the comparison found one.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Comparison::Equal => None,
            Comparison::Unequal(m) => Some(m),
        }
    }

    pub fn into_mismatch(self) -> Option<Mismatch> {
        match self {
            Comparison::Equal => None,
            Comparison::Unequal(m) => Some(m),
        }
    }
}

/// One accessor step on the path to a divergence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PathSegment {
    /// Position in an ordered sequence
    AtIndex(usize),
    /// Key in a mapping
    AtKey(Key),
}

/// The first detected divergence: an accessor path from the comparison
/// root (outermost segment first) terminated by one [`LeafMismatch`].
///
/// The path is empty only when the divergence is at the root itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mismatch {
    /// Accessor chain from outermost to innermost
    pub path: Vec<PathSegment>,
    /// The terminal reason the comparison failed at that path
    pub leaf: LeafMismatch,
}

impl Mismatch {
    /// A mismatch at the current position, with no path yet.
    pub fn leaf(leaf: LeafMismatch) -> Self {
        Self {
            path: Vec::new(),
            leaf,
        }
    }

    /// Prepend one segment; each recursion level applies exactly one.
    pub fn at(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Nesting depth of the divergence.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::compare::render::render_mismatch(self))
    }
}

impl std::error::Error for Mismatch {}

/// The terminal, non-recursive reason a comparison failed.
///
/// Collection payloads (`full`, `extra`, `missing`, `actual_keys`) are
/// snapshots taken at mismatch time; the comparator never holds onto its
/// inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LeafMismatch {
    /// The two values have different concrete types
    TypeMismatch {
        /// Type name of the expected value
        expected: String,
        /// Type name of the actual value
        actual: String,
    },
    /// Same type, different payload
    ValueMismatch {
        /// The value the actual side was expected to equal
        expected: Scalar,
        /// The value actually found
        actual: Scalar,
    },
    /// The actual sequence has more elements than expected
    ExtraElements {
        /// The complete actual sequence
        full: Vec<Value>,
        /// The surplus tail `actual[len(expected)..]`
        extra: Vec<Value>,
    },
    /// The actual sequence has fewer elements than expected
    MissingElements {
        /// The complete actual sequence
        full: Vec<Value>,
        /// The absent tail `expected[len(actual)..]`
        missing: Vec<Value>,
    },
    /// The actual mapping contains a key the expected mapping lacks
    ExtraKey {
        /// The offending key
        key: Key,
        /// All keys of the actual mapping
        actual_keys: Vec<Key>,
    },
    /// The expected mapping contains a key the actual mapping lacks
    MissingKey {
        /// The absent key
        key: Key,
        /// All keys of the actual mapping
        actual_keys: Vec<Key>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_prepends() {
        let mismatch = Mismatch::leaf(LeafMismatch::ValueMismatch {
            expected: Scalar::Int(3),
            actual: Scalar::Int(0),
        })
        .at(PathSegment::AtIndex(2))
        .at(PathSegment::AtKey(Key::from("b")));

        assert_eq!(
            mismatch.path,
            vec![
                PathSegment::AtKey(Key::from("b")),
                PathSegment::AtIndex(2)
            ]
        );
        assert_eq!(mismatch.depth(), 2);
    }

    #[test]
    fn test_comparison_accessors() {
        assert!(Comparison::Equal.is_equal());
        assert!(Comparison::Equal.mismatch().is_none());

        let unequal = Comparison::Unequal(Mismatch::leaf(LeafMismatch::TypeMismatch {
            expected: "i32".to_string(),
            actual: "i64".to_string(),
        }));
        assert!(!unequal.is_equal());
        assert!(unequal.mismatch().is_some());
        assert!(unequal.into_mismatch().is_some());
    }

    #[test]
    fn test_mismatch_round_trips_through_json() {
        let mismatch = Mismatch::leaf(LeafMismatch::ExtraKey {
            key: Key::from("b"),
            actual_keys: vec![Key::from("a"), Key::from("b")],
        })
        .at(PathSegment::AtKey(Key::from("b")));

        let serialized = serde_json::to_string(&mismatch).unwrap();
        let reparsed: Mismatch = serde_json::from_str(&serialized).unwrap();
        assert_eq!(reparsed, mismatch);
    }
}
