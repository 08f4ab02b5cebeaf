//! Recursive comparison engine.
//!
//! The core entry point is [`compare`], which walks two [`Value`] trees
//! and returns a [`Comparison`].

use crate::compare::model::{Comparison, LeafMismatch, Mismatch, PathSegment};
use crate::model::{Mapping, Scalar, Value};

/// Compare two value trees structurally.
///
/// The type gate comes first: values of different variants, or scalars of
/// different concrete types, are a [`LeafMismatch::TypeMismatch`] and
/// recursion stops. Sequences are walked in order over the *actual*
/// side's indices; mappings in two passes (extra keys and value recursion
/// over `actual`, then missing keys over `expected`). The first
/// divergence wins: each level prepends exactly one [`PathSegment`] to
/// its child's mismatch and returns immediately.
pub fn compare(expected: &Value, actual: &Value) -> Comparison {
    match (expected, actual) {
        (Value::Scalar(expected), Value::Scalar(actual)) => compare_scalars(expected, actual),
        (Value::Sequence(expected), Value::Sequence(actual)) => {
            compare_sequences(expected, actual)
        }
        (Value::Mapping(expected), Value::Mapping(actual)) => compare_mappings(expected, actual),
        _ => type_mismatch(expected.type_name(), actual.type_name()),
    }
}

fn type_mismatch(expected: &str, actual: &str) -> Comparison {
    Comparison::Unequal(Mismatch::leaf(LeafMismatch::TypeMismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
    }))
}

/// Scalars require type identity before value identity.
fn compare_scalars(expected: &Scalar, actual: &Scalar) -> Comparison {
    if !expected.same_type(actual) {
        return type_mismatch(expected.type_name(), actual.type_name());
    }
    if expected == actual {
        Comparison::Equal
    } else {
        Comparison::Unequal(Mismatch::leaf(LeafMismatch::ValueMismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        }))
    }
}

/// Iteration is driven by the actual sequence; surplus in `actual` is
/// reported as extra elements at the first surplus index, surplus in
/// `expected` as missing elements at `len(actual)`.
fn compare_sequences(expected: &[Value], actual: &[Value]) -> Comparison {
    for (index, actual_element) in actual.iter().enumerate() {
        let Some(expected_element) = expected.get(index) else {
            return Comparison::Unequal(
                Mismatch::leaf(LeafMismatch::ExtraElements {
                    full: actual.to_vec(),
                    extra: actual[index..].to_vec(),
                })
                .at(PathSegment::AtIndex(index)),
            );
        };
        if let Comparison::Unequal(mismatch) = compare(expected_element, actual_element) {
            return Comparison::Unequal(mismatch.at(PathSegment::AtIndex(index)));
        }
    }

    if expected.len() > actual.len() {
        return Comparison::Unequal(
            Mismatch::leaf(LeafMismatch::MissingElements {
                full: actual.to_vec(),
                missing: expected[actual.len()..].to_vec(),
            })
            .at(PathSegment::AtIndex(actual.len())),
        );
    }

    Comparison::Equal
}

/// Pass 1 walks the actual mapping (extra keys, value recursion); pass 2
/// walks the expected mapping (missing keys). Key order cannot change the
/// verdict, only which of several extra/missing keys is reported first;
/// `BTreeMap` makes that choice deterministic (lowest key first).
fn compare_mappings(expected: &Mapping, actual: &Mapping) -> Comparison {
    for (key, actual_value) in actual {
        let Some(expected_value) = expected.get(key) else {
            return Comparison::Unequal(
                Mismatch::leaf(LeafMismatch::ExtraKey {
                    key: key.clone(),
                    actual_keys: actual.keys().cloned().collect(),
                })
                .at(PathSegment::AtKey(key.clone())),
            );
        };
        if let Comparison::Unequal(mismatch) = compare(expected_value, actual_value) {
            return Comparison::Unequal(mismatch.at(PathSegment::AtKey(key.clone())));
        }
    }

    for key in expected.keys() {
        if !actual.contains_key(key) {
            return Comparison::Unequal(
                Mismatch::leaf(LeafMismatch::MissingKey {
                    key: key.clone(),
                    actual_keys: actual.keys().cloned().collect(),
                })
                .at(PathSegment::AtKey(key.clone())),
            );
        }
    }

    Comparison::Equal
}
