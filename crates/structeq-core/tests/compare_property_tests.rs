//! Property-based tests for the comparison engine.

use proptest::prelude::*;
use structeq_core::compare::{compare, Comparison, LeafMismatch, PathSegment};
use structeq_core::model::{Key, Scalar, Value};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Null),
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Int),
        any::<u64>().prop_map(Scalar::UInt),
        any::<f64>().prop_map(Scalar::Float64),
        "[a-z]{0,8}".prop_map(Scalar::Str),
    ]
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        any::<i64>().prop_map(Key::Int),
        "[a-z]{1,6}".prop_map(Key::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = scalar_strategy().prop_map(Value::Scalar);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::btree_map(key_strategy(), inner, 0..4).prop_map(Value::Mapping),
        ]
    })
}

fn int_seq(items: &[i64]) -> Value {
    Value::Sequence(items.iter().map(|i| Value::Scalar(Scalar::Int(*i))).collect())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    // Reflexivity holds for any finite value tree, NaN payloads included
    // (float equality is bitwise).
    #[test]
    fn prop_reflexivity(value in value_strategy()) {
        prop_assert_eq!(compare(&value, &value), Comparison::Equal);
    }

    // Equality is symmetric: the verdict (though not the mismatch) agrees
    // when the arguments are swapped.
    #[test]
    fn prop_equal_is_symmetric(a in value_strategy(), b in value_strategy()) {
        let forward = compare(&a, &b).is_equal();
        let backward = compare(&b, &a).is_equal();
        prop_assert_eq!(forward, backward);
    }

    // A strict prefix on the actual side is always MissingElements at
    // index len(actual).
    #[test]
    fn prop_strict_prefix_is_missing_elements(
        prefix in prop::collection::vec(any::<i64>(), 0..6),
        suffix in prop::collection::vec(any::<i64>(), 1..4),
    ) {
        let full: Vec<i64> = prefix.iter().chain(suffix.iter()).copied().collect();
        let result = compare(&int_seq(&full), &int_seq(&prefix));

        let mismatch = result.into_mismatch().expect("prefix must diverge");
        prop_assert_eq!(&mismatch.path, &vec![PathSegment::AtIndex(prefix.len())]);
        let is_missing = matches!(mismatch.leaf, LeafMismatch::MissingElements { .. });
        prop_assert!(is_missing);
    }

    // A strict prefix on the expected side is always ExtraElements at
    // index len(expected).
    #[test]
    fn prop_strict_prefix_is_extra_elements(
        prefix in prop::collection::vec(any::<i64>(), 0..6),
        suffix in prop::collection::vec(any::<i64>(), 1..4),
    ) {
        let full: Vec<i64> = prefix.iter().chain(suffix.iter()).copied().collect();
        let result = compare(&int_seq(&prefix), &int_seq(&full));

        let mismatch = result.into_mismatch().expect("surplus must diverge");
        prop_assert_eq!(&mismatch.path, &vec![PathSegment::AtIndex(prefix.len())]);
        let is_extra = matches!(mismatch.leaf, LeafMismatch::ExtraElements { .. });
        prop_assert!(is_extra);
    }

    // For same-length scalar sequences the reported index is the lowest
    // differing position.
    #[test]
    fn prop_first_divergence_is_lowest_index(
        pairs in prop::collection::vec((any::<i64>(), any::<i64>()), 1..8),
    ) {
        let expected: Vec<i64> = pairs.iter().map(|(e, _)| *e).collect();
        let actual: Vec<i64> = pairs.iter().map(|(_, a)| *a).collect();
        let first_diff = pairs.iter().position(|(e, a)| e != a);

        let result = compare(&int_seq(&expected), &int_seq(&actual));
        match first_diff {
            None => prop_assert!(result.is_equal()),
            Some(index) => {
                let mismatch = result.into_mismatch().expect("divergence expected");
                prop_assert_eq!(&mismatch.path, &vec![PathSegment::AtIndex(index)]);
            }
        }
    }

    // Wrapping a divergent pair in n single-key mappings yields a path of
    // exactly n segments, one per level.
    #[test]
    fn prop_path_depth_mirrors_nesting(depth in 0usize..8) {
        let mut expected = Value::Scalar(Scalar::Int(1));
        let mut actual = Value::Scalar(Scalar::Int(2));
        for _ in 0..depth {
            let mut expected_wrap = structeq_core::model::Mapping::new();
            expected_wrap.insert(Key::from("k"), expected);
            expected = Value::Mapping(expected_wrap);

            let mut actual_wrap = structeq_core::model::Mapping::new();
            actual_wrap.insert(Key::from("k"), actual);
            actual = Value::Mapping(actual_wrap);
        }

        let mismatch = compare(&expected, &actual)
            .into_mismatch()
            .expect("payloads differ");
        prop_assert_eq!(mismatch.depth(), depth);
    }
}
