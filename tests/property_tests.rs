//! Property-based tests for input validation.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated horizons, indices and series.

use std::collections::HashSet;

use forecast_guard::prelude::*;
use proptest::prelude::*;

/// Strategy for integer step sequences without duplicates.
fn unique_steps_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::hash_set(-50i64..50, 1..max_len)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Strategy for sorted integer indices (duplicates allowed).
fn sorted_index_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1000, 1..max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

fn series_with_index(name: &str, index: Vec<i64>) -> Series {
    let values: Vec<f64> = (0..index.len()).map(|i| i as f64 + 0.5).collect();
    Series::new(name, TimeIndex::from(index), values).unwrap()
}

// =============================================================================
// Property: Horizon normalization produces a canonical sequence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fh_result_is_sorted_and_duplicate_free(steps in unique_steps_strategy(20)) {
        let fh = check_fh(steps.clone()).unwrap();

        prop_assert!(fh.steps().windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(fh.len(), steps.len());

        // Same set of steps, only the order changed.
        let input: HashSet<i64> = steps.into_iter().collect();
        let output: HashSet<i64> = fh.iter().collect();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn fh_normalization_is_idempotent(steps in unique_steps_strategy(20)) {
        let once = check_fh(steps).unwrap();
        let twice = check_fh(once.steps().to_vec()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fh_rejects_any_duplicated_step(
        steps in unique_steps_strategy(10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut with_dup = steps.clone();
        with_dup.push(steps[pick.index(steps.len())]);

        prop_assert!(matches!(
            check_fh(with_dup),
            Err(ValidationError::DuplicateHorizonSteps { .. })
        ), "expected DuplicateHorizonSteps error");
    }

    #[test]
    fn fh_scalar_always_yields_singleton(step in -100i64..100) {
        let fh = check_fh(step).unwrap();
        prop_assert_eq!(fh.steps(), &[step]);
        prop_assert_eq!(fh.min(), fh.max());
    }
}

// =============================================================================
// Property: Index validation and consistency
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn sorted_indices_always_validate(index in sorted_index_strategy(30)) {
        let index = TimeIndex::from(index);
        prop_assert!(check_time_index(&index).is_ok());
    }

    #[test]
    fn range_index_equals_its_explicit_form(len in 0usize..50) {
        let range = TimeIndex::range(len);
        let explicit = TimeIndex::from((0..len as i64).collect::<Vec<_>>());
        prop_assert!(range.equals(&explicit));
        prop_assert!(explicit.equals(&range));
    }

    #[test]
    fn series_with_equal_indices_are_consistent(index in sorted_index_strategy(30)) {
        let a = series_with_index("y_test", index.clone());
        let b = series_with_index("y_pred", index);
        prop_assert!(check_consistent_time_index(&a, &[&b], None).is_ok());
    }

    #[test]
    fn strictly_earlier_training_never_leaks(
        index in sorted_index_strategy(30),
        gap in 1i64..10,
    ) {
        let test = series_with_index("y_test", index.clone());

        let min = *index.first().unwrap();
        let train_index: Vec<i64> = (0..index.len() as i64).map(|i| min - gap - i).rev().collect();
        let train = series_with_index("y_train", train_index);

        prop_assert!(check_consistent_time_index(&test, &[], Some(&train)).is_ok());
    }

    #[test]
    fn overlapping_training_always_leaks(index in sorted_index_strategy(30)) {
        let test = series_with_index("y_test", index.clone());

        // Training that ends exactly on the evaluation start is a leak.
        let train = series_with_index("y_train", vec![*index.first().unwrap()]);
        prop_assert!(matches!(
            check_consistent_time_index(&test, &[], Some(&train)),
            Err(ValidationError::TrainingLeaksIntoTest { .. })
        ), "expected TrainingLeaksIntoTest error");
    }
}

// =============================================================================
// Property: Confidence levels
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn valid_alphas_pass_through(alphas in prop::collection::vec(0.001f64..0.999, 1..10)) {
        let checked = check_alpha(alphas.clone()).unwrap();
        prop_assert_eq!(checked, alphas);
    }

    #[test]
    fn scalar_alpha_is_normalized_to_singleton(alpha in 0.001f64..0.999) {
        prop_assert_eq!(check_alpha(alpha).unwrap(), vec![alpha]);
    }

    #[test]
    fn alphas_outside_unit_interval_fail(alpha in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0]) {
        prop_assert!(matches!(
            check_alpha(alpha),
            Err(ValidationError::OutOfRange { param: "alpha", .. })
        ), "expected OutOfRange error for alpha");
    }
}
