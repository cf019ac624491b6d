//! Property tests for the pure game rules (no DB).

include!("common/proptest_prelude.rs");

use backend::domain::{evaluate_outcome, pick_fact_index, score_delta, InvestigationOutcome};
use proptest::prelude::*;
use uuid::Uuid;

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Fact selection is a pure function of (investigation, count) and
    /// always lands inside the candidate range.
    #[test]
    fn prop_fact_index_deterministic_and_in_range(
        raw in any::<u128>(),
        count in 1usize..=64,
    ) {
        let id = Uuid::from_u128(raw);
        let first = pick_fact_index(id, count);
        let second = pick_fact_index(id, count);
        prop_assert_eq!(first, second);
        prop_assert!(first < count);
    }

    /// Zero candidates always selects index 0, whatever the id.
    #[test]
    fn prop_fact_index_degenerate_count(raw in any::<u128>()) {
        prop_assert_eq!(pick_fact_index(Uuid::from_u128(raw), 0), 0);
    }

    /// Scoring is exactly the product, for any plausible inputs.
    #[test]
    fn prop_score_is_the_product(
        level in 1i64..=1000,
        in_round in 1i64..=14,
    ) {
        prop_assert_eq!(score_delta(level, in_round), level * in_round);
    }

    /// Once an investigation is over it can never report InProgress again,
    /// no matter how the elimination count grows.
    #[test]
    fn prop_outcome_is_monotone(
        pool_size in 3usize..=25,
        eliminated in 0usize..=25,
        criminal_eliminated in any::<bool>(),
    ) {
        let outcome = evaluate_outcome(pool_size, eliminated, criminal_eliminated);
        if outcome.is_over() {
            for extra in 0..3 {
                let later = evaluate_outcome(pool_size, eliminated + extra, criminal_eliminated);
                prop_assert_ne!(later, InvestigationOutcome::InProgress);
            }
        }
    }
}
