use crate::domain::outcome::{evaluate_outcome, InvestigationOutcome};
use crate::domain::rules::POOL_SIZE;

#[test]
fn fresh_investigation_is_in_progress() {
    let outcome = evaluate_outcome(POOL_SIZE, 0, false);
    assert_eq!(outcome, InvestigationOutcome::InProgress);
    assert!(!outcome.is_over());
}

#[test]
fn solved_exactly_at_pool_size_minus_one() {
    assert_eq!(
        evaluate_outcome(POOL_SIZE, POOL_SIZE - 2, false),
        InvestigationOutcome::InProgress
    );
    assert_eq!(
        evaluate_outcome(POOL_SIZE, POOL_SIZE - 1, false),
        InvestigationOutcome::Solved
    );
}

#[test]
fn criminal_elimination_dominates() {
    // Loss even on the very first elimination...
    assert_eq!(
        evaluate_outcome(POOL_SIZE, 1, true),
        InvestigationOutcome::CriminalEliminated
    );
    // ...and regardless of how many others were already out.
    assert_eq!(
        evaluate_outcome(POOL_SIZE, POOL_SIZE - 1, true),
        InvestigationOutcome::CriminalEliminated
    );
}

#[test]
fn outcome_never_reverts_once_over() {
    // Eliminations are append-only, so the distinct count only grows; any
    // count at or past pool_size - 1 must stay terminal.
    for n in (POOL_SIZE - 1)..=POOL_SIZE {
        assert!(evaluate_outcome(POOL_SIZE, n, false).is_over());
        assert!(evaluate_outcome(POOL_SIZE, n, true).is_over());
    }
}
