use crate::domain::scoring::score_delta;

#[test]
fn level_times_eliminations() {
    // Three suspects ruled out in one round at level 2 pays 6.
    assert_eq!(score_delta(2, 3), 6);
}

#[test]
fn first_elimination_at_level_one_pays_one() {
    assert_eq!(score_delta(1, 1), 1);
}

#[test]
fn reward_scales_with_tenure_and_risk() {
    // Same risk, higher level pays more.
    assert!(score_delta(3, 2) > score_delta(1, 2));
    // Same level, more eliminations in the round pays more.
    assert!(score_delta(2, 4) > score_delta(2, 1));
}
