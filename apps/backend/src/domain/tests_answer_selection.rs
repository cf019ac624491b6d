use uuid::Uuid;

use crate::domain::answer_selection::pick_fact_index;

#[test]
fn deterministic_for_same_investigation() {
    let id = Uuid::new_v4();
    for count in [1usize, 2, 7, 100] {
        assert_eq!(pick_fact_index(id, count), pick_fact_index(id, count));
    }
}

#[test]
fn index_is_in_range() {
    for _ in 0..64 {
        let id = Uuid::new_v4();
        for count in [1usize, 3, 5, 9] {
            assert!(pick_fact_index(id, count) < count);
        }
    }
}

#[test]
fn no_candidates_degenerates_to_zero() {
    assert_eq!(pick_fact_index(Uuid::new_v4(), 0), 0);
}

#[test]
fn different_investigations_spread_over_candidates() {
    // Not a statistical test, just a guard against a constant function:
    // with 64 random ids over 8 candidates, at least two distinct indexes
    // must show up.
    let picked: std::collections::HashSet<usize> = (0..64)
        .map(|_| pick_fact_index(Uuid::new_v4(), 8))
        .collect();
    assert!(picked.len() > 1);
}

#[test]
fn known_uuid_maps_to_expected_index() {
    // Leading 8 bytes 0x0000…0001 → 1 mod count.
    let id = Uuid::from_u128(1u128 << 64);
    assert_eq!(pick_fact_index(id, 7), 1);

    let id = Uuid::from_u128(9u128 << 64);
    assert_eq!(pick_fact_index(id, 7), 2);
}
