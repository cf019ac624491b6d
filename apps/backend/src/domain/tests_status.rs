use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::status::{compute_statuses, suspect_status, SuspectStatus};

fn pool_of(n: usize) -> Vec<Uuid> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

#[test]
fn untouched_suspect_has_no_status() {
    let pool = pool_of(3);
    let eliminated = HashSet::new();
    assert_eq!(suspect_status(pool[0], pool[1], &eliminated), None);
}

#[test]
fn eliminated_non_criminal_is_free() {
    let pool = pool_of(3);
    let eliminated: HashSet<Uuid> = [pool[0]].into_iter().collect();
    assert_eq!(
        suspect_status(pool[0], pool[1], &eliminated),
        Some(SuspectStatus::Free)
    );
}

#[test]
fn eliminated_criminal_is_fled() {
    let pool = pool_of(3);
    let eliminated: HashSet<Uuid> = [pool[1]].into_iter().collect();
    assert_eq!(
        suspect_status(pool[1], pool[1], &eliminated),
        Some(SuspectStatus::Fled)
    );
}

#[test]
fn statuses_cover_whole_pool() {
    let pool = pool_of(5);
    let criminal = pool[2];
    let eliminated: HashSet<Uuid> = [pool[0], pool[2]].into_iter().collect();

    let statuses = compute_statuses(&pool, criminal, &eliminated);

    assert_eq!(statuses.len(), 5);
    assert_eq!(statuses[&pool[0]], Some(SuspectStatus::Free));
    assert_eq!(statuses[&pool[1]], None);
    assert_eq!(statuses[&pool[2]], Some(SuspectStatus::Fled));
    assert_eq!(statuses[&pool[3]], None);
}

#[test]
fn same_suspect_different_investigations_can_differ() {
    // Shared catalogue entity: criminal here, bystander elsewhere.
    let shared = Uuid::new_v4();
    let other = Uuid::new_v4();
    let eliminated: HashSet<Uuid> = [shared].into_iter().collect();

    assert_eq!(
        suspect_status(shared, shared, &eliminated),
        Some(SuspectStatus::Fled)
    );
    assert_eq!(
        suspect_status(shared, other, &eliminated),
        Some(SuspectStatus::Free)
    );
}
