//! Deterministic fact selection.
//!
//! All questions asked within one investigation are answered from the same
//! underlying fact about the criminal; otherwise repeated questions could
//! contradict each other and the player could exploit (or be confused by)
//! the inconsistency. The index is a pure function of the investigation
//! identity and the candidate count, so no selection state is persisted.

use uuid::Uuid;

/// Pick the fact index for this investigation: the UUID's leading 64 bits
/// reduced modulo `candidate_count`. Returns 0 when `candidate_count` is 0;
/// callers must treat that as "no candidate available", not a selection.
pub fn pick_fact_index(investigation_id: Uuid, candidate_count: usize) -> usize {
    if candidate_count == 0 {
        return 0;
    }
    let high_bits = (investigation_id.as_u128() >> 64) as u64;
    (high_bits % candidate_count as u64) as usize
}
