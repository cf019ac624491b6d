//! Per-investigation derived suspect status.
//!
//! Status is never stored on the suspect row: the same suspect appears in
//! unrelated investigations with different outcomes, so it is recomputed
//! from the elimination ledger on every read.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuspectStatus {
    /// Non-criminal suspect that was eliminated: correctly ruled out.
    Free,
    /// The criminal was eliminated: escaped justice, investigation lost.
    Fled,
}

/// Status of one suspect, `None` while the suspect is still in play.
pub fn suspect_status(
    suspect_id: Uuid,
    criminal_id: Uuid,
    eliminated: &HashSet<Uuid>,
) -> Option<SuspectStatus> {
    if !eliminated.contains(&suspect_id) {
        return None;
    }
    if suspect_id == criminal_id {
        Some(SuspectStatus::Fled)
    } else {
        Some(SuspectStatus::Free)
    }
}

/// Derive the status of every pooled suspect from the accumulated
/// eliminations of the investigation. Pure; recomputed fresh per read.
pub fn compute_statuses(
    pool: &[Uuid],
    criminal_id: Uuid,
    eliminated: &HashSet<Uuid>,
) -> HashMap<Uuid, Option<SuspectStatus>> {
    pool.iter()
        .map(|&id| (id, suspect_status(id, criminal_id, eliminated)))
        .collect()
}
