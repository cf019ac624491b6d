//! Terminal state of an investigation, derived from the elimination ledger.

use serde::{Deserialize, Serialize};

/// Win and loss are distinct terminal outcomes; callers must be able to
/// tell them apart, not just read one "over" boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationOutcome {
    InProgress,
    /// Everyone but the criminal has been ruled out: the player cornered them.
    Solved,
    /// The criminal was eliminated: investigation failed, game over.
    CriminalEliminated,
}

impl InvestigationOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, InvestigationOutcome::InProgress)
    }
}

/// Evaluate the outcome from the distinct-eliminated count and whether the
/// criminal is among the eliminated. Eliminating the criminal dominates:
/// it ends the investigation regardless of the count.
pub fn evaluate_outcome(
    pool_size: usize,
    distinct_eliminated: usize,
    criminal_eliminated: bool,
) -> InvestigationOutcome {
    if criminal_eliminated {
        return InvestigationOutcome::CriminalEliminated;
    }
    if distinct_eliminated >= pool_size.saturating_sub(1) {
        return InvestigationOutcome::Solved;
    }
    InvestigationOutcome::InProgress
}
