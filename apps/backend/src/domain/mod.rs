//! Pure game rules: no I/O, no persistence, unit-tested in sibling
//! `tests_*.rs` files.

pub mod answer_selection;
pub mod outcome;
pub mod rules;
pub mod scoring;
pub mod status;

#[cfg(test)]
mod tests_answer_selection;
#[cfg(test)]
mod tests_outcome;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_status;

pub use answer_selection::pick_fact_index;
pub use outcome::{evaluate_outcome, InvestigationOutcome};
pub use rules::POOL_SIZE;
pub use scoring::score_delta;
pub use status::{compute_statuses, suspect_status, SuspectStatus};
