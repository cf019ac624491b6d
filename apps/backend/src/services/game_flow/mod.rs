//! Investigation flow service - bridges pure game rules with persistence.
//!
//! Mutating methods run inside the caller's transaction; the answer wait
//! polls on a plain connection so it never pins a transaction for its
//! whole lifetime.

mod answers;
mod eliminations;
mod investigation_lifecycle;
mod orchestration;
mod round_lifecycle;
pub mod snapshot;

pub use answers::AnswerWait;
pub use eliminations::EliminationOutcome;
pub use snapshot::{GameSnapshot, InvestigationView, RoundView, SuspectView};

/// Game flow service - generic over ConnectionTrait for transaction support.
#[derive(Default)]
pub struct GameFlowService;
