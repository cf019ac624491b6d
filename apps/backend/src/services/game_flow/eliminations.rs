use sea_orm::DatabaseTransaction;
use tracing::info;
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::{evaluate_outcome, score_delta, InvestigationOutcome};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::eliminations::{self, Elimination, EliminationCreate};
use crate::repos::games::Game;
use crate::repos::{games, investigations, rounds};

/// What one elimination did to the game.
#[derive(Debug, Clone)]
pub struct EliminationOutcome {
    pub elimination: Elimination,
    pub outcome: InvestigationOutcome,
    /// Points awarded for this elimination; 0 when the criminal was hit.
    pub score_delta: i64,
    /// Game as of after the award.
    pub game: Game,
}

impl GameFlowService {
    /// Rule a suspect out of an investigation and score the move.
    ///
    /// The whole method runs in the caller's transaction: the elimination
    /// record and the score award commit or roll back together. The unique
    /// index on (investigation_id, suspect_id) backstops the pre-check
    /// against a concurrent duplicate.
    pub async fn eliminate_suspect(
        &self,
        txn: &DatabaseTransaction,
        investigation_id: Uuid,
        round_id: Uuid,
        suspect_id: Uuid,
    ) -> Result<EliminationOutcome, AppError> {
        let round = rounds::require_round(txn, round_id).await?;
        if round.investigation_id != investigation_id {
            return Err(DomainError::validation(
                ValidationKind::RoundMismatch,
                format!("round {round_id} does not belong to investigation {investigation_id}"),
            )
            .into());
        }

        let investigation = investigations::require_investigation(txn, investigation_id).await?;
        let game = games::require_game(txn, investigation.game_id).await?;

        let pool = investigations::find_pool(txn, investigation_id).await?;
        if !pool.contains(&suspect_id) {
            return Err(DomainError::validation(
                ValidationKind::SuspectNotInPool,
                format!("suspect {suspect_id} is not in this investigation's pool"),
            )
            .into());
        }

        if eliminations::exists_for_suspect(txn, investigation_id, suspect_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyEliminated,
                "Suspect already eliminated in this investigation",
            )
            .into());
        }

        let elimination = eliminations::create_elimination(
            txn,
            EliminationCreate {
                round_id,
                investigation_id,
                suspect_id,
            },
        )
        .await?;

        let eliminated: std::collections::HashSet<Uuid> =
            eliminations::find_by_investigation(txn, investigation_id)
                .await?
                .into_iter()
                .map(|e| e.suspect_id)
                .collect();
        let criminal_hit = suspect_id == investigation.criminal_id;
        let outcome = evaluate_outcome(
            pool.len(),
            eliminated.len(),
            eliminated.contains(&investigation.criminal_id),
        );

        // Eliminating the criminal loses the investigation and awards
        // nothing; a correct elimination pays level x eliminations so far
        // in this round, including this one.
        let delta = if criminal_hit {
            0
        } else {
            let level = investigations::count_by_game(txn, game.id).await? as i64;
            let in_round = eliminations::count_by_round(txn, round_id).await? as i64;
            score_delta(level, in_round)
        };

        let game = if delta > 0 {
            games::add_score(txn, game.id, delta, game.lock_version).await?
        } else {
            game
        };

        info!(
            investigation_id = %investigation_id,
            round_id = %round_id,
            suspect_id = %suspect_id,
            criminal_hit,
            delta,
            outcome = ?outcome,
            "suspect eliminated"
        );

        Ok(EliminationOutcome {
            elimination,
            outcome,
            score_delta: delta,
            game,
        })
    }
}
