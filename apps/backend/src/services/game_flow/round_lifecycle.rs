use rand::seq::IndexedRandom;
use sea_orm::DatabaseTransaction;
use tracing::info;

use super::snapshot::GameSnapshot;
use super::GameFlowService;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::rounds::{self, Round, RoundCreate};
use crate::repos::{games, investigations, questions};

impl GameFlowService {
    /// Append a round to the player's current investigation.
    pub async fn next_round(
        &self,
        txn: &DatabaseTransaction,
        player_id: &str,
    ) -> Result<GameSnapshot, AppError> {
        let game = games::find_latest_by_player(txn, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Game,
                    format!("no game for player '{player_id}'"),
                )
            })?;
        let investigation = investigations::find_latest_by_game(txn, game.id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Investigation,
                    format!("game {} has no investigation", game.id),
                )
            })?;

        self.start_round(txn, investigation.id).await?;
        self.snapshot_for_game(txn, &game).await
    }

    /// Create a round with a uniformly random question and no answer.
    /// Questions may repeat across rounds; the deck is small on purpose.
    pub(super) async fn start_round(
        &self,
        txn: &DatabaseTransaction,
        investigation_id: uuid::Uuid,
    ) -> Result<Round, AppError> {
        let deck = questions::find_all(txn).await?;
        let question = deck.choose(&mut rand::rng()).ok_or_else(|| {
            DomainError::validation(ValidationKind::NoQuestions, "question catalogue is empty")
        })?;

        let round = rounds::create_round(
            txn,
            RoundCreate {
                investigation_id,
                question_id: question.id,
            },
        )
        .await?;

        info!(
            investigation_id = %investigation_id,
            round_id = %round.id,
            "round started"
        );
        Ok(round)
    }
}
