use rand::seq::IndexedRandom;
use sea_orm::DatabaseTransaction;
use tracing::info;

use super::snapshot::GameSnapshot;
use super::GameFlowService;
use crate::domain::rules::{validate_pool_size, POOL_SIZE};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::games::Game;
use crate::repos::investigations::{self, Investigation, InvestigationCreate};
use crate::repos::{games, suspects};

impl GameFlowService {
    /// Open a fresh investigation for the player's current game. The
    /// previous investigation stays on record but stops being "current".
    pub async fn next_investigation(
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

        self.start_investigation(txn, &game).await?;
        self.snapshot_for_game(txn, &game).await
    }

    /// Sample the pool, draw the criminal and persist the investigation
    /// with its first round. Runs inside the caller's transaction so a
    /// failure leaves no partial investigation behind.
    pub(super) async fn start_investigation(
        &self,
        txn: &DatabaseTransaction,
        game: &Game,
    ) -> Result<Investigation, AppError> {
        validate_pool_size(POOL_SIZE)?;
        let catalogue = suspects::find_all(txn).await?;
        if catalogue.len() < POOL_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InsufficientSuspects,
                format!(
                    "need {POOL_SIZE} suspects in the catalogue, have {}",
                    catalogue.len()
                ),
            )
            .into());
        }

        // The rng is not Send, so the draw is scoped to finish before the
        // first await.
        let (pool, criminal_id) = {
            let mut rng = rand::rng();
            let pool: Vec<uuid::Uuid> = catalogue
                .choose_multiple(&mut rng, POOL_SIZE)
                .map(|s| s.id)
                .collect();
            let criminal_id = *pool
                .choose(&mut rng)
                .ok_or_else(|| AppError::internal("sampled an empty pool"))?;
            (pool, criminal_id)
        };

        let investigation = investigations::create_investigation(
            txn,
            InvestigationCreate {
                game_id: game.id,
                criminal_id,
                pool,
            },
        )
        .await?;

        let level = investigations::count_by_game(txn, game.id).await?;
        info!(
            game_id = %game.id,
            investigation_id = %investigation.id,
            level,
            "investigation started"
        );

        self.start_round(txn, investigation.id).await?;
        Ok(investigation)
    }
}
