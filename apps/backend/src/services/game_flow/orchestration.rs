use sea_orm::DatabaseTransaction;
use tracing::{info, warn};

use super::snapshot::GameSnapshot;
use super::GameFlowService;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::{self, GameCreate};

impl GameFlowService {
    /// Start a brand new game for the player and open its first
    /// investigation.
    pub async fn new_game(
        &self,
        txn: &DatabaseTransaction,
        player_id: &str,
        model: &str,
    ) -> Result<GameSnapshot, AppError> {
        if model.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyModel,
                "a game needs an answer-generation model",
            )
            .into());
        }
        if player_id.trim().is_empty() {
            // Anonymous players are tolerated; they just can't resume.
            warn!("starting game with empty player id");
        }

        self.create_game(txn, player_id, model).await
    }

    /// Latest game for the player. Never a 404: a player without a game
    /// transparently gets a fresh one. The bootstrap tolerates an empty
    /// model; only the explicit new-game entry point insists on one.
    pub async fn current_game(
        &self,
        txn: &DatabaseTransaction,
        player_id: &str,
        model: &str,
    ) -> Result<GameSnapshot, AppError> {
        match games::find_latest_by_player(txn, player_id).await? {
            Some(game) => self.snapshot_for_game(txn, &game).await,
            None => {
                info!(player_id, "no game on record, bootstrapping one");
                self.create_game(txn, player_id, model).await
            }
        }
    }

    async fn create_game(
        &self,
        txn: &DatabaseTransaction,
        player_id: &str,
        model: &str,
    ) -> Result<GameSnapshot, AppError> {
        let game = games::create_game(
            txn,
            GameCreate {
                player_id: player_id.to_string(),
                investigator: String::new(),
                model: model.to_string(),
            },
        )
        .await?;

        info!(game_id = %game.id, model = %game.model, "game created");

        self.start_investigation(txn, &game).await?;
        self.snapshot_for_game(txn, &game).await
    }
}
