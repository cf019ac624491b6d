//! High-score table service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::{self, Game};

/// One row of the high-score table.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    /// 1-based rank.
    pub position: usize,
    pub game_id: Uuid,
    pub investigator: String,
    pub score: i64,
}

#[derive(Default)]
pub struct ScoreService;

impl ScoreService {
    /// All games, best score first.
    pub async fn list_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<ScoreEntry>, AppError> {
        let games = games::find_all_by_score(conn).await?;
        Ok(games
            .into_iter()
            .enumerate()
            .map(|(i, game)| ScoreEntry {
                position: i + 1,
                game_id: game.id,
                investigator: game.investigator,
                score: game.score,
            })
            .collect())
    }

    /// Record the display name a player picked for the score table.
    pub async fn save_player_name(
        &self,
        txn: &DatabaseTransaction,
        game_id: Uuid,
        name: &str,
    ) -> Result<Game, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::Other("EmptyName".into()),
                "investigator name must not be empty",
            )
            .into());
        }

        let game = games::set_investigator(txn, game_id, name).await?;
        info!(game_id = %game_id, "investigator name saved");
        Ok(game)
    }
}
