//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use games_adapter::GameCreate;

/// Game domain model.
///
/// A game accumulates score across investigations; `lock_version` guards
/// the score against concurrent double-awards.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub player_id: String,
    pub investigator: String,
    pub model: String,
    pub score: i64,
    pub lock_version: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<games::Model> for Game {
    fn from(m: games::Model) -> Self {
        Self {
            id: m.id,
            player_id: m.player_id,
            investigator: m.investigator,
            model: m.model,
            score: m.score,
            lock_version: m.lock_version,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// Free functions (generic) for game operations

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Find game by ID or return a Game not-found error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found")))
}

/// Newest game for the player, if any.
pub async fn find_latest_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_latest_by_player(conn, player_id).await?;
    Ok(game.map(Game::from))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

/// Add to the score under the game's optimistic lock. A stale
/// `expected_lock_version` surfaces as a Conflict.
pub async fn add_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
    amount: i64,
    expected_lock_version: i32,
) -> Result<Game, DomainError> {
    let game = games_adapter::add_score(conn, game_id, amount, expected_lock_version).await?;
    Ok(Game::from(game))
}

pub async fn set_investigator<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
    name: &str,
) -> Result<Game, DomainError> {
    let game = games_adapter::set_investigator(conn, game_id, name).await?;
    Ok(Game::from(game))
}

/// All games ordered by score descending.
pub async fn find_all_by_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::find_all_by_score(conn).await?;
    Ok(games.into_iter().map(Game::from).collect())
}
