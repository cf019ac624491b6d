//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::games;

pub mod dto;

pub use dto::GameCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return RecordNotFound error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

/// Newest game for the player; "current game" lookups resolve through this.
pub async fn find_latest_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    games::Entity::find()
        .filter(games::Column::PlayerId.eq(player_id))
        .order_by_desc(games::Column::CreatedAt)
        .one(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(Uuid::new_v4()),
        player_id: Set(dto.player_id),
        investigator: Set(dto.investigator),
        model: Set(dto.model),
        score: Set(0),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Add `amount` to the score with an optimistic lock_version check.
///
/// The score column is only ever incremented, never assigned, so a lost
/// update cannot shrink it; the version check turns concurrent
/// double-submissions into a retriable conflict instead.
pub async fn add_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
    amount: i64,
    current_lock_version: i32,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = games::Entity::update_many()
        .col_expr(
            games::Column::Score,
            Expr::col(games::Column::Score).add(amount),
        )
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .filter(games::Column::Id.eq(game_id))
        .filter(games::Column::LockVersion.eq(current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the game doesn't exist or the lock version doesn't match
        let game = find_by_id(conn, game_id).await?;
        if let Some(game) = game {
            let payload = format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                current_lock_version, game.lock_version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        }
        return Err(sea_orm::DbErr::RecordNotFound("Game not found".to_string()));
    }

    require_game(conn, game_id).await
}

/// Set the investigator display name (high-score table entry).
pub async fn set_investigator<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
    name: &str,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = require_game(conn, game_id).await?;
    let mut game: games::ActiveModel = game.into();
    game.investigator = Set(name.to_string());
    game.updated_at = Set(time::OffsetDateTime::now_utc());
    game.update(conn).await
}

/// All games ordered by score descending (high-score listing).
pub async fn find_all_by_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    games::Entity::find()
        .order_by_desc(games::Column::Score)
        .all(conn)
        .await
}
