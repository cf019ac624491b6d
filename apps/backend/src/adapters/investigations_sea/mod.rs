//! SeaORM adapter for investigations and their pool slots.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::{investigation_suspects, investigations};

pub mod dto;

pub use dto::InvestigationCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Option<investigations::Model>, sea_orm::DbErr> {
    investigations::Entity::find_by_id(investigation_id)
        .one(conn)
        .await
}

pub async fn require_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<investigations::Model, sea_orm::DbErr> {
    find_by_id(conn, investigation_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Investigation not found".to_string()))
}

/// Newest investigation for the game - the "current" one.
pub async fn find_latest_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<investigations::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    investigations::Entity::find()
        .filter(investigations::Column::GameId.eq(game_id))
        .order_by_desc(investigations::Column::CreatedAt)
        .one(conn)
        .await
}

/// Count of investigations started for the game; this count *is* the level.
pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::PaginatorTrait;

    investigations::Entity::find()
        .filter(investigations::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

/// Insert the investigation row and one pool-slot row per suspect, in pool
/// order. Callers run this inside a transaction so a failed slot insert
/// leaves no partially created investigation behind.
pub async fn create_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InvestigationCreate,
) -> Result<investigations::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let investigation = investigations::ActiveModel {
        id: Set(Uuid::new_v4()),
        game_id: Set(dto.game_id),
        criminal_id: Set(dto.criminal_id),
        created_at: Set(now),
    }
    .insert(conn)
    .await?;

    for (position, suspect_id) in dto.pool.iter().enumerate() {
        investigation_suspects::ActiveModel {
            id: sea_orm::NotSet,
            investigation_id: Set(investigation.id),
            position: Set(position as i16),
            suspect_id: Set(*suspect_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(investigation)
}

/// Pool slots for the investigation, ordered by position.
pub async fn find_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Vec<investigation_suspects::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    investigation_suspects::Entity::find()
        .filter(investigation_suspects::Column::InvestigationId.eq(investigation_id))
        .order_by_asc(investigation_suspects::Column::Position)
        .all(conn)
        .await
}
