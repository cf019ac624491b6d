//! SeaORM adapter for the elimination ledger.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::eliminations;

pub mod dto;

pub use dto::EliminationCreate;

/// Append one elimination. The unique index on
/// `(investigation_id, suspect_id)` turns duplicates into a DbErr that the
/// repos layer maps to an AlreadyEliminated conflict.
pub async fn create_elimination<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: EliminationCreate,
) -> Result<eliminations::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let elimination = eliminations::ActiveModel {
        id: Set(Uuid::new_v4()),
        round_id: Set(dto.round_id),
        investigation_id: Set(dto.investigation_id),
        suspect_id: Set(dto.suspect_id),
        created_at: Set(now),
    };

    elimination.insert(conn).await
}

/// Every elimination of the investigation across all of its rounds.
pub async fn find_by_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Vec<eliminations::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    eliminations::Entity::find()
        .filter(eliminations::Column::InvestigationId.eq(investigation_id))
        .order_by_asc(eliminations::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn count_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::PaginatorTrait;

    eliminations::Entity::find()
        .filter(eliminations::Column::RoundId.eq(round_id))
        .count(conn)
        .await
}

pub async fn exists_for_suspect<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
    suspect_id: Uuid,
) -> Result<bool, sea_orm::DbErr> {
    let found = eliminations::Entity::find()
        .filter(eliminations::Column::InvestigationId.eq(investigation_id))
        .filter(eliminations::Column::SuspectId.eq(suspect_id))
        .one(conn)
        .await?;
    Ok(found.is_some())
}
