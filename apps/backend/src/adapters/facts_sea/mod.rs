//! SeaORM adapter for suspect_facts - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::suspect_facts;

pub mod dto;

pub use dto::FactCreate;

pub async fn create_fact<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FactCreate,
) -> Result<suspect_facts::Model, sea_orm::DbErr> {
    let fact_active = suspect_facts::ActiveModel {
        id: Set(Uuid::new_v4()),
        suspect_id: Set(dto.suspect_id),
        model: Set(dto.model),
        fact: Set(dto.fact),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    fact_active.insert(conn).await
}

/// Facts for a suspect written by the given model, oldest first.
pub async fn find_by_suspect_and_model<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    suspect_id: Uuid,
    model: &str,
) -> Result<Vec<suspect_facts::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    suspect_facts::Entity::find()
        .filter(suspect_facts::Column::SuspectId.eq(suspect_id))
        .filter(suspect_facts::Column::Model.eq(model))
        .order_by_asc(suspect_facts::Column::CreatedAt)
        .all(conn)
        .await
}

/// All facts for a suspect regardless of model, oldest first.
pub async fn find_by_suspect<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    suspect_id: Uuid,
) -> Result<Vec<suspect_facts::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    suspect_facts::Entity::find()
        .filter(suspect_facts::Column::SuspectId.eq(suspect_id))
        .order_by_asc(suspect_facts::Column::CreatedAt)
        .all(conn)
        .await
}
