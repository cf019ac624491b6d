//! SeaORM adapter for the suspects catalogue - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::suspects;

pub async fn find_by_image<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    image: &str,
) -> Result<Option<suspects::Model>, sea_orm::DbErr> {
    suspects::Entity::find()
        .filter(suspects::Column::Image.eq(image))
        .one(conn)
        .await
}

/// Register a suspect portrait, reusing the existing row when the image is
/// already catalogued.
pub async fn create_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    image: &str,
) -> Result<suspects::Model, sea_orm::DbErr> {
    if let Some(existing) = find_by_image(conn, image).await? {
        return Ok(existing);
    }

    let suspect_active = suspects::ActiveModel {
        id: Set(Uuid::new_v4()),
        image: Set(image.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    suspect_active.insert(conn).await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<suspects::Model>, sea_orm::DbErr> {
    suspects::Entity::find().all(conn).await
}

/// Fetch the given suspects in one query; order is not guaranteed.
pub async fn find_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[Uuid],
) -> Result<Vec<suspects::Model>, sea_orm::DbErr> {
    suspects::Entity::find()
        .filter(suspects::Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await
}
