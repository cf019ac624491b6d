//! SeaORM adapter for the questions catalogue - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: Uuid,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find_by_id(question_id).one(conn).await
}

pub async fn require_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: Uuid,
) -> Result<questions::Model, sea_orm::DbErr> {
    find_by_id(conn, question_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Question not found".to_string()))
}

pub async fn find_by_text<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    text: &str,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Text.eq(text))
        .one(conn)
        .await
}

/// Register a question, reusing the existing row when the text is already
/// catalogued.
pub async fn create_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    if let Some(existing) = find_by_text(conn, &dto.text).await? {
        return Ok(existing);
    }

    let question_active = questions::ActiveModel {
        id: Set(Uuid::new_v4()),
        text: Set(dto.text),
        topic: Set(dto.topic),
        level: Set(dto.level),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    question_active.insert(conn).await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find().all(conn).await
}
