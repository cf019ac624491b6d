//! SeaORM adapter for rounds.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::rounds;

pub mod dto;

pub use dto::RoundCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id).one(conn).await
}

pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<rounds::Model, sea_orm::DbErr> {
    find_by_id(conn, round_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))
}

/// All rounds for an investigation, oldest first.
pub async fn find_all_by_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    rounds::Entity::find()
        .filter(rounds::Column::InvestigationId.eq(investigation_id))
        .order_by_asc(rounds::Column::CreatedAt)
        .all(conn)
        .await
}

/// Create a new round with an empty answer.
pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let round = rounds::ActiveModel {
        id: Set(Uuid::new_v4()),
        investigation_id: Set(dto.investigation_id),
        question_id: Set(dto.question_id),
        answer: Set(None),
        answered_at: Set(None),
        created_at: Set(now),
    };

    round.insert(conn).await
}

/// First-write-wins answer recording: only fills a round whose answer is
/// still NULL. Returns the number of rows affected (0 or 1); 0 means an
/// answer was already present and nothing was written.
pub async fn record_answer_if_empty<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    answer: &str,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = rounds::Entity::update_many()
        .col_expr(rounds::Column::Answer, Expr::val(Some(answer)).into())
        .col_expr(rounds::Column::AnsweredAt, Expr::val(Some(now)).into())
        .filter(rounds::Column::Id.eq(round_id))
        .filter(rounds::Column::Answer.is_null())
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
