//! Round repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::rounds_sea as rounds_adapter;
use crate::entities::rounds;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use rounds_adapter::RoundCreate;

/// Round domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: Uuid,
    pub investigation_id: Uuid,
    pub question_id: Uuid,
    pub answer: Option<String>,
    pub answered_at: Option<time::OffsetDateTime>,
    pub created_at: time::OffsetDateTime,
}

impl Round {
    /// A round is answered once its answer has been recorded.
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

impl From<rounds::Model> for Round {
    fn from(m: rounds::Model) -> Self {
        Self {
            id: m.id,
            investigation_id: m.investigation_id,
            question_id: m.question_id,
            answer: m.answer,
            answered_at: m.answered_at,
            created_at: m.created_at,
        }
    }
}

// Free functions (generic) for round operations

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_by_id(conn, round_id).await?;
    Ok(round.map(Round::from))
}

pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Round, DomainError> {
    find_by_id(conn, round_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
    })
}

/// Rounds of the investigation, oldest first.
pub async fn find_all_by_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Vec<Round>, DomainError> {
    let rounds = rounds_adapter::find_all_by_investigation(conn, investigation_id).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::create_round(conn, dto).await?;
    Ok(Round::from(round))
}

/// Record the answer only if none is present yet. Returns true when this
/// call performed the write, false when a prior answer already stood.
pub async fn record_answer_if_empty<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    answer: &str,
) -> Result<bool, DomainError> {
    let rows = rounds_adapter::record_answer_if_empty(conn, round_id, answer).await?;
    Ok(rows > 0)
}
