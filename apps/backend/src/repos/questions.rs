//! Question catalogue repository functions.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::questions_sea as questions_adapter;
use crate::entities::questions;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use questions_adapter::QuestionCreate;

/// Question domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub topic: String,
    pub level: i16,
    pub created_at: time::OffsetDateTime,
}

impl From<questions::Model> for Question {
    fn from(m: questions::Model) -> Self {
        Self {
            id: m.id,
            text: m.text,
            topic: m.topic,
            level: m.level,
            created_at: m.created_at,
        }
    }
}

// Free functions (generic) for question operations

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: Uuid,
) -> Result<Option<Question>, DomainError> {
    let question = questions_adapter::find_by_id(conn, question_id).await?;
    Ok(question.map(Question::from))
}

pub async fn require_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: Uuid,
) -> Result<Question, DomainError> {
    find_by_id(conn, question_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {question_id} not found"),
        )
    })
}

/// Register a question, returning the existing row if the text is already
/// catalogued.
pub async fn create_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<Question, DomainError> {
    let question = questions_adapter::create_if_absent(conn, dto).await?;
    Ok(Question::from(question))
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Question>, DomainError> {
    let questions = questions_adapter::find_all(conn).await?;
    Ok(questions.into_iter().map(Question::from).collect())
}
