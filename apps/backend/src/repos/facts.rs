//! Suspect fact repository functions.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::facts_sea as facts_adapter;
use crate::entities::suspect_facts;
use crate::errors::domain::DomainError;

pub use facts_adapter::FactCreate;

/// One generated fact about a suspect, attributed to the model that wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct SuspectFact {
    pub id: Uuid,
    pub suspect_id: Uuid,
    pub model: String,
    pub fact: String,
    pub created_at: time::OffsetDateTime,
}

impl From<suspect_facts::Model> for SuspectFact {
    fn from(m: suspect_facts::Model) -> Self {
        Self {
            id: m.id,
            suspect_id: m.suspect_id,
            model: m.model,
            fact: m.fact,
            created_at: m.created_at,
        }
    }
}

// Free functions (generic) for fact operations

pub async fn create_fact<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FactCreate,
) -> Result<SuspectFact, DomainError> {
    let fact = facts_adapter::create_fact(conn, dto).await?;
    Ok(SuspectFact::from(fact))
}

/// Facts about a suspect, preferring those written by `model` and falling
/// back to any model when that set is empty. Ordered oldest first so the
/// deterministic index selection is stable.
pub async fn find_for_answering<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    suspect_id: Uuid,
    model: &str,
) -> Result<Vec<SuspectFact>, DomainError> {
    let preferred = facts_adapter::find_by_suspect_and_model(conn, suspect_id, model).await?;
    if !preferred.is_empty() {
        return Ok(preferred.into_iter().map(SuspectFact::from).collect());
    }
    let any = facts_adapter::find_by_suspect(conn, suspect_id).await?;
    Ok(any.into_iter().map(SuspectFact::from).collect())
}

pub async fn find_by_suspect<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    suspect_id: Uuid,
) -> Result<Vec<SuspectFact>, DomainError> {
    let facts = facts_adapter::find_by_suspect(conn, suspect_id).await?;
    Ok(facts.into_iter().map(SuspectFact::from).collect())
}
