//! Elimination repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::eliminations_sea as eliminations_adapter;
use crate::entities::eliminations;
use crate::errors::domain::DomainError;

pub use eliminations_adapter::EliminationCreate;

/// Elimination domain model. Append-only: once a suspect is ruled out of an
/// investigation the record never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Elimination {
    pub id: Uuid,
    pub round_id: Uuid,
    pub investigation_id: Uuid,
    pub suspect_id: Uuid,
    pub created_at: time::OffsetDateTime,
}

impl From<eliminations::Model> for Elimination {
    fn from(m: eliminations::Model) -> Self {
        Self {
            id: m.id,
            round_id: m.round_id,
            investigation_id: m.investigation_id,
            suspect_id: m.suspect_id,
            created_at: m.created_at,
        }
    }
}

// Free functions (generic) for elimination operations

/// Append one elimination. A duplicate within the investigation surfaces as
/// an AlreadyEliminated conflict via the unique index.
pub async fn create_elimination<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: EliminationCreate,
) -> Result<Elimination, DomainError> {
    let elimination = eliminations_adapter::create_elimination(conn, dto).await?;
    Ok(Elimination::from(elimination))
}

/// Every elimination of the investigation, oldest first.
pub async fn find_by_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Vec<Elimination>, DomainError> {
    let rows = eliminations_adapter::find_by_investigation(conn, investigation_id).await?;
    Ok(rows.into_iter().map(Elimination::from).collect())
}

pub async fn count_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<u64, DomainError> {
    Ok(eliminations_adapter::count_by_round(conn, round_id).await?)
}

pub async fn exists_for_suspect<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
    suspect_id: Uuid,
) -> Result<bool, DomainError> {
    Ok(eliminations_adapter::exists_for_suspect(conn, investigation_id, suspect_id).await?)
}
