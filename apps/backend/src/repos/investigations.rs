//! Investigation repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::investigations_sea as investigations_adapter;
use crate::entities::investigations;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use investigations_adapter::InvestigationCreate;

/// Investigation domain model.
///
/// The criminal stays server-side; snapshots expose only derived suspect
/// statuses, never this field.
#[derive(Debug, Clone, PartialEq)]
pub struct Investigation {
    pub id: Uuid,
    pub game_id: Uuid,
    pub criminal_id: Uuid,
    pub created_at: time::OffsetDateTime,
}

impl From<investigations::Model> for Investigation {
    fn from(m: investigations::Model) -> Self {
        Self {
            id: m.id,
            game_id: m.game_id,
            criminal_id: m.criminal_id,
            created_at: m.created_at,
        }
    }
}

// Free functions (generic) for investigation operations

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Option<Investigation>, DomainError> {
    let investigation = investigations_adapter::find_by_id(conn, investigation_id).await?;
    Ok(investigation.map(Investigation::from))
}

pub async fn require_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Investigation, DomainError> {
    find_by_id(conn, investigation_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Investigation,
            format!("Investigation {investigation_id} not found"),
        )
    })
}

/// Newest investigation of the game - the one the player is working on.
pub async fn find_latest_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<Investigation>, DomainError> {
    let investigation = investigations_adapter::find_latest_by_game(conn, game_id).await?;
    Ok(investigation.map(Investigation::from))
}

/// Number of investigations started for the game. The count doubles as the
/// difficulty level: investigation N is level N.
pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<u64, DomainError> {
    Ok(investigations_adapter::count_by_game(conn, game_id).await?)
}

pub async fn create_investigation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InvestigationCreate,
) -> Result<Investigation, DomainError> {
    let investigation = investigations_adapter::create_investigation(conn, dto).await?;
    Ok(Investigation::from(investigation))
}

/// Suspect IDs of the pool in presentation order.
pub async fn find_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    investigation_id: Uuid,
) -> Result<Vec<Uuid>, DomainError> {
    let slots = investigations_adapter::find_pool(conn, investigation_id).await?;
    Ok(slots.into_iter().map(|slot| slot.suspect_id).collect())
}
