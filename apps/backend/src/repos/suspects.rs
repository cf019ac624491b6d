//! Suspect catalogue repository functions.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::suspects_sea as suspects_adapter;
use crate::entities::suspects;
use crate::errors::domain::DomainError;

/// Suspect domain model. The image is the suspect's identity as far as the
/// catalogue is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Suspect {
    pub id: Uuid,
    pub image: String,
    pub created_at: time::OffsetDateTime,
}

impl From<suspects::Model> for Suspect {
    fn from(m: suspects::Model) -> Self {
        Self {
            id: m.id,
            image: m.image,
            created_at: m.created_at,
        }
    }
}

// Free functions (generic) for suspect operations

/// Register a portrait, returning the existing suspect if it is already
/// catalogued.
pub async fn create_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    image: &str,
) -> Result<Suspect, DomainError> {
    let suspect = suspects_adapter::create_if_absent(conn, image).await?;
    Ok(Suspect::from(suspect))
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Suspect>, DomainError> {
    let suspects = suspects_adapter::find_all(conn).await?;
    Ok(suspects.into_iter().map(Suspect::from).collect())
}

/// Fetch the given suspects; order follows the database, not `ids`.
pub async fn find_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[Uuid],
) -> Result<Vec<Suspect>, DomainError> {
    let suspects = suspects_adapter::find_many(conn, ids).await?;
    Ok(suspects.into_iter().map(Suspect::from).collect())
}
