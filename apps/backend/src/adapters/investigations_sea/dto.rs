//! DTOs for investigations_sea adapter.

use uuid::Uuid;

/// DTO for creating a new investigation with its suspect pool.
///
/// `criminal_id` must be one of the entries in `pool`; the repos layer
/// upholds that before handing the DTO down.
#[derive(Debug, Clone)]
pub struct InvestigationCreate {
    pub game_id: Uuid,
    pub criminal_id: Uuid,
    pub pool: Vec<Uuid>,
}
