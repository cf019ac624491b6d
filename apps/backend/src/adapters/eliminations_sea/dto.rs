//! DTOs for eliminations_sea adapter.

use uuid::Uuid;

/// DTO for recording one elimination.
#[derive(Debug, Clone)]
pub struct EliminationCreate {
    pub round_id: Uuid,
    pub investigation_id: Uuid,
    pub suspect_id: Uuid,
}
