//! DTOs for rounds_sea adapter.

use uuid::Uuid;

/// DTO for creating a new round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub investigation_id: Uuid,
    pub question_id: Uuid,
}
