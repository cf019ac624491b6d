//! DTOs for facts_sea adapter.

use uuid::Uuid;

/// DTO for attaching one generated fact to a suspect.
#[derive(Debug, Clone)]
pub struct FactCreate {
    pub suspect_id: Uuid,
    pub model: String,
    pub fact: String,
}
