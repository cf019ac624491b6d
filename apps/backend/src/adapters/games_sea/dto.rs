//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub player_id: String,
    pub investigator: String,
    pub model: String,
}
