//! Service layer - orchestrates domain rules against persistence.

pub mod game_flow;
pub mod scores;
