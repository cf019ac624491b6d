//! SeaORM entities for the investigation game schema.

pub mod eliminations;
pub mod games;
pub mod investigation_suspects;
pub mod investigations;
pub mod questions;
pub mod rounds;
pub mod suspect_facts;
pub mod suspects;
