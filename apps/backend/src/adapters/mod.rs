//! SeaORM adapters - thin query layer over the entities.
//!
//! Adapter functions are generic over `ConnectionTrait` and return
//! `sea_orm::DbErr`; the repos layer maps to `DomainError`.

pub mod eliminations_sea;
pub mod facts_sea;
pub mod games_sea;
pub mod investigations_sea;
pub mod questions_sea;
pub mod rounds_sea;
pub mod suspects_sea;
