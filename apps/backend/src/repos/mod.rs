//! Repository layer - domain models plus free generic functions over the
//! adapters. Functions here return `DomainError`; the SeaORM `DbErr` is
//! translated by `crate::infra::db_errors`.

pub mod eliminations;
pub mod facts;
pub mod games;
pub mod investigations;
pub mod questions;
pub mod rounds;
pub mod suspects;
