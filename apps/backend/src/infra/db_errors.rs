//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and higher layers map
//! `DomainError` to `AppError` via `From`.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = "UNIQUE constraint failed: ";
    let start = error_msg.find(prefix)?;
    let rest = &error_msg[start + prefix.len()..];
    rest.split_whitespace().next()
}

/// Map a violated unique constraint to a domain-specific conflict.
///
/// Covers both SQLite's `table.column` shape and Postgres constraint names.
fn map_unique_violation(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    // SQLite reports the first column of the index
    if let Some(table_column) = extract_sqlite_table_column(error_msg) {
        if table_column.starts_with("eliminations.") {
            return Some((
                ConflictKind::AlreadyEliminated,
                "Suspect already eliminated in this investigation",
            ));
        }
        if table_column.starts_with("suspects.") || table_column.starts_with("questions.") {
            return Some((
                ConflictKind::Other("CatalogueDuplicate".into()),
                "Catalogue entry already exists",
            ));
        }
    }
    // Postgres reports the index name
    if error_msg.contains("ux_eliminations_investigation_suspect") {
        return Some((
            ConflictKind::AlreadyEliminated,
            "Suspect already eliminated in this investigation",
        ));
    }
    if error_msg.contains("ux_suspects_image") || error_msg.contains("ux_questions_text") {
        return Some((
            ConflictKind::Other("CatalogueDuplicate".into()),
            "Catalogue entry already exists",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(detail) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), detail.clone());
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Resource was modified concurrently. Please refresh and retry.",
            );
        }
        sea_orm::DbErr::Conn(_) => {
            warn!(error = %error_msg, "database connection failure");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if error_msg.contains("UNIQUE constraint failed")
        || error_msg.contains("duplicate key value violates unique constraint")
    {
        if let Some((kind, detail)) = map_unique_violation(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(ConflictKind::Other("Unique".into()), "Duplicate record");
    }

    warn!(error = %error_msg, "unmapped database error");
    DomainError::infra(InfraErrorKind::Other("Db".into()), error_msg)
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(sea_orm::DbErr::RecordNotFound("Round not found".into()));
        assert!(matches!(err, DomainError::NotFound(_, _)));
    }

    #[test]
    fn sqlite_duplicate_elimination_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "Execution Error: error returned from database: (code: 2067) \
             UNIQUE constraint failed: eliminations.investigation_id, eliminations.suspect_id"
                .into(),
        ));
        assert_eq!(
            err,
            DomainError::conflict(
                ConflictKind::AlreadyEliminated,
                "Suspect already eliminated in this investigation",
            )
        );
    }

    #[test]
    fn postgres_duplicate_elimination_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "duplicate key value violates unique constraint \
             \"ux_eliminations_investigation_suspect\""
                .into(),
        ));
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::AlreadyEliminated, _)
        ));
    }

    #[test]
    fn optimistic_lock_payload_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "OPTIMISTIC_LOCK:{\"expected\":1,\"actual\":2}".into(),
        ));
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::OptimisticLock, _)
        ));
    }
}
