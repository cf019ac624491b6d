use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles and owners.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;

    let mut opts = ConnectOptions::new(database_url);
    if profile == DbProfile::SqliteMemory {
        // A second pooled connection would see a fresh empty database, so
        // the in-memory profile is pinned to a single connection.
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Single entrypoint used by `StateBuilder`: connect, then bring the schema
/// up to date.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    Migrator::up(&conn, None).await?;
    info!(profile = ?profile, "database ready");
    Ok(conn)
}
