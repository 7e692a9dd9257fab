//! Database connection management and bootstrap.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Connect to the database for the given kind and environment.
///
/// `sqlite::memory:` gets a single-connection pool: each pooled connection
/// to an in-memory SQLite database would otherwise see its own empty
/// database.
pub async fn connect_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, DomainError> {
    let url = db_url(kind, env)
        .map_err(|e| DomainError::infra(InfraErrorKind::Other("config".into()), e.to_string()))?;

    let mut opt = ConnectOptions::new(url);
    opt.connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if kind == DbKind::SqliteMemory {
        opt.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opt)
        .await
        .map_err(|e| DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string()))?;

    info!(?kind, ?env, "database connected");
    Ok(db)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, DomainError> {
    let db = connect_db(kind, env).await?;
    migration::migrate(&db, migration::MigrationCommand::Up)
        .await
        .map_err(DomainError::from)?;
    Ok(db)
}
