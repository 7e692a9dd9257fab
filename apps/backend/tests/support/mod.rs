pub mod factory;
pub mod test_init;

use backend::config::db::{DbKind, RuntimeEnv};
use backend::errors::domain::DomainError;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the full schema applied.
pub async fn test_db() -> Result<DatabaseConnection, DomainError> {
    backend::infra::db::bootstrap_db(DbKind::SqliteMemory, RuntimeEnv::Test).await
}
