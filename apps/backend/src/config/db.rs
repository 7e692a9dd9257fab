//! Environment-driven database configuration.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable '{0}' is not set")]
    MissingVar(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Database engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// In-process SQLite, used by the test suites
    SqliteMemory,
}

/// Runtime environment for URL construction and safety rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Build a connection URL for the given kind and environment.
pub fn db_url(kind: DbKind, env_kind: RuntimeEnv) -> Result<String, ConfigError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env_kind)?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let default = match env_kind {
                RuntimeEnv::Prod => "data/championship.sqlite",
                RuntimeEnv::Test => "data/championship_test.sqlite",
            };
            let path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| default.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database name based on environment.
fn db_name(env_kind: RuntimeEnv) -> Result<String, ConfigError> {
    match env_kind {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            // Safety rule: destructive test commands must never hit a prod DB
            if !db_name.ends_with("_test") {
                return Err(ConfigError::Invalid(format!(
                    "Test environment requires database name to end with '_test', got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn must_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}
