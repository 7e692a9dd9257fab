//! Championship repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::championships_sea as championships_adapter;
pub use crate::adapters::championships_sea::ChampionshipCreate;
use crate::entities::championships::{self, ChampionshipFormat};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Championship domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Championship {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub format: ChampionshipFormat,
    pub start_date: time::OffsetDateTime,
    pub end_date: Option<time::OffsetDateTime>,
    pub min_teams: i32,
    pub max_teams: i32,
    pub started: bool,
    pub organizer_user_id: i64,
}

impl From<championships::Model> for Championship {
    fn from(m: championships::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            format: m.format,
            start_date: m.start_date,
            end_date: m.end_date,
            min_teams: m.min_teams,
            max_teams: m.max_teams,
            started: m.started,
            organizer_user_id: m.organizer_user_id,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Option<Championship>, DomainError> {
    let model = championships_adapter::find_by_id(conn, championship_id).await?;
    Ok(model.map(Championship::from))
}

pub async fn require_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Championship, DomainError> {
    find_by_id(conn, championship_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Championship,
            format!("championship {championship_id} does not exist"),
        )
    })
}

pub async fn create_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ChampionshipCreate,
) -> Result<Championship, DomainError> {
    let model = championships_adapter::create_championship(conn, dto).await?;
    Ok(Championship::from(model))
}

/// Flip the started latch. Returns `false` when it was already set, so the
/// caller can surface the conflict.
pub async fn mark_started<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<bool, DomainError> {
    let rows = championships_adapter::mark_started(conn, championship_id).await?;
    Ok(rows == 1)
}
