//! Phase repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::phases_sea as phases_adapter;
use crate::entities::phases;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Knockout phase domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub id: i64,
    pub championship_id: i64,
    pub name: String,
    pub ordinal: i32,
}

impl From<phases::Model> for Phase {
    fn from(m: phases::Model) -> Self {
        Self {
            id: m.id,
            championship_id: m.championship_id,
            name: m.name,
            ordinal: m.ordinal,
        }
    }
}

pub async fn create_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    name: &str,
    ordinal: i32,
) -> Result<Phase, DomainError> {
    let model = phases_adapter::create_phase(conn, championship_id, name, ordinal).await?;
    Ok(Phase::from(model))
}

pub async fn require_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase_id: i64,
) -> Result<Phase, DomainError> {
    let model = phases_adapter::find_by_id(conn, phase_id).await?;
    model.map(Phase::from).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Phase, format!("phase {phase_id} does not exist"))
    })
}

/// Phases in ordinal order (earliest knockout round first).
pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<Phase>, DomainError> {
    let models = phases_adapter::find_by_championship(conn, championship_id).await?;
    Ok(models.into_iter().map(Phase::from).collect())
}

pub async fn find_by_ordinal<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    ordinal: i32,
) -> Result<Option<Phase>, DomainError> {
    let model = phases_adapter::find_by_ordinal(conn, championship_id, ordinal).await?;
    Ok(model.map(Phase::from))
}
