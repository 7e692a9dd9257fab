//! Group repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::groups_sea as groups_adapter;
use crate::entities::groups;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Group-stage group domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i64,
    pub championship_id: i64,
    pub name: String,
}

impl From<groups::Model> for Group {
    fn from(m: groups::Model) -> Self {
        Self {
            id: m.id,
            championship_id: m.championship_id,
            name: m.name,
        }
    }
}

pub async fn create_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    name: &str,
) -> Result<Group, DomainError> {
    let model = groups_adapter::create_group(conn, championship_id, name).await?;
    Ok(Group::from(model))
}

pub async fn require_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Group, DomainError> {
    let model = groups_adapter::find_by_id(conn, group_id).await?;
    model.map(Group::from).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Group, format!("group {group_id} does not exist"))
    })
}

/// Groups in name order ("Group A" first).
pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<Group>, DomainError> {
    let models = groups_adapter::find_by_championship(conn, championship_id).await?;
    Ok(models.into_iter().map(Group::from).collect())
}
