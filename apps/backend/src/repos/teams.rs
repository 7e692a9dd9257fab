//! Team repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::teams_sea as teams_adapter;
use crate::entities::teams;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Team domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub manager_user_id: Option<i64>,
}

impl From<teams::Model> for Team {
    fn from(m: teams::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            city: m.city,
            manager_user_id: m.manager_user_id,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    let model = teams_adapter::find_by_id(conn, team_id).await?;
    Ok(model.map(Team::from))
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Team, DomainError> {
    find_by_id(conn, team_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Team, format!("team {team_id} does not exist"))
    })
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    city: Option<&str>,
    manager_user_id: Option<i64>,
) -> Result<Team, DomainError> {
    let model = teams_adapter::create_team(conn, name, city, manager_user_id).await?;
    Ok(Team::from(model))
}
