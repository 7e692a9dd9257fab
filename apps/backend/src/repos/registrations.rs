//! Registration repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::registrations_sea as registrations_adapter;
use crate::entities::registrations::{self, RegistrationStatus};
use crate::errors::domain::DomainError;

/// Registration domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i64,
    pub championship_id: i64,
    pub team_id: i64,
    pub status: RegistrationStatus,
    pub group_id: Option<i64>,
}

impl From<registrations::Model> for Registration {
    fn from(m: registrations::Model) -> Self {
        Self {
            id: m.id,
            championship_id: m.championship_id,
            team_id: m.team_id,
            status: m.status,
            group_id: m.group_id,
        }
    }
}

pub async fn create_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
    status: RegistrationStatus,
) -> Result<Registration, DomainError> {
    let model =
        registrations_adapter::create_registration(conn, championship_id, team_id, status).await?;
    Ok(Registration::from(model))
}

/// Approved registrations in id order.
pub async fn find_approved<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<Registration>, DomainError> {
    let models = registrations_adapter::find_approved(conn, championship_id).await?;
    Ok(models.into_iter().map(Registration::from).collect())
}

/// Team ids of approved registrations, in registration order.
pub async fn approved_team_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<i64>, DomainError> {
    let regs = find_approved(conn, championship_id).await?;
    Ok(regs.into_iter().map(|r| r.team_id).collect())
}

pub async fn find_by_championship_and_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
) -> Result<Option<Registration>, DomainError> {
    let model =
        registrations_adapter::find_by_championship_and_team(conn, championship_id, team_id)
            .await?;
    Ok(model.map(Registration::from))
}

pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    registration_id: i64,
    status: RegistrationStatus,
) -> Result<Registration, DomainError> {
    let model = registrations_adapter::set_status(conn, registration_id, status).await?;
    Ok(Registration::from(model))
}

pub async fn assign_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    registration_id: i64,
    group_id: i64,
) -> Result<Registration, DomainError> {
    let model = registrations_adapter::assign_group(conn, registration_id, group_id).await?;
    Ok(Registration::from(model))
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<Registration>, DomainError> {
    let models = registrations_adapter::find_by_group(conn, group_id).await?;
    Ok(models.into_iter().map(Registration::from).collect())
}
