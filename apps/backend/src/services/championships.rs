//! Championship lifecycle: creation and team registration.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::db::txn::with_txn;
use crate::entities::championships::ChampionshipFormat;
use crate::entities::registrations::RegistrationStatus;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::championships::{self, Championship, ChampionshipCreate};
use crate::repos::{registrations, teams};
use crate::services::{ensure_organizer, Actor};

/// Caller-facing creation input; the organizer comes from the actor.
#[derive(Debug, Clone)]
pub struct NewChampionship {
    pub name: String,
    pub description: Option<String>,
    pub format: ChampionshipFormat,
    pub start_date: time::OffsetDateTime,
    pub end_date: Option<time::OffsetDateTime>,
    pub min_teams: i32,
    pub max_teams: i32,
}

pub async fn create_championship(
    db: &DatabaseConnection,
    actor: &Actor,
    input: NewChampionship,
) -> Result<Championship, DomainError> {
    if input.name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("EMPTY_NAME".into()),
            "championship name must not be empty",
        ));
    }
    if input.min_teams < 2 {
        return Err(DomainError::validation(
            ValidationKind::TooFewTeams,
            "a championship needs at least 2 teams",
        ));
    }
    if input.max_teams < input.min_teams {
        return Err(DomainError::validation(
            ValidationKind::Other("TEAM_BOUNDS".into()),
            "max_teams must be at least min_teams",
        ));
    }
    if let Some(end) = input.end_date {
        if end <= input.start_date {
            return Err(DomainError::validation(
                ValidationKind::Other("DATE_ORDER".into()),
                "end_date must be after start_date",
            ));
        }
    }

    let championship = with_txn(db, async move |txn| {
        championships::create_championship(
            txn,
            ChampionshipCreate {
                name: input.name.clone(),
                description: input.description.clone(),
                format: input.format,
                start_date: input.start_date,
                end_date: input.end_date,
                min_teams: input.min_teams,
                max_teams: input.max_teams,
                organizer_user_id: actor.user_id,
            },
        )
        .await
    })
    .await?;

    info!(
        championship_id = championship.id,
        format = ?championship.format,
        "championship created"
    );
    Ok(championship)
}

/// Register a team for a championship. The registration starts out
/// pending; the organizer approves it separately.
pub async fn register_team(
    db: &DatabaseConnection,
    championship_id: i64,
    team_id: i64,
) -> Result<registrations::Registration, DomainError> {
    with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        if championship.started {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                "registrations are closed once the schedule exists",
            ));
        }
        teams::require_team(txn, team_id).await?;

        if registrations::find_by_championship_and_team(txn, championship_id, team_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                ConflictKind::Other("ALREADY_REGISTERED".into()),
                format!("team {team_id} is already registered"),
            ));
        }

        registrations::create_registration(
            txn,
            championship_id,
            team_id,
            RegistrationStatus::Pending,
        )
        .await
    })
    .await
}

pub async fn approve_registration(
    db: &DatabaseConnection,
    actor: &Actor,
    championship_id: i64,
    team_id: i64,
) -> Result<registrations::Registration, DomainError> {
    with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        ensure_organizer(&championship, actor)?;
        if championship.started {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                "registrations are closed once the schedule exists",
            ));
        }

        let registration =
            registrations::find_by_championship_and_team(txn, championship_id, team_id)
                .await?
                .ok_or_else(|| {
                    DomainError::validation(
                        ValidationKind::TeamNotApproved,
                        format!("team {team_id} has no registration to approve"),
                    )
                })?;

        registrations::set_status(txn, registration.id, RegistrationStatus::Approved).await
    })
    .await
}
