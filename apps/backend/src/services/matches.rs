//! Manual match management: extra fixtures, rescheduling, cancellation.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::db::txn::with_txn;
use crate::entities::matches::MatchStatus;
use crate::entities::registrations::RegistrationStatus;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::matches::{self, Match, MatchCreate, MatchScheduleUpdate};
use crate::repos::{championships, registrations};
use crate::services::{ensure_organizer, Actor};

/// Input for a manually added fixture.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub round_no: i32,
    pub kickoff_at: Option<time::OffsetDateTime>,
    pub venue: Option<String>,
}

/// Add a match outside the generated schedule, e.g. a replay. Both teams
/// must hold approved registrations and the schedule must already exist,
/// otherwise the standings rows the result will increment are missing.
pub async fn create_match(
    db: &DatabaseConnection,
    actor: &Actor,
    championship_id: i64,
    input: NewMatch,
) -> Result<Match, DomainError> {
    let input = &input;
    let created = with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        ensure_organizer(&championship, actor)?;
        if !championship.started {
            return Err(DomainError::conflict(
                ConflictKind::Other("NOT_STARTED".into()),
                "generate the schedule before adding extra matches",
            ));
        }
        if input.home_team_id == input.away_team_id {
            return Err(DomainError::validation(
                ValidationKind::SameTeam,
                "a team cannot play itself",
            ));
        }
        for team_id in [input.home_team_id, input.away_team_id] {
            let approved =
                registrations::find_by_championship_and_team(txn, championship_id, team_id)
                    .await?
                    .map(|r| r.status == RegistrationStatus::Approved)
                    .unwrap_or(false);
            if !approved {
                return Err(DomainError::validation(
                    ValidationKind::TeamNotApproved,
                    format!("team {team_id} is not approved for championship {championship_id}"),
                ));
            }
        }

        if matches::pairing_exists_in_round(
            txn,
            championship_id,
            input.round_no,
            input.home_team_id,
            input.away_team_id,
        )
        .await?
        {
            return Err(DomainError::conflict(
                ConflictKind::DuplicatePairing,
                format!(
                    "teams {} and {} already meet in round {}",
                    input.home_team_id, input.away_team_id, input.round_no
                ),
            ));
        }

        let mut dto = MatchCreate::new(championship_id, input.round_no)
            .with_teams(input.home_team_id, input.away_team_id);
        if let Some(kickoff_at) = input.kickoff_at {
            dto = dto.with_kickoff(kickoff_at);
        }
        if let Some(venue) = &input.venue {
            dto = dto.with_venue(venue.clone());
        }
        matches::create_match(txn, dto).await
    })
    .await?;

    info!(championship_id, match_id = created.id, "extra match created");
    Ok(created)
}

/// Change kickoff time and/or venue of a match that has not finished.
pub async fn update_schedule(
    db: &DatabaseConnection,
    actor: &Actor,
    match_id: i64,
    update: MatchScheduleUpdate,
) -> Result<Match, DomainError> {
    let update = &update;
    with_txn(db, async move |txn| {
        let m = matches::require_match(txn, match_id).await?;
        let championship = championships::require_championship(txn, m.championship_id).await?;
        ensure_organizer(&championship, actor)?;
        if !m.status.is_open() {
            return Err(DomainError::validation(
                ValidationKind::MatchNotOpen,
                format!("match {match_id} is {:?} and cannot be rescheduled", m.status),
            ));
        }
        matches::update_schedule(txn, match_id, update.clone()).await
    })
    .await
}

/// Cancel an open match. Cancelled matches never touch standings.
pub async fn cancel_match(
    db: &DatabaseConnection,
    actor: &Actor,
    match_id: i64,
) -> Result<Match, DomainError> {
    let cancelled = with_txn(db, async move |txn| {
        let m = matches::require_match(txn, match_id).await?;
        let championship = championships::require_championship(txn, m.championship_id).await?;
        ensure_organizer(&championship, actor)?;

        if !matches::transition_if_open(txn, match_id, MatchStatus::Cancelled).await? {
            return Err(DomainError::validation(
                ValidationKind::MatchNotOpen,
                format!("match {match_id} is already {:?}", m.status),
            ));
        }
        matches::require_match(txn, match_id).await
    })
    .await?;

    info!(match_id, "match cancelled");
    Ok(cancelled)
}
