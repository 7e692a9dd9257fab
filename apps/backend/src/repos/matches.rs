//! Match repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::matches_sea as matches_adapter;
pub use crate::adapters::matches_sea::{MatchCreate, MatchResultUpdate, MatchScheduleUpdate};
use crate::domain::bracket::BracketSlot;
use crate::entities::matches::{self, MatchStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Match domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub championship_id: i64,
    pub phase_id: Option<i64>,
    pub group_id: Option<i64>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub round_no: i32,
    pub kickoff_at: Option<time::OffsetDateTime>,
    pub venue: String,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl Match {
    /// Both slots filled, i.e. not a knockout placeholder.
    pub fn has_both_teams(&self) -> bool {
        self.home_team_id.is_some() && self.away_team_id.is_some()
    }
}

impl From<matches::Model> for Match {
    fn from(m: matches::Model) -> Self {
        Self {
            id: m.id,
            championship_id: m.championship_id,
            phase_id: m.phase_id,
            group_id: m.group_id,
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            round_no: m.round_no,
            kickoff_at: m.kickoff_at,
            venue: m.venue,
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
        }
    }
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<Match, DomainError> {
    let model = matches_adapter::create_match(conn, dto).await?;
    Ok(Match::from(model))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    let model = matches_adapter::find_by_id(conn, match_id).await?;
    Ok(model.map(Match::from))
}

pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    find_by_id(conn, match_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Match, format!("match {match_id} does not exist"))
    })
}

pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let models = matches_adapter::find_by_championship(conn, championship_id).await?;
    Ok(models.into_iter().map(Match::from).collect())
}

pub async fn find_by_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let models = matches_adapter::find_by_phase(conn, phase_id).await?;
    Ok(models.into_iter().map(Match::from).collect())
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let models = matches_adapter::find_by_group(conn, group_id).await?;
    Ok(models.into_iter().map(Match::from).collect())
}

pub async fn pairing_exists_in_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    round_no: i32,
    team_a: i64,
    team_b: i64,
) -> Result<bool, DomainError> {
    Ok(matches_adapter::pairing_exists_in_round(conn, championship_id, round_no, team_a, team_b)
        .await?)
}

pub async fn count_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<u64, DomainError> {
    Ok(matches_adapter::count_by_championship(conn, championship_id).await?)
}

/// Conditionally finalize a result. Returns `false` when the match was no
/// longer open, so the caller can report the state conflict.
pub async fn finalize_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    home_score: i32,
    away_score: i32,
) -> Result<bool, DomainError> {
    let rows = matches_adapter::finalize_result(
        conn,
        match_id,
        MatchResultUpdate {
            home_score,
            away_score,
        },
    )
    .await?;
    Ok(rows == 1)
}

/// Conditionally move an open match to `to`. Returns `false` when the
/// match was already terminal.
pub async fn transition_if_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    to: MatchStatus,
) -> Result<bool, DomainError> {
    let rows = matches_adapter::transition_if_open(conn, match_id, to).await?;
    Ok(rows == 1)
}

pub async fn update_schedule<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchScheduleUpdate,
) -> Result<Match, DomainError> {
    let model = matches_adapter::update_schedule(conn, match_id, dto).await?;
    Ok(Match::from(model))
}

pub async fn set_team_slot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    slot: BracketSlot,
    team_id: i64,
) -> Result<Match, DomainError> {
    let model = matches_adapter::set_team_slot(conn, match_id, slot, team_id).await?;
    Ok(Match::from(model))
}
