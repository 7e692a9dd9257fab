//! Standings repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::standings_sea as standings_adapter;
use crate::domain::standings::{Ranked, StandingDelta};
use crate::entities::standings;
use crate::errors::domain::{DomainError, NotFoundKind};

/// One team's aggregate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub championship_id: i64,
    pub team_id: i64,
    pub points: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_diff: i32,
}

impl From<standings::Model> for Standing {
    fn from(m: standings::Model) -> Self {
        Self {
            championship_id: m.championship_id,
            team_id: m.team_id,
            points: m.points,
            played: m.played,
            wins: m.wins,
            draws: m.draws,
            losses: m.losses,
            goals_for: m.goals_for,
            goals_against: m.goals_against,
            goal_diff: m.goal_diff,
        }
    }
}

impl Ranked for Standing {
    fn rank_key(&self) -> (i32, i32, i32, i32) {
        (self.points, self.wins, self.goal_diff, self.goals_for)
    }
}

pub async fn insert_zero_row<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
) -> Result<Standing, DomainError> {
    let model = standings_adapter::insert_zero_row(conn, championship_id, team_id).await?;
    Ok(Standing::from(model))
}

/// All rows of a championship in insertion order; callers sort.
pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<Standing>, DomainError> {
    let models = standings_adapter::find_by_championship(conn, championship_id).await?;
    Ok(models.into_iter().map(Standing::from).collect())
}

pub async fn find_by_championship_and_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
) -> Result<Option<Standing>, DomainError> {
    let model =
        standings_adapter::find_by_championship_and_team(conn, championship_id, team_id).await?;
    Ok(model.map(Standing::from))
}

/// Apply one match's increments to a team's row. Errors when the row is
/// missing, which means the schedule generator never ran for this pair.
pub async fn apply_delta<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
    delta: StandingDelta,
) -> Result<(), DomainError> {
    let rows = standings_adapter::apply_delta(conn, championship_id, team_id, delta).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Standing,
            format!("no standings row for championship {championship_id}, team {team_id}"),
        ));
    }
    Ok(())
}
