//! SeaORM adapter for standings rows.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::domain::standings::StandingDelta;
use crate::entities::standings;

/// Insert the zeroed row for one (championship, team) pair.
pub async fn insert_zero_row<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
) -> Result<standings::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = standings::ActiveModel {
        id: NotSet,
        championship_id: Set(championship_id),
        team_id: Set(team_id),
        points: Set(0),
        played: Set(0),
        wins: Set(0),
        draws: Set(0),
        losses: Set(0),
        goals_for: Set(0),
        goals_against: Set(0),
        goal_diff: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<standings::Model>, sea_orm::DbErr> {
    standings::Entity::find()
        .filter(standings::Column::ChampionshipId.eq(championship_id))
        .order_by_asc(standings::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_championship_and_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
) -> Result<Option<standings::Model>, sea_orm::DbErr> {
    standings::Entity::find()
        .filter(standings::Column::ChampionshipId.eq(championship_id))
        .filter(standings::Column::TeamId.eq(team_id))
        .one(conn)
        .await
}

/// Apply one match's increments to a team's row as a single SQL UPDATE of
/// `column = column + delta` expressions. Two concurrent result commits
/// touching the same row therefore both land; neither overwrites the other
/// with a stale read.
pub async fn apply_delta<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
    delta: StandingDelta,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();
    let result = standings::Entity::update_many()
        .col_expr(
            standings::Column::Points,
            Expr::col(standings::Column::Points).add(delta.points),
        )
        .col_expr(
            standings::Column::Played,
            Expr::col(standings::Column::Played).add(1),
        )
        .col_expr(
            standings::Column::Wins,
            Expr::col(standings::Column::Wins).add(delta.wins),
        )
        .col_expr(
            standings::Column::Draws,
            Expr::col(standings::Column::Draws).add(delta.draws),
        )
        .col_expr(
            standings::Column::Losses,
            Expr::col(standings::Column::Losses).add(delta.losses),
        )
        .col_expr(
            standings::Column::GoalsFor,
            Expr::col(standings::Column::GoalsFor).add(delta.goals_for),
        )
        .col_expr(
            standings::Column::GoalsAgainst,
            Expr::col(standings::Column::GoalsAgainst).add(delta.goals_against),
        )
        .col_expr(
            standings::Column::GoalDiff,
            Expr::col(standings::Column::GoalDiff).add(delta.goal_diff),
        )
        .col_expr(standings::Column::UpdatedAt, Expr::val(now).into())
        .filter(standings::Column::ChampionshipId.eq(championship_id))
        .filter(standings::Column::TeamId.eq(team_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
