//! SeaORM adapter for matches.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::bracket::BracketSlot;
use crate::entities::matches::{self, MatchStatus};

pub mod dto;

pub use dto::{MatchCreate, MatchResultUpdate, MatchScheduleUpdate};

const DEFAULT_VENUE: &str = "A definir";

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = matches::ActiveModel {
        id: NotSet,
        championship_id: Set(dto.championship_id),
        phase_id: Set(dto.phase_id),
        group_id: Set(dto.group_id),
        home_team_id: Set(dto.home_team_id),
        away_team_id: Set(dto.away_team_id),
        round_no: Set(dto.round_no),
        kickoff_at: Set(dto.kickoff_at),
        venue: Set(dto.venue.unwrap_or_else(|| DEFAULT_VENUE.to_string())),
        status: Set(MatchStatus::Scheduled),
        home_score: NotSet,
        away_score: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id).one(conn).await
}

pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    find_by_id(conn, match_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Match not found".to_string()))
}

/// All matches of a championship ordered by round then insertion order.
pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::ChampionshipId.eq(championship_id))
        .order_by_asc(matches::Column::RoundNo)
        .order_by_asc(matches::Column::Id)
        .all(conn)
        .await
}

/// Matches of one phase in bracket index order (insertion order).
pub async fn find_by_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::PhaseId.eq(phase_id))
        .order_by_asc(matches::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::GroupId.eq(group_id))
        .order_by_asc(matches::Column::RoundNo)
        .order_by_asc(matches::Column::Id)
        .all(conn)
        .await
}

/// True when the round already holds this pairing in either orientation.
/// Cancelled matches do not count, so a cancelled fixture can be replayed.
pub async fn pairing_exists_in_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    round_no: i32,
    team_a: i64,
    team_b: i64,
) -> Result<bool, sea_orm::DbErr> {
    use sea_orm::Condition;

    let count = matches::Entity::find()
        .filter(matches::Column::ChampionshipId.eq(championship_id))
        .filter(matches::Column::RoundNo.eq(round_no))
        .filter(matches::Column::Status.ne(MatchStatus::Cancelled))
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(matches::Column::HomeTeamId.eq(team_a))
                        .add(matches::Column::AwayTeamId.eq(team_b)),
                )
                .add(
                    Condition::all()
                        .add(matches::Column::HomeTeamId.eq(team_b))
                        .add(matches::Column::AwayTeamId.eq(team_a)),
                ),
        )
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn count_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::ChampionshipId.eq(championship_id))
        .count(conn)
        .await
}

/// Finalize a match result. The update is filtered on the two open
/// statuses, so a concurrent finalize/cancel loses and sees
/// `rows_affected == 0`.
pub async fn finalize_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchResultUpdate,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;
    use sea_orm::ActiveEnum;

    let now = time::OffsetDateTime::now_utc();
    let result = matches::Entity::update_many()
        .col_expr(matches::Column::Status, MatchStatus::Finished.as_enum())
        .col_expr(matches::Column::HomeScore, Expr::val(Some(dto.home_score)).into())
        .col_expr(matches::Column::AwayScore, Expr::val(Some(dto.away_score)).into())
        .col_expr(matches::Column::UpdatedAt, Expr::val(now).into())
        .filter(matches::Column::Id.eq(match_id))
        .filter(matches::Column::Status.is_in([MatchStatus::Scheduled, MatchStatus::InProgress]))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Move an open match to another open-or-cancelled status. Same
/// conditional-update shape as [`finalize_result`].
pub async fn transition_if_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    to: MatchStatus,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;
    use sea_orm::ActiveEnum;

    let now = time::OffsetDateTime::now_utc();
    let result = matches::Entity::update_many()
        .col_expr(matches::Column::Status, to.as_enum())
        .col_expr(matches::Column::UpdatedAt, Expr::val(now).into())
        .filter(matches::Column::Id.eq(match_id))
        .filter(matches::Column::Status.is_in([MatchStatus::Scheduled, MatchStatus::InProgress]))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn update_schedule<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchScheduleUpdate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut active = matches::ActiveModel {
        id: Set(match_id),
        updated_at: Set(now),
        ..Default::default()
    };
    if let Some(kickoff_at) = dto.kickoff_at {
        active.kickoff_at = Set(Some(kickoff_at));
    }
    if let Some(venue) = dto.venue {
        active.venue = Set(venue);
    }
    active.update(conn).await
}

/// Fill one side of a placeholder knockout match.
pub async fn set_team_slot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    slot: BracketSlot,
    team_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut active = matches::ActiveModel {
        id: Set(match_id),
        updated_at: Set(now),
        ..Default::default()
    };
    match slot {
        BracketSlot::Home => active.home_team_id = Set(Some(team_id)),
        BracketSlot::Away => active.away_team_id = Set(Some(team_id)),
    }
    active.update(conn).await
}
