//! SeaORM adapter for championships.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::championships::{self, ChampionshipFormat};

/// Insert payload for a new championship.
#[derive(Debug, Clone)]
pub struct ChampionshipCreate {
    pub name: String,
    pub description: Option<String>,
    pub format: ChampionshipFormat,
    pub start_date: time::OffsetDateTime,
    pub end_date: Option<time::OffsetDateTime>,
    pub min_teams: i32,
    pub max_teams: i32,
    pub organizer_user_id: i64,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Option<championships::Model>, sea_orm::DbErr> {
    championships::Entity::find_by_id(championship_id)
        .one(conn)
        .await
}

pub async fn require_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<championships::Model, sea_orm::DbErr> {
    find_by_id(conn, championship_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Championship not found".to_string()))
}

pub async fn create_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ChampionshipCreate,
) -> Result<championships::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = championships::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        format: Set(dto.format),
        start_date: Set(dto.start_date),
        end_date: Set(dto.end_date),
        min_teams: Set(dto.min_teams),
        max_teams: Set(dto.max_teams),
        started: Set(false),
        organizer_user_id: Set(dto.organizer_user_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

/// Flip the one-way `started` latch. The filter on `started = false` makes
/// the call race-safe: exactly one of two concurrent callers sees
/// `rows_affected == 1`.
pub async fn mark_started<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();
    let result = championships::Entity::update_many()
        .col_expr(championships::Column::Started, Expr::val(true).into())
        .col_expr(championships::Column::UpdatedAt, Expr::val(now).into())
        .filter(championships::Column::Id.eq(championship_id))
        .filter(championships::Column::Started.eq(false))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
