//! SeaORM adapter for teams.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::teams;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(team_id).one(conn).await
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<teams::Model, sea_orm::DbErr> {
    find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    city: Option<&str>,
    manager_user_id: Option<i64>,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = teams::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        city: Set(city.map(str::to_string)),
        manager_user_id: Set(manager_user_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
