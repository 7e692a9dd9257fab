//! SeaORM adapter for group-stage groups.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::groups;

pub async fn create_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    name: &str,
) -> Result<groups::Model, sea_orm::DbErr> {
    let active = groups::ActiveModel {
        id: NotSet,
        championship_id: Set(championship_id),
        name: Set(name.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Option<groups::Model>, sea_orm::DbErr> {
    groups::Entity::find_by_id(group_id).one(conn).await
}

pub async fn require_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<groups::Model, sea_orm::DbErr> {
    find_by_id(conn, group_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Group not found".to_string()))
}

/// Groups of a championship in name order ("Group A" first).
pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<groups::Model>, sea_orm::DbErr> {
    groups::Entity::find()
        .filter(groups::Column::ChampionshipId.eq(championship_id))
        .order_by_asc(groups::Column::Name)
        .all(conn)
        .await
}
