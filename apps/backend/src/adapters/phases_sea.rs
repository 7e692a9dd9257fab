//! SeaORM adapter for knockout phases.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::phases;

pub async fn create_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    name: &str,
    ordinal: i32,
) -> Result<phases::Model, sea_orm::DbErr> {
    let active = phases::ActiveModel {
        id: NotSet,
        championship_id: Set(championship_id),
        name: Set(name.to_string()),
        ordinal: Set(ordinal),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase_id: i64,
) -> Result<Option<phases::Model>, sea_orm::DbErr> {
    phases::Entity::find_by_id(phase_id).one(conn).await
}

pub async fn require_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase_id: i64,
) -> Result<phases::Model, sea_orm::DbErr> {
    find_by_id(conn, phase_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Phase not found".to_string()))
}

/// Phases of a championship ordered by ordinal (earliest round first).
pub async fn find_by_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<phases::Model>, sea_orm::DbErr> {
    phases::Entity::find()
        .filter(phases::Column::ChampionshipId.eq(championship_id))
        .order_by_asc(phases::Column::Ordinal)
        .all(conn)
        .await
}

pub async fn find_by_ordinal<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    ordinal: i32,
) -> Result<Option<phases::Model>, sea_orm::DbErr> {
    phases::Entity::find()
        .filter(phases::Column::ChampionshipId.eq(championship_id))
        .filter(phases::Column::Ordinal.eq(ordinal))
        .one(conn)
        .await
}
