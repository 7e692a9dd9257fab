//! SeaORM adapter for championship registrations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::registrations::{self, RegistrationStatus};

pub async fn create_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
    status: RegistrationStatus,
) -> Result<registrations::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = registrations::ActiveModel {
        id: NotSet,
        championship_id: Set(championship_id),
        team_id: Set(team_id),
        status: Set(status),
        group_id: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

/// Approved registrations ordered by id, so the pre-shuffle team order is
/// deterministic.
pub async fn find_approved<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
) -> Result<Vec<registrations::Model>, sea_orm::DbErr> {
    registrations::Entity::find()
        .filter(registrations::Column::ChampionshipId.eq(championship_id))
        .filter(registrations::Column::Status.eq(RegistrationStatus::Approved))
        .order_by_asc(registrations::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_championship_and_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    championship_id: i64,
    team_id: i64,
) -> Result<Option<registrations::Model>, sea_orm::DbErr> {
    registrations::Entity::find()
        .filter(registrations::Column::ChampionshipId.eq(championship_id))
        .filter(registrations::Column::TeamId.eq(team_id))
        .one(conn)
        .await
}

pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    registration_id: i64,
    status: RegistrationStatus,
) -> Result<registrations::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = registrations::ActiveModel {
        id: Set(registration_id),
        status: Set(status),
        updated_at: Set(now),
        ..Default::default()
    };
    active.update(conn).await
}

pub async fn assign_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    registration_id: i64,
    group_id: i64,
) -> Result<registrations::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = registrations::ActiveModel {
        id: Set(registration_id),
        group_id: Set(Some(group_id)),
        updated_at: Set(now),
        ..Default::default()
    };
    active.update(conn).await
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<registrations::Model>, sea_orm::DbErr> {
    registrations::Entity::find()
        .filter(registrations::Column::GroupId.eq(group_id))
        .order_by_asc(registrations::Column::Id)
        .all(conn)
        .await
}
