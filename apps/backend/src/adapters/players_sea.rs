//! SeaORM adapter for players.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::players;

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::Id.is_in(player_ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn find_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::TeamId.eq(team_id))
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    name: &str,
    shirt_number: Option<i16>,
    position: Option<&str>,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = players::ActiveModel {
        id: NotSet,
        team_id: Set(team_id),
        name: Set(name.to_string()),
        shirt_number: Set(shirt_number),
        position: Set(position.map(str::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
