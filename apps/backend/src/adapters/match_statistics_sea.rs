//! SeaORM adapter for per-player match statistics.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::domain::results::StatisticInput;
use crate::entities::match_statistics;

pub async fn insert_statistics<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    statistics: &[StatisticInput],
) -> Result<Vec<match_statistics::Model>, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut inserted = Vec::with_capacity(statistics.len());
    for stat in statistics {
        let active = match_statistics::ActiveModel {
            id: NotSet,
            match_id: Set(match_id),
            player_id: Set(stat.player_id),
            goals: Set(stat.goals),
            assists: Set(stat.assists),
            yellow_cards: Set(stat.yellow_cards),
            red_cards: Set(stat.red_cards),
            created_at: Set(now),
        };
        inserted.push(active.insert(conn).await?);
    }
    Ok(inserted)
}

pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<match_statistics::Model>, sea_orm::DbErr> {
    match_statistics::Entity::find()
        .filter(match_statistics::Column::MatchId.eq(match_id))
        .all(conn)
        .await
}
