//! SeaORM adapter for match lineups.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::domain::results::LineupEntryInput;
use crate::entities::lineup_entries;

pub async fn insert_lineup<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    entries: &[LineupEntryInput],
) -> Result<Vec<lineup_entries::Model>, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut inserted = Vec::with_capacity(entries.len());
    for entry in entries {
        let active = lineup_entries::ActiveModel {
            id: NotSet,
            match_id: Set(match_id),
            player_id: Set(entry.player_id),
            team_id: Set(entry.team_id),
            starter: Set(entry.starter),
            created_at: Set(now),
        };
        inserted.push(active.insert(conn).await?);
    }
    Ok(inserted)
}

pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<lineup_entries::Model>, sea_orm::DbErr> {
    lineup_entries::Entity::find()
        .filter(lineup_entries::Column::MatchId.eq(match_id))
        .all(conn)
        .await
}
