//! Player repository functions for the domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub shirt_number: Option<i16>,
    pub position: Option<String>,
}

impl From<players::Model> for Player {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            team_id: m.team_id,
            name: m.name,
            shirt_number: m.shirt_number,
            position: m.position,
        }
    }
}

pub async fn find_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let models = players_adapter::find_by_team(conn, team_id).await?;
    Ok(models.into_iter().map(Player::from).collect())
}

/// player_id -> team_id for the given players. Ids that do not exist are
/// simply absent from the map; the validator reports those as missing.
pub async fn membership_map<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<HashMap<i64, i64>, DomainError> {
    let models = players_adapter::find_by_ids(conn, player_ids).await?;
    Ok(models.into_iter().map(|p| (p.id, p.team_id)).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    name: &str,
    shirt_number: Option<i16>,
    position: Option<&str>,
) -> Result<Player, DomainError> {
    let model =
        players_adapter::create_player(conn, team_id, name, shirt_number, position).await?;
    Ok(Player::from(model))
}
