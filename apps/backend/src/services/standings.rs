//! Standings queries: ranked tables for a championship or a single group.

use sea_orm::DatabaseConnection;

use crate::domain::standings::sort_ranked;
use crate::errors::domain::DomainError;
use crate::repos::championships;
use crate::repos::standings::{self, Standing};

/// A standings row with its 1-based table position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStanding {
    pub position: u32,
    pub standing: Standing,
}

pub(crate) fn rank(mut rows: Vec<Standing>) -> Vec<RankedStanding> {
    sort_ranked(&mut rows);
    rows.into_iter()
        .enumerate()
        .map(|(i, standing)| RankedStanding {
            position: i as u32 + 1,
            standing,
        })
        .collect()
}

/// The championship table ordered by points, wins, goal difference and
/// goals for, all descending.
pub async fn get_standings(
    db: &DatabaseConnection,
    championship_id: i64,
) -> Result<Vec<RankedStanding>, DomainError> {
    championships::require_championship(db, championship_id).await?;
    let rows = standings::find_by_championship(db, championship_id).await?;
    Ok(rank(rows))
}
