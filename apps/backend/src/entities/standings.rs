use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One aggregate row per (championship, team). Mutated only by the
/// standings updater in response to a finalized match; never deleted while
/// the championship exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "standings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "championship_id")]
    pub championship_id: i64,
    #[sea_orm(column_name = "team_id")]
    pub team_id: i64,
    pub points: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    #[sea_orm(column_name = "goals_for")]
    pub goals_for: i32,
    #[sea_orm(column_name = "goals_against")]
    pub goals_against: i32,
    /// Stored redundantly; kept consistent with goals_for/goals_against on
    /// every update.
    #[sea_orm(column_name = "goal_diff")]
    pub goal_diff: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::championships::Entity",
        from = "Column::ChampionshipId",
        to = "super::championships::Column::Id"
    )]
    Championship,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id"
    )]
    Team,
}

impl Related<super::championships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
