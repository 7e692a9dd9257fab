use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "championship_id")]
    pub championship_id: i64,
    pub name: String,
    /// 1-based phase order; 1 is the earliest knockout round.
    pub ordinal: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::championships::Entity",
        from = "Column::ChampionshipId",
        to = "super::championships::Column::Id"
    )]
    Championship,
    #[sea_orm(has_many = "super::matches::Entity")]
    Matches,
}

impl Related<super::championships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
