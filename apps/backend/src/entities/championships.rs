use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "championship_format")]
pub enum ChampionshipFormat {
    #[sea_orm(string_value = "ROUND_ROBIN")]
    RoundRobin,
    #[sea_orm(string_value = "KNOCKOUT")]
    Knockout,
    #[sea_orm(string_value = "MIXED")]
    Mixed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "championships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub format: ChampionshipFormat,
    #[sea_orm(column_name = "start_date")]
    pub start_date: OffsetDateTime,
    #[sea_orm(column_name = "end_date")]
    pub end_date: Option<OffsetDateTime>,
    #[sea_orm(column_name = "min_teams")]
    pub min_teams: i32,
    #[sea_orm(column_name = "max_teams")]
    pub max_teams: i32,
    /// One-way latch: flips false -> true when the schedule is generated,
    /// never back.
    pub started: bool,
    #[sea_orm(column_name = "organizer_user_id")]
    pub organizer_user_id: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OrganizerUserId",
        to = "super::users::Column::Id"
    )]
    Organizer,
    #[sea_orm(has_many = "super::registrations::Entity")]
    Registrations,
    #[sea_orm(has_many = "super::phases::Entity")]
    Phases,
    #[sea_orm(has_many = "super::groups::Entity")]
    Groups,
    #[sea_orm(has_many = "super::matches::Entity")]
    Matches,
    #[sea_orm(has_many = "super::standings::Entity")]
    Standings,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl Related<super::phases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phases.def()
    }
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Groups.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl Related<super::standings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Standings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
