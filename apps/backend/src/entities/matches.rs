use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Match lifecycle. `agendada -> em_andamento -> finalizada`, with
/// `cancelada` reachable from either pre-terminal state. `finalizada` and
/// `cancelada` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "match_status")]
pub enum MatchStatus {
    #[sea_orm(string_value = "agendada")]
    Scheduled,
    #[sea_orm(string_value = "em_andamento")]
    InProgress,
    #[sea_orm(string_value = "finalizada")]
    Finished,
    #[sea_orm(string_value = "cancelada")]
    Cancelled,
}

impl MatchStatus {
    /// True while a result may still be registered.
    pub fn is_open(self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::InProgress)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Cancelled)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "championship_id")]
    pub championship_id: i64,
    #[sea_orm(column_name = "phase_id")]
    pub phase_id: Option<i64>,
    #[sea_orm(column_name = "group_id")]
    pub group_id: Option<i64>,
    /// None = slot not yet decided (knockout placeholder).
    #[sea_orm(column_name = "home_team_id")]
    pub home_team_id: Option<i64>,
    #[sea_orm(column_name = "away_team_id")]
    pub away_team_id: Option<i64>,
    #[sea_orm(column_name = "round_no")]
    pub round_no: i32,
    #[sea_orm(column_name = "kickoff_at")]
    pub kickoff_at: Option<OffsetDateTime>,
    pub venue: String,
    pub status: MatchStatus,
    #[sea_orm(column_name = "home_score")]
    pub home_score: Option<i32>,
    #[sea_orm(column_name = "away_score")]
    pub away_score: Option<i32>,
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
        belongs_to = "super::phases::Entity",
        from = "Column::PhaseId",
        to = "super::phases::Column::Id"
    )]
    Phase,
    #[sea_orm(
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::HomeTeamId",
        to = "super::teams::Column::Id"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::AwayTeamId",
        to = "super::teams::Column::Id"
    )]
    AwayTeam,
    #[sea_orm(has_many = "super::lineup_entries::Entity")]
    LineupEntries,
    #[sea_orm(has_many = "super::match_statistics::Entity")]
    MatchStatistics,
}

impl Related<super::championships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::phases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phase.def()
    }
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::lineup_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineupEntries.def()
    }
}

impl Related<super::match_statistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchStatistics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
