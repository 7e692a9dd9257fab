use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    Name,
    City,
    ManagerUserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    TeamId,
    Name,
    ShirtNumber,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Championships {
    Table,
    Id,
    Name,
    Description,
    Format,
    StartDate,
    EndDate,
    MinTeams,
    MaxTeams,
    Started,
    OrganizerUserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
    ChampionshipId,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Phases {
    Table,
    Id,
    ChampionshipId,
    Name,
    Ordinal,
    CreatedAt,
}

#[derive(Iden)]
enum Registrations {
    Table,
    Id,
    ChampionshipId,
    TeamId,
    Status,
    GroupId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    ChampionshipId,
    PhaseId,
    GroupId,
    HomeTeamId,
    AwayTeamId,
    RoundNo,
    KickoffAt,
    Venue,
    Status,
    HomeScore,
    AwayScore,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LineupEntries {
    Table,
    Id,
    MatchId,
    PlayerId,
    TeamId,
    Starter,
    CreatedAt,
}

#[derive(Iden)]
enum MatchStatistics {
    Table,
    Id,
    MatchId,
    PlayerId,
    Goals,
    Assists,
    YellowCards,
    RedCards,
    CreatedAt,
}

#[derive(Iden)]
enum Standings {
    Table,
    Id,
    ChampionshipId,
    TeamId,
    Points,
    Played,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDiff,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserRoleEnum {
    #[iden = "user_role"]
    Type,
}

#[derive(Iden)]
enum ChampionshipFormatEnum {
    #[iden = "championship_format"]
    Type,
}

#[derive(Iden)]
enum RegistrationStatusEnum {
    #[iden = "registration_status"]
    Type,
}

#[derive(Iden)]
enum MatchStatusEnum {
    #[iden = "match_status"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enum types (PostgreSQL only; SQLite stores them as TEXT)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            sea_orm::DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "user_role").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(UserRoleEnum::Type)
                                .values(["admin", "organizer"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "championship_format").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(ChampionshipFormatEnum::Type)
                                .values(["ROUND_ROBIN", "KNOCKOUT", "MIXED"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "registration_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(RegistrationStatusEnum::Type)
                                .values(["pending", "approved", "rejected"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "match_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(MatchStatusEnum::Type)
                                .values(["agendada", "em_andamento", "finalizada", "cancelada"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't need enum types - they're stored as TEXT
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .enumeration(UserRoleEnum::Type, [Alias::new("admin"), Alias::new("organizer")])
                            .not_null()
                            .default("organizer"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // teams
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::City).string().null())
                    .col(ColumnDef::new(Teams::ManagerUserId).big_integer().null())
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_manager_user_id")
                            .from(Teams::Table, Teams::ManagerUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::TeamId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(
                        ColumnDef::new(Players::ShirtNumber)
                            .small_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Players::Position).string().null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_team_id")
                            .from(Players::Table, Players::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_team_id")
                    .table(Players::Table)
                    .col(Players::TeamId)
                    .to_owned(),
            )
            .await?;

        // championships
        manager
            .create_table(
                Table::create()
                    .table(Championships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Championships::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Championships::Name).string().not_null())
                    .col(ColumnDef::new(Championships::Description).string().null())
                    .col(
                        ColumnDef::new(Championships::Format)
                            .enumeration(ChampionshipFormatEnum::Type, [Alias::new("ROUND_ROBIN"), Alias::new("KNOCKOUT"), Alias::new("MIXED")])
                            .not_null()
                            .default("ROUND_ROBIN"),
                    )
                    .col(
                        ColumnDef::new(Championships::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Championships::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Championships::MinTeams)
                            .integer()
                            .not_null()
                            .default(4),
                    )
                    .col(
                        ColumnDef::new(Championships::MaxTeams)
                            .integer()
                            .not_null()
                            .default(20),
                    )
                    .col(
                        ColumnDef::new(Championships::Started)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Championships::OrganizerUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Championships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Championships::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_championships_organizer_user_id")
                            .from(Championships::Table, Championships::OrganizerUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // groups
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Groups::ChampionshipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Groups::Name).string().not_null())
                    .col(
                        ColumnDef::new(Groups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_groups_championship_id")
                            .from(Groups::Table, Groups::ChampionshipId)
                            .to(Championships::Table, Championships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // phases
        manager
            .create_table(
                Table::create()
                    .table(Phases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Phases::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Phases::ChampionshipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Phases::Name).string().not_null())
                    .col(ColumnDef::new(Phases::Ordinal).integer().not_null())
                    .col(
                        ColumnDef::new(Phases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phases_championship_id")
                            .from(Phases::Table, Phases::ChampionshipId)
                            .to(Championships::Table, Championships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_phases_championship_ordinal")
                    .table(Phases::Table)
                    .col(Phases::ChampionshipId)
                    .col(Phases::Ordinal)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // registrations
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registrations::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Registrations::ChampionshipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::TeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::Status)
                            .enumeration(RegistrationStatusEnum::Type, [Alias::new("pending"), Alias::new("approved"), Alias::new("rejected")])
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Registrations::GroupId).big_integer().null())
                    .col(
                        ColumnDef::new(Registrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_championship_id")
                            .from(Registrations::Table, Registrations::ChampionshipId)
                            .to(Championships::Table, Championships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_team_id")
                            .from(Registrations::Table, Registrations::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_group_id")
                            .from(Registrations::Table, Registrations::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_registrations_championship_team")
                    .table(Registrations::Table)
                    .col(Registrations::ChampionshipId)
                    .col(Registrations::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Matches::ChampionshipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Matches::PhaseId).big_integer().null())
                    .col(ColumnDef::new(Matches::GroupId).big_integer().null())
                    // Nullable team slots: a NULL side is "to be decided"
                    // (knockout placeholder waiting for a prior-round winner).
                    .col(ColumnDef::new(Matches::HomeTeamId).big_integer().null())
                    .col(ColumnDef::new(Matches::AwayTeamId).big_integer().null())
                    .col(ColumnDef::new(Matches::RoundNo).integer().not_null())
                    .col(
                        ColumnDef::new(Matches::KickoffAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Matches::Venue)
                            .string()
                            .not_null()
                            .default("A definir"),
                    )
                    .col(
                        ColumnDef::new(Matches::Status)
                            .enumeration(MatchStatusEnum::Type, [Alias::new("agendada"), Alias::new("em_andamento"), Alias::new("finalizada"), Alias::new("cancelada")])
                            .not_null()
                            .default("agendada"),
                    )
                    .col(ColumnDef::new(Matches::HomeScore).integer().null())
                    .col(ColumnDef::new(Matches::AwayScore).integer().null())
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_championship_id")
                            .from(Matches::Table, Matches::ChampionshipId)
                            .to(Championships::Table, Championships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_phase_id")
                            .from(Matches::Table, Matches::PhaseId)
                            .to(Phases::Table, Phases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_group_id")
                            .from(Matches::Table, Matches::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_home_team_id")
                            .from(Matches::Table, Matches::HomeTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_away_team_id")
                            .from(Matches::Table, Matches::AwayTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_championship_id")
                    .table(Matches::Table)
                    .col(Matches::ChampionshipId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_phase_id")
                    .table(Matches::Table)
                    .col(Matches::PhaseId)
                    .to_owned(),
            )
            .await?;

        // lineup_entries
        manager
            .create_table(
                Table::create()
                    .table(LineupEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineupEntries::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(LineupEntries::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LineupEntries::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LineupEntries::TeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LineupEntries::Starter)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(LineupEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_entries_match_id")
                            .from(LineupEntries::Table, LineupEntries::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_entries_player_id")
                            .from(LineupEntries::Table, LineupEntries::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_entries_team_id")
                            .from(LineupEntries::Table, LineupEntries::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_lineup_entries_match_player")
                    .table(LineupEntries::Table)
                    .col(LineupEntries::MatchId)
                    .col(LineupEntries::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // match_statistics
        manager
            .create_table(
                Table::create()
                    .table(MatchStatistics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchStatistics::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::Goals)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::Assists)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::YellowCards)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::RedCards)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStatistics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_statistics_match_id")
                            .from(MatchStatistics::Table, MatchStatistics::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_statistics_player_id")
                            .from(MatchStatistics::Table, MatchStatistics::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_match_statistics_match_player")
                    .table(MatchStatistics::Table)
                    .col(MatchStatistics::MatchId)
                    .col(MatchStatistics::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // standings
        manager
            .create_table(
                Table::create()
                    .table(Standings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Standings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Standings::ChampionshipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Standings::TeamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Standings::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::Played)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::Wins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::Draws)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::Losses)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::GoalsFor)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::GoalsAgainst)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::GoalDiff)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Standings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Standings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_standings_championship_id")
                            .from(Standings::Table, Standings::ChampionshipId)
                            .to(Championships::Table, Championships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_standings_team_id")
                            .from(Standings::Table, Standings::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_standings_championship_team")
                    .table(Standings::Table)
                    .col(Standings::ChampionshipId)
                    .col(Standings::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Standings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(MatchStatistics::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(LineupEntries::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Registrations::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Phases::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Championships::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                manager
                    .drop_type(
                        PgType::drop()
                            .if_exists()
                            .name(MatchStatusEnum::Type)
                            .to_owned(),
                    )
                    .await?;
                manager
                    .drop_type(
                        PgType::drop()
                            .if_exists()
                            .name(RegistrationStatusEnum::Type)
                            .to_owned(),
                    )
                    .await?;
                manager
                    .drop_type(
                        PgType::drop()
                            .if_exists()
                            .name(ChampionshipFormatEnum::Type)
                            .to_owned(),
                    )
                    .await?;
                manager
                    .drop_type(
                        PgType::drop()
                            .if_exists()
                            .name(UserRoleEnum::Type)
                            .to_owned(),
                    )
                    .await?;
            }
            sea_orm::DatabaseBackend::Sqlite => {}
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        Ok(())
    }
}
