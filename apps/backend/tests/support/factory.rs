//! Seed helpers for integration tests.

use backend::domain::results::{LineupEntryInput, StatisticInput};
use backend::entities::championships::ChampionshipFormat;
use backend::entities::registrations::RegistrationStatus;
use backend::entities::users::UserRole;
use backend::errors::domain::DomainError;
use backend::repos::championships::{self, Championship, ChampionshipCreate};
use backend::repos::players::{self, Player};
use backend::repos::registrations;
use backend::repos::teams::{self, Team};
use backend::repos::users::{self, User};
use backend::services::results::ResultInput;
use backend_test_support::unique_helpers::{unique_email, unique_str};
use sea_orm::ConnectionTrait;

pub const SQUAD_SIZE: usize = 5;

/// A seeded championship with its organizer and approved teams.
pub struct Seeded {
    pub championship: Championship,
    pub organizer: User,
    pub teams: Vec<Squad>,
}

/// One team and its players.
pub struct Squad {
    pub team: Team,
    pub players: Vec<Player>,
}

pub async fn create_organizer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<User, DomainError> {
    users::create_user(
        conn,
        "Test Organizer",
        &unique_email("organizer"),
        UserRole::Organizer,
    )
    .await
}

pub async fn create_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Squad, DomainError> {
    let team = teams::create_team(conn, &unique_str("team"), Some("Testville"), None).await?;
    let mut squad = Vec::with_capacity(SQUAD_SIZE);
    for i in 0..SQUAD_SIZE {
        let player = players::create_player(
            conn,
            team.id,
            &unique_str("player"),
            Some(i as i16 + 1),
            None,
        )
        .await?;
        squad.push(player);
    }
    Ok(Squad {
        team,
        players: squad,
    })
}

/// Championship with `team_count` approved teams, ready for schedule
/// generation.
pub async fn seed_championship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    format: ChampionshipFormat,
    team_count: usize,
) -> Result<Seeded, DomainError> {
    let organizer = create_organizer(conn).await?;
    let championship = championships::create_championship(
        conn,
        ChampionshipCreate {
            name: unique_str("championship"),
            description: None,
            format,
            start_date: time::OffsetDateTime::now_utc(),
            end_date: None,
            min_teams: 2,
            max_teams: 64,
            organizer_user_id: organizer.id,
        },
    )
    .await?;

    let mut squads = Vec::with_capacity(team_count);
    for _ in 0..team_count {
        let squad = create_squad(conn).await?;
        registrations::create_registration(
            conn,
            championship.id,
            squad.team.id,
            RegistrationStatus::Approved,
        )
        .await?;
        squads.push(squad);
    }

    Ok(Seeded {
        championship,
        organizer,
        teams: squads,
    })
}

impl Seeded {
    /// The squad for a given team id. Panics if the team was not seeded.
    pub fn squad(&self, team_id: i64) -> &Squad {
        self.teams
            .iter()
            .find(|s| s.team.id == team_id)
            .expect("team id was seeded")
    }
}

/// Build a consistent result submission: one goal per scoring player,
/// starting from each squad's first player.
pub fn result_input(home: &Squad, away: &Squad, home_score: i32, away_score: i32) -> ResultInput {
    let mut lineup = Vec::new();
    let mut statistics = Vec::new();
    for (squad, score) in [(home, home_score), (away, away_score)] {
        assert!(
            score as usize <= squad.players.len(),
            "score exceeds squad size"
        );
        for (i, player) in squad.players.iter().enumerate() {
            lineup.push(LineupEntryInput {
                player_id: player.id,
                team_id: squad.team.id,
                starter: true,
            });
            statistics.push(StatisticInput {
                player_id: player.id,
                goals: if (i as i32) < score { 1 } else { 0 },
                assists: 0,
                yellow_cards: 0,
                red_cards: 0,
            });
        }
    }
    ResultInput {
        home_score,
        away_score,
        lineup,
        statistics,
    }
}
