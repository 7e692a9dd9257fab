mod support;

use backend::adapters::{lineup_entries_sea, match_statistics_sea};
use backend::entities::championships::ChampionshipFormat;
use backend::entities::matches::MatchStatus;
use backend::errors::domain::{DomainError, ValidationKind};
use backend::repos::{matches, standings};
use backend::services::results::register_result;
use backend::services::schedule::generate_schedule;
use backend::services::Actor;

use support::factory::{result_input, seed_championship, SQUAD_SIZE};
use support::test_db;

#[tokio::test]
async fn a_home_win_updates_match_and_both_standings_rows() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let m = matches::find_by_championship(&db, seeded.championship.id).await?[0].clone();
    let home = seeded.squad(m.home_team_id.unwrap());
    let away = seeded.squad(m.away_team_id.unwrap());

    let updated =
        register_result(&db, &actor, m.id, result_input(home, away, 2, 1)).await?;
    assert_eq!(updated.status, MatchStatus::Finished);
    assert_eq!(updated.home_score, Some(2));
    assert_eq!(updated.away_score, Some(1));

    let home_row = standings::find_by_championship_and_team(&db, m.championship_id, home.team.id)
        .await?
        .expect("home standings row");
    assert_eq!(
        (home_row.points, home_row.played, home_row.wins, home_row.draws, home_row.losses),
        (3, 1, 1, 0, 0)
    );
    assert_eq!(
        (home_row.goals_for, home_row.goals_against, home_row.goal_diff),
        (2, 1, 1)
    );

    let away_row = standings::find_by_championship_and_team(&db, m.championship_id, away.team.id)
        .await?
        .expect("away standings row");
    assert_eq!(
        (away_row.points, away_row.played, away_row.wins, away_row.draws, away_row.losses),
        (0, 1, 0, 0, 1)
    );
    assert_eq!(
        (away_row.goals_for, away_row.goals_against, away_row.goal_diff),
        (1, 2, -1)
    );

    // Lineup and statistics persisted for both squads.
    let lineup = lineup_entries_sea::find_by_match(&db, m.id).await?;
    assert_eq!(lineup.len(), SQUAD_SIZE * 2);
    let stats = match_statistics_sea::find_by_match(&db, m.id).await?;
    assert_eq!(stats.iter().map(|s| s.goals).sum::<i32>(), 3);
    Ok(())
}

#[tokio::test]
async fn goal_sum_mismatch_rejects_and_leaves_no_trace() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let m = matches::find_by_championship(&db, seeded.championship.id).await?[0].clone();
    let home = seeded.squad(m.home_team_id.unwrap());
    let away = seeded.squad(m.away_team_id.unwrap());

    // Players account for 2 home goals but the declared score says 3.
    let mut input = result_input(home, away, 2, 0);
    input.home_score = 3;

    let err = register_result(&db, &actor, m.id, input).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::GoalSumMismatch, _)
    ));

    let unchanged = matches::require_match(&db, m.id).await?;
    assert_eq!(unchanged.status, MatchStatus::Scheduled);
    assert_eq!(unchanged.home_score, None);

    let row = standings::find_by_championship_and_team(&db, m.championship_id, home.team.id)
        .await?
        .expect("standings row");
    assert_eq!((row.points, row.played), (0, 0));
    assert!(lineup_entries_sea::find_by_match(&db, m.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn finished_match_does_not_accept_a_second_result() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let m = matches::find_by_championship(&db, seeded.championship.id).await?[0].clone();
    let home = seeded.squad(m.home_team_id.unwrap());
    let away = seeded.squad(m.away_team_id.unwrap());

    register_result(&db, &actor, m.id, result_input(home, away, 1, 1)).await?;
    let err = register_result(&db, &actor, m.id, result_input(home, away, 2, 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MatchNotOpen, _)
    ));

    // The draw stood: one point each.
    let row = standings::find_by_championship_and_team(&db, m.championship_id, home.team.id)
        .await?
        .expect("standings row");
    assert_eq!((row.points, row.played, row.draws), (1, 1, 1));
    Ok(())
}

#[tokio::test]
async fn knockout_matches_reject_draws() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::Knockout, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let m = matches::find_by_championship(&db, seeded.championship.id).await?[0].clone();
    let home = seeded.squad(m.home_team_id.unwrap());
    let away = seeded.squad(m.away_team_id.unwrap());

    let err = register_result(&db, &actor, m.id, result_input(home, away, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::DrawInKnockout, _)
    ));

    // A decisive score goes through and leaves standings untouched.
    register_result(&db, &actor, m.id, result_input(home, away, 2, 1)).await?;
    assert!(
        standings::find_by_championship_and_team(&db, m.championship_id, home.team.id)
            .await?
            .is_none()
    );
    Ok(())
}

#[tokio::test]
async fn lineup_with_foreign_player_is_rejected() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let m = matches::find_by_championship(&db, seeded.championship.id).await?[0].clone();
    let home = seeded.squad(m.home_team_id.unwrap());
    let away = seeded.squad(m.away_team_id.unwrap());

    // A player from a third squad claims to play for the home side.
    let outsider = seeded
        .teams
        .iter()
        .find(|s| s.team.id != home.team.id && s.team.id != away.team.id)
        .unwrap();
    let mut input = result_input(home, away, 0, 0);
    input.lineup[0].player_id = outsider.players[0].id;

    let err = register_result(&db, &actor, m.id, input).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PlayerTeamMismatch, _)
    ));
    Ok(())
}
