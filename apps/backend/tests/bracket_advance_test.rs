mod support;

use backend::entities::championships::ChampionshipFormat;
use backend::errors::domain::{DomainError, ValidationKind};
use backend::services::bracket::{advance_winner, get_bracket};
use backend::services::results::register_result;
use backend::services::schedule::generate_schedule;
use backend::services::Actor;

use support::factory::{result_input, seed_championship};
use support::test_db;

#[tokio::test]
async fn winners_fill_the_final_in_bracket_order() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::Knockout, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let bracket = get_bracket(&db, seeded.championship.id).await?;
    assert_eq!(bracket.phases.len(), 2);
    let semis = bracket.phases[0].matches.clone();
    let final_placeholder = bracket.phases[1].matches[0].clone();
    assert!(final_placeholder.home_team_id.is_none());

    // First semi-final: home side wins, fills the Final's home slot.
    let s0_home = seeded.squad(semis[0].home_team_id.unwrap());
    let s0_away = seeded.squad(semis[0].away_team_id.unwrap());
    register_result(&db, &actor, semis[0].id, result_input(s0_home, s0_away, 2, 0)).await?;
    let fed = advance_winner(&db, &actor, semis[0].id)
        .await?
        .expect("semi-final feeds the Final");
    assert_eq!(fed.id, final_placeholder.id);
    assert_eq!(fed.home_team_id, Some(s0_home.team.id));
    assert_eq!(fed.away_team_id, None);

    // Second semi-final: away side wins, fills the away slot.
    let s1_home = seeded.squad(semis[1].home_team_id.unwrap());
    let s1_away = seeded.squad(semis[1].away_team_id.unwrap());
    register_result(&db, &actor, semis[1].id, result_input(s1_home, s1_away, 0, 1)).await?;
    let fed = advance_winner(&db, &actor, semis[1].id)
        .await?
        .expect("semi-final feeds the Final");
    assert_eq!(fed.home_team_id, Some(s0_home.team.id));
    assert_eq!(fed.away_team_id, Some(s1_away.team.id));

    // The Final itself has no successor.
    register_result(&db, &actor, fed.id, result_input(s0_home, s1_away, 3, 1)).await?;
    assert_eq!(advance_winner(&db, &actor, fed.id).await?, None);
    Ok(())
}

#[tokio::test]
async fn advancement_is_idempotent() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::Knockout, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let bracket = get_bracket(&db, seeded.championship.id).await?;
    let semi = bracket.phases[0].matches[0].clone();
    let home = seeded.squad(semi.home_team_id.unwrap());
    let away = seeded.squad(semi.away_team_id.unwrap());
    register_result(&db, &actor, semi.id, result_input(home, away, 1, 0)).await?;

    let first = advance_winner(&db, &actor, semi.id).await?.unwrap();
    let second = advance_winner(&db, &actor, semi.id).await?.unwrap();
    assert_eq!(first.home_team_id, second.home_team_id);
    Ok(())
}

#[tokio::test]
async fn unfinished_match_cannot_advance() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::Knockout, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let bracket = get_bracket(&db, seeded.championship.id).await?;
    let semi = &bracket.phases[0].matches[0];

    let err = advance_winner(&db, &actor, semi.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MatchNotFinished, _)
    ));
    Ok(())
}

#[tokio::test]
async fn league_matches_have_no_bracket_to_advance_in() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let m = backend::repos::matches::find_by_championship(&db, seeded.championship.id).await?[0]
        .clone();
    let home = seeded.squad(m.home_team_id.unwrap());
    let away = seeded.squad(m.away_team_id.unwrap());
    register_result(&db, &actor, m.id, result_input(home, away, 1, 0)).await?;

    let err = advance_winner(&db, &actor, m.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::FormatMismatch, _)
    ));
    Ok(())
}
