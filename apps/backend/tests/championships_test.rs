mod support;

use backend::entities::championships::ChampionshipFormat;
use backend::entities::registrations::RegistrationStatus;
use backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use backend::services::championships::{
    approve_registration, create_championship, register_team, NewChampionship,
};
use backend::services::schedule::generate_schedule;
use backend::services::Actor;
use time::{Duration, OffsetDateTime};

use support::factory::{create_organizer, create_squad, seed_championship};
use support::test_db;

fn championship_input(format: ChampionshipFormat) -> NewChampionship {
    NewChampionship {
        name: "Campeonato Municipal".to_string(),
        description: Some("Liga de teste".to_string()),
        format,
        start_date: OffsetDateTime::now_utc(),
        end_date: Some(OffsetDateTime::now_utc() + Duration::days(60)),
        min_teams: 2,
        max_teams: 16,
    }
}

#[tokio::test]
async fn organizer_creates_and_fills_a_championship() -> Result<(), DomainError> {
    let db = test_db().await?;
    let organizer = create_organizer(&db).await?;
    let actor = Actor::user(organizer.id);

    let championship =
        create_championship(&db, &actor, championship_input(ChampionshipFormat::RoundRobin))
            .await?;
    assert!(!championship.started);
    assert_eq!(championship.organizer_user_id, organizer.id);

    let squad = create_squad(&db).await?;
    let registration = register_team(&db, championship.id, squad.team.id).await?;
    assert_eq!(registration.status, RegistrationStatus::Pending);

    let approved = approve_registration(&db, &actor, championship.id, squad.team.id).await?;
    assert_eq!(approved.status, RegistrationStatus::Approved);
    Ok(())
}

#[tokio::test]
async fn creation_rejects_bad_bounds_and_dates() -> Result<(), DomainError> {
    let db = test_db().await?;
    let organizer = create_organizer(&db).await?;
    let actor = Actor::user(organizer.id);

    let mut input = championship_input(ChampionshipFormat::RoundRobin);
    input.min_teams = 1;
    let err = create_championship(&db, &actor, input).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TooFewTeams, _)
    ));

    let mut input = championship_input(ChampionshipFormat::RoundRobin);
    input.max_teams = 1;
    let err = create_championship(&db, &actor, input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));

    let mut input = championship_input(ChampionshipFormat::RoundRobin);
    input.end_date = Some(input.start_date - Duration::days(1));
    let err = create_championship(&db, &actor, input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
    Ok(())
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() -> Result<(), DomainError> {
    let db = test_db().await?;
    let organizer = create_organizer(&db).await?;
    let actor = Actor::user(organizer.id);
    let championship =
        create_championship(&db, &actor, championship_input(ChampionshipFormat::RoundRobin))
            .await?;

    let squad = create_squad(&db).await?;
    register_team(&db, championship.id, squad.team.id).await?;
    let err = register_team(&db, championship.id, squad.team.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_, _)));
    Ok(())
}

#[tokio::test]
async fn registrations_close_once_the_schedule_exists() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);
    generate_schedule(&db, &actor, seeded.championship.id, None).await?;

    let late = create_squad(&db).await?;
    let err = register_team(&db, seeded.championship.id, late.team.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::AlreadyStarted, _)
    ));
    Ok(())
}
