mod support;

use std::collections::HashMap;

use backend::entities::championships::ChampionshipFormat;
use backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use backend::repos::{championships, matches};
use backend::services::schedule::{generate_schedule, ScheduleOutcome};
use backend::services::Actor;

use support::factory::seed_championship;
use support::test_db;

#[tokio::test]
async fn four_teams_play_a_full_double_round_robin() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);

    let outcome = generate_schedule(&db, &actor, seeded.championship.id, Some(7)).await?;
    let matches = match outcome {
        ScheduleOutcome::RoundRobin { matches, seed } => {
            assert_eq!(seed, 7);
            matches
        }
        other => panic!("expected round robin outcome, got {other:?}"),
    };

    // n * (n - 1) matches over 2 * (n - 1) rounds
    assert_eq!(matches.len(), 12);
    assert_eq!(matches.iter().map(|m| m.round_no).max(), Some(6));

    // Every team appears in 2 * (n - 1) matches, and each ordered pairing
    // occurs exactly once.
    let mut appearances: HashMap<i64, u32> = HashMap::new();
    let mut pairings: Vec<(i64, i64)> = Vec::new();
    for m in &matches {
        let home = m.home_team_id.expect("league match has home team");
        let away = m.away_team_id.expect("league match has away team");
        *appearances.entry(home).or_default() += 1;
        *appearances.entry(away).or_default() += 1;
        pairings.push((home, away));
    }
    assert_eq!(appearances.len(), 4);
    assert!(appearances.values().all(|&n| n == 6));
    let unique: std::collections::HashSet<_> = pairings.iter().collect();
    assert_eq!(unique.len(), pairings.len());

    // Each team hosts each opponent once (mirrored legs).
    for (home, away) in &pairings {
        assert!(pairings.contains(&(*away, *home)));
    }

    let championship = championships::require_championship(&db, seeded.championship.id).await?;
    assert!(championship.started);
    Ok(())
}

#[tokio::test]
async fn five_teams_get_byes_but_still_meet_twice() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 5).await?;
    let actor = Actor::user(seeded.organizer.id);

    generate_schedule(&db, &actor, seeded.championship.id, None).await?;
    let all = matches::find_by_championship(&db, seeded.championship.id).await?;
    assert_eq!(all.len(), 20);

    // No team plays twice in the same round.
    let mut by_round: HashMap<i32, Vec<i64>> = HashMap::new();
    for m in &all {
        let entry = by_round.entry(m.round_no).or_default();
        entry.push(m.home_team_id.unwrap());
        entry.push(m.away_team_id.unwrap());
    }
    for (round, teams) in by_round {
        let unique: std::collections::HashSet<_> = teams.iter().collect();
        assert_eq!(unique.len(), teams.len(), "round {round} reuses a team");
    }
    Ok(())
}

#[tokio::test]
async fn second_generation_attempt_is_rejected() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let actor = Actor::user(seeded.organizer.id);

    generate_schedule(&db, &actor, seeded.championship.id, None).await?;
    let before = matches::count_by_championship(&db, seeded.championship.id).await?;

    let err = generate_schedule(&db, &actor, seeded.championship.id, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::AlreadyStarted, _)
    ));

    let after = matches::count_by_championship(&db, seeded.championship.id).await?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn too_few_teams_leaves_nothing_behind() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 1).await?;
    let actor = Actor::user(seeded.organizer.id);

    let err = generate_schedule(&db, &actor, seeded.championship.id, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TooFewTeams, _)
    ));

    assert_eq!(
        matches::count_by_championship(&db, seeded.championship.id).await?,
        0
    );
    let championship = championships::require_championship(&db, seeded.championship.id).await?;
    assert!(!championship.started);
    Ok(())
}

#[tokio::test]
async fn same_seed_reproduces_the_same_schedule() -> Result<(), DomainError> {
    // Two fresh databases seed identical ids, so equal seeds must produce
    // identical pairing sequences.
    let mut runs = Vec::new();
    for _ in 0..2 {
        let db = test_db().await?;
        let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
        let actor = Actor::user(seeded.organizer.id);
        generate_schedule(&db, &actor, seeded.championship.id, Some(42)).await?;
        let all = matches::find_by_championship(&db, seeded.championship.id).await?;
        runs.push(
            all.iter()
                .map(|m| (m.round_no, m.home_team_id, m.away_team_id))
                .collect::<Vec<_>>(),
        );
    }
    assert_eq!(runs[0], runs[1]);
    Ok(())
}

#[tokio::test]
async fn non_organizer_cannot_generate() -> Result<(), DomainError> {
    let db = test_db().await?;
    let seeded = seed_championship(&db, ChampionshipFormat::RoundRobin, 4).await?;
    let outsider = support::factory::create_organizer(&db).await?;

    let err = generate_schedule(&db, &Actor::user(outsider.id), seeded.championship.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_, _)));

    // An admin may act on any championship.
    generate_schedule(&db, &Actor::admin(outsider.id), seeded.championship.id, None).await?;
    Ok(())
}
