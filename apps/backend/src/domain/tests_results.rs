use std::collections::HashMap;

use crate::domain::results::{validate_result, LineupEntryInput, StatisticInput};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

const HOME: i64 = 10;
const AWAY: i64 = 20;

fn entry(player_id: i64, team_id: i64) -> LineupEntryInput {
    LineupEntryInput {
        player_id,
        team_id,
        starter: true,
    }
}

fn stat(player_id: i64, goals: i32) -> StatisticInput {
    StatisticInput {
        player_id,
        goals,
        assists: 0,
        yellow_cards: 0,
        red_cards: 0,
    }
}

fn memberships(entries: &[LineupEntryInput]) -> HashMap<i64, i64> {
    entries.iter().map(|e| (e.player_id, e.team_id)).collect()
}

#[test]
fn accepts_a_consistent_result() {
    let lineup = vec![entry(1, HOME), entry(2, HOME), entry(3, AWAY)];
    let stats = vec![stat(1, 1), stat(2, 1), stat(3, 1)];
    let teams = memberships(&lineup);

    validate_result(HOME, AWAY, 2, 1, &lineup, &stats, &teams).unwrap();
}

#[test]
fn rejects_duplicate_lineup_player() {
    let lineup = vec![entry(1, HOME), entry(1, HOME)];
    let teams = memberships(&lineup);

    let err = validate_result(HOME, AWAY, 0, 0, &lineup, &[], &teams).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::DuplicateLineupPlayer, _)
    ));
}

#[test]
fn rejects_player_listed_for_the_wrong_team() {
    let lineup = vec![entry(1, HOME)];
    let mut teams = HashMap::new();
    teams.insert(1, AWAY);

    let err = validate_result(HOME, AWAY, 0, 0, &lineup, &[], &teams).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PlayerTeamMismatch, _)
    ));
}

#[test]
fn unknown_player_is_not_found_rather_than_invalid() {
    let lineup = vec![entry(99, HOME)];
    let teams = HashMap::new();

    let err = validate_result(HOME, AWAY, 0, 0, &lineup, &[], &teams).unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::Player, _)
    ));
}

#[test]
fn rejects_three_yellow_cards() {
    let lineup = vec![entry(1, HOME)];
    let teams = memberships(&lineup);
    let stats = vec![StatisticInput {
        player_id: 1,
        goals: 0,
        assists: 0,
        yellow_cards: 3,
        red_cards: 0,
    }];

    let err = validate_result(HOME, AWAY, 0, 0, &lineup, &stats, &teams).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardCountOutOfRange, _)
    ));
}

#[test]
fn rejects_two_red_cards() {
    let lineup = vec![entry(1, HOME)];
    let teams = memberships(&lineup);
    let stats = vec![StatisticInput {
        player_id: 1,
        goals: 0,
        assists: 0,
        yellow_cards: 0,
        red_cards: 2,
    }];

    let err = validate_result(HOME, AWAY, 0, 0, &lineup, &stats, &teams).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardCountOutOfRange, _)
    ));
}

#[test]
fn rejects_goal_sum_that_disagrees_with_the_score() {
    // Home players scored 2 between them, but the declared score says 3.
    let lineup = vec![entry(1, HOME), entry(2, HOME), entry(3, AWAY)];
    let stats = vec![stat(1, 1), stat(2, 1)];
    let teams = memberships(&lineup);

    let err = validate_result(HOME, AWAY, 3, 0, &lineup, &stats, &teams).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::GoalSumMismatch, msg) => {
            assert!(msg.contains('2') && msg.contains('3'), "{msg}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn away_goal_sum_is_checked_too() {
    let lineup = vec![entry(1, HOME), entry(2, AWAY)];
    let stats = vec![stat(2, 1)];
    let teams = memberships(&lineup);

    let err = validate_result(HOME, AWAY, 0, 2, &lineup, &stats, &teams).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::GoalSumMismatch, _)
    ));
}
