//! Result submission validation.
//!
//! Pure checks over a proposed final score, lineup and per-player
//! statistics. The ordering matters: every check runs before any write, so
//! a rejection leaves no partial effect.

use std::collections::{HashMap, HashSet};

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// One lineup entry: who played for whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupEntryInput {
    pub player_id: i64,
    pub team_id: i64,
    pub starter: bool,
}

/// Per-player statistics for the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticInput {
    pub player_id: i64,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

/// Validate a proposed result against the lineup/goal/card invariants.
///
/// `player_teams` maps each lineup player to its actual team membership.
/// Checks, in order:
/// 1. no player appears twice in the lineup;
/// 2. each entry's declared team matches the player's membership;
/// 3. yellow cards in [0,2], red cards in [0,1];
/// 4. per-team goal sums equal the declared score exactly (hard equality).
pub fn validate_result(
    home_team_id: i64,
    away_team_id: i64,
    home_score: i32,
    away_score: i32,
    lineup: &[LineupEntryInput],
    statistics: &[StatisticInput],
    player_teams: &HashMap<i64, i64>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(lineup.len());
    for entry in lineup {
        if !seen.insert(entry.player_id) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateLineupPlayer,
                format!("player {} appears twice in the lineup", entry.player_id),
            ));
        }
    }

    for entry in lineup {
        let actual_team = player_teams.get(&entry.player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("player {} does not exist", entry.player_id),
            )
        })?;
        if *actual_team != entry.team_id {
            return Err(DomainError::validation(
                ValidationKind::PlayerTeamMismatch,
                format!(
                    "player {} belongs to team {}, not team {}",
                    entry.player_id, actual_team, entry.team_id
                ),
            ));
        }
    }

    for stat in statistics {
        if !(0..=2).contains(&stat.yellow_cards) {
            return Err(DomainError::validation(
                ValidationKind::CardCountOutOfRange,
                format!(
                    "player {}: yellow cards must be between 0 and 2, got {}",
                    stat.player_id, stat.yellow_cards
                ),
            ));
        }
        if !(0..=1).contains(&stat.red_cards) {
            return Err(DomainError::validation(
                ValidationKind::CardCountOutOfRange,
                format!(
                    "player {}: red cards must be 0 or 1, got {}",
                    stat.player_id, stat.red_cards
                ),
            ));
        }
    }

    let side_of: HashMap<i64, i64> = lineup
        .iter()
        .map(|e| (e.player_id, e.team_id))
        .collect();
    let goal_sum = |team_id: i64| -> i32 {
        statistics
            .iter()
            .filter(|s| side_of.get(&s.player_id) == Some(&team_id))
            .map(|s| s.goals)
            .sum()
    };

    let home_sum = goal_sum(home_team_id);
    if home_sum != home_score {
        return Err(DomainError::validation(
            ValidationKind::GoalSumMismatch,
            format!(
                "home player goals sum to {home_sum} but the declared score is {home_score}"
            ),
        ));
    }

    let away_sum = goal_sum(away_team_id);
    if away_sum != away_score {
        return Err(DomainError::validation(
            ValidationKind::GoalSumMismatch,
            format!(
                "away player goals sum to {away_sum} but the declared score is {away_score}"
            ),
        ));
    }

    Ok(())
}
