//! Result registration: validate, commit, update standings.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::adapters::{lineup_entries_sea, match_statistics_sea};
use crate::db::txn::with_txn;
use crate::domain::results::{validate_result, LineupEntryInput, StatisticInput};
use crate::domain::standings::match_deltas;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::matches::{self, Match};
use crate::repos::{championships, players, standings};
use crate::services::{ensure_organizer, Actor};

/// A complete result submission for one match.
#[derive(Debug, Clone)]
pub struct ResultInput {
    pub home_score: i32,
    pub away_score: i32,
    pub lineup: Vec<LineupEntryInput>,
    pub statistics: Vec<StatisticInput>,
}

/// Register the final result of a match.
///
/// Runs every validation before any write, then commits score, lineup,
/// statistics and standings increments in one transaction. A rejected
/// submission leaves the match and standings untouched.
pub async fn register_result(
    db: &DatabaseConnection,
    actor: &Actor,
    match_id: i64,
    input: ResultInput,
) -> Result<Match, DomainError> {
    let input = &input;
    let updated = with_txn(db, async move |txn| {
        let m = matches::require_match(txn, match_id).await?;
        let championship = championships::require_championship(txn, m.championship_id).await?;
        ensure_organizer(&championship, actor)?;

        if !m.status.is_open() {
            return Err(DomainError::validation(
                ValidationKind::MatchNotOpen,
                format!("match {match_id} is {:?} and no longer accepts a result", m.status),
            ));
        }
        let (home_team, away_team) = match (m.home_team_id, m.away_team_id) {
            (Some(h), Some(a)) => (h, a),
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::MatchNotOpen,
                    format!("match {match_id} still has undecided team slots"),
                ))
            }
        };

        if input.home_score < 0 || input.away_score < 0 {
            return Err(DomainError::validation(
                ValidationKind::Other("NEGATIVE_SCORE".into()),
                "scores must be non-negative",
            ));
        }
        if m.phase_id.is_some() && input.home_score == input.away_score {
            return Err(DomainError::validation(
                ValidationKind::DrawInKnockout,
                "knockout matches cannot end level",
            ));
        }
        for entry in &input.lineup {
            if entry.team_id != home_team && entry.team_id != away_team {
                return Err(DomainError::validation(
                    ValidationKind::PlayerTeamMismatch,
                    format!(
                        "lineup entry for player {} names team {}, which is not playing",
                        entry.player_id, entry.team_id
                    ),
                ));
            }
        }

        let player_ids: Vec<i64> = input.lineup.iter().map(|e| e.player_id).collect();
        let memberships = players::membership_map(txn, &player_ids).await?;
        validate_result(
            home_team,
            away_team,
            input.home_score,
            input.away_score,
            &input.lineup,
            &input.statistics,
            &memberships,
        )?;

        // Conditional update: a concurrent finalize or cancel wins the race
        // and this submission is rejected.
        if !matches::finalize_result(txn, match_id, input.home_score, input.away_score).await? {
            return Err(DomainError::validation(
                ValidationKind::MatchNotOpen,
                format!("match {match_id} was closed concurrently"),
            ));
        }

        lineup_entries_sea::insert_lineup(txn, match_id, &input.lineup).await?;
        match_statistics_sea::insert_statistics(txn, match_id, &input.statistics).await?;

        // Knockout results never touch the standings table; league and
        // group matches increment both rows in place.
        if m.phase_id.is_none() {
            let (home_delta, away_delta) = match_deltas(input.home_score, input.away_score);
            standings::apply_delta(txn, m.championship_id, home_team, home_delta).await?;
            standings::apply_delta(txn, m.championship_id, away_team, away_delta).await?;
        }

        matches::require_match(txn, match_id).await
    })
    .await?;

    info!(
        match_id,
        home_score = input.home_score,
        away_score = input.away_score,
        "result registered"
    );
    Ok(updated)
}
