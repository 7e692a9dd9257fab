//! Schedule generation for round-robin and knockout championships.

use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::round_robin::double_round_robin;
use crate::domain::shuffle::rng_for_seed;
use crate::entities::championships::ChampionshipFormat;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::championships::{self, Championship};
use crate::repos::matches::{self, Match, MatchCreate};
use crate::repos::{registrations, standings};
use crate::services::bracket::{self, Bracket};
use crate::services::{ensure_organizer, Actor};

/// What generation produced, plus the seed that produced it. Re-running
/// with the same seed over the same registrations yields the same
/// schedule.
#[derive(Debug)]
pub enum ScheduleOutcome {
    RoundRobin { matches: Vec<Match>, seed: u64 },
    Knockout { bracket: Bracket, seed: u64 },
}

/// Generate the full schedule for a championship and flip its `started`
/// latch. All-or-nothing: a failed generation leaves no matches behind.
pub async fn generate_schedule(
    db: &DatabaseConnection,
    actor: &Actor,
    championship_id: i64,
    seed: Option<u64>,
) -> Result<ScheduleOutcome, DomainError> {
    let outcome = with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        ensure_organizer(&championship, actor)?;
        if championship.started {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                format!("championship {championship_id} already has a schedule"),
            ));
        }

        if matches::count_by_championship(txn, championship_id).await? > 0 {
            return Err(DomainError::conflict(
                ConflictKind::ScheduleExists,
                format!("championship {championship_id} already has matches"),
            ));
        }

        let team_ids = registrations::approved_team_ids(txn, championship_id).await?;
        check_team_bounds(&championship, team_ids.len())?;

        let (mut rng, seed) = rng_for_seed(seed);
        let mut shuffled = team_ids;
        shuffled.shuffle(&mut rng);

        let outcome = match championship.format {
            ChampionshipFormat::RoundRobin => {
                let matches = insert_round_robin(txn, championship_id, &shuffled).await?;
                for &team_id in &shuffled {
                    standings::insert_zero_row(txn, championship_id, team_id).await?;
                }
                ScheduleOutcome::RoundRobin { matches, seed }
            }
            ChampionshipFormat::Knockout => {
                let bracket = bracket::build_knockout(txn, championship_id, &shuffled).await?;
                ScheduleOutcome::Knockout { bracket, seed }
            }
            ChampionshipFormat::Mixed => {
                return Err(DomainError::validation(
                    ValidationKind::FormatMismatch,
                    "mixed championships start with create_groups, not generate_schedule",
                ));
            }
        };

        // Latch was checked above inside this same transaction; a second
        // writer that slipped past the check loses here.
        if !championships::mark_started(txn, championship_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                format!("championship {championship_id} already has a schedule"),
            ));
        }

        Ok(outcome)
    })
    .await?;

    match &outcome {
        ScheduleOutcome::RoundRobin { matches, seed } => info!(
            championship_id,
            seed,
            match_count = matches.len(),
            "round-robin schedule generated"
        ),
        ScheduleOutcome::Knockout { bracket, seed } => info!(
            championship_id,
            seed,
            phase_count = bracket.phases.len(),
            "knockout bracket generated"
        ),
    }
    Ok(outcome)
}

pub(crate) fn check_team_bounds(
    championship: &Championship,
    team_count: usize,
) -> Result<(), DomainError> {
    let min = championship.min_teams.max(2) as usize;
    if team_count < min {
        return Err(DomainError::validation(
            ValidationKind::TooFewTeams,
            format!("{team_count} approved teams, need at least {min}"),
        ));
    }
    if team_count > championship.max_teams as usize {
        return Err(DomainError::validation(
            ValidationKind::TooManyTeams,
            format!(
                "{team_count} approved teams exceed the maximum of {}",
                championship.max_teams
            ),
        ));
    }
    Ok(())
}

/// Insert the double round robin over an already shuffled team list.
async fn insert_round_robin(
    txn: &DatabaseTransaction,
    championship_id: i64,
    shuffled: &[i64],
) -> Result<Vec<Match>, DomainError> {
    let pairings = double_round_robin(shuffled.len());
    let mut inserted = Vec::with_capacity(pairings.len());
    for pairing in pairings {
        let dto = MatchCreate::new(championship_id, pairing.round as i32)
            .with_teams(shuffled[pairing.home], shuffled[pairing.away]);
        inserted.push(matches::create_match(txn, dto).await?);
    }
    Ok(inserted)
}
