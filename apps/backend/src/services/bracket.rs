//! Knockout bracket construction and winner advancement.

use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::bracket::{is_power_of_two, matches_in_phase, next_slot, phase_names, winner};
use crate::domain::shuffle::rng_for_seed;
use crate::entities::championships::ChampionshipFormat;
use crate::entities::matches::MatchStatus;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, ValidationKind};
use crate::repos::matches::{self, Match, MatchCreate};
use crate::repos::phases::{self, Phase};
use crate::repos::{championships, registrations};
use crate::services::schedule::check_team_bounds;
use crate::services::{ensure_organizer, Actor};

/// One knockout phase with its matches in bracket index order.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketPhase {
    pub phase: Phase,
    pub matches: Vec<Match>,
}

/// The whole bracket, earliest phase first.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    pub phases: Vec<BracketPhase>,
}

/// A freshly created bracket together with the seed that shuffled its
/// first-round pairings.
#[derive(Debug)]
pub struct CreatedBracket {
    pub bracket: Bracket,
    pub seed: u64,
}

/// Create every phase and match of a bracket seeded with the given
/// first-round pairs. Later phases are placeholders: both team slots NULL
/// until [`advance_winner`] fills them.
pub(crate) async fn create_bracket_from_pairs(
    txn: &DatabaseTransaction,
    championship_id: i64,
    pairs: &[(i64, i64)],
) -> Result<Bracket, DomainError> {
    if phases::find_by_championship(txn, championship_id)
        .await?
        .first()
        .is_some()
    {
        return Err(DomainError::conflict(
            ConflictKind::PhasesExist,
            format!("championship {championship_id} already has knockout phases"),
        ));
    }

    let num_teams = pairs.len() * 2;
    let names = phase_names(num_teams);

    let mut bracket_phases = Vec::with_capacity(names.len());
    for (phase_idx, name) in names.iter().enumerate() {
        let ordinal = phase_idx as i32 + 1;
        let phase = phases::create_phase(txn, championship_id, name, ordinal).await?;

        let match_count = matches_in_phase(num_teams, phase_idx);
        let mut phase_matches = Vec::with_capacity(match_count);
        for slot in 0..match_count {
            let mut dto =
                MatchCreate::new(championship_id, ordinal).with_phase(phase.id);
            if phase_idx == 0 {
                let (home, away) = pairs[slot];
                dto = dto.with_teams(home, away);
            }
            phase_matches.push(matches::create_match(txn, dto).await?);
        }
        bracket_phases.push(BracketPhase {
            phase,
            matches: phase_matches,
        });
    }

    Ok(Bracket {
        phases: bracket_phases,
    })
}

/// Pair an already shuffled team list off in order and create the bracket.
pub(crate) async fn build_knockout(
    txn: &DatabaseTransaction,
    championship_id: i64,
    shuffled: &[i64],
) -> Result<Bracket, DomainError> {
    if !is_power_of_two(shuffled.len()) {
        return Err(DomainError::validation(
            ValidationKind::NotPowerOfTwo,
            format!(
                "knockout needs a power-of-two team count, got {}",
                shuffled.len()
            ),
        ));
    }
    let pairs: Vec<(i64, i64)> = shuffled.chunks(2).map(|pair| (pair[0], pair[1])).collect();
    create_bracket_from_pairs(txn, championship_id, &pairs).await
}

/// Create the bracket of a KNOCKOUT championship from a seeded shuffle of
/// its approved registrations, and flip the `started` latch.
pub async fn create_bracket(
    db: &DatabaseConnection,
    actor: &Actor,
    championship_id: i64,
    seed: Option<u64>,
) -> Result<CreatedBracket, DomainError> {
    let created = with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        ensure_organizer(&championship, actor)?;
        if championship.format != ChampionshipFormat::Knockout {
            return Err(DomainError::validation(
                ValidationKind::FormatMismatch,
                format!("championship {championship_id} is not in knockout format"),
            ));
        }
        if championship.started {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                format!("championship {championship_id} already has a bracket"),
            ));
        }

        let team_ids = registrations::approved_team_ids(txn, championship_id).await?;
        check_team_bounds(&championship, team_ids.len())?;

        let (mut rng, seed) = rng_for_seed(seed);
        let mut shuffled = team_ids;
        shuffled.shuffle(&mut rng);

        let bracket = build_knockout(txn, championship_id, &shuffled).await?;
        if !championships::mark_started(txn, championship_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                format!("championship {championship_id} already has a bracket"),
            ));
        }
        Ok(CreatedBracket { bracket, seed })
    })
    .await?;

    info!(
        championship_id,
        seed = created.seed,
        phase_count = created.bracket.phases.len(),
        "knockout bracket created"
    );
    Ok(created)
}

/// The full bracket of a championship, or an empty phase list when no
/// knockout stage exists yet.
pub async fn get_bracket(
    db: &DatabaseConnection,
    championship_id: i64,
) -> Result<Bracket, DomainError> {
    championships::require_championship(db, championship_id).await?;
    let phase_list = phases::find_by_championship(db, championship_id).await?;

    let mut bracket_phases = Vec::with_capacity(phase_list.len());
    for phase in phase_list {
        let phase_matches = matches::find_by_phase(db, phase.id).await?;
        bracket_phases.push(BracketPhase {
            phase,
            matches: phase_matches,
        });
    }
    Ok(Bracket {
        phases: bracket_phases,
    })
}

/// Propagate a finalized knockout match's winner into the next phase.
///
/// Match index `i` within its phase feeds match `i / 2` of the following
/// phase; even indexes fill the home slot, odd the away slot. Returns the
/// updated next-phase match, or `None` when the finalized match was the
/// Final. Re-running for the same match is a no-op.
pub async fn advance_winner(
    db: &DatabaseConnection,
    actor: &Actor,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    with_txn(db, async move |txn| {
        let m = matches::require_match(txn, match_id).await?;
        let championship = championships::require_championship(txn, m.championship_id).await?;
        ensure_organizer(&championship, actor)?;

        let phase_id = m.phase_id.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::FormatMismatch,
                format!("match {match_id} is not part of a knockout phase"),
            )
        })?;
        if m.status != MatchStatus::Finished {
            return Err(DomainError::validation(
                ValidationKind::MatchNotFinished,
                format!("match {match_id} has no final result yet"),
            ));
        }

        let (home_team, away_team, home_score, away_score) =
            match (m.home_team_id, m.away_team_id, m.home_score, m.away_score) {
                (Some(h), Some(a), Some(hs), Some(as_)) => (h, a, hs, as_),
                _ => {
                    return Err(DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("finalized match {match_id} is missing teams or scores"),
                    ))
                }
            };
        let winner_id = winner(home_team, away_team, home_score, away_score).ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("finalized knockout match {match_id} is drawn"),
            )
        })?;

        let phase = phases::require_phase(txn, phase_id).await?;
        let next_phase =
            match phases::find_by_ordinal(txn, m.championship_id, phase.ordinal + 1).await? {
                Some(p) => p,
                // The Final has no successor; nothing to fill.
                None => return Ok(None),
            };

        let phase_matches = matches::find_by_phase(txn, phase_id).await?;
        let match_index = phase_matches
            .iter()
            .position(|pm| pm.id == match_id)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("match {match_id} not found in its own phase"),
                )
            })?;
        let (next_index, slot) = next_slot(match_index);

        let next_matches = matches::find_by_phase(txn, next_phase.id).await?;
        let target = next_matches.get(next_index).ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "phase {} has no match at bracket index {next_index}",
                    next_phase.id
                ),
            )
        })?;

        let occupant = match slot {
            crate::domain::BracketSlot::Home => target.home_team_id,
            crate::domain::BracketSlot::Away => target.away_team_id,
        };
        match occupant {
            Some(existing) if existing == winner_id => return Ok(Some(target.clone())),
            Some(existing) => {
                return Err(DomainError::conflict(
                    ConflictKind::Other("SLOT_FILLED".into()),
                    format!(
                        "bracket slot already holds team {existing}, cannot place team {winner_id}"
                    ),
                ))
            }
            None => {}
        }

        let updated = matches::set_team_slot(txn, target.id, slot, winner_id).await?;
        info!(
            match_id,
            winner = winner_id,
            next_match = updated.id,
            "winner advanced to next phase"
        );
        Ok(Some(updated))
    })
    .await
}
