//! Group stage of mixed championships: partitioning, intra-group play and
//! the cut over to the knockout phase.

use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::grouping::{chunk_teams, crossed_pairings, group_names, single_round_robin_pairs};
use crate::domain::is_power_of_two;
use crate::domain::shuffle::rng_for_seed;
use crate::entities::championships::ChampionshipFormat;
use crate::entities::matches::MatchStatus;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::championships::{self, Championship};
use crate::repos::groups::{self, Group};
use crate::repos::matches::{self, Match, MatchCreate};
use crate::repos::{registrations, standings};
use crate::services::bracket::{self, Bracket};
use crate::services::schedule::check_team_bounds;
use crate::services::standings::rank;
use crate::services::{ensure_organizer, Actor};

/// One group with its member team ids in assignment order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupWithTeams {
    pub group: Group,
    pub team_ids: Vec<i64>,
}

/// What group creation produced.
#[derive(Debug)]
pub struct GroupStage {
    pub groups: Vec<GroupWithTeams>,
    pub matches: Vec<Match>,
    pub seed: u64,
}

/// Partition a mixed championship's approved teams into groups and create
/// the intra-group single round robin. Flips the `started` latch.
pub async fn create_groups(
    db: &DatabaseConnection,
    actor: &Actor,
    championship_id: i64,
    group_count: usize,
    seed: Option<u64>,
) -> Result<GroupStage, DomainError> {
    let stage = with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        ensure_organizer(&championship, actor)?;
        require_mixed(&championship)?;
        if championship.started {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                format!("championship {championship_id} already has a schedule"),
            ));
        }
        if !groups::find_by_championship(txn, championship_id).await?.is_empty() {
            return Err(DomainError::conflict(
                ConflictKind::GroupsExist,
                format!("championship {championship_id} already has groups"),
            ));
        }
        if group_count == 0 {
            return Err(DomainError::validation(
                ValidationKind::Other("ZERO_GROUPS".into()),
                "group_count must be at least 1",
            ));
        }

        let team_ids = registrations::approved_team_ids(txn, championship_id).await?;
        check_team_bounds(&championship, team_ids.len())?;
        if team_ids.len() % group_count != 0 {
            return Err(DomainError::validation(
                ValidationKind::NotDivisibleByGroups,
                format!(
                    "{} teams cannot be split into {group_count} equal groups",
                    team_ids.len()
                ),
            ));
        }
        let per_group = team_ids.len() / group_count;
        if per_group < 2 {
            return Err(DomainError::validation(
                ValidationKind::TooFewTeams,
                "each group needs at least 2 teams",
            ));
        }

        let (mut rng, seed) = rng_for_seed(seed);
        let mut shuffled = team_ids;
        shuffled.shuffle(&mut rng);

        let chunks = chunk_teams(&shuffled, group_count);
        let names = group_names(group_count);

        let mut stage_groups = Vec::with_capacity(group_count);
        let mut stage_matches = Vec::new();
        for (chunk, name) in chunks.iter().zip(&names) {
            let group = groups::create_group(txn, championship_id, name).await?;

            for &team_id in chunk {
                let registration =
                    registrations::find_by_championship_and_team(txn, championship_id, team_id)
                        .await?
                        .ok_or_else(|| {
                            DomainError::validation(
                                ValidationKind::TeamNotApproved,
                                format!("team {team_id} lost its registration mid-flight"),
                            )
                        })?;
                registrations::assign_group(txn, registration.id, group.id).await?;
            }

            for (home_idx, away_idx, round) in single_round_robin_pairs(chunk.len()) {
                let dto = MatchCreate::new(championship_id, round as i32)
                    .with_group(group.id)
                    .with_teams(chunk[home_idx], chunk[away_idx]);
                stage_matches.push(matches::create_match(txn, dto).await?);
            }

            stage_groups.push(GroupWithTeams {
                group,
                team_ids: chunk.clone(),
            });
        }

        for &team_id in &shuffled {
            standings::insert_zero_row(txn, championship_id, team_id).await?;
        }

        if !championships::mark_started(txn, championship_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                format!("championship {championship_id} already has a schedule"),
            ));
        }

        Ok(GroupStage {
            groups: stage_groups,
            matches: stage_matches,
            seed,
        })
    })
    .await?;

    info!(
        championship_id,
        seed = stage.seed,
        group_count = stage.groups.len(),
        match_count = stage.matches.len(),
        "group stage created"
    );
    Ok(stage)
}

/// Groups of a championship with their member team ids.
pub async fn get_groups(
    db: &DatabaseConnection,
    championship_id: i64,
) -> Result<Vec<GroupWithTeams>, DomainError> {
    championships::require_championship(db, championship_id).await?;
    let group_list = groups::find_by_championship(db, championship_id).await?;

    let mut out = Vec::with_capacity(group_list.len());
    for group in group_list {
        let team_ids = registrations::find_by_group(db, group.id)
            .await?
            .into_iter()
            .map(|r| r.team_id)
            .collect();
        out.push(GroupWithTeams { group, team_ids });
    }
    Ok(out)
}

/// The ranked table of one group: the championship standings restricted to
/// the group's teams.
pub async fn group_standings(
    db: &DatabaseConnection,
    group_id: i64,
) -> Result<Vec<crate::services::standings::RankedStanding>, DomainError> {
    let group = groups::require_group(db, group_id).await?;
    let team_ids: Vec<i64> = registrations::find_by_group(db, group_id)
        .await?
        .into_iter()
        .map(|r| r.team_id)
        .collect();

    let rows = standings::find_by_championship(db, group.championship_id)
        .await?
        .into_iter()
        .filter(|s| team_ids.contains(&s.team_id))
        .collect();
    Ok(rank(rows))
}

/// Close the group stage and build the knockout bracket from each group's
/// top `qualifiers_per_group` teams, crossing group winners against
/// runners-up of the neighbouring group.
pub async fn create_knockout_phase(
    db: &DatabaseConnection,
    actor: &Actor,
    championship_id: i64,
    qualifiers_per_group: usize,
) -> Result<Bracket, DomainError> {
    let bracket = with_txn(db, async move |txn| {
        let championship = championships::require_championship(txn, championship_id).await?;
        ensure_organizer(&championship, actor)?;
        require_mixed(&championship)?;

        let group_list = groups::find_by_championship(txn, championship_id).await?;
        if group_list.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::FormatMismatch,
                format!("championship {championship_id} has no group stage"),
            ));
        }

        let total = group_list.len() * qualifiers_per_group;
        if qualifiers_per_group == 0 || !is_power_of_two(total) || total < 2 {
            return Err(DomainError::validation(
                ValidationKind::NotPowerOfTwo,
                format!(
                    "{} groups x {qualifiers_per_group} qualifiers = {total}, need a power of two",
                    group_list.len()
                ),
            ));
        }

        let mut qualifiers = Vec::with_capacity(group_list.len());
        for group in &group_list {
            ensure_group_finished(txn, group).await?;
            let ranked = ranked_group_table(txn, championship_id, group.id).await?;
            if ranked.len() < qualifiers_per_group {
                return Err(DomainError::validation(
                    ValidationKind::TooFewTeams,
                    format!(
                        "group {} has only {} teams, cannot take {qualifiers_per_group}",
                        group.name,
                        ranked.len()
                    ),
                ));
            }
            qualifiers.push(ranked[..qualifiers_per_group].to_vec());
        }

        let pairs = crossed_pairings(&qualifiers);
        bracket::create_bracket_from_pairs(txn, championship_id, &pairs).await
    })
    .await?;

    info!(
        championship_id,
        phase_count = bracket.phases.len(),
        "knockout phase created from group results"
    );
    Ok(bracket)
}

fn require_mixed(championship: &Championship) -> Result<(), DomainError> {
    if championship.format != ChampionshipFormat::Mixed {
        return Err(DomainError::validation(
            ValidationKind::FormatMismatch,
            format!(
                "operation requires a MIXED championship, this one is {:?}",
                championship.format
            ),
        ));
    }
    Ok(())
}

/// Every group match must be terminal before qualifiers can be read off.
async fn ensure_group_finished(
    txn: &DatabaseTransaction,
    group: &Group,
) -> Result<(), DomainError> {
    let group_matches = matches::find_by_group(txn, group.id).await?;
    let open = group_matches
        .iter()
        .filter(|m| m.status != MatchStatus::Finished && m.status != MatchStatus::Cancelled)
        .count();
    if open > 0 {
        return Err(DomainError::validation(
            ValidationKind::GroupStageUnfinished,
            format!("group {} still has {open} unfinished matches", group.name),
        ));
    }
    Ok(())
}

/// Team ids of one group in ranking order.
async fn ranked_group_table(
    txn: &DatabaseTransaction,
    championship_id: i64,
    group_id: i64,
) -> Result<Vec<i64>, DomainError> {
    let team_ids: Vec<i64> = registrations::find_by_group(txn, group_id)
        .await?
        .into_iter()
        .map(|r| r.team_id)
        .collect();
    let rows: Vec<_> = standings::find_by_championship(txn, championship_id)
        .await?
        .into_iter()
        .filter(|s| team_ids.contains(&s.team_id))
        .collect();
    Ok(rank(rows).into_iter().map(|r| r.standing.team_id).collect())
}
