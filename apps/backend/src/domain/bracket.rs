//! Knockout bracket structure: phase naming, winner determination and the
//! index mapping that feeds a finalized match's winner into the next phase.

/// Which slot of a next-phase match a winner fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketSlot {
    Home,
    Away,
}

pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Phase names from the earliest round to the Final.
///
/// For 8 teams: `["Quarter-final", "Semi-final", "Final"]`.
pub fn phase_names(num_teams: usize) -> Vec<String> {
    let mut names = Vec::new();
    let mut remaining = num_teams;
    while remaining > 1 {
        let name = match remaining {
            2 => "Final".to_string(),
            4 => "Semi-final".to_string(),
            8 => "Quarter-final".to_string(),
            16 => "Round of 16".to_string(),
            k => format!("Round of {k}"),
        };
        names.push(name);
        remaining /= 2;
    }
    names
}

/// Number of matches in the phase at `phase_idx` (0 = earliest round) of a
/// bracket starting with `num_teams` teams.
pub fn matches_in_phase(num_teams: usize, phase_idx: usize) -> usize {
    num_teams >> (phase_idx + 1)
}

/// Map a finalized match's index within its phase (by creation order) to
/// the next-phase match it feeds and the slot its winner fills.
pub fn next_slot(match_index: usize) -> (usize, BracketSlot) {
    let next_index = match_index / 2;
    let slot = if match_index % 2 == 0 {
        BracketSlot::Home
    } else {
        BracketSlot::Away
    };
    (next_index, slot)
}

/// Winner of a finalized knockout match by strict goal majority.
///
/// Returns `None` on a draw: knockout matches cannot legitimately finish
/// level because result registration rejects drawn scores for phase
/// matches, so a drawn finalized match here means the data was edited
/// out-of-band and the caller must treat it as corruption, not pick a side.
pub fn winner(
    home_team: i64,
    away_team: i64,
    home_score: i32,
    away_score: i32,
) -> Option<i64> {
    match home_score.cmp(&away_score) {
        std::cmp::Ordering::Greater => Some(home_team),
        std::cmp::Ordering::Less => Some(away_team),
        std::cmp::Ordering::Equal => None,
    }
}
