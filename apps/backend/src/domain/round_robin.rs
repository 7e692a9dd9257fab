//! Round-robin schedule generation via the circle method.
//!
//! One slot is fixed while the remaining slots rotate each round. An odd
//! team count gets a phantom "bye" slot to make the rotation even; pairings
//! touching the bye produce no match.

/// A single pairing: indexes into the caller's (already shuffled) team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    /// 1-based round number.
    pub round: u32,
    pub home: usize,
    pub away: usize,
}

/// Generate a double round robin (home leg plus reversed away leg).
///
/// For `n` teams (n even) this yields `n * (n - 1)` pairings across
/// `2 * (n - 1)` rounds; the second leg repeats the first with home/away
/// swapped and round numbers offset by `n - 1`. Odd `n` plays the same
/// schedule minus the bye pairings.
pub fn double_round_robin(team_count: usize) -> Vec<Pairing> {
    let first = single_leg(team_count);
    let rounds = rounds_per_leg(team_count);

    let mut all = Vec::with_capacity(first.len() * 2);
    all.extend(first.iter().copied());
    all.extend(first.iter().map(|p| Pairing {
        round: p.round + rounds,
        home: p.away,
        away: p.home,
    }));
    all
}

/// Generate one leg of a circle-method round robin.
pub fn single_leg(team_count: usize) -> Vec<Pairing> {
    if team_count < 2 {
        return Vec::new();
    }

    // Phantom bye slot for odd counts; its pairings are skipped below.
    let total = if team_count % 2 == 0 {
        team_count
    } else {
        team_count + 1
    };
    let rounds = total - 1;
    let per_round = total / 2;
    let bye = if total == team_count { None } else { Some(team_count) };

    let mut pairings = Vec::with_capacity(rounds * per_round);
    for round in 0..rounds {
        for m in 0..per_round {
            // Slot 0 stays fixed; everything else rotates around it.
            let home = if m == 0 { 0 } else { (round + m) % rounds + 1 };
            let away = (rounds + round - m) % rounds + 1;

            if Some(home) == bye || Some(away) == bye {
                continue;
            }
            pairings.push(Pairing {
                round: round as u32 + 1,
                home,
                away,
            });
        }
    }
    pairings
}

/// Number of rounds in one leg (after bye adjustment).
pub fn rounds_per_leg(team_count: usize) -> u32 {
    if team_count % 2 == 0 {
        (team_count - 1) as u32
    } else {
        team_count as u32
    }
}
