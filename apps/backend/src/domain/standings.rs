//! Points rule and ranking order for standings.

/// Result of a match from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Win = 3, draw = 1, loss = 0.
    pub fn points(self) -> i32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

/// Increment set applied to one team's standing row for one finalized match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingDelta {
    pub points: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_diff: i32,
}

impl StandingDelta {
    fn for_team(outcome: Outcome, scored: i32, conceded: i32) -> Self {
        Self {
            points: outcome.points(),
            wins: (outcome == Outcome::Win) as i32,
            draws: (outcome == Outcome::Draw) as i32,
            losses: (outcome == Outcome::Loss) as i32,
            goals_for: scored,
            goals_against: conceded,
            goal_diff: scored - conceded,
        }
    }
}

/// Deltas for (home, away) given a final score.
pub fn match_deltas(home_score: i32, away_score: i32) -> (StandingDelta, StandingDelta) {
    use std::cmp::Ordering;

    let (home_outcome, away_outcome) = match home_score.cmp(&away_score) {
        Ordering::Greater => (Outcome::Win, Outcome::Loss),
        Ordering::Less => (Outcome::Loss, Outcome::Win),
        Ordering::Equal => (Outcome::Draw, Outcome::Draw),
    };

    (
        StandingDelta::for_team(home_outcome, home_score, away_score),
        StandingDelta::for_team(away_outcome, away_score, home_score),
    )
}

/// Anything sortable by the standings ranking order.
pub trait Ranked {
    /// (points, wins, goal difference, goals for), compared descending.
    fn rank_key(&self) -> (i32, i32, i32, i32);
}

/// Sort by points, wins, goal difference, goals for, all descending.
///
/// The sort is stable: rows equal on all four keys keep their incoming
/// order (no further tiebreak is defined).
pub fn sort_ranked<T: Ranked>(rows: &mut [T]) {
    rows.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
}
