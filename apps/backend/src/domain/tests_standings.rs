use crate::domain::standings::{match_deltas, sort_ranked, Ranked};

#[derive(Debug, PartialEq)]
struct Row {
    name: &'static str,
    points: i32,
    wins: i32,
    goal_diff: i32,
    goals_for: i32,
}

impl Ranked for Row {
    fn rank_key(&self) -> (i32, i32, i32, i32) {
        (self.points, self.wins, self.goal_diff, self.goals_for)
    }
}

#[test]
fn home_win_deltas() {
    let (home, away) = match_deltas(2, 1);

    assert_eq!(home.points, 3);
    assert_eq!(home.wins, 1);
    assert_eq!(home.draws, 0);
    assert_eq!(home.losses, 0);
    assert_eq!(home.goals_for, 2);
    assert_eq!(home.goals_against, 1);
    assert_eq!(home.goal_diff, 1);

    assert_eq!(away.points, 0);
    assert_eq!(away.losses, 1);
    assert_eq!(away.goals_for, 1);
    assert_eq!(away.goals_against, 2);
    assert_eq!(away.goal_diff, -1);
}

#[test]
fn draw_deltas_are_symmetric() {
    let (home, away) = match_deltas(2, 2);
    assert_eq!(home, away);
    assert_eq!(home.points, 1);
    assert_eq!(home.draws, 1);
    assert_eq!(home.goal_diff, 0);
}

#[test]
fn goal_diff_always_matches_for_minus_against() {
    for (h, a) in [(0, 0), (3, 1), (1, 4), (5, 5)] {
        let (home, away) = match_deltas(h, a);
        assert_eq!(home.goal_diff, home.goals_for - home.goals_against);
        assert_eq!(away.goal_diff, away.goals_for - away.goals_against);
    }
}

#[test]
fn ranking_orders_points_then_wins_then_diff_then_scored() {
    let mut rows = vec![
        Row { name: "C", points: 0, wins: 0, goal_diff: -4, goals_for: 0 },
        Row { name: "B", points: 4, wins: 1, goal_diff: 1, goals_for: 2 },
        Row { name: "A", points: 4, wins: 1, goal_diff: 3, goals_for: 5 },
    ];
    sort_ranked(&mut rows);
    let names: Vec<_> = rows.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn full_ties_keep_incoming_order() {
    let mut rows = vec![
        Row { name: "first", points: 3, wins: 1, goal_diff: 0, goals_for: 2 },
        Row { name: "second", points: 3, wins: 1, goal_diff: 0, goals_for: 2 },
    ];
    sort_ranked(&mut rows);
    assert_eq!(rows[0].name, "first");
    assert_eq!(rows[1].name, "second");
}
