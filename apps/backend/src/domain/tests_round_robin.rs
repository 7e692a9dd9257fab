use std::collections::HashSet;

use crate::domain::round_robin::{double_round_robin, rounds_per_leg, single_leg, Pairing};

#[test]
fn four_teams_double_round_has_every_ordered_pair_once() {
    let pairings = double_round_robin(4);
    assert_eq!(pairings.len(), 4 * 3);

    let mut seen = HashSet::new();
    for p in &pairings {
        assert_ne!(p.home, p.away);
        assert!(seen.insert((p.home, p.away)), "duplicate pairing {p:?}");
    }
    // Every ordered pair (a, b), a != b, exactly once
    for a in 0..4 {
        for b in 0..4 {
            if a != b {
                assert!(seen.contains(&(a, b)), "missing pairing {a} vs {b}");
            }
        }
    }
}

#[test]
fn second_leg_mirrors_first_with_round_offset() {
    let pairings = double_round_robin(6);
    let rounds = rounds_per_leg(6);
    let (first, second): (Vec<&Pairing>, Vec<&Pairing>) =
        pairings.iter().partition(|p| p.round <= rounds);
    assert_eq!(first.len(), second.len());

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(b.round, a.round + rounds);
        assert_eq!(b.home, a.away);
        assert_eq!(b.away, a.home);
    }
}

#[test]
fn each_team_plays_once_per_round() {
    for n in [4usize, 6, 8, 10] {
        let leg = single_leg(n);
        for round in 1..=(n as u32 - 1) {
            let mut busy = HashSet::new();
            for p in leg.iter().filter(|p| p.round == round) {
                assert!(busy.insert(p.home), "n={n} round={round}: double-booked");
                assert!(busy.insert(p.away), "n={n} round={round}: double-booked");
            }
            assert_eq!(busy.len(), n, "n={n} round={round}");
        }
    }
}

#[test]
fn odd_team_count_gets_a_bye_per_round() {
    // 5 teams -> 6 slots, 5 rounds, 2 real pairings per round (one bye)
    let leg = single_leg(5);
    assert_eq!(leg.len(), 5 * 4 / 2);
    for round in 1..=5u32 {
        assert_eq!(leg.iter().filter(|p| p.round == round).count(), 2);
    }
    // Double round: 5 * 4 = 20 matches, every ordered pair once
    let pairings = double_round_robin(5);
    assert_eq!(pairings.len(), 20);
}

#[test]
fn degenerate_counts_produce_no_pairings() {
    assert!(single_leg(0).is_empty());
    assert!(single_leg(1).is_empty());
    assert_eq!(single_leg(2).len(), 1);
}
