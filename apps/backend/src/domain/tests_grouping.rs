use std::collections::HashSet;

use crate::domain::grouping::{
    chunk_teams, crossed_pairings, group_names, single_round_robin_pairs,
};

#[test]
fn group_names_run_alphabetically() {
    assert_eq!(group_names(3), vec!["Group A", "Group B", "Group C"]);
}

#[test]
fn chunking_is_contiguous_and_even() {
    let teams: Vec<i64> = (1..=8).collect();
    let groups = chunk_teams(&teams, 2);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], vec![1, 2, 3, 4]);
    assert_eq!(groups[1], vec![5, 6, 7, 8]);
}

#[test]
fn single_round_robin_pair_count() {
    // n teams -> n * (n - 1) / 2 pairings, no self-pairings, no repeats
    for n in [2usize, 3, 4, 5] {
        let pairs = single_round_robin_pairs(n);
        assert_eq!(pairs.len(), n * (n - 1) / 2, "n={n}");
        let mut seen = HashSet::new();
        for (i, j, round) in pairs {
            assert!(i < j);
            assert!(round >= 1);
            assert!(seen.insert((i, j)));
        }
    }
}

#[test]
fn crossed_pairings_avoid_same_group_in_round_one() {
    // Two groups of two qualifiers: A1 vs B2, B1 vs A2
    let qualifiers = vec![vec![11, 12], vec![21, 22]];
    let pairs = crossed_pairings(&qualifiers);
    assert_eq!(pairs, vec![(11, 22), (21, 12)]);
}

#[test]
fn crossed_pairings_use_every_qualifier_once() {
    let qualifiers = vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]];
    let pairs = crossed_pairings(&qualifiers);
    assert_eq!(pairs.len(), 4);

    let mut used = HashSet::new();
    for (a, b) in pairs {
        assert!(used.insert(a));
        assert!(used.insert(b));
    }
    assert_eq!(used.len(), 8);
}

#[test]
fn single_qualifier_per_group_pairs_adjacent_groups() {
    let qualifiers = vec![vec![1], vec![2], vec![3], vec![4]];
    let pairs = crossed_pairings(&qualifiers);
    assert_eq!(pairs, vec![(1, 2), (3, 4)]);
}
