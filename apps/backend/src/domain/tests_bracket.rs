use crate::domain::bracket::{
    is_power_of_two, matches_in_phase, next_slot, phase_names, winner, BracketSlot,
};

#[test]
fn power_of_two_detection() {
    for n in [1usize, 2, 4, 8, 16, 32] {
        assert!(is_power_of_two(n), "{n}");
    }
    for n in [0usize, 3, 6, 12, 20] {
        assert!(!is_power_of_two(n), "{n}");
    }
}

#[test]
fn phase_names_for_eight_teams() {
    assert_eq!(
        phase_names(8),
        vec!["Quarter-final", "Semi-final", "Final"]
    );
}

#[test]
fn phase_names_for_large_brackets_use_round_of_k() {
    let names = phase_names(32);
    assert_eq!(names.len(), 5);
    assert_eq!(names[0], "Round of 32");
    assert_eq!(names[1], "Round of 16");
    assert_eq!(names.last().unwrap(), "Final");
}

#[test]
fn phase_sizes_halve_each_round() {
    // 8-team bracket: 4, 2, 1 matches
    assert_eq!(matches_in_phase(8, 0), 4);
    assert_eq!(matches_in_phase(8, 1), 2);
    assert_eq!(matches_in_phase(8, 2), 1);
}

#[test]
fn even_index_winner_fills_home_slot() {
    assert_eq!(next_slot(0), (0, BracketSlot::Home));
    assert_eq!(next_slot(1), (0, BracketSlot::Away));
    assert_eq!(next_slot(2), (1, BracketSlot::Home));
    assert_eq!(next_slot(5), (2, BracketSlot::Away));
}

#[test]
fn winner_requires_strict_goal_majority() {
    assert_eq!(winner(10, 20, 2, 1), Some(10));
    assert_eq!(winner(10, 20, 0, 3), Some(20));
    assert_eq!(winner(10, 20, 1, 1), None);
}
