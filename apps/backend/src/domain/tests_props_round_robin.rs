use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::round_robin::double_round_robin;

proptest! {
    /// Every ordered pair (a, b) appears exactly once in a double round
    /// robin, for any team count.
    #[test]
    fn ordered_pairs_exactly_once(n in 2usize..=16) {
        let pairings = double_round_robin(n);
        prop_assert_eq!(pairings.len(), n * (n - 1));

        let mut seen = HashSet::new();
        for p in &pairings {
            prop_assert!(p.home < n && p.away < n, "index out of range: {:?}", p);
            prop_assert!(seen.insert((p.home, p.away)));
        }
    }

    /// No pairing schedules a team against itself and round numbers stay
    /// within the double-round bound.
    #[test]
    fn rounds_and_opponents_are_sane(n in 2usize..=16) {
        let upper = if n % 2 == 0 { 2 * (n - 1) } else { 2 * n } as u32;
        for p in double_round_robin(n) {
            prop_assert_ne!(p.home, p.away);
            prop_assert!(p.round >= 1 && p.round <= upper);
        }
    }
}
