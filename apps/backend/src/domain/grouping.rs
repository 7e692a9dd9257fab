//! Group-stage partitioning and qualifier pairing.

/// Group names "Group A".."Group Z" in creation order.
pub fn group_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Group {}", (b'A' + i as u8) as char))
        .collect()
}

/// Slice an already shuffled team list into `group_count` contiguous,
/// equally sized chunks. The caller has validated divisibility.
pub fn chunk_teams(shuffled: &[i64], group_count: usize) -> Vec<Vec<i64>> {
    let per_group = shuffled.len() / group_count;
    shuffled
        .chunks(per_group)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// All intra-group pairings for a single round robin: `(home, away, round)`
/// index pairs over a group of `n` teams, `n * (n - 1) / 2` in total.
pub fn single_round_robin_pairs(n: usize) -> Vec<(usize, usize, u32)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    let mut idx = 0u32;
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j, idx / 2 + 1));
            idx += 1;
        }
    }
    pairs
}

/// Crossed first-round pairings for the knockout tail of a mixed
/// tournament.
///
/// `qualifiers[g]` holds group g's qualifiers in ranking order. Rank r of
/// group g is paired against rank r+1 of group (g+1) mod G, cyclically
/// across groups, so group winners avoid each other in round one. With a
/// single qualifier per group, adjacent groups are paired directly.
pub fn crossed_pairings(qualifiers: &[Vec<i64>]) -> Vec<(i64, i64)> {
    let group_count = qualifiers.len();
    if group_count == 0 {
        return Vec::new();
    }
    let per_group = qualifiers[0].len();

    let mut pairs = Vec::new();
    if per_group == 1 {
        for g in (0..group_count).step_by(2) {
            let next = (g + 1) % group_count;
            pairs.push((qualifiers[g][0], qualifiers[next][0]));
        }
        return pairs;
    }

    for g in 0..group_count {
        let next = (g + 1) % group_count;
        for r in (0..per_group - 1).step_by(2) {
            pairs.push((qualifiers[g][r], qualifiers[next][r + 1]));
        }
    }
    pairs
}
