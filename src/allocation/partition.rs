//! Consecutive chunking of an ordered roster

/// Number of heats needed for `roster_size` participants
pub fn expected_heat_count(roster_size: usize, max_in_heat: usize) -> usize {
    if max_in_heat == 0 {
        return 0;
    }
    roster_size.div_ceil(max_in_heat)
}

/// Split `ids` into consecutive groups of at most `max_in_heat`.
///
/// Only the last group may be smaller. `max_in_heat` must be positive.
pub fn partition(ids: &[i64], max_in_heat: usize) -> Vec<Vec<i64>> {
    debug_assert!(max_in_heat > 0);
    if max_in_heat == 0 {
        return Vec::new();
    }

    ids.chunks(max_in_heat).map(<[i64]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_heat_count() {
        assert_eq!(expected_heat_count(0, 4), 0);
        assert_eq!(expected_heat_count(4, 4), 1);
        assert_eq!(expected_heat_count(5, 4), 2);
        assert_eq!(expected_heat_count(10, 4), 3);
        assert_eq!(expected_heat_count(10, 0), 0);
    }

    #[test]
    fn test_only_last_group_is_short() {
        let ids: Vec<i64> = (1..=7).collect();
        let groups = partition(&ids, 3);
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }
}
