//! Heat allocation
//!
//! Pure, storage-free partitioning of a round's roster into heats.
//! The service layer loads the roster, calls [`plan_heats`] and persists
//! the resulting groups inside the round's exclusive section.

mod pairing;
mod partition;

pub use pairing::pair_couples;
pub use partition::{expected_heat_count, partition};

use crate::{
    config::AllocationConfig,
    constants::COUPLE_HEAT_SIZE,
    error::{AppError, AppResult},
    models::Gender,
};

/// One participant as seen by the allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    pub participant_id: i64,
    pub gender: Option<Gender>,
}

/// Options controlling how a roster is laid out
#[derive(Debug, Clone, Copy)]
pub struct AllocationOptions {
    /// Interleave male/female participants for heats of two
    pub pair_couples: bool,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self { pair_couples: true }
    }
}

impl From<AllocationConfig> for AllocationOptions {
    fn from(config: AllocationConfig) -> Self {
        Self {
            pair_couples: config.pair_couples,
        }
    }
}

/// Check a requested heat size and convert it to `usize`.
///
/// Any positive size is accepted; a size above the roster yields one heat.
pub fn validate_max_in_heat(max_in_heat: i64) -> AppResult<usize> {
    if max_in_heat <= 0 {
        return Err(AppError::Validation(
            "max_in_heat must be a positive integer".to_string(),
        ));
    }

    usize::try_from(max_in_heat)
        .map_err(|_| AppError::Validation("max_in_heat is out of range".to_string()))
}

/// Lay out `roster` into heats of at most `max_in_heat` participants.
///
/// The roster is ordered by ascending participant id before grouping, so
/// the result only depends on the set of participants. With heats of two
/// and pairing enabled, couples are formed first (see [`pair_couples`]).
/// Each inner vector is one heat; heat numbers follow vector order.
pub fn plan_heats(
    roster: &[RosterEntry],
    max_in_heat: i64,
    options: &AllocationOptions,
) -> AppResult<Vec<Vec<i64>>> {
    let size = validate_max_in_heat(max_in_heat)?;

    let mut ordered = roster.to_vec();
    ordered.sort_by_key(|entry| entry.participant_id);
    ordered.dedup_by_key(|entry| entry.participant_id);

    let ordered = if options.pair_couples && size == COUPLE_HEAT_SIZE {
        pair_couples(&ordered)
    } else {
        ordered
    };

    let ids: Vec<i64> = ordered.iter().map(|entry| entry.participant_id).collect();
    let heats = partition(&ids, size);
    debug_assert_eq!(heats.len(), expected_heat_count(ids.len(), size));

    Ok(heats)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn roster(n: i64) -> Vec<RosterEntry> {
        (1..=n)
            .map(|participant_id| RosterEntry {
                participant_id,
                gender: None,
            })
            .collect()
    }

    #[test]
    fn test_ten_participants_four_per_heat() {
        let heats = plan_heats(&roster(10), 4, &AllocationOptions::default()).unwrap();

        let sizes: Vec<usize> = heats.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(heats[0], vec![1, 2, 3, 4]);
        assert_eq!(heats[1], vec![5, 6, 7, 8]);
        assert_eq!(heats[2], vec![9, 10]);
    }

    #[test]
    fn test_partition_properties_hold_for_many_shapes() {
        let options = AllocationOptions {
            pair_couples: false,
        };

        for n in 0..=40 {
            for m in 1..=12 {
                let heats = plan_heats(&roster(n), m, &options).unwrap();
                let n = n as usize;
                let m = m as usize;

                assert_eq!(heats.len(), n.div_ceil(m), "n={n} m={m}");
                assert!(heats.iter().all(|heat| !heat.is_empty() && heat.len() <= m));

                let total: usize = heats.iter().map(Vec::len).sum();
                assert_eq!(total, n);

                let unique: HashSet<i64> = heats.iter().flatten().copied().collect();
                assert_eq!(unique.len(), n);
            }
        }
    }

    #[test]
    fn test_empty_roster_yields_no_heats() {
        let heats = plan_heats(&[], 4, &AllocationOptions::default()).unwrap();
        assert!(heats.is_empty());
    }

    #[test]
    fn test_non_positive_size_rejected() {
        for bad in [0, -1, -10] {
            let err = plan_heats(&roster(5), bad, &AllocationOptions::default()).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_size_above_roster_gives_single_heat() {
        let options = AllocationOptions::default();

        let heats = plan_heats(&roster(10), 100, &options).unwrap();
        assert_eq!(heats, vec![(1..=10).collect::<Vec<i64>>()]);

        let heats = plan_heats(&roster(3), i64::MAX, &options).unwrap();
        assert_eq!(heats.len(), 1);
    }

    #[test]
    fn test_layout_is_independent_of_input_order() {
        let mut shuffled = roster(9);
        shuffled.reverse();
        shuffled.swap(2, 6);

        let options = AllocationOptions::default();
        assert_eq!(
            plan_heats(&shuffled, 4, &options).unwrap(),
            plan_heats(&roster(9), 4, &options).unwrap()
        );
    }

    #[test]
    fn test_duplicate_roster_entries_collapse() {
        let mut entries = roster(3);
        entries.push(entries[0]);

        let heats = plan_heats(&entries, 2, &AllocationOptions::default()).unwrap();
        let total: usize = heats.iter().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_heats_of_two_pair_couples() {
        let entries = vec![
            RosterEntry { participant_id: 1, gender: Some(Gender::Male) },
            RosterEntry { participant_id: 2, gender: Some(Gender::Male) },
            RosterEntry { participant_id: 3, gender: Some(Gender::Female) },
            RosterEntry { participant_id: 4, gender: None },
            RosterEntry { participant_id: 5, gender: Some(Gender::Female) },
        ];

        let heats = plan_heats(&entries, 2, &AllocationOptions::default()).unwrap();
        assert_eq!(heats, vec![vec![1, 3], vec![2, 5], vec![4]]);
    }

    #[test]
    fn test_pairing_can_be_disabled() {
        let entries = vec![
            RosterEntry { participant_id: 1, gender: Some(Gender::Male) },
            RosterEntry { participant_id: 2, gender: Some(Gender::Male) },
            RosterEntry { participant_id: 3, gender: Some(Gender::Female) },
        ];
        let options = AllocationOptions {
            pair_couples: false,
        };

        let heats = plan_heats(&entries, 2, &options).unwrap();
        assert_eq!(heats, vec![vec![1, 2], vec![3]]);
    }
}
