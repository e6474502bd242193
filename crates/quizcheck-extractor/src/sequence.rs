//! Sorting and gap detection over entry numbers

use crate::types::{Gap, SequenceReport};

/// Sort entry numbers and scan them for gaps
///
/// Returns `None` for an empty sequence, which has no range.
pub fn analyze_sequence(numbers: &[u64]) -> Option<SequenceReport> {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();

    let min = *sorted.first()?;
    let max = *sorted.last()?;
    let gaps = find_gaps(&sorted);

    Some(SequenceReport {
        sorted,
        min,
        max,
        gaps,
    })
}

/// Walk a sorted sequence pairwise and collect every pair whose
/// difference is not exactly one
///
/// Equal neighbours have difference zero, so duplicates are reported as
/// gaps too.
pub fn find_gaps(sorted: &[u64]) -> Vec<Gap> {
    sorted
        .windows(2)
        .filter(|pair| pair[1].checked_sub(pair[0]) != Some(1))
        .map(|pair| Gap {
            low: pair[0],
            high: pair[1],
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a consecutive run from any base reports its bounds and no gaps
        #[test]
        fn test_consecutive_run_from_any_base(base in 0u64..1_000_000, len in 1usize..200) {
            let mut numbers: Vec<u64> = (base..base + len as u64).collect();
            numbers.reverse();

            let report = analyze_sequence(&numbers).unwrap();
            prop_assert_eq!(report.count(), len);
            prop_assert_eq!(report.min, base);
            prop_assert_eq!(report.max, base + len as u64 - 1);
            prop_assert!(report.gaps.is_empty());
        }

        /// Property: removing an interior number yields exactly one gap around it
        #[test]
        fn test_removed_number_surfaces_as_gap(base in 0u64..1_000, len in 3usize..100, hole in 1usize..98) {
            prop_assume!(hole < len - 1);
            let numbers: Vec<u64> = (base..base + len as u64)
                .enumerate()
                .filter(|(i, _)| *i != hole)
                .map(|(_, n)| n)
                .collect();

            let gaps = find_gaps(&numbers);
            let missing = base + hole as u64;
            prop_assert_eq!(gaps, vec![Gap { low: missing - 1, high: missing + 1 }]);
        }

        /// Property: the number of gaps never exceeds the number of adjacent pairs
        #[test]
        fn test_gap_count_bounded(numbers in proptest::collection::vec(0u64..50, 0..60)) {
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            let gaps = find_gaps(&sorted);
            prop_assert!(gaps.len() <= sorted.len().saturating_sub(1));
            for gap in gaps {
                prop_assert!(gap.low <= gap.high);
                prop_assert_ne!(gap.high - gap.low, 1);
            }
        }
    }
}
