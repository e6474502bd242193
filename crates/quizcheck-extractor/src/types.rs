//! Extraction outcomes and sequence report types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of extracting numbered entries from a document
///
/// The two misses are ordinary terminal states of a check, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Entry numbers in order of appearance
    Found(Vec<u64>),

    /// The array declaration was not present in the document
    ArrayNotFound,

    /// The array was present but held no labeled entries
    NoEntries,
}

impl Extraction {
    /// Entry numbers, if any were found
    pub fn numbers(&self) -> Option<&[u64]> {
        match self {
            Extraction::Found(numbers) => Some(numbers),
            _ => None,
        }
    }
}

/// Classification of a gap between two adjacent sorted numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GapKind {
    /// The same number appears more than once
    Duplicate,
    /// `count` numbers are absent between the pair
    Missing {
        /// How many numbers are skipped
        count: u64,
    },
}

/// An adjacent pair in the sorted sequence whose difference is not one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Lower number of the pair
    pub low: u64,
    /// Higher (or equal) number of the pair
    pub high: u64,
}

impl Gap {
    /// Classify this gap
    pub fn kind(&self) -> GapKind {
        if self.low == self.high {
            GapKind::Duplicate
        } else {
            GapKind::Missing {
                count: self.high - self.low - 1,
            }
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.low, self.high)
    }
}

/// Result of analysing the numbered entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    /// Entry numbers sorted ascending
    pub sorted: Vec<u64>,

    /// Smallest entry number
    pub min: u64,

    /// Largest entry number
    pub max: u64,

    /// Non-consecutive adjacent pairs, in ascending order
    pub gaps: Vec<Gap>,
}

impl SequenceReport {
    /// Number of entries found
    pub fn count(&self) -> usize {
        self.sorted.len()
    }

    /// Length the array is expected to have, echoed for manual cross-checks
    pub fn expected_len(&self) -> usize {
        self.count()
    }

    /// Whether the numbering is strictly consecutive
    pub fn is_consecutive(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Gaps rendered as `"<low> -> <high>"`
    pub fn gap_strings(&self) -> Vec<String> {
        self.gaps.iter().map(Gap::to_string).collect()
    }

    /// Number of duplicate pairs among the gaps
    pub fn duplicate_count(&self) -> usize {
        self.gaps
            .iter()
            .filter(|gap| gap.kind() == GapKind::Duplicate)
            .count()
    }

    /// Total count of numbers missing across all gaps
    pub fn missing_count(&self) -> u64 {
        self.gaps
            .iter()
            .map(|gap| match gap.kind() {
                GapKind::Missing { count } => count,
                GapKind::Duplicate => 0,
            })
            .sum()
    }

    /// Compare the entry count against an externally expected total
    pub fn check_expected(&self, expected: usize) -> ExpectedCheck {
        ExpectedCheck {
            expected,
            found: self.count(),
        }
    }
}

/// Comparison of the entry count with an expected total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedCheck {
    /// Total the caller expected
    pub expected: usize,
    /// Total actually found
    pub found: usize,
}

impl ExpectedCheck {
    /// Whether the found total matches the expectation
    pub fn matches(&self) -> bool {
        self.expected == self.found
    }
}
