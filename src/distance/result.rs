//! Result of a keyboard-aware pairwise comparison.

#[cfg(feature = "serialization")]
use crate::error::Error;

/// Edit distance of one comparison, broken down by operation.
///
/// The operation counts always sum to [`edit_distance`](Self::edit_distance).
/// Each substitution also contributes its normalized key distance (in
/// `[0, 1]`) to [`keyboard_distance_sum`](Self::keyboard_distance_sum).
///
/// Scoring helpers ([`typo_score`](Self::typo_score),
/// [`is_likely_typo`](Self::is_likely_typo)) are derived from these fields
/// and never modify them.
///
/// With the `serialization` feature, deserialized results are checked
/// against these invariants and rejected with
/// [`Error::InconsistentResult`](crate::Error::InconsistentResult).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDistanceResult")
)]
pub struct DistanceResult {
    pub(crate) edit_distance: usize,
    pub(crate) insertions: usize,
    pub(crate) deletions: usize,
    pub(crate) substitutions: usize,
    pub(crate) transpositions: usize,
    pub(crate) keyboard_distance_sum: f64,
    pub(crate) max_length: usize,
}

/// Unchecked wire form of [`DistanceResult`].
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct RawDistanceResult {
    edit_distance: usize,
    insertions: usize,
    deletions: usize,
    substitutions: usize,
    transpositions: usize,
    keyboard_distance_sum: f64,
    max_length: usize,
}

#[cfg(feature = "serialization")]
impl TryFrom<RawDistanceResult> for DistanceResult {
    type Error = Error;

    fn try_from(raw: RawDistanceResult) -> Result<Self, Self::Error> {
        let operations = raw
            .insertions
            .checked_add(raw.deletions)
            .and_then(|n| n.checked_add(raw.substitutions))
            .and_then(|n| n.checked_add(raw.transpositions));
        if operations != Some(raw.edit_distance) {
            return Err(Error::InconsistentResult {
                reason: "operation counts do not sum to edit_distance",
            });
        }

        // NaN is never contained
        if !(0.0..=raw.substitutions as f64).contains(&raw.keyboard_distance_sum) {
            return Err(Error::InconsistentResult {
                reason: "keyboard_distance_sum outside [0, substitutions]",
            });
        }

        if raw.max_length < raw.edit_distance {
            return Err(Error::InconsistentResult {
                reason: "max_length is less than edit_distance",
            });
        }

        Ok(Self {
            edit_distance: raw.edit_distance,
            insertions: raw.insertions,
            deletions: raw.deletions,
            substitutions: raw.substitutions,
            transpositions: raw.transpositions,
            keyboard_distance_sum: raw.keyboard_distance_sum,
            max_length: raw.max_length,
        })
    }
}

impl DistanceResult {
    /// Result for an empty source: every target character is inserted.
    pub(crate) fn all_insertions(len: usize) -> Self {
        Self {
            edit_distance: len,
            insertions: len,
            max_length: len,
            ..Self::default()
        }
    }

    /// Result for an empty target: every source character is deleted.
    pub(crate) fn all_deletions(len: usize) -> Self {
        Self {
            edit_distance: len,
            deletions: len,
            max_length: len,
            ..Self::default()
        }
    }

    /// Damerau-Levenshtein distance with unit operation costs.
    #[inline]
    pub fn edit_distance(&self) -> usize {
        self.edit_distance
    }

    /// Number of inserted characters.
    #[inline]
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// Number of deleted characters.
    #[inline]
    pub fn deletions(&self) -> usize {
        self.deletions
    }

    /// Number of substituted characters.
    #[inline]
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    /// Number of adjacent swaps.
    #[inline]
    pub fn transpositions(&self) -> usize {
        self.transpositions
    }

    /// Sum of normalized key distances over all substitutions, in
    /// `[0, substitutions]`.
    #[inline]
    pub fn keyboard_distance_sum(&self) -> f64 {
        self.keyboard_distance_sum
    }

    /// Length of the longer input, in characters.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Mean normalized key distance per substitution, or `0.0` without
    /// substitutions.
    pub fn average_keyboard_distance(&self) -> f64 {
        if self.substitutions > 0 {
            self.keyboard_distance_sum / self.substitutions as f64
        } else {
            0.0
        }
    }

    /// Whether the inputs were equal ignoring case.
    pub fn is_exact(&self) -> bool {
        self.edit_distance == 0
    }
}
