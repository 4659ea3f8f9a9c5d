//! Damerau-Levenshtein distance with keyboard-proximity weighting.
//!
//! This module provides three views of the same dynamic program:
//!
//! - [`edit_distance`]: plain distance, every operation costs one
//! - [`keyboard_distance`]: substitutions cost the normalized key distance
//!   on a layout, everything else costs one
//! - [`calculate`]: plain distance plus a breakdown of the optimal edit
//!   script and the key distance of each substitution
//!
//! All comparisons are case-insensitive. Adjacent swaps ("teh" → "the") are
//! a single transposition with a fixed cost of one, regardless of how far
//! apart the swapped keys are.
//!
//! The matrix is dense, O(n × m) in time and space, which suits typo-length
//! strings.

mod cost;
mod matrix;
mod options;
mod result;

pub use cost::{Cost, KeyboardCost, SubstitutionCost, UnitCost};
pub use options::DistanceOptions;
pub use result::DistanceResult;

use smallvec::SmallVec;

use crate::keyboard::{fold_case, KeyboardLayout};
use matrix::{EditMatrix, Operation};

#[inline]
fn folded_chars(s: &str) -> SmallVec<[char; 32]> {
    s.chars().map(fold_case).collect()
}

/// Compute distance with a custom substitution cost policy.
///
/// Insertions, deletions and transpositions cost [`Cost::ONE`]; substitutions
/// cost whatever `policy` says. Characters are case-folded first.
///
/// # Example
///
/// ```rust
/// use human_distance::distance::{weighted_distance, UnitCost};
///
/// let d: usize = weighted_distance("Kitten", "sitting", &UnitCost);
/// assert_eq!(d, 3);
/// ```
pub fn weighted_distance<C, P>(source: &str, target: &str, policy: &P) -> C
where
    C: Cost,
    P: SubstitutionCost<C>,
{
    let source_chars = folded_chars(source);
    let target_chars = folded_chars(target);

    // Handle edge cases
    if source_chars.is_empty() {
        return C::from_len(target_chars.len());
    }
    if target_chars.is_empty() {
        return C::from_len(source_chars.len());
    }

    EditMatrix::fill(&source_chars, &target_chars, policy).distance()
}

/// Compute plain Damerau-Levenshtein distance, ignoring case.
///
/// # Example
///
/// ```rust
/// use human_distance::distance::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("test", "tset"), 1); // One transposition
/// assert_eq!(edit_distance("Hello", "hello"), 0);
/// ```
pub fn edit_distance(source: &str, target: &str) -> usize {
    weighted_distance(source, target, &UnitCost)
}

/// Compute keyboard-weighted distance.
///
/// Substituting neighbouring keys costs a fraction of an edit; substituting
/// characters absent from the layout costs a full edit. The result lies in
/// `[0, max(len(source), len(target))]`.
///
/// # Example
///
/// ```rust
/// use human_distance::distance::keyboard_distance;
/// use human_distance::keyboard::LayoutKind;
///
/// let near = keyboard_distance("a", "s", LayoutKind::Qwerty);
/// let far = keyboard_distance("a", "p", LayoutKind::Qwerty);
/// assert!(near < far);
/// assert_eq!(keyboard_distance("qp", "pq", LayoutKind::Qwerty), 1.0);
/// ```
pub fn keyboard_distance(
    source: &str,
    target: &str,
    layout: impl AsRef<KeyboardLayout>,
) -> f64 {
    weighted_distance(source, target, &KeyboardCost::new(layout.as_ref()))
}

/// Compare two strings and break the distance down by operation.
///
/// The edit distance uses unit costs. The optimal edit script is recovered
/// by backtracking through the matrix, and every substitution on it adds its
/// normalized key distance on `layout` to the result's keyboard distance sum.
///
/// # Example
///
/// ```rust
/// use human_distance::distance::calculate;
/// use human_distance::keyboard::LayoutKind;
///
/// let result = calculate("kitten", "sitting", LayoutKind::Qwerty);
/// assert_eq!(result.edit_distance(), 3);
/// assert_eq!(result.substitutions(), 2);
/// assert_eq!(result.insertions(), 1);
///
/// let swap = calculate("ab", "ba", LayoutKind::Qwerty);
/// assert_eq!(swap.transpositions(), 1);
/// assert_eq!(swap.keyboard_distance_sum(), 0.0);
/// ```
pub fn calculate(source: &str, target: &str, layout: impl AsRef<KeyboardLayout>) -> DistanceResult {
    let layout = layout.as_ref();

    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let source_len = source_chars.len();
    let target_len = target_chars.len();

    // Handle edge cases
    if source_len == 0 {
        return DistanceResult::all_insertions(target_len);
    }
    if target_len == 0 {
        return DistanceResult::all_deletions(source_len);
    }

    let folded_source: SmallVec<[char; 32]> = source_chars.iter().copied().map(fold_case).collect();
    let folded_target: SmallVec<[char; 32]> = target_chars.iter().copied().map(fold_case).collect();

    let matrix = EditMatrix::<usize>::fill(&folded_source, &folded_target, &UnitCost);

    let mut result = DistanceResult {
        edit_distance: matrix.distance(),
        max_length: source_len.max(target_len),
        ..DistanceResult::default()
    };

    for step in matrix.backtrack() {
        match step.operation {
            Operation::Match | Operation::None => {}
            Operation::Substitute => {
                result.substitutions += 1;
                result.keyboard_distance_sum += layout.substitution_cost(
                    source_chars[step.source_len - 1],
                    target_chars[step.target_len - 1],
                );
            }
            Operation::Insert => result.insertions += 1,
            Operation::Delete => result.deletions += 1,
            Operation::Transpose => result.transpositions += 1,
        }
    }

    result
}
