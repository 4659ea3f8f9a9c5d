//! Cost types and substitution cost policies for the distance matrix.
//!
//! The dynamic program is generic over two things:
//!
//! - a numeric [`Cost`] type (`usize` for plain edit distance, `f64` for
//!   keyboard-weighted distance), and
//! - a [`SubstitutionCost`] policy deciding what replacing one character with
//!   another costs.
//!
//! Insertions, deletions and transpositions always cost [`Cost::ONE`].
//!
//! ## Usage
//!
//! ```rust
//! use human_distance::distance::{weighted_distance, KeyboardCost, UnitCost};
//! use human_distance::keyboard::LayoutKind;
//!
//! let plain: usize = weighted_distance("test", "tesr", &UnitCost);
//! assert_eq!(plain, 1);
//!
//! let keyboard = KeyboardCost::new(LayoutKind::Qwerty.layout());
//! let weighted: f64 = weighted_distance("test", "tesr", &keyboard);
//! assert!(weighted < 1.0); // 't' and 'r' are neighbours
//! ```

use std::fmt::Debug;
use std::ops::Add;

use crate::keyboard::KeyboardLayout;

/// Numeric cell type of the distance matrix.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Cost of a match.
    const ZERO: Self;

    /// Cost of an insertion, deletion or transposition.
    const ONE: Self;

    /// Cost of `len` unit operations.
    fn from_len(len: usize) -> Self;
}

impl Cost for usize {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline(always)]
    fn from_len(len: usize) -> Self {
        len
    }
}

impl Cost for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)]
    fn from_len(len: usize) -> Self {
        len as f64
    }
}

/// Policy for the cost of substituting one character with another.
///
/// The matrix only consults the policy for characters that differ after case
/// folding; equal characters are always a zero-cost match.
pub trait SubstitutionCost<C: Cost> {
    /// Cost of typing `target` where `source` was intended.
    fn substitution_cost(&self, source: char, target: char) -> C;
}

/// Every substitution costs one edit: plain Damerau-Levenshtein.
///
/// This is a zero-sized type, so the generic matrix compiles down to the
/// unweighted algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitCost;

impl SubstitutionCost<usize> for UnitCost {
    #[inline(always)]
    fn substitution_cost(&self, _source: char, _target: char) -> usize {
        1
    }
}

impl SubstitutionCost<f64> for UnitCost {
    #[inline(always)]
    fn substitution_cost(&self, _source: char, _target: char) -> f64 {
        1.0
    }
}

/// Substitutions cost the normalized key distance on a layout.
///
/// See [`KeyboardLayout::substitution_cost`] for the cost model.
#[derive(Copy, Clone, Debug)]
pub struct KeyboardCost<'a> {
    layout: &'a KeyboardLayout,
}

impl<'a> KeyboardCost<'a> {
    /// Weight substitutions by key distance on `layout`.
    pub fn new(layout: &'a KeyboardLayout) -> Self {
        Self { layout }
    }

    /// The layout distances are measured on.
    pub fn layout(&self) -> &'a KeyboardLayout {
        self.layout
    }
}

impl SubstitutionCost<f64> for KeyboardCost<'_> {
    #[inline]
    fn substitution_cost(&self, source: char, target: char) -> f64 {
        self.layout.substitution_cost(source, target)
    }
}
