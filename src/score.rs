//! Typo scoring and acceptance thresholds.
//!
//! A [`DistanceResult`] is turned into a similarity score in `[0, 1]`:
//!
//! ```text
//! base     = 1 - edit_distance / max_length
//! keyboard = 1 - average_keyboard_distance * keyboard_penalty_strength
//! score    = base * keyboard            (base alone without substitutions)
//! ```
//!
//! A penalty strength of `0.0` ignores key proximity entirely; `1.0` drives
//! the score to zero when every substitution spans the whole keyboard.
//! Strengths outside `[0, 1]` are accepted but can push the score outside
//! `[0, 1]`; keeping them sane is the caller's responsibility.
//!
//! ## Thresholds
//!
//! [`DistanceResult::is_likely_typo`] uses an adaptive cutoff keyed to the
//! longer input's length, because one edit is a large fraction of a short
//! word:
//!
//! | max length | threshold |
//! |-----------:|----------:|
//! | ≤ 3        | 0.60      |
//! | 4          | 0.70      |
//! | 5          | 0.75      |
//! | ≥ 6        | 0.80      |
//!
//! [`DistanceResult::is_likely_typo_with_threshold`] applies a fixed cutoff
//! instead, for callers that need length-independent behaviour.
//!
//! ## Defaults
//!
//! The scoring methods take the penalty strength explicitly.
//! [`DistanceResult::typo_score_default`] and
//! [`DistanceResult::is_likely_typo_default`] use
//! [`DEFAULT_KEYBOARD_PENALTY_STRENGTH`].

use crate::distance::DistanceResult;

/// Default weight of key proximity in [`DistanceResult::typo_score`].
pub const DEFAULT_KEYBOARD_PENALTY_STRENGTH: f64 = 0.5;

/// Default cutoff for [`Threshold::Fixed`].
pub const DEFAULT_FIXED_THRESHOLD: f64 = 0.8;

/// Adaptive typo threshold for strings whose longer side has `max_length`
/// characters.
///
/// # Example
///
/// ```rust
/// use human_distance::score::adaptive_threshold;
///
/// assert_eq!(adaptive_threshold(3), 0.60);
/// assert_eq!(adaptive_threshold(12), 0.80);
/// ```
pub fn adaptive_threshold(max_length: usize) -> f64 {
    match max_length {
        0..=3 => 0.60,
        4 => 0.70,
        5 => 0.75,
        _ => 0.80,
    }
}

/// Minimum score for a comparison to count as a typo.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Threshold {
    /// Length-dependent cutoff, see [`adaptive_threshold`].
    #[default]
    Adaptive,

    /// The same cutoff for every length.
    Fixed(f64),
}

impl Threshold {
    /// The cutoff applied to a comparison of the given maximum length.
    pub fn cutoff(&self, max_length: usize) -> f64 {
        match *self {
            Threshold::Adaptive => adaptive_threshold(max_length),
            Threshold::Fixed(value) => value,
        }
    }
}

impl DistanceResult {
    /// Similarity score in `[0, 1]` (for strengths in `[0, 1]`).
    ///
    /// Two empty strings score `1.0`. Insertions, deletions and
    /// transpositions only lower the base similarity; substitutions also
    /// scale it by a keyboard factor, so typos on neighbouring keys score
    /// higher than typos across the keyboard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use human_distance::distance::calculate;
    /// use human_distance::keyboard::LayoutKind;
    ///
    /// let near = calculate("hello", "hwllo", LayoutKind::Qwerty);
    /// let far = calculate("hello", "hpllo", LayoutKind::Qwerty);
    /// assert!(near.typo_score(0.5) > far.typo_score(0.5));
    ///
    /// // Without a keyboard penalty both are one edit in five
    /// assert_eq!(near.typo_score(0.0), 0.8);
    /// assert_eq!(far.typo_score(0.0), 0.8);
    /// ```
    pub fn typo_score(&self, keyboard_penalty_strength: f64) -> f64 {
        if self.max_length == 0 {
            return 1.0;
        }

        let base_similarity =
            (1.0 - self.edit_distance as f64 / self.max_length as f64).max(0.0);

        if self.substitutions == 0 {
            return base_similarity;
        }

        let keyboard_factor = 1.0 - self.average_keyboard_distance() * keyboard_penalty_strength;
        base_similarity * keyboard_factor
    }

    /// [`typo_score`](Self::typo_score) with
    /// [`DEFAULT_KEYBOARD_PENALTY_STRENGTH`].
    #[inline]
    pub fn typo_score_default(&self) -> f64 {
        self.typo_score(DEFAULT_KEYBOARD_PENALTY_STRENGTH)
    }

    /// [`is_likely_typo`](Self::is_likely_typo) with
    /// [`DEFAULT_KEYBOARD_PENALTY_STRENGTH`].
    ///
    /// ```rust
    /// use human_distance::distance::calculate;
    /// use human_distance::keyboard::LayoutKind;
    ///
    /// assert!(calculate("slip", "slop", LayoutKind::Qwerty).is_likely_typo_default());
    /// assert!(!calculate("slip", "slap", LayoutKind::Qwerty).is_likely_typo_default());
    /// ```
    #[inline]
    pub fn is_likely_typo_default(&self) -> bool {
        self.is_likely_typo(DEFAULT_KEYBOARD_PENALTY_STRENGTH)
    }

    /// Whether the comparison looks like a typo, using the adaptive
    /// length-dependent threshold.
    pub fn is_likely_typo(&self, keyboard_penalty_strength: f64) -> bool {
        self.meets_threshold(Threshold::Adaptive, keyboard_penalty_strength)
    }

    /// Whether the comparison looks like a typo under a fixed threshold
    /// (conventionally [`DEFAULT_FIXED_THRESHOLD`]).
    pub fn is_likely_typo_with_threshold(&self, threshold: f64, keyboard_penalty_strength: f64) -> bool {
        self.meets_threshold(Threshold::Fixed(threshold), keyboard_penalty_strength)
    }

    /// Whether the typo score reaches `threshold` (inclusive).
    pub fn meets_threshold(&self, threshold: Threshold, keyboard_penalty_strength: f64) -> bool {
        self.typo_score(keyboard_penalty_strength) >= threshold.cutoff(self.max_length)
    }
}
