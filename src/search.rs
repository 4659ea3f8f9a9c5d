//! Best-match search over a set of candidate strings.
//!
//! Every candidate is compared with the input through
//! [`calculate`](crate::distance::calculate) and ranked by
//! [`typo_score`](crate::distance::DistanceResult::typo_score). The winner
//! must score at least [`SearchOptions::min_score`]; among equal scores the
//! candidate seen first wins.
//!
//! [`best_match`] takes the layout and options explicitly;
//! [`best_match_default`] searches on QWERTY with [`SearchOptions::default`].
//!
//! # Example
//!
//! ```rust
//! use human_distance::keyboard::LayoutKind;
//! use human_distance::search::{best_match, SearchOptions};
//!
//! let candidates = ["recipe", "receipt", "record"];
//! let found = best_match("reciepe", candidates, LayoutKind::Qwerty, &SearchOptions::default());
//! assert_eq!(found, Some("recipe"));
//! ```

use tracing::{debug, trace};

use crate::distance::calculate;
use crate::keyboard::{KeyboardLayout, LayoutKind};
use crate::score::DEFAULT_KEYBOARD_PENALTY_STRENGTH;

/// Default lower bound on a winning candidate's score.
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Options for [`best_match`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SearchOptions {
    /// Inclusive lower bound on the winning score.
    pub min_score: f64,
    /// Weight of key proximity when scoring substitutions.
    pub keyboard_penalty_strength: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            keyboard_penalty_strength: DEFAULT_KEYBOARD_PENALTY_STRENGTH,
        }
    }
}

impl SearchOptions {
    /// Create options with the default bound and penalty strength.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound on the winning score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the keyboard penalty strength.
    pub fn with_keyboard_penalty_strength(mut self, strength: f64) -> Self {
        self.keyboard_penalty_strength = strength;
        self
    }

    #[inline]
    fn score(&self, input: &str, candidate: &str, layout: &KeyboardLayout) -> f64 {
        calculate(input, candidate, layout).typo_score(self.keyboard_penalty_strength)
    }
}

/// Find the candidate most likely to be what `input` was meant to be.
///
/// Candidates are scored in iteration order. The first candidate scoring at
/// least `options.min_score` becomes the best; later candidates replace it
/// only when they score strictly higher. Returns `None` for an empty
/// candidate set or when nothing reaches the bound.
///
/// The winning candidate is returned as passed in, so borrowed and owned
/// candidates both work:
///
/// ```rust
/// use human_distance::keyboard::LayoutKind;
/// use human_distance::search::{best_match, SearchOptions};
///
/// let commands = vec![String::from("status"), String::from("stash")];
/// let found = best_match("stauts", commands, LayoutKind::Qwerty, &SearchOptions::default());
/// assert_eq!(found.as_deref(), Some("status"));
///
/// let none = best_match("apple", Vec::<&str>::new(), LayoutKind::Qwerty, &SearchOptions::default());
/// assert_eq!(none, None);
/// ```
pub fn best_match<I, S>(
    input: &str,
    candidates: I,
    layout: impl AsRef<KeyboardLayout>,
    options: &SearchOptions,
) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let layout = layout.as_ref();

    let mut best: Option<(S, f64)> = None;

    for candidate in candidates {
        let score = options.score(input, candidate.as_ref(), layout);
        trace!(candidate = candidate.as_ref(), score, "scored candidate");

        let improves = match &best {
            Some((_, best_score)) => score > *best_score,
            None => score >= options.min_score,
        };
        if improves {
            best = Some((candidate, score));
        }
    }

    match &best {
        Some((candidate, score)) => debug!(input, best = candidate.as_ref(), score, "best match found"),
        None => debug!(input, min_score = options.min_score, "no candidate reached minimum score"),
    }

    best.map(|(candidate, _)| candidate)
}

/// [`best_match`] on the QWERTY layout with default options.
///
/// ```rust
/// use human_distance::search::best_match_default;
///
/// assert_eq!(best_match_default("reciepe", ["recipe", "receipt"]), Some("recipe"));
/// ```
pub fn best_match_default<I, S>(input: &str, candidates: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    best_match(input, candidates, LayoutKind::default(), &SearchOptions::default())
}

/// Parallel [`best_match`] over a slice of candidates.
///
/// Candidates are scored on the rayon thread pool and reduced by highest
/// score, then lowest index, so the result is always the one the sequential
/// search would return.
///
/// # Example
///
/// ```rust
/// use human_distance::keyboard::LayoutKind;
/// use human_distance::search::{best_match_parallel, SearchOptions};
///
/// let candidates = ["recipe", "receipt", "record"];
/// let found = best_match_parallel("reciepe", &candidates, LayoutKind::Qwerty, &SearchOptions::default());
/// assert_eq!(found, Some(&"recipe"));
/// ```
#[cfg(feature = "parallel")]
pub fn best_match_parallel<'c, S>(
    input: &str,
    candidates: &'c [S],
    layout: impl AsRef<KeyboardLayout>,
    options: &SearchOptions,
) -> Option<&'c S>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let layout = layout.as_ref();

    let best = candidates
        .par_iter()
        .enumerate()
        .map(|(index, candidate)| (index, options.score(input, candidate.as_ref(), layout)))
        .filter(|&(_, score)| score >= options.min_score)
        .reduce_with(|a, b| {
            if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
                b
            } else {
                a
            }
        });

    match best {
        Some((index, score)) => {
            let candidate = &candidates[index];
            debug!(input, best = candidate.as_ref(), score, "best match found");
            Some(candidate)
        }
        None => {
            debug!(input, min_score = options.min_score, "no candidate reached minimum score");
            None
        }
    }
}
