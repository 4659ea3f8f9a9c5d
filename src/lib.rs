//! # human-distance
//!
//! Keyboard-aware string distance for typo detection.
//!
//! This library compares strings with the Damerau-Levenshtein distance
//! (insertions, deletions, substitutions and adjacent transpositions) and
//! weighs each substitution by how far apart the two keys are on a physical
//! keyboard layout. A slip onto a neighbouring key is treated as a more
//! likely typo than a substitution across the keyboard.
//!
//! ## Example
//!
//! ```rust
//! use human_distance::prelude::*;
//!
//! let result = calculate("slip", "slop", LayoutKind::Qwerty);
//! assert_eq!(result.edit_distance(), 1);
//! assert_eq!(result.substitutions(), 1);
//! assert!(result.is_likely_typo(DEFAULT_KEYBOARD_PENALTY_STRENGTH));
//!
//! let commands = ["commit", "checkout", "cherry-pick"];
//! let found = best_match("comit", commands, LayoutKind::Qwerty, &SearchOptions::default());
//! assert_eq!(found, Some("commit"));
//! ```
//!
//! ## Layouts
//!
//! QWERTY, AZERTY and QWERTZ are built in through [`keyboard::LayoutKind`];
//! other layouts can be assembled with [`keyboard::CustomLayoutBuilder`].
//! Built-in layouts are constructed once per process and shared.
//!
//! ## Features
//!
//! - `serialization`: serde support for layout selectors, options and results
//! - `parallel`: [`search::best_match_parallel`] on the rayon thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod keyboard;
pub mod score;
pub mod search;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{
        calculate, edit_distance, keyboard_distance, DistanceOptions, DistanceResult,
    };
    pub use crate::error::{Error, Result};
    pub use crate::keyboard::{CustomLayoutBuilder, KeyPosition, KeyboardLayout, LayoutKind};
    pub use crate::score::{Threshold, DEFAULT_FIXED_THRESHOLD, DEFAULT_KEYBOARD_PENALTY_STRENGTH};
    pub use crate::search::{best_match, best_match_default, SearchOptions, DEFAULT_MIN_SCORE};

    #[cfg(feature = "parallel")]
    pub use crate::search::best_match_parallel;
}
