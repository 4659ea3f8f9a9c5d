//! Error types for layout selection and construction.

use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Distance, score and search operations are total over their inputs; only
/// layout selection, validated layout construction and deserializing a
/// result can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The layout name does not match any built-in layout.
    ///
    /// Returned when parsing a [`LayoutKind`](crate::keyboard::LayoutKind)
    /// from a string.
    #[error("Unknown keyboard layout: {0}. Valid options: qwerty, azerty, qwertz")]
    UnknownLayout(String),

    /// The layout maps fewer than two distinct key positions.
    ///
    /// Such a layout has a maximum key distance of zero, so it cannot
    /// normalize substitution costs.
    #[error("Keyboard layout needs at least 2 distinct key positions, found {distinct_positions}")]
    DegenerateLayout {
        /// Number of distinct positions the layout would contain.
        distinct_positions: usize,
    },

    /// A key was placed at a NaN or infinite coordinate.
    #[error("Key {key:?} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending key (case-folded).
        key: char,
    },

    /// A deserialized [`DistanceResult`](crate::distance::DistanceResult)
    /// contradicts its own counts.
    #[error("Inconsistent distance result: {reason}")]
    InconsistentResult {
        /// Which invariant was violated.
        reason: &'static str,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
