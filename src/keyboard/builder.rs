//! Fluent builder for custom keyboard layouts.

use rustc_hash::FxHashMap;

use super::{fold_case, KeyPosition, KeyboardLayout};
use crate::error::Result;

/// Builder for a [`KeyboardLayout`] described row by row.
///
/// Each row places its characters left to right at `x = column + x_offset`
/// on the row's `y` coordinate. Characters are case-folded, and a character
/// added twice keeps its most recent position. The builder is consumed by
/// [`build`](Self::build), so each built layout is independent and immutable.
///
/// # Example
///
/// ```rust
/// use human_distance::keyboard::CustomLayoutBuilder;
///
/// let layout = CustomLayoutBuilder::new()
///     .add_row("qwertyuiop", 0.0, 0.3)
///     .add_row("asdfghjkl", 1.0, 0.5)
///     .add_row("zxcvbnm", 2.0, 1.1)
///     .build();
///
/// assert_eq!(layout.len(), 26);
/// assert!(layout.substitution_cost('f', 'g') < layout.substitution_cost('q', 'm'));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CustomLayoutBuilder {
    positions: FxHashMap<char, KeyPosition>,
}

impl CustomLayoutBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row of characters.
    ///
    /// # Arguments
    ///
    /// * `characters` - The keys in this row, from left to right
    /// * `y` - Vertical position of the row (0 = top row)
    /// * `x_offset` - Horizontal stagger of the row (use `0.0` for none)
    pub fn add_row(mut self, characters: &str, y: f32, x_offset: f32) -> Self {
        for (column, c) in characters.chars().enumerate() {
            self.positions
                .insert(fold_case(c), KeyPosition::new(column as f32 + x_offset, y));
        }
        self
    }

    /// Place a single key at an explicit position.
    pub fn add_key(mut self, key: char, position: KeyPosition) -> Self {
        self.positions.insert(fold_case(key), position);
        self
    }

    /// Number of distinct keys placed so far.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no keys have been placed yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Build the layout.
    ///
    /// A layout with fewer than two distinct positions is still produced;
    /// every substitution against it costs `1.0`. Use
    /// [`try_build`](Self::try_build) to reject it.
    pub fn build(self) -> KeyboardLayout {
        KeyboardLayout::from_positions(self.positions)
    }

    /// Build the layout, validating that it can normalize key distances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateLayout`](crate::Error::DegenerateLayout)
    /// when fewer than two distinct positions were placed, and
    /// [`Error::NonFiniteCoordinate`](crate::Error::NonFiniteCoordinate)
    /// when a row used a NaN or infinite coordinate.
    pub fn try_build(self) -> Result<KeyboardLayout> {
        KeyboardLayout::try_from_positions(self.positions)
    }
}
