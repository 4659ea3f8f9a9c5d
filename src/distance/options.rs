//! Options for single-number distance computation.

use crate::keyboard::LayoutKind;

/// Selects between plain and keyboard-weighted distance.
///
/// # Example
///
/// ```rust
/// use human_distance::distance::DistanceOptions;
/// use human_distance::keyboard::LayoutKind;
///
/// let weighted = DistanceOptions::default();
/// assert!(weighted.distance("a", "s") < 0.5);
///
/// let plain = DistanceOptions::plain();
/// assert_eq!(plain.distance("a", "s"), 1.0);
///
/// let azerty = DistanceOptions::default().with_layout(LayoutKind::Azerty);
/// assert!(azerty.distance("a", "z") < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DistanceOptions {
    /// Weight substitutions by key distance.
    pub use_keyboard_distance: bool,
    /// Layout used when `use_keyboard_distance` is set.
    pub layout: LayoutKind,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            use_keyboard_distance: true,
            layout: LayoutKind::Qwerty,
        }
    }
}

impl DistanceOptions {
    /// Options for plain, unweighted distance.
    pub fn plain() -> Self {
        Self {
            use_keyboard_distance: false,
            ..Self::default()
        }
    }

    /// Use a different built-in layout.
    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    /// Distance between `source` and `target` under these options.
    ///
    /// Plain distance is returned as a whole number of edits; keyboard
    /// distance may be fractional.
    pub fn distance(&self, source: &str, target: &str) -> f64 {
        if self.use_keyboard_distance {
            super::keyboard_distance(source, target, self.layout)
        } else {
            super::edit_distance(source, target) as f64
        }
    }
}
