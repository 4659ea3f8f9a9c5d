//! Keyboard geometry for proximity-weighted substitutions.
//!
//! A [`KeyboardLayout`] maps characters to 2D key positions and caches the
//! largest distance between any two keys. That maximum is the normalization
//! divisor for the substitution cost model: replacing a character with a
//! neighbouring key costs little, replacing it with a key on the far side of
//! the keyboard costs close to `1.0`.
//!
//! Layouts come from three places:
//! - [`LayoutKind`]: the built-in QWERTY, AZERTY and QWERTZ tables
//! - [`CustomLayoutBuilder`]: rows of characters with a y coordinate and x offset
//! - [`KeyboardLayout::from_positions`]: an explicit character → position table
//!
//! ## Case Folding
//!
//! Keys are stored and looked up in lowercase, so `'A'` and `'a'` share a
//! position. Characters whose lowercase form expands to several characters
//! are kept as they are.
//!
//! ## Example
//!
//! ```rust
//! use human_distance::keyboard::{KeyboardLayout, LayoutKind};
//!
//! let qwerty: &KeyboardLayout = LayoutKind::Qwerty.layout();
//!
//! let near = qwerty.substitution_cost('a', 's');
//! let far = qwerty.substitution_cost('a', 'p');
//! assert!(near < far);
//!
//! // Same key, different case
//! assert_eq!(qwerty.substitution_cost('A', 'a'), 0.0);
//! // Unknown characters are as far apart as possible
//! assert_eq!(qwerty.substitution_cost('a', 'α'), 1.0);
//! ```

mod builder;
mod builtin;

pub use builder::CustomLayoutBuilder;
pub use builtin::LayoutKind;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Position of a single key, in key-width units.
///
/// `y` grows downwards from the top row; `x` is the column index plus the
/// row's horizontal stagger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct KeyPosition {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate (0 = top row).
    pub y: f32,
}

impl KeyPosition {
    /// Create a key position.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another key.
    #[inline]
    pub fn distance(&self, other: &KeyPosition) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fold a character to lowercase when the mapping is one-to-one.
#[inline]
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// An immutable character → key position table.
///
/// The maximum pairwise key distance is computed once at construction
/// (O(k²) over the `k` mapped keys) and never changes afterwards, so a layout
/// can be shared freely between threads and reused across calls.
///
/// A layout with fewer than two distinct positions has a `max_distance` of
/// zero. It is accepted by the infallible constructors, but every
/// substitution against it costs `1.0`; use
/// [`try_from_positions`](Self::try_from_positions) or
/// [`CustomLayoutBuilder::try_build`] to reject it instead.
#[derive(Clone, Debug)]
pub struct KeyboardLayout {
    positions: FxHashMap<char, KeyPosition>,
    max_distance: f32,
}

impl KeyboardLayout {
    /// Build a layout from an explicit position table.
    ///
    /// Keys are case-folded; when a key appears twice the last position wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use human_distance::keyboard::{KeyPosition, KeyboardLayout};
    ///
    /// let layout = KeyboardLayout::from_positions([
    ///     ('a', KeyPosition::new(0.0, 0.0)),
    ///     ('B', KeyPosition::new(3.0, 4.0)),
    /// ]);
    /// assert_eq!(layout.max_distance(), 5.0);
    /// assert_eq!(layout.position('b'), Some(KeyPosition::new(3.0, 4.0)));
    /// ```
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (char, KeyPosition)>,
    {
        Self::from_table(fold_keys(positions))
    }

    /// Build a layout, rejecting tables that cannot normalize distances.
    ///
    /// # Errors
    ///
    /// - [`Error::NonFiniteCoordinate`] if any key sits at a NaN or infinite coordinate
    /// - [`Error::DegenerateLayout`] if fewer than two distinct positions are mapped
    pub fn try_from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, KeyPosition)>,
    {
        let table = fold_keys(positions);

        if let Some((&key, _)) = table.iter().find(|(_, position)| !position.is_finite()) {
            return Err(Error::NonFiniteCoordinate { key });
        }

        // With finite coordinates, a zero maximum means every key shares one spot.
        if max_pairwise_distance(&table) <= 0.0 {
            return Err(Error::DegenerateLayout {
                distinct_positions: table.len().min(1),
            });
        }

        Ok(Self::from_table(table))
    }

    fn from_table(positions: FxHashMap<char, KeyPosition>) -> Self {
        let max_distance = max_pairwise_distance(&positions);

        if max_distance <= 0.0 {
            tracing::warn!(
                keys = positions.len(),
                "keyboard layout has fewer than 2 distinct key positions; all substitutions will cost 1.0"
            );
        } else {
            tracing::debug!(keys = positions.len(), max_distance, "built keyboard layout");
        }

        Self {
            positions,
            max_distance,
        }
    }

    /// Look up the position of a character (case-insensitive).
    #[inline]
    pub fn position(&self, c: char) -> Option<KeyPosition> {
        self.positions.get(&fold_case(c)).copied()
    }

    /// Whether the character has a key on this layout.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&fold_case(c))
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout maps no keys at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Largest Euclidean distance between any two mapped keys.
    #[inline]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Whether the layout is unable to normalize distances (`max_distance == 0`).
    pub fn is_degenerate(&self) -> bool {
        self.max_distance <= 0.0
    }

    /// Iterate over the mapped keys and their positions, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = (char, KeyPosition)> + '_ {
        self.positions.iter().map(|(&key, &position)| (key, position))
    }

    /// Raw distance between two keys, or `None` if either is unmapped.
    pub fn key_distance(&self, a: char, b: char) -> Option<f32> {
        let a = self.position(a)?;
        let b = self.position(b)?;
        Some(a.distance(&b))
    }

    /// Normalized cost of typing `b` where `a` was intended, in `[0, 1]`.
    ///
    /// - `0.0` when the characters are equal ignoring case
    /// - `1.0` when either character has no key on this layout
    /// - `1.0` when the layout is degenerate
    /// - otherwise the key distance divided by [`max_distance`](Self::max_distance)
    pub fn substitution_cost(&self, a: char, b: char) -> f64 {
        let a = fold_case(a);
        let b = fold_case(b);

        if a == b {
            return 0.0;
        }

        match (self.positions.get(&a), self.positions.get(&b)) {
            (Some(pa), Some(pb)) if self.max_distance > 0.0 => {
                let cost = f64::from(pa.distance(pb) / self.max_distance);
                if cost.is_finite() {
                    cost.min(1.0)
                } else {
                    1.0
                }
            }
            _ => 1.0,
        }
    }
}

impl Default for KeyboardLayout {
    /// The QWERTY layout.
    fn default() -> Self {
        LayoutKind::Qwerty.layout().clone()
    }
}

impl AsRef<KeyboardLayout> for KeyboardLayout {
    fn as_ref(&self) -> &KeyboardLayout {
        self
    }
}

impl From<LayoutKind> for KeyboardLayout {
    fn from(kind: LayoutKind) -> Self {
        kind.layout().clone()
    }
}

fn fold_keys<I>(positions: I) -> FxHashMap<char, KeyPosition>
where
    I: IntoIterator<Item = (char, KeyPosition)>,
{
    let mut table = FxHashMap::default();
    for (key, position) in positions {
        table.insert(fold_case(key), position);
    }
    table
}

fn max_pairwise_distance(positions: &FxHashMap<char, KeyPosition>) -> f32 {
    let keys: SmallVec<[KeyPosition; 64]> = positions.values().copied().collect();

    let mut max_distance = 0.0f32;
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            let distance = a.distance(b);
            if distance > max_distance {
                max_distance = distance;
            }
        }
    }
    max_distance
}
