//! Built-in keyboard layouts.

use std::sync::OnceLock;

use super::{CustomLayoutBuilder, KeyboardLayout};
use crate::error::Error;

/// A row of keys: characters left to right, the row's y coordinate and its
/// horizontal stagger.
struct Row {
    keys: &'static str,
    y: f32,
    x_offset: f32,
}

const fn row(keys: &'static str, y: f32, x_offset: f32) -> Row {
    Row { keys, y, x_offset }
}

const QWERTY_ROWS: [Row; 4] = [
    row("`1234567890-=", 0.0, 0.0),
    row("qwertyuiop[]\\", 1.0, 0.5),
    row("asdfghjkl;'", 2.0, 0.75),
    row("zxcvbnm,./", 3.0, 1.25),
];

const AZERTY_ROWS: [Row; 4] = [
    row("²1234567890°+", 0.0, 0.0),
    row("azertyuiop^$", 1.0, 0.5),
    row("qsdfghjklm*", 2.0, 0.75),
    row("wxcvbn,;:!", 3.0, 1.25),
];

const QWERTZ_ROWS: [Row; 4] = [
    row("^1234567890ß´", 0.0, 0.0),
    row("qwertzuiopü+", 1.0, 0.5),
    row("asdfghjklöä#", 2.0, 0.75),
    row("yxcvbnm,.-", 3.0, 1.25),
];

/// Selector for the built-in keyboard layouts.
///
/// Each variant resolves to a process-wide cached [`KeyboardLayout`], so
/// selecting a layout by kind never rebuilds its position table.
///
/// # Example
///
/// ```rust
/// use human_distance::keyboard::LayoutKind;
///
/// let kind: LayoutKind = "AZERTY".parse().unwrap();
/// assert_eq!(kind, LayoutKind::Azerty);
/// assert_eq!(kind.to_string(), "azerty");
/// assert!(kind.layout().contains('Z'));
///
/// assert!("dvorak".parse::<LayoutKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum LayoutKind {
    /// US QWERTY.
    #[default]
    Qwerty,

    /// French AZERTY.
    Azerty,

    /// German QWERTZ.
    Qwertz,
}

impl LayoutKind {
    /// Every built-in layout.
    pub const ALL: [LayoutKind; 3] = [LayoutKind::Qwerty, LayoutKind::Azerty, LayoutKind::Qwertz];

    /// Get a human-readable name for this layout
    pub fn name(&self) -> &'static str {
        match self {
            LayoutKind::Qwerty => "qwerty",
            LayoutKind::Azerty => "azerty",
            LayoutKind::Qwertz => "qwertz",
        }
    }

    /// The shared, lazily built layout for this kind.
    pub fn layout(self) -> &'static KeyboardLayout {
        static QWERTY: OnceLock<KeyboardLayout> = OnceLock::new();
        static AZERTY: OnceLock<KeyboardLayout> = OnceLock::new();
        static QWERTZ: OnceLock<KeyboardLayout> = OnceLock::new();

        let cell = match self {
            LayoutKind::Qwerty => &QWERTY,
            LayoutKind::Azerty => &AZERTY,
            LayoutKind::Qwertz => &QWERTZ,
        };
        cell.get_or_init(|| self.build())
    }

    /// Build a fresh, independently owned copy of this layout.
    pub fn build(self) -> KeyboardLayout {
        self.rows()
            .iter()
            .fold(CustomLayoutBuilder::new(), |builder, row| {
                builder.add_row(row.keys, row.y, row.x_offset)
            })
            .build()
    }

    fn rows(self) -> &'static [Row] {
        match self {
            LayoutKind::Qwerty => &QWERTY_ROWS,
            LayoutKind::Azerty => &AZERTY_ROWS,
            LayoutKind::Qwertz => &QWERTZ_ROWS,
        }
    }
}

impl AsRef<KeyboardLayout> for LayoutKind {
    fn as_ref(&self) -> &KeyboardLayout {
        self.layout()
    }
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LayoutKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "qwerty" | "us" => Ok(LayoutKind::Qwerty),
            "azerty" | "fr" => Ok(LayoutKind::Azerty),
            "qwertz" | "de" => Ok(LayoutKind::Qwertz),
            _ => Err(Error::UnknownLayout(s.to_string())),
        }
    }
}

impl TryFrom<&str> for LayoutKind {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
