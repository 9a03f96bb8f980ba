//! Style Resolver - fill/stroke policy per visual style
//!
//! A style keeps the name it was configured with (used for paths and
//! declarations) and carries the policy kind it maps to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Palette;

/// Opacity of the secondary shape in two-tone icons.
pub const SECONDARY_OPACITY: f64 = 0.4;

const NONE: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Outline,
    Filled,
    TwoTone,
    /// Not a known style. Rendered like `Filled`.
    Unrecognized,
}

impl StyleKind {
    fn from_name(name: &str) -> Self {
        match name {
            "outline" | "line" => Self::Outline,
            "filled" => Self::Filled,
            "two-tone" | "duotone" => Self::TwoTone,
            _ => Self::Unrecognized,
        }
    }
}

/// A configured icon style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Style {
    name: String,
    kind: StyleKind,
}

impl Style {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = StyleKind::from_name(&name);
        Self { name, kind }
    }

    pub fn outline() -> Self {
        Self::new("outline")
    }

    pub fn filled() -> Self {
        Self::new("filled")
    }

    pub fn two_tone() -> Self {
        Self::new("two-tone")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    pub fn is_two_tone(&self) -> bool {
        self.kind == StyleKind::TwoTone
    }

    pub fn fill<'p>(&self, palette: &'p Palette) -> &'p str {
        match self.kind {
            StyleKind::Outline => NONE,
            StyleKind::Filled | StyleKind::Unrecognized => palette.default.as_str(),
            StyleKind::TwoTone => palette.primary.as_str(),
        }
    }

    pub fn stroke<'p>(&self, palette: &'p Palette) -> &'p str {
        match self.kind {
            StyleKind::Outline => palette.default.as_str(),
            StyleKind::Filled | StyleKind::TwoTone | StyleKind::Unrecognized => NONE,
        }
    }

    /// Outline strokes thicken with size, never below one pixel.
    pub fn stroke_width(&self, size: u32) -> f64 {
        match self.kind {
            StyleKind::Outline => (f64::from(size) / 16.0).max(1.0),
            _ => 1.0,
        }
    }

    /// Paint for the secondary shape; only two-tone styles have one.
    pub fn secondary_fill<'p>(&self, palette: &'p Palette) -> Option<&'p str> {
        self.is_two_tone().then_some(palette.secondary.as_str())
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Style {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.name
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
