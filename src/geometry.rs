//! Geometry Resolver - unit-square glyph templates scaled to pixel size
//!
//! Every template coordinate is a fraction of the icon size, so one template
//! serves all sizes. Denominators are powers of two; scaled values are exact.

use kurbo::{Affine, BezPath, PathEl, Point};
use std::collections::HashMap;

/// Point at (xn/xd, yn/yd) of the unit square.
macro_rules! at {
    ($xn:literal / $xd:literal, $yn:literal / $yd:literal) => {
        Point::new($xn as f64 / $xd as f64, $yn as f64 / $yd as f64)
    };
}

const CIRCLE: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 2, 1 / 4)),
    PathEl::CurveTo(at!(3 / 8, 1 / 4), at!(1 / 4, 3 / 8), at!(1 / 4, 1 / 2)),
    PathEl::CurveTo(at!(1 / 4, 5 / 8), at!(3 / 8, 3 / 4), at!(1 / 2, 3 / 4)),
    PathEl::CurveTo(at!(5 / 8, 3 / 4), at!(3 / 4, 5 / 8), at!(3 / 4, 1 / 2)),
    PathEl::CurveTo(at!(3 / 4, 3 / 8), at!(5 / 8, 1 / 4), at!(1 / 2, 1 / 4)),
    PathEl::ClosePath,
];

const DOT: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 2, 5 / 8)),
    PathEl::CurveTo(at!(9 / 32, 5 / 8), at!(7 / 16, 11 / 16), at!(1 / 2, 11 / 16)),
    PathEl::CurveTo(at!(9 / 16, 11 / 16), at!(23 / 32, 5 / 8), at!(1 / 2, 5 / 8)),
    PathEl::ClosePath,
];

const ARROW_UP: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 2, 3 / 4)),
    PathEl::LineTo(at!(1 / 4, 1 / 4)),
    PathEl::LineTo(at!(3 / 4, 1 / 4)),
    PathEl::ClosePath,
];

const ARROW_DOWN: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 2, 1 / 4)),
    PathEl::LineTo(at!(1 / 4, 3 / 4)),
    PathEl::LineTo(at!(3 / 4, 3 / 4)),
    PathEl::ClosePath,
];

const ARROW_LEFT: &[PathEl] = &[
    PathEl::MoveTo(at!(3 / 4, 1 / 2)),
    PathEl::LineTo(at!(1 / 4, 1 / 4)),
    PathEl::LineTo(at!(1 / 4, 3 / 4)),
    PathEl::ClosePath,
];

const ARROW_RIGHT: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 4, 1 / 2)),
    PathEl::LineTo(at!(3 / 4, 1 / 4)),
    PathEl::LineTo(at!(3 / 4, 3 / 4)),
    PathEl::ClosePath,
];

const CHECK: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 4, 1 / 2)),
    PathEl::LineTo(at!(3 / 8, 5 / 8)),
    PathEl::LineTo(at!(3 / 4, 3 / 8)),
    PathEl::ClosePath,
];

const TRIANGLE: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 2, 1 / 4)),
    PathEl::LineTo(at!(3 / 4, 3 / 4)),
    PathEl::LineTo(at!(1 / 4, 3 / 4)),
    PathEl::ClosePath,
];

const CROSS: &[PathEl] = &[
    PathEl::MoveTo(at!(1 / 4, 1 / 4)),
    PathEl::LineTo(at!(3 / 4, 3 / 4)),
    PathEl::MoveTo(at!(3 / 4, 1 / 4)),
    PathEl::LineTo(at!(1 / 4, 3 / 4)),
    PathEl::ClosePath,
];

/// Unit-square outline of one glyph. The primary shape is the
/// concatenation of `primary` parts.
#[derive(Debug, Clone, Copy)]
pub struct GlyphTemplate {
    pub primary: &'static [&'static [PathEl]],
    pub secondary: Option<&'static [PathEl]>,
}

impl GlyphTemplate {
    const fn plain(shape: &'static [&'static [PathEl]]) -> Self {
        Self { primary: shape, secondary: None }
    }

    const fn two_tone(shape: &'static [&'static [PathEl]], inner: &'static [PathEl]) -> Self {
        Self { primary: shape, secondary: Some(inner) }
    }

    /// Scale the template to a `size` × `size` canvas.
    pub fn scale(&self, size: u32) -> ResolvedGlyph {
        let transform = Affine::scale(f64::from(size));
        let primary = self
            .primary
            .iter()
            .flat_map(|part| part.iter().copied())
            .collect::<BezPath>();

        ResolvedGlyph {
            primary: transform * primary,
            secondary: self
                .secondary
                .map(|inner| transform * BezPath::from_vec(inner.to_vec())),
        }
    }
}

const FALLBACK: GlyphTemplate = GlyphTemplate::plain(&[CIRCLE]);

const TEMPLATES: &[(&str, GlyphTemplate)] = &[
    ("arrow-up", GlyphTemplate::plain(&[ARROW_UP])),
    ("arrow-down", GlyphTemplate::plain(&[ARROW_DOWN])),
    ("arrow-left", GlyphTemplate::plain(&[ARROW_LEFT])),
    ("arrow-right", GlyphTemplate::plain(&[ARROW_RIGHT])),
    ("info", GlyphTemplate::two_tone(&[CIRCLE, DOT], DOT)),
    ("success", GlyphTemplate::plain(&[CHECK])),
    ("warning", GlyphTemplate::two_tone(&[TRIANGLE, DOT], DOT)),
    ("error", GlyphTemplate::plain(&[CROSS])),
    ("question", GlyphTemplate::two_tone(&[CIRCLE, DOT], DOT)),
];

/// Geometry of one icon at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGlyph {
    pub primary: BezPath,
    pub secondary: Option<BezPath>,
}

/// Icon name → glyph template lookup with a circular fallback.
pub struct GlyphTable {
    templates: HashMap<&'static str, GlyphTemplate>,
    fallback: GlyphTemplate,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self {
            templates: TEMPLATES.iter().copied().collect(),
            fallback: FALLBACK,
        }
    }

    /// Template for `icon_name`, or the fallback circle for names without one.
    pub fn template(&self, icon_name: &str) -> &GlyphTemplate {
        self.templates.get(icon_name).unwrap_or(&self.fallback)
    }

    pub fn has_template(&self, icon_name: &str) -> bool {
        self.templates.contains_key(icon_name)
    }

    pub fn resolve(&self, icon_name: &str, size: u32) -> ResolvedGlyph {
        self.template(icon_name).scale(size)
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(path: &BezPath) -> Vec<(f64, f64)> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some((p.x, p.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_arrow_up_at_24() {
        let glyph = GlyphTable::new().resolve("arrow-up", 24);
        assert_eq!(vertices(&glyph.primary), [(12.0, 18.0), (6.0, 6.0), (18.0, 6.0)]);
        assert!(glyph.secondary.is_none());
    }

    #[test]
    fn test_scales_linearly() {
        let table = GlyphTable::new();
        let small = vertices(&table.resolve("arrow-right", 16).primary);
        let large = vertices(&table.resolve("arrow-right", 48).primary);
        for (s, l) in small.iter().zip(&large) {
            assert_eq!(s.0 * 3.0, l.0);
            assert_eq!(s.1 * 3.0, l.1);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_circle() {
        let table = GlyphTable::new();
        assert!(!table.has_template("not-a-real-icon"));
        let glyph = table.resolve("not-a-real-icon", 32);
        assert_eq!(glyph, FALLBACK.scale(32));
        assert_eq!(glyph.primary.elements().len(), CIRCLE.len());
        assert!(glyph.secondary.is_none());
    }

    #[test]
    fn test_secondary_only_for_two_tone_glyphs() {
        let table = GlyphTable::new();
        for name in ["info", "warning", "question"] {
            assert!(table.resolve(name, 24).secondary.is_some(), "{name}");
        }
        for name in ["arrow-up", "success", "error", "home"] {
            assert!(table.resolve(name, 24).secondary.is_none(), "{name}");
        }
    }

    #[test]
    fn test_dot_uses_fine_fractions() {
        let glyph = GlyphTable::new().resolve("info", 32);
        let dot = glyph.secondary.unwrap();
        match dot.elements()[1] {
            PathEl::CurveTo(p1, p2, p3) => {
                assert_eq!((p1.x, p1.y), (9.0, 20.0));
                assert_eq!((p2.x, p2.y), (14.0, 22.0));
                assert_eq!((p3.x, p3.y), (16.0, 22.0));
            }
            ref other => panic!("unexpected element {other:?}"),
        }
    }

    #[test]
    fn test_primary_concatenates_parts() {
        let glyph = GlyphTable::new().resolve("warning", 16);
        assert_eq!(glyph.primary.elements().len(), TRIANGLE.len() + DOT.len());
    }
}
