//! Uno Icons - Icon Library Generator
//!
//! Emits one SVG per (category, style, size, icon) plus `index.json` and
//! `types.ts` describing what was generated.
//!
//! # Guarantees
//! 1. Every coordinate is a fraction of the icon size
//! 2. Unknown names and styles fall back, never fail
//! 3. Output is deterministic for a given configuration
//! 4. Any I/O failure ends the run

pub mod catalog;
pub mod config;
pub mod geometry;
pub mod style;
pub mod svg;
pub mod manifest;
pub mod typedefs;
pub mod validation;
pub mod hashing;
pub mod pipeline;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{ConfigError, GeneratorConfig, Palette};
pub use geometry::{GlyphTable, ResolvedGlyph};
pub use style::{Style, StyleKind};
pub use manifest::Manifest;
pub use validation::{ConfigViolation, Linter, ViolationSeverity};
pub use hashing::digest_tree;
pub use pipeline::{GenerationReport, IconPipeline, PipelineError};

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
