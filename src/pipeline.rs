//! Generation Pipeline - Single Entry Point
//!
//! Clear → generate → manifest → type declarations. Each stage finishes
//! before the next starts; the first I/O failure ends the run.

use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::GeneratorConfig;
use crate::geometry::GlyphTable;
use crate::hashing::digest_tree;
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::style::{Style, SECONDARY_OPACITY};
use crate::svg::{Paint, SecondaryShape, SvgDocument, SvgError};
use crate::typedefs::{TypeDeclarations, TYPES_FILE};
use crate::validation::{Linter, ViolationSeverity};

pub const ICON_EXTENSION: &str = "svg";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {icon} ({style}, {size}px): {source}")]
    Render {
        icon: String,
        style: String,
        size: u32,
        #[source]
        source: SvgError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Io { path, source }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub icons_written: usize,
    pub manifest_path: PathBuf,
    pub types_path: PathBuf,
    /// SHA-256 of the whole output tree
    pub digest: String,
}

/// The generation pipeline - owns its configuration for the whole run
pub struct IconPipeline {
    config: GeneratorConfig,
    catalog: Catalog,
    glyphs: GlyphTable,
    linter: Linter,
}

impl IconPipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    pub fn with_catalog(config: GeneratorConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            glyphs: GlyphTable::new(),
            linter: Linter::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// `<root>/<category>/<style>/<size>/<name>.svg`
    pub fn icon_path(&self, entry: &CatalogEntry<'_>, style: &Style, size: u32) -> PathBuf {
        self.config
            .output_dir
            .join(entry.category)
            .join(style.name())
            .join(size.to_string())
            .join(format!("{}.{}", entry.icon_name, ICON_EXTENSION))
    }

    /// Run every stage in order.
    pub fn run(&self) -> Result<GenerationReport, PipelineError> {
        info!("Starting icon generation into {}", self.config.output_dir.display());
        self.report_lint();

        self.clean_output_dir()?;
        let icons_written = self.generate_icons()?;
        let manifest_path = self.generate_index()?;
        let types_path = self.generate_type_definitions()?;

        let root = &self.config.output_dir;
        let digest = digest_tree(root).map_err(PipelineError::io(root))?;

        info!("Icon generation completed: {} icons", icons_written);
        Ok(GenerationReport {
            output_dir: self.config.output_dir.clone(),
            icons_written,
            manifest_path,
            types_path,
            digest,
        })
    }

    fn report_lint(&self) {
        for violation in self.linter.check(&self.config, &self.catalog) {
            match violation.severity {
                ViolationSeverity::Warning => warn!("{}: {}", violation.rule, violation.message),
                ViolationSeverity::Info => info!("{}: {}", violation.rule, violation.message),
            }
        }
    }

    /// Remove the output root and everything under it, then recreate it.
    pub fn clean_output_dir(&self) -> Result<(), PipelineError> {
        let root = &self.config.output_dir;
        if root.exists() {
            fs::remove_dir_all(root).map_err(PipelineError::io(root))?;
        }
        fs::create_dir_all(root).map_err(PipelineError::io(root))?;
        info!("Cleaned output directory: {}", root.display());
        Ok(())
    }

    /// Write one document per category × icon × style × size. Returns the
    /// number of distinct files on disk; repeated catalog names rewrite the
    /// same file and count once.
    pub fn generate_icons(&self) -> Result<usize, PipelineError> {
        let mut written = HashSet::new();

        for category in &self.config.categories {
            if !self.catalog.contains_category(category) {
                debug!("Skipping category {} with no catalog entries", category);
            }
            for entry in self.catalog.entries_in(category) {
                if !self.glyphs.has_template(entry.icon_name) {
                    debug!("No template for {}; using the placeholder circle", entry.icon_name);
                }
                for style in &self.config.styles {
                    for &size in &self.config.sizes {
                        written.insert(self.generate_icon(&entry, style, size)?);
                    }
                }
            }
        }

        Ok(written.len())
    }

    fn generate_icon(&self, entry: &CatalogEntry<'_>, style: &Style, size: u32) -> Result<PathBuf, PipelineError> {
        let markup = self.render_icon(entry.icon_name, style, size)?;

        let path = self.icon_path(entry, style, size);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(PipelineError::io(dir))?;
        }
        fs::write(&path, markup).map_err(PipelineError::io(&path))?;

        info!("Generated: {}", path.display());
        Ok(path)
    }

    /// Markup for one icon. Unknown names render the fallback circle.
    pub fn render_icon(&self, icon_name: &str, style: &Style, size: u32) -> Result<String, PipelineError> {
        let palette = &self.config.colors;
        let glyph = self.glyphs.resolve(icon_name, size);

        let secondary = match (&glyph.secondary, style.secondary_fill(palette)) {
            (Some(path), Some(fill)) => Some(SecondaryShape {
                path,
                fill,
                opacity: SECONDARY_OPACITY,
            }),
            _ => None,
        };

        let document = SvgDocument {
            size,
            primary: &glyph.primary,
            paint: Paint {
                fill: style.fill(palette),
                stroke: style.stroke(palette),
                stroke_width: style.stroke_width(size),
            },
            secondary,
        };

        document.render().map_err(|source| PipelineError::Render {
            icon: icon_name.to_string(),
            style: style.name().to_string(),
            size,
            source,
        })
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::build(&self.config, &self.catalog)
    }

    pub fn generate_index(&self) -> Result<PathBuf, PipelineError> {
        let path = self.config.output_dir.join(MANIFEST_FILE);
        let json = self.manifest().to_json()?;
        fs::write(&path, json).map_err(PipelineError::io(&path))?;
        info!("Generated index: {}", path.display());
        Ok(path)
    }

    pub fn generate_type_definitions(&self) -> Result<PathBuf, PipelineError> {
        let path = self.config.output_dir.join(TYPES_FILE);
        let ts = TypeDeclarations::build(&self.config, &self.catalog).render();
        fs::write(&path, ts).map_err(PipelineError::io(&path))?;
        info!("Generated type definitions: {}", path.display());
        Ok(path)
    }
}

impl Default for IconPipeline {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
