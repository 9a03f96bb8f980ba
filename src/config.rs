//! Generator Configuration
//!
//! A configuration file replaces the built-in defaults wholesale; every key
//! of the schema is required.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::style::Style;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub default: String,
}

impl Palette {
    /// Named colors in schema order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("warning", self.warning.as_str()),
            ("danger", self.danger.as_str()),
            ("info", self.info.as_str()),
            ("default", self.default.as_str()),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1890ff".to_string(),
            secondary: "#52c41a".to_string(),
            warning: "#faad14".to_string(),
            danger: "#f5222d".to_string(),
            info: "#722ed1".to_string(),
            default: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub categories: Vec<String>,
    pub styles: Vec<Style>,
    pub sizes: Vec<u32>,
    pub colors: Palette,
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_output_dir(self, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..self
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("packages/icons"),
            categories: ["basic", "brand", "functional"].map(String::from).to_vec(),
            styles: vec![Style::outline(), Style::filled(), Style::two_tone()],
            sizes: vec![16, 24, 32, 48],
            colors: Palette::default(),
        }
    }
}
