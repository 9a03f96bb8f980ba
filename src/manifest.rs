//! Manifest Emitter - `index.json`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Subcategories};
use crate::config::GeneratorConfig;
use crate::style::Style;

pub const MANIFEST_FILE: &str = "index.json";

/// Catalog projection read by downstream packages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub categories: IndexMap<String, Subcategories>,
    pub styles: Vec<Style>,
    pub sizes: Vec<u32>,
}

impl Manifest {
    /// One key per configured category, in configured order. Categories the
    /// catalog does not know map to an empty object.
    pub fn build(config: &GeneratorConfig, catalog: &Catalog) -> Self {
        let categories = config
            .categories
            .iter()
            .map(|category| {
                let subcategories = catalog.subcategories(category).cloned().unwrap_or_default();
                (category.clone(), subcategories)
            })
            .collect();

        Self {
            categories,
            styles: config.styles.clone(),
            sizes: config.sizes.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
