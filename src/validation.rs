//! Configuration Lint - Rule/Report Separation
//!
//! Rules produce structured violations.
//! Nothing here blocks generation: the pipeline logs the report and proceeds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::style::StyleKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
}

impl ConfigViolation {
    fn new(rule: &str, severity: ViolationSeverity, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            message,
        }
    }
}

/// Lint rule trait - produces violations
pub trait LintRule {
    fn name(&self) -> &'static str;
    fn check(&self, config: &GeneratorConfig, catalog: &Catalog) -> Vec<ConfigViolation>;
}

// --- Concrete Rules ---

/// Repeated names inside one category map to the same output file.
pub struct DuplicateIconNameRule;

impl LintRule for DuplicateIconNameRule {
    fn name(&self) -> &'static str { "duplicate_icon_name" }

    fn check(&self, config: &GeneratorConfig, catalog: &Catalog) -> Vec<ConfigViolation> {
        let mut violations = vec![];

        for category in &config.categories {
            let mut first_seen: HashMap<&str, &str> = HashMap::new();
            for entry in catalog.entries_in(category) {
                match first_seen.get(entry.icon_name).copied() {
                    Some(earlier) => violations.push(ConfigViolation::new(
                        self.name(),
                        ViolationSeverity::Warning,
                        format!(
                            "{}/{} repeats '{}' from {}/{}; both write {}/<style>/<size>/{}.svg",
                            category, entry.subcategory, entry.icon_name,
                            category, earlier, category, entry.icon_name,
                        ),
                    )),
                    None => {
                        first_seen.insert(entry.icon_name, entry.subcategory);
                    }
                }
            }
        }

        violations
    }
}

pub struct UnknownCategoryRule;

impl LintRule for UnknownCategoryRule {
    fn name(&self) -> &'static str { "unknown_category" }

    fn check(&self, config: &GeneratorConfig, catalog: &Catalog) -> Vec<ConfigViolation> {
        config
            .categories
            .iter()
            .filter(|category| !catalog.contains_category(category))
            .map(|category| {
                ConfigViolation::new(
                    self.name(),
                    ViolationSeverity::Warning,
                    format!("category '{}' is not in the catalog; it will be empty", category),
                )
            })
            .collect()
    }
}

pub struct UnrecognizedStyleRule;

impl LintRule for UnrecognizedStyleRule {
    fn name(&self) -> &'static str { "unrecognized_style" }

    fn check(&self, config: &GeneratorConfig, _catalog: &Catalog) -> Vec<ConfigViolation> {
        config
            .styles
            .iter()
            .filter(|style| style.kind() == StyleKind::Unrecognized)
            .map(|style| {
                ConfigViolation::new(
                    self.name(),
                    ViolationSeverity::Info,
                    format!("style '{}' is not recognized; rendering it as filled", style),
                )
            })
            .collect()
    }
}

pub struct ZeroSizeRule;

impl LintRule for ZeroSizeRule {
    fn name(&self) -> &'static str { "zero_size" }

    fn check(&self, config: &GeneratorConfig, _catalog: &Catalog) -> Vec<ConfigViolation> {
        if config.sizes.contains(&0) {
            vec![ConfigViolation::new(
                self.name(),
                ViolationSeverity::Warning,
                "size 0 produces empty documents".to_string(),
            )]
        } else {
            vec![]
        }
    }
}

pub struct ColorFormatRule;

impl ColorFormatRule {
    fn is_hex_color(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(digits) => {
                matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }
}

impl LintRule for ColorFormatRule {
    fn name(&self) -> &'static str { "color_format" }

    fn check(&self, config: &GeneratorConfig, _catalog: &Catalog) -> Vec<ConfigViolation> {
        config
            .colors
            .entries()
            .into_iter()
            .filter(|(_, value)| !Self::is_hex_color(value))
            .map(|(key, value)| {
                ConfigViolation::new(
                    self.name(),
                    ViolationSeverity::Warning,
                    format!("color '{}' = '{}' is not #rgb or #rrggbb", key, value),
                )
            })
            .collect()
    }
}

pub struct EmptyDomainRule;

impl LintRule for EmptyDomainRule {
    fn name(&self) -> &'static str { "empty_domain" }

    fn check(&self, config: &GeneratorConfig, _catalog: &Catalog) -> Vec<ConfigViolation> {
        [
            ("categories", config.categories.is_empty()),
            ("styles", config.styles.is_empty()),
            ("sizes", config.sizes.is_empty()),
        ]
        .into_iter()
        .filter(|(_, empty)| *empty)
        .map(|(domain, _)| {
            ConfigViolation::new(
                self.name(),
                ViolationSeverity::Warning,
                format!("no {} configured; no icons will be generated", domain),
            )
        })
        .collect()
    }
}

/// Linter runs every rule and collects the results
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(EmptyDomainRule),
                Box::new(UnknownCategoryRule),
                Box::new(DuplicateIconNameRule),
                Box::new(UnrecognizedStyleRule),
                Box::new(ZeroSizeRule),
                Box::new(ColorFormatRule),
            ],
        }
    }

    pub fn check(&self, config: &GeneratorConfig, catalog: &Catalog) -> Vec<ConfigViolation> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(config, catalog))
            .collect()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
