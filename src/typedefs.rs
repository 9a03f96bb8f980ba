//! Type-Declaration Emitter - `types.ts`
//!
//! Closed unions over the generated domains plus the props shape of the
//! consuming icon component. Nothing here is validated; it is declared only.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::GENERATOR_VERSION;

pub const TYPES_FILE: &str = "types.ts";

/// (field, type, doc) of `IconProps`, in declaration order.
const ICON_PROPS: &[(&str, &str, &str)] = &[
    ("name", "IconName", "Icon name"),
    ("category?", "IconCategory", "Icon category"),
    ("iconStyle?", "IconStyle", "Icon style"),
    ("size?", "IconSize", "Icon size in pixels"),
    ("color?", "string", "Icon color"),
    ("spin?", "boolean", "Rotate continuously"),
    ("onClick?", "() => void", "Click handler"),
    ("className?", "string", "Extra class name"),
    ("style?", "React.CSSProperties", "Inline style"),
];

pub struct TypeDeclarations<'a> {
    icon_names: Vec<&'a str>,
    categories: Vec<&'a str>,
    styles: Vec<&'a str>,
    sizes: Vec<u32>,
}

impl<'a> TypeDeclarations<'a> {
    /// Icon names are taken from the configured categories, duplicates kept.
    pub fn build(config: &'a GeneratorConfig, catalog: &'a Catalog) -> Self {
        let icon_names = config
            .categories
            .iter()
            .flat_map(|category| catalog.entries_in(category))
            .map(|entry| entry.icon_name)
            .collect();

        Self {
            icon_names,
            categories: config.categories.iter().map(String::as_str).collect(),
            styles: config.styles.iter().map(|s| s.name()).collect(),
            sizes: config.sizes.clone(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("// tslint:disable\n// eslint-disable\n\n");
        out.push_str("/**\n * Icon library type definitions\n");
        let _ = writeln!(out, " * Generated by uno-icons {GENERATOR_VERSION}. Do not edit.");
        out.push_str(" */\n\n");

        union(&mut out, "All icon names", "IconName", &quote_all(&self.icon_names));
        union(&mut out, "Icon categories", "IconCategory", &quote_all(&self.categories));
        union(&mut out, "Icon styles", "IconStyle", &quote_all(&self.styles));
        let sizes: Vec<_> = self.sizes.iter().map(u32::to_string).collect();
        union(&mut out, "Icon sizes", "IconSize", &sizes);

        out.push_str("/** Icon component props */\nexport interface IconProps {\n");
        for (field, ty, doc) in ICON_PROPS {
            let _ = writeln!(out, "  /** {doc} */\n  {field}: {ty};");
        }
        out.push_str("}\n");
        out
    }
}

fn union(out: &mut String, doc: &str, name: &str, members: &[String]) {
    let _ = writeln!(out, "/** {doc} */");
    if members.is_empty() {
        let _ = writeln!(out, "export type {name} = never;\n");
        return;
    }
    let _ = write!(out, "export type {name} =");
    for member in members {
        let _ = write!(out, "\n  | {member}");
    }
    out.push_str(";\n\n");
}

fn quote_all(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
            format!("'{escaped}'")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_unions() {
        let config = GeneratorConfig::default();
        let catalog = Catalog::builtin();
        let ts = TypeDeclarations::build(&config, &catalog).render();

        assert!(ts.contains("export type IconName =\n  | 'arrow-up'\n  | 'arrow-down'"));
        assert!(ts.contains("export type IconCategory =\n  | 'basic'\n  | 'brand'\n  | 'functional';"));
        assert!(ts.contains("export type IconStyle =\n  | 'outline'\n  | 'filled'\n  | 'two-tone';"));
        assert!(ts.contains("export type IconSize =\n  | 16\n  | 24\n  | 32\n  | 48;"));
        assert!(ts.contains("  | 'distance';"));
    }

    #[test]
    fn test_props_shape() {
        let config = GeneratorConfig::default();
        let catalog = Catalog::builtin();
        let ts = TypeDeclarations::build(&config, &catalog).render();

        for line in [
            "  name: IconName;",
            "  category?: IconCategory;",
            "  iconStyle?: IconStyle;",
            "  size?: IconSize;",
            "  color?: string;",
            "  spin?: boolean;",
            "  onClick?: () => void;",
            "  className?: string;",
            "  style?: React.CSSProperties;",
        ] {
            assert!(ts.lines().any(|l| l == line), "missing {line:?}");
        }
        assert!(ts.ends_with("}\n"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let config = GeneratorConfig {
            categories: vec!["basic".into()],
            ..GeneratorConfig::default()
        };
        let catalog = Catalog::builtin();
        let ts = TypeDeclarations::build(&config, &catalog).render();
        assert_eq!(ts.matches("  | 'warning'\n").count(), 2);
    }

    #[test]
    fn test_empty_domain_is_never() {
        let config = GeneratorConfig {
            categories: vec!["nothing-here".into()],
            styles: vec![Style::new("it's")],
            sizes: vec![],
            ..GeneratorConfig::default()
        };
        let catalog = Catalog::builtin();
        let ts = TypeDeclarations::build(&config, &catalog).render();
        assert!(ts.contains("export type IconName = never;"));
        assert!(ts.contains("export type IconSize = never;"));
        assert!(ts.contains("  | 'it\\'s';"));
    }
}
