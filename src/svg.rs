//! SVG Document Builder

use kurbo::BezPath;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use thiserror::Error;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error while writing markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("Markup is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// The painted outline of a path element.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub stroke_width: f64,
}

/// Translucent inner shape of a two-tone icon.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryShape<'a> {
    pub path: &'a BezPath,
    pub fill: &'a str,
    pub opacity: f64,
}

/// One square icon document
#[derive(Debug, Clone)]
pub struct SvgDocument<'a> {
    pub size: u32,
    pub primary: &'a BezPath,
    pub paint: Paint<'a>,
    pub secondary: Option<SecondaryShape<'a>>,
}

impl SvgDocument<'_> {
    /// Pretty-printed markup, two-space indented, newline terminated.
    pub fn render(&self) -> Result<String, SvgError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        let size = self.size.to_string();
        let view_box = format!("0 0 {size} {size}");

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let root = BytesStart::new("svg").with_attributes([
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("viewBox", view_box.as_str()),
            ("xmlns", SVG_NAMESPACE),
        ]);
        writer.write_event(Event::Start(root))?;

        let d = self.primary.to_svg();
        let stroke_width = self.paint.stroke_width.to_string();
        let path = BytesStart::new("path").with_attributes([
            ("d", d.as_str()),
            ("fill", self.paint.fill),
            ("stroke", self.paint.stroke),
            ("stroke-width", stroke_width.as_str()),
        ]);
        writer.write_event(Event::Empty(path))?;

        if let Some(secondary) = &self.secondary {
            let d = secondary.path.to_svg();
            let opacity = secondary.opacity.to_string();
            let path = BytesStart::new("path").with_attributes([
                ("d", d.as_str()),
                ("fill", secondary.fill),
                ("opacity", opacity.as_str()),
            ]);
            writer.write_event(Event::Empty(path))?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;

        let mut markup = String::from_utf8(writer.into_inner())?;
        markup.push('\n');
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;

    /// (element name, attributes) for every element in document order.
    fn elements(markup: &str) -> Vec<(String, Vec<(String, String)>)> {
        let mut reader = Reader::from_str(markup);
        let mut found = vec![];
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                    let attrs = e
                        .attributes()
                        .map(|a| {
                            let a = a.unwrap();
                            (
                                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                                a.unescape_value().unwrap().into_owned(),
                            )
                        })
                        .collect();
                    found.push((name, attrs));
                }
                Event::Eof => break,
                _ => {}
            }
        }
        found
    }

    fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> &'a str {
        attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing attribute {key}"))
    }

    fn triangle() -> BezPath {
        let mut path = BezPath::new();
        path.move_to((12.0, 18.0));
        path.line_to((6.0, 6.0));
        path.line_to((18.0, 6.0));
        path.close_path();
        path
    }

    #[test]
    fn test_single_path_document() {
        let primary = triangle();
        let doc = SvgDocument {
            size: 24,
            primary: &primary,
            paint: Paint { fill: "none", stroke: "#000000", stroke_width: 1.5 },
            secondary: None,
        };
        let markup = doc.render().unwrap();
        assert!(markup.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(markup.ends_with("</svg>\n"));

        let els = elements(&markup);
        assert_eq!(els.len(), 2);
        let (name, root) = &els[0];
        assert_eq!(name, "svg");
        assert_eq!(attr(root, "width"), "24");
        assert_eq!(attr(root, "height"), "24");
        assert_eq!(attr(root, "viewBox"), "0 0 24 24");
        assert_eq!(attr(root, "xmlns"), SVG_NAMESPACE);

        let (name, path) = &els[1];
        assert_eq!(name, "path");
        assert_eq!(attr(path, "d"), primary.to_svg());
        assert_eq!(attr(path, "fill"), "none");
        assert_eq!(attr(path, "stroke"), "#000000");
        assert_eq!(attr(path, "stroke-width"), "1.5");
    }

    #[test]
    fn test_secondary_path_is_appended() {
        let primary = triangle();
        let inner = triangle();
        let doc = SvgDocument {
            size: 24,
            primary: &primary,
            paint: Paint { fill: "#1890ff", stroke: "none", stroke_width: 1.0 },
            secondary: Some(SecondaryShape { path: &inner, fill: "#52c41a", opacity: 0.4 }),
        };
        let els = elements(&doc.render().unwrap());
        assert_eq!(els.len(), 3);
        assert_eq!(attr(&els[1].1, "stroke-width"), "1");
        let (name, second) = &els[2];
        assert_eq!(name, "path");
        assert_eq!(attr(second, "fill"), "#52c41a");
        assert_eq!(attr(second, "opacity"), "0.4");
        assert!(second.iter().all(|(k, _)| k != "stroke"));
    }

    #[test]
    fn test_output_is_indented() {
        let primary = triangle();
        let doc = SvgDocument {
            size: 16,
            primary: &primary,
            paint: Paint { fill: "#000000", stroke: "none", stroke_width: 1.0 },
            secondary: None,
        };
        let markup = doc.render().unwrap();
        assert!(markup.lines().any(|line| line.starts_with("  <path ")));
    }
}
