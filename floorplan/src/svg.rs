//! Fetched SVG markup: validation, element-id index, and natural size.
//!
//! The markup is parsed once on arrival so a non-SVG body fails the load
//! immediately and binding can run against an index instead of the live DOM.
//! The raw text is kept for injection into the host container.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::collections::HashMap;

use roxmltree::{Document, Node, ParsingOptions};

use crate::controller::LoadError;
use crate::shape_id::ShapeLookup;
use crate::viewport::Size;

/// A validated SVG document ready for injection.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    markup: String,
    /// Element `id` → tag name.
    ids: HashMap<String, String>,
    natural_size: Option<Size>,
}

impl SvgDocument {
    /// Validate `markup` and index its element identifiers.
    ///
    /// # Errors
    ///
    /// [`LoadError::NotSvg`] when there is no `<svg` root, [`LoadError::MalformedSvg`]
    /// when the XML cannot be parsed.
    pub fn parse(markup: String) -> Result<Self, LoadError> {
        if !markup.to_ascii_lowercase().contains("<svg") {
            return Err(LoadError::NotSvg);
        }

        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let (ids, natural_size) = {
            let doc = Document::parse_with_options(&markup, options)
                .map_err(|e| LoadError::MalformedSvg(e.to_string()))?;
            let root = doc.root_element();
            if !root.tag_name().name().eq_ignore_ascii_case("svg") {
                return Err(LoadError::NotSvg);
            }
            let ids = root
                .descendants()
                .filter(Node::is_element)
                .filter_map(|node| {
                    node.attribute("id")
                        .map(|id| (id.to_owned(), node.tag_name().name().to_owned()))
                })
                .collect::<HashMap<_, _>>();
            (ids, natural_size(root))
        };

        Ok(Self { markup, ids, natural_size })
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Intrinsic size from `viewBox`, else from numeric `width`/`height`.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.natural_size
    }

    #[must_use]
    pub fn id_count(&self) -> usize {
        self.ids.len()
    }
}

impl ShapeLookup for SvgDocument {
    type Element = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.ids.get(id).cloned()
    }
}

fn natural_size(root: Node<'_, '_>) -> Option<Size> {
    if let Some(view_box) = root.attribute("viewBox") {
        let parts: Vec<f64> = view_box
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .filter_map(parse_length)
            .collect();
        if let [_, _, width, height] = parts[..] {
            if let Some(size) = Size::new_positive(width, height) {
                return Some(size);
            }
        }
    }
    let width = root.attribute("width").and_then(parse_length)?;
    let height = root.attribute("height").and_then(parse_length)?;
    Size::new_positive(width, height)
}

/// Numeric length in user units; percentages and unknown units are rejected.
fn parse_length(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
