//! The selector → declarations mapping produced by a parse.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;

use crate::declaration::Declaration;
use crate::parser::CssParser;
use crate::{Error, Result};

/// A parsed stylesheet.
///
/// Maps each selector to its declarations in source order. Selectors keep
/// the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Stylesheet {
    rules: IndexMap<String, Vec<Declaration>>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet from CSS text with the default configuration.
    pub fn from_css(css: &str) -> Self {
        CssParser::new().parse(css)
    }

    /// Load a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        tracing::debug!(
            target: "naive_css::rules",
            "Loaded stylesheet {} ({} bytes)",
            path.display(),
            content.len()
        );
        Ok(Self::from_css(&content))
    }

    /// Declarations for a selector, if it appeared in the input.
    pub fn get(&self, selector: &str) -> Option<&[Declaration]> {
        self.rules.get(selector).map(Vec::as_slice)
    }

    /// Check whether a selector appeared in the input.
    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Iterate over selectors in order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterate over `(selector, declarations)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Declaration])> {
        self.rules
            .iter()
            .map(|(selector, declarations)| (selector.as_str(), declarations.as_slice()))
    }

    /// Get the number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consume the stylesheet, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Vec<Declaration>> {
        self.rules
    }
}

impl From<IndexMap<String, Vec<Declaration>>> for Stylesheet {
    fn from(rules: IndexMap<String, Vec<Declaration>>) -> Self {
        Self { rules }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (selector, declarations) in &self.rules {
            writeln!(f, "{selector} {{")?;
            for declaration in declarations {
                writeln!(f, "    {declaration};")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
