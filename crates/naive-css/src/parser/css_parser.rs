//! Hand-written CSS scanner.
//!
//! The parser walks the input once, one `char` at a time, and moves between
//! three phases on the delimiters `{`, `:`, `;` and `}`:
//!
//! ```text
//!            '{'                ':'
//! Selector ───────▶ Property ───────▶ Value
//!    ▲                │  ▲ ';'          │
//!    │       '}'      │  └──────────────┤ ';'
//!    └────────────────┴─────────────────┘ '}'
//! ```
//!
//! Selectors, property names and values are trimmed before use; whitespace
//! inside a value is preserved. Malformed input never fails the parse. Each
//! problem is recorded as a [`Diagnostic`] and the scan carries on.

use std::mem;

use indexmap::IndexMap;

use super::{Diagnostic, DiagnosticKind, DuplicatePolicy, EmptySelectorPolicy, ParserConfig};
use crate::declaration::Declaration;
use crate::rules::Stylesheet;
use crate::{Error, Result};

/// Parse a CSS string with the default configuration.
///
/// # Example
///
/// ```
/// let sheet = naive_css::parse_css("a { color: red; }");
/// assert_eq!(sheet.get("a").unwrap()[0].value(), Some("red"));
/// ```
pub fn parse_css(css: &str) -> Stylesheet {
    CssParser::new().parse(css)
}

/// The lexical expectation of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Selector,
    Property,
    Value,
    /// Inside a block whose selector was empty and is being dropped.
    SkippingBlock,
}

/// Transient state of a single scan.
#[derive(Debug)]
struct ScanState {
    phase: Phase,
    selector: String,
    property: String,
    value: String,
    /// Declarations of the block currently open.
    block: Vec<Declaration>,
    line: u32,
    column: u32,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            phase: Phase::Selector,
            selector: String::new(),
            property: String::new(),
            value: String::new(),
            block: Vec::new(),
            line: 1,
            column: 0,
        }
    }
}

/// A reusable, resettable CSS parser.
///
/// Every call to [`parse`](Self::parse) starts from a clean state, so one
/// instance can be reused for any number of inputs. An instance carries
/// mutable scan state and must not be shared between threads without
/// external synchronization.
///
/// # Example
///
/// ```
/// use naive_css::CssParser;
///
/// let mut parser = CssParser::new();
/// let sheet = parser.parse("a { display }");
/// assert_eq!(sheet.get("a").unwrap()[0].value(), None);
/// ```
#[derive(Debug, Default)]
pub struct CssParser {
    config: ParserConfig,
    state: ScanState,
    rules: IndexMap<String, Vec<Declaration>>,
    diagnostics: Vec<Diagnostic>,
}

impl CssParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this parser uses.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Diagnostics recorded by the most recent parse.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Clear all scan state, any partial result and recorded diagnostics.
    pub fn reset(&mut self) {
        self.state = ScanState::default();
        self.rules.clear();
        self.diagnostics.clear();
    }

    /// Parse a CSS string into a selector → declarations mapping.
    ///
    /// Never fails: malformed input yields a partial (possibly empty) result
    /// and diagnostics retrievable through [`diagnostics`](Self::diagnostics).
    #[tracing::instrument(skip_all, target = "naive_css::parser", level = "trace", fields(len = css.len()))]
    pub fn parse(&mut self, css: &str) -> Stylesheet {
        self.reset();

        for ch in css.chars() {
            self.state.column += 1;
            self.scan(ch);
            if ch == '\n' {
                self.state.line += 1;
                self.state.column = 0;
            }
        }
        self.finish_input();

        let rules = mem::take(&mut self.rules);
        self.state = ScanState::default();
        Stylesheet::from(rules)
    }

    /// Parse and also return the diagnostics of this parse.
    pub fn parse_with_diagnostics(&mut self, css: &str) -> (Stylesheet, Vec<Diagnostic>) {
        let sheet = self.parse(css);
        (sheet, self.diagnostics.clone())
    }

    /// Parse, honoring the configured strictness.
    ///
    /// In strict mode any diagnostic turns into [`Error::Malformed`].
    /// Otherwise this behaves like [`parse`](Self::parse).
    pub fn try_parse(&mut self, css: &str) -> Result<Stylesheet> {
        let sheet = self.parse(css);
        if self.config.strict
            && let Some(err) = Error::malformed(&self.diagnostics)
        {
            return Err(err);
        }
        Ok(sheet)
    }

    fn scan(&mut self, ch: char) {
        match self.state.phase {
            Phase::Selector => match ch {
                '{' => self.open_block(),
                '}' => {
                    self.report(DiagnosticKind::StrayCloseBrace);
                    self.state.selector.push(ch);
                }
                _ => self.state.selector.push(ch),
            },
            Phase::Property => match ch {
                ':' => self.state.phase = Phase::Value,
                ';' => self.emit_bare_property(),
                '}' => {
                    self.emit_bare_property();
                    self.close_block();
                }
                c if c.is_whitespace() && self.state.property.is_empty() => {}
                c => self.state.property.push(c),
            },
            Phase::Value => match ch {
                ';' => {
                    self.emit_declaration();
                    self.state.phase = Phase::Property;
                }
                '}' => {
                    self.emit_declaration();
                    self.close_block();
                }
                c if c.is_whitespace() && self.state.value.is_empty() => {}
                c => self.state.value.push(c),
            },
            Phase::SkippingBlock => {
                if ch == '}' {
                    self.clear_buffers();
                    self.state.phase = Phase::Selector;
                }
            }
        }
    }

    fn open_block(&mut self) {
        let selector = self.state.selector.trim().to_string();
        self.state.selector = selector;

        if !self.state.selector.is_empty() {
            self.state.phase = Phase::Property;
            return;
        }

        self.report(DiagnosticKind::EmptySelector);
        self.state.phase = match self.config.empty_selectors {
            EmptySelectorPolicy::Skip => Phase::SkippingBlock,
            EmptySelectorPolicy::Keep => Phase::Property,
        };
    }

    /// Emit a property that was terminated before any `:`.
    fn emit_bare_property(&mut self) {
        let property = self.state.property.trim();
        if !property.is_empty() {
            let declaration = Declaration::without_value(property);
            self.state.block.push(declaration);
        }
        self.state.property.clear();
    }

    /// Emit the accumulated `property: value` pair.
    fn emit_declaration(&mut self) {
        let property = self.state.property.trim();
        let value = self.state.value.trim();

        if property.is_empty() {
            self.report(DiagnosticKind::MissingPropertyName);
        } else {
            let value = (!value.is_empty()).then_some(value);
            let declaration = Declaration::new(property, value);
            self.state.block.push(declaration);
        }

        self.state.property.clear();
        self.state.value.clear();
    }

    /// Move the open block's declarations into the result.
    fn close_block(&mut self) {
        let selector = mem::take(&mut self.state.selector);
        let declarations = mem::take(&mut self.state.block);

        tracing::debug!(
            target: "naive_css::parser",
            "Rule '{}' closed with {} declaration(s)",
            selector,
            declarations.len()
        );

        match self.config.duplicate_selectors {
            DuplicatePolicy::Append => {
                self.rules.entry(selector).or_default().extend(declarations);
            }
            DuplicatePolicy::Replace => {
                self.rules.insert(selector, declarations);
            }
        }

        self.clear_buffers();
        self.state.phase = Phase::Selector;
    }

    fn finish_input(&mut self) {
        match self.state.phase {
            Phase::Selector => {
                let text = self.state.selector.trim();
                if !text.is_empty() {
                    let text = text.to_string();
                    self.report(DiagnosticKind::TrailingSelector { text });
                }
            }
            Phase::Property | Phase::Value | Phase::SkippingBlock => {
                let selector = self.state.selector.clone();
                self.report(DiagnosticKind::UnclosedBlock { selector });
            }
        }
    }

    fn clear_buffers(&mut self) {
        self.state.selector.clear();
        self.state.property.clear();
        self.state.value.clear();
        self.state.block.clear();
    }

    fn report(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(kind, self.state.line, self.state.column.max(1));
        tracing::warn!(target: "naive_css::parser", "CSS parse problem: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
