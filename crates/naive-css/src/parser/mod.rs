//! CSS parsing module.

mod config;
mod css_parser;
mod diagnostic;

pub use config::{DuplicatePolicy, EmptySelectorPolicy, ParserConfig};
pub use css_parser::{CssParser, parse_css};
pub use diagnostic::{Diagnostic, DiagnosticKind};
