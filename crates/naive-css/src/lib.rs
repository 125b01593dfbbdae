//! A minimal, hand-written CSS parser.
//!
//! This crate turns CSS text into an ordered mapping from selector to the
//! declarations written under it. It targets simple stylesheets:
//!
//! - **Selectors** are opaque strings, trimmed of surrounding whitespace
//! - **Declarations** keep their source order; a value may be absent
//! - **Malformed input** is tolerated and reported as diagnostics
//! - **Repeated selectors** accumulate (or replace, if configured)
//!
//! At-rules, nested rules, comments and escapes are not interpreted.
//!
//! # Example
//!
//! ```
//! use naive_css::prelude::*;
//!
//! let mut parser = CssParser::new();
//! let sheet = parser.parse("a { color: red; } a { display }");
//!
//! let decls = sheet.get("a").unwrap();
//! assert_eq!(decls[0], Declaration::with_value("color", "red"));
//! assert_eq!(decls[1], Declaration::without_value("display"));
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing` under the `naive_css` targets and never
//! installs a subscriber itself.

pub mod declaration;
pub mod parser;
pub mod rules;

mod error;

pub use declaration::Declaration;
pub use error::{Error, Result};
pub use parser::{CssParser, parse_css};
pub use rules::Stylesheet;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::declaration::Declaration;
    pub use crate::parser::{
        CssParser, Diagnostic, DiagnosticKind, DuplicatePolicy, EmptySelectorPolicy, ParserConfig,
        parse_css,
    };
    pub use crate::rules::Stylesheet;
}
