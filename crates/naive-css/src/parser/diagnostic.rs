//! Diagnostics for tolerated malformations.

/// What kind of malformed input the scanner stepped over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `{` was reached with nothing but whitespace before it.
    EmptySelector,
    /// A value was terminated without a property name (e.g. `: red;`).
    MissingPropertyName,
    /// A `}` appeared while scanning a selector.
    StrayCloseBrace,
    /// Input ended inside a declaration block; the block was discarded.
    UnclosedBlock {
        /// The selector whose block never closed.
        selector: String,
    },
    /// Input ended with selector text that never opened a block.
    TrailingSelector {
        /// The trimmed leftover text.
        text: String,
    },
}

/// A tolerated parse problem with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Line number of the triggering character (1-indexed).
    pub line: u32,
    /// Column number of the triggering character (1-indexed).
    pub column: u32,
}

impl Diagnostic {
    /// Create a new diagnostic at the given location.
    pub fn new(kind: DiagnosticKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelector => write!(f, "selector is empty, block skipped"),
            Self::MissingPropertyName => write!(f, "value has no property name"),
            Self::StrayCloseBrace => write!(f, "unexpected '}}' in selector"),
            Self::UnclosedBlock { selector } => {
                write!(f, "block for '{selector}' never closed, discarded")
            }
            Self::TrailingSelector { text } => {
                write!(f, "selector '{text}' has no block")
            }
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}
