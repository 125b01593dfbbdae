//! Parser configuration.

/// How to handle a selector that appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Append the later block's declarations to the existing list.
    #[default]
    Append,
    /// Replace the existing list. The selector keeps its first position.
    Replace,
}

/// How to handle a block whose selector is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySelectorPolicy {
    /// Consume the block up to its `}` without emitting anything.
    #[default]
    Skip,
    /// Emit the block's declarations under the `""` key.
    Keep,
}

/// Configuration for [`CssParser`](super::CssParser).
///
/// # Example
///
/// ```
/// use naive_css::parser::{ParserConfig, DuplicatePolicy};
///
/// let config = ParserConfig::new()
///     .duplicate_selectors(DuplicatePolicy::Replace)
///     .strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Policy for repeated selectors.
    pub duplicate_selectors: DuplicatePolicy,
    /// Policy for empty selectors.
    pub empty_selectors: EmptySelectorPolicy,
    /// Whether [`CssParser::parse_strict`](super::CssParser::parse_strict)
    /// rejects input that produced diagnostics.
    pub strict: bool,
}

impl ParserConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate selector policy.
    pub fn duplicate_selectors(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_selectors = policy;
        self
    }

    /// Set the empty selector policy.
    pub fn empty_selectors(mut self, policy: EmptySelectorPolicy) -> Self {
        self.empty_selectors = policy;
        self
    }

    /// Enable or disable strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
