//! A single `property: value` pair inside a rule block.

use std::fmt;

/// A CSS declaration.
///
/// The value is optional: CSS tolerates a bare property name terminated by
/// `;` or `}` (e.g. `a { display; }`), and that is kept distinct from a
/// declaration that was never written at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Declaration {
    property: String,
    value: Option<String>,
}

impl Declaration {
    /// Create a declaration from a property name and an optional value.
    pub fn new(property: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            property: property.into(),
            value: value.map(Into::into),
        }
    }

    /// Create a declaration that carries a value.
    pub fn with_value(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: Some(value.into()),
        }
    }

    /// Create a declaration with no value.
    pub fn without_value(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: None,
        }
    }

    /// The property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The property value, if one was written.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Check whether the declaration carries a value.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.property, value),
            None => f.write_str(&self.property),
        }
    }
}
