//! Parse results.

mod stylesheet;

pub use stylesheet::Stylesheet;
