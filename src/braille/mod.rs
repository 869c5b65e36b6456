//! Braille cell reference data
//!
//! # Components
//! - `pattern.rs`: six-dot pattern type and dot-number conversions
//! - `charset.rs`: character table with JSON load and built-in fallback

pub mod charset;
pub mod pattern;

pub use charset::{BrailleCharacter, Charset};
pub use pattern::{DotPattern, CELL_DOTS};

// These are only used inside the module itself
#[allow(unused_imports)]
pub use pattern::{dots_label, dots_to_pattern, pattern_to_dots};
