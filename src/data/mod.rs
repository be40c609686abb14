//! Data layer - Static lookup tables and the output class vocabulary
//!
//! This module contains all static data used for LaTeX → HTML rendering:
//! - Greek letter and math symbol tables
//! - Arrow, function name, big operator and accent tables
//! - CSS class names that make up the output markup contract

pub mod classes;
pub mod symbols;

// Re-export commonly used items
pub use symbols::{
    is_known_command, lookup_symbol, ACCENTS, ARROWS, BIG_OPERATORS, DELIMITERS, FUNCTION_NAMES,
    GREEK_LETTERS, MATH_SYMBOLS, MATRIX_DOTS,
};
