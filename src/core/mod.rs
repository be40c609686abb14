//! Core rendering modules
//!
//! This module contains the conversion engine:
//! - `render`: the staged LaTeX → HTML renderer
//! - `scanner`: math span detection in whole documents

pub mod render;
pub mod scanner;
pub mod utils;

// Re-export main types and functions
pub use render::{render, render_traced, Stage, STAGES};
pub use scanner::{process_document, process_document_with_options, DocumentOptions};
