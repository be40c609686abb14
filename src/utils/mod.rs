//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and error reporting
//! - Document storage and batch processing
//! - Error types and result types

pub mod diagnostics;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use diagnostics::{check_latex, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};
pub use files::{process_file, process_files, DocumentStore, MemoryDocumentStore, DEFAULT_TARGETS};

#[cfg(not(target_arch = "wasm32"))]
pub use files::StdDocumentStore;
