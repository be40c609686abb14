//! # texspan
//!
//! Lightweight LaTeX math → HTML renderer written in Rust.
//!
//! texspan turns a practical subset of LaTeX math into nested `<span>` markup
//! styled by a stylesheet, without running a typesetting engine. It is a
//! fixed pipeline of rewrite stages, not a TeX parser: anything it does not
//! recognise is left in the output untouched.
//!
//! ## Features
//!
//! - **Structural commands**: `\frac`, `\sqrt`, `\sqrt[n]`, `\binom`, nested to any depth
//! - **Big operators**: `\sum`, `\int`, `\prod`, `\lim` with bounds in either order
//! - **Symbols**: Greek letters, relations, set and logic symbols, arrows, function names
//! - **Environments**: `pmatrix` and `cases`
//! - **Documents**: `$$...$$` / `$...$` span detection with display and inline containers
//! - **Diagnostics**: reports what will be left verbatim before you publish
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Formula Rendering
//!
//! ```rust
//! use texspan::render;
//!
//! let html = render(r"\sum_{i=1}^{n} \alpha_i");
//! assert!(html.contains("∑"));
//! assert!(html.contains(r#"<sub class="katex-subscript">i=1</sub>"#));
//! ```
//!
//! ### Document Processing
//!
//! ```rust
//! use texspan::process_document;
//!
//! let html = process_document("<p>Let $x \\in A$.</p>");
//! assert_eq!(
//!     html,
//!     r#"<p>Let <span class="katex katex-inline">x <span class="katex-symbol">∈</span> A</span>.</p>"#
//! );
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static lookup tables and class names
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core functions
pub use crate::core::render::{render, render_traced};
pub use crate::core::scanner::{process_document, process_document_with_options, DocumentOptions};

// Re-export data modules
pub use crate::data::classes;
pub use crate::data::symbols;

// Re-export utilities
pub use crate::utils::diagnostics;
pub use crate::utils::diagnostics::check_latex;
pub use crate::utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning,
};
pub use crate::utils::files;
pub use crate::utils::files::{process_file, process_files, DocumentStore, MemoryDocumentStore};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::utils::files::StdDocumentStore;

/// Render LaTeX and collect warnings about anything left verbatim
///
/// The rendered content is identical to [`render`]; the warnings come from
/// [`check_latex`] on the same input.
pub fn render_with_diagnostics(input: &str) -> ConversionOutput {
    let content = render(input);
    let warnings = check_latex(input).to_warnings();
    ConversionOutput::with_warnings(content, warnings)
}

/// Process a document and collect warnings about anything left verbatim
pub fn process_document_with_diagnostics(
    input: &str,
    options: &DocumentOptions,
) -> ConversionOutput {
    let content = process_document_with_options(input, options);
    let warnings = check_latex(input).to_warnings();
    ConversionOutput::with_warnings(content, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let result = render(r"\alpha + \beta");
        assert!(result.contains("α"));
        assert!(result.contains("β"));
    }

    #[test]
    fn test_render_frac() {
        let result = render(r"\frac{1}{2}");
        assert!(result.contains("katex-fraction"));
    }

    #[test]
    fn test_render_with_diagnostics_clean() {
        let output = render_with_diagnostics(r"\frac{1}{2}");
        assert!(!output.has_warnings());
        assert_eq!(output.content, render(r"\frac{1}{2}"));
    }

    #[test]
    fn test_render_with_diagnostics_unknown_command() {
        let output = render_with_diagnostics(r"\mathbb{R}^n");
        assert!(output.has_warnings());
        assert!(output.warnings[0].message.contains("mathbb"));
        assert!(output.content.contains(r"\mathbb{R}"));
    }

    #[test]
    fn test_document_with_diagnostics() {
        let output = process_document_with_diagnostics("a $x$ b $y", &DocumentOptions::math_only());
        assert_eq!(output.warnings.len(), 1);
        assert!(output.content.contains("katex-inline"));
    }
}
