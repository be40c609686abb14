//! WASM bindings for texspan
//!
//! This module provides JavaScript-accessible functions for rendering LaTeX
//! math to HTML in the browser.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::core::scanner::DocumentOptions;

/// Document processing options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct DocumentConvertOptions {
    /// Render `$$...$$` spans
    #[serde(default = "default_true")]
    pub display_math: bool,
    /// Render `$...$` spans
    #[serde(default = "default_true")]
    pub inline_math: bool,
    /// Re-render the whole document afterwards
    #[serde(default = "default_true")]
    pub global_pass: bool,
}

#[cfg(feature = "wasm")]
impl Default for DocumentConvertOptions {
    fn default() -> Self {
        Self {
            display_math: true,
            inline_math: true,
            global_pass: true,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<DocumentConvertOptions> for DocumentOptions {
    fn from(opts: DocumentConvertOptions) -> Self {
        DocumentOptions {
            display_math: opts.display_math,
            inline_math: opts.inline_math,
            global_pass: opts.global_pass,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The rendered output
    pub output: String,
    /// Warnings about input left verbatim
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a LaTeX formula to HTML
///
/// # Arguments
/// * `input` - LaTeX math code, with or without `$` delimiters
///
/// # Returns
/// HTML markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderLatex")]
pub fn render_latex_wasm(input: &str) -> String {
    crate::render(input)
}

/// Process a whole document with the default options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "processDocument")]
pub fn process_document_wasm(input: &str) -> String {
    crate::process_document(input)
}

/// Process a whole document with custom options
///
/// Returns `{ output, warnings }`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "processDocumentWithOptions")]
pub fn process_document_with_options_wasm(
    input: &str,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let opts: DocumentConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let output = crate::process_document_with_diagnostics(input, &opts.into());

    let result = ConvertResult {
        output: output.content,
        warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
    };
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Check LaTeX for constructs the renderer will leave verbatim
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkLatex")]
pub fn check_latex_wasm(input: &str) -> Result<JsValue, JsValue> {
    #[derive(Serialize)]
    struct CheckSummary {
        errors: usize,
        warnings: usize,
        summary: String,
        messages: Vec<String>,
    }

    let result = crate::check_latex(input);
    let summary = CheckSummary {
        errors: result.errors,
        warnings: result.warnings,
        summary: result.summary(),
        messages: result.diagnostics.iter().map(|d| d.to_string()).collect(),
    };
    serde_wasm_bindgen::to_value(&summary)
        .map_err(JsValue::from)
}

/// Get the library version
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
