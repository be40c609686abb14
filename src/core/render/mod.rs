//! LaTeX → HTML renderer
//!
//! The renderer is an ordered pipeline of rewrite stages. Each stage consumes
//! the previous stage's output, and the order matters: later stages assume the
//! syntax claimed by earlier ones is gone (subscript shorthand, for example,
//! must not eat the bounds of `\sum_{i}`), and no stage may re-match markup a
//! previous stage emitted.
//!
//! Rendering is total. Anything a stage does not recognise is left verbatim.
//!
//! ## Example
//!
//! ```rust
//! use texspan::render;
//!
//! let html = render(r"\frac{\sqrt{x}}{2}");
//! assert!(html.starts_with(r#"<span class="katex-fraction">"#));
//! ```

pub mod environments;
pub mod leaves;
pub mod operators;
pub mod scripts;
pub mod structural;

use std::cell::Cell;

use crate::core::utils::strip_math_delimiters;

/// Maximum nesting of structural commands that gets rendered
pub const MAX_NESTING_DEPTH: usize = 256;

thread_local! {
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// A single rewrite step of the pipeline
pub type Stage = fn(&str) -> String;

/// The rendering pipeline, in application order
pub const STAGES: &[(&str, Stage)] = &[
    ("delimiters", strip_math_delimiters),
    ("structural", structural::render_structural),
    ("big-operators", operators::render_big_operators),
    ("symbols", leaves::render_symbols),
    ("accents", leaves::render_accents),
    ("text", leaves::render_text),
    ("named", leaves::render_named),
    ("limits", operators::render_limits),
    ("environments", environments::render_environments),
    ("brackets", leaves::render_delimiters),
    ("scripts", scripts::render_scripts),
];

/// Render a LaTeX math source string to HTML.
///
/// Leading/trailing `$$` or `$` delimiters are stripped first. Structural
/// commands (`\sqrt`, `\binom`, `\frac`, case branches) render their
/// arguments by calling back into this function, up to `MAX_NESTING_DEPTH`.
pub fn render(source: &str) -> String {
    STAGES
        .iter()
        .fold(source.to_string(), |html, (_, stage)| stage(&html))
}

/// Render the argument of a structural command one level deeper.
///
/// Returns `None` once `MAX_NESTING_DEPTH` is reached; the caller then leaves
/// the command verbatim.
pub(crate) fn render_nested(source: &str) -> Option<String> {
    let depth = NESTING.with(Cell::get);
    if depth >= MAX_NESTING_DEPTH {
        return None;
    }

    NESTING.with(|n| n.set(depth + 1));
    let html = render(source);
    NESTING.with(|n| n.set(depth));
    Some(html)
}

/// Render while recording the output of every stage.
///
/// Returns `(stage name, output)` pairs in application order; the last entry
/// equals `render(source)`.
pub fn render_traced(source: &str) -> Vec<(&'static str, String)> {
    let mut trace: Vec<(&'static str, String)> = Vec::with_capacity(STAGES.len());
    let mut html = source.to_string();
    for &(name, stage) in STAGES {
        html = stage(&html);
        trace.push((name, html.clone()));
    }
    trace
}
