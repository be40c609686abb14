//! Document scanner
//!
//! Finds `$$...$$` and `$...$` spans in raw text, renders each one and wraps
//! the result in a display or inline container. Display spans are handled
//! first so the inline pattern never pairs up the two `$` of a `$$`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::render::render;
use crate::data::classes;

lazy_static! {
    /// Shortest `$$...$$` run with no `$` inside
    pub(crate) static ref DISPLAY_SPAN: Regex = Regex::new(r"\$\$[^$]+\$\$").unwrap();
    /// Shortest `$...$` run with no `$` inside
    pub(crate) static ref INLINE_SPAN: Regex = Regex::new(r"\$[^$]+\$").unwrap();
}

/// Document processing options
///
/// The default reproduces the reference behaviour: display spans, then inline
/// spans, then one more render over the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Render `$$...$$` spans as display math
    pub display_math: bool,
    /// Render `$...$` spans as inline math
    pub inline_math: bool,
    /// Run the renderer once more over the entire output, which also converts
    /// commands outside any delimiter
    pub global_pass: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            display_math: true,
            inline_math: true,
            global_pass: true,
        }
    }
}

impl DocumentOptions {
    /// Only touch text inside math delimiters
    pub fn math_only() -> Self {
        Self {
            global_pass: false,
            ..Default::default()
        }
    }
}

/// Process a document with the default options
pub fn process_document(text: &str) -> String {
    process_document_with_options(text, &DocumentOptions::default())
}

/// Process a document with custom options
pub fn process_document_with_options(text: &str, options: &DocumentOptions) -> String {
    let mut content = text.to_string();

    if options.display_math {
        content = wrap_spans(&DISPLAY_SPAN, &content, classes::DISPLAY);
    }
    if options.inline_math {
        content = wrap_spans(&INLINE_SPAN, &content, classes::INLINE);
    }
    if options.global_pass {
        content = render(&content);
    }

    content
}

fn wrap_spans(pattern: &Regex, text: &str, mode: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            format!(
                r#"<span class="{} {}">{}</span>"#,
                classes::MATH,
                mode,
                render(&caps[0])
            )
        })
        .into_owned()
}
