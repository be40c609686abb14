//! Leaf commands: direct lookups and literal wrappers, no recursion

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::utils::{replace_guarded, span, CONTROL_WORD};
use crate::data::{classes, lookup_symbol, ACCENTS, ARROWS, DELIMITERS, FUNCTION_NAMES};

lazy_static! {
    static ref ACCENT: Regex = Regex::new(&format!(
        r"\\({})\{{([^}}]+)\}}",
        ACCENTS.keys().copied().collect::<Vec<_>>().join("|")
    ))
    .unwrap();
    static ref TEXT: Regex = Regex::new(r"\\text\{([^}]+)\}").unwrap();
    static ref OPERATOR_NAME: Regex = Regex::new(r"\\operatorname\{([^}]+)\}").unwrap();
}

/// Replace Greek letters and math symbols with their glyphs.
///
/// The whole identifier after the backslash is looked up, so `\alphabet`
/// is never read as `\alpha` followed by `bet`.
pub fn render_symbols(input: &str) -> String {
    replace_guarded(&CONTROL_WORD, input, |caps, _| {
        let glyph = lookup_symbol(caps.get(1)?.as_str())?;
        Some(span(classes::SYMBOL, glyph))
    })
}

/// `\bar{x}` → `x̄`, `\hat{x}` → `x̂`; the argument is copied literally
pub fn render_accents(input: &str) -> String {
    replace_guarded(&ACCENT, input, |caps, _| {
        let mark = ACCENTS.get(caps.get(1)?.as_str())?;
        let base = caps.get(2)?.as_str();
        Some(span(classes::SYMBOL, &format!("{}{}", base, mark)))
    })
}

/// `\text{...}` and `\operatorname{...}` with literal content
pub fn render_text(input: &str) -> String {
    let html = TEXT.replace_all(input, |caps: &regex::Captures<'_>| {
        span(classes::TEXT, &caps[1])
    });
    OPERATOR_NAME
        .replace_all(&html, |caps: &regex::Captures<'_>| {
            span(classes::OPERATOR, &caps[1])
        })
        .into_owned()
}

/// Named arrows and upright function names such as `\sin` or `\log`
pub fn render_named(input: &str) -> String {
    replace_guarded(&CONTROL_WORD, input, |caps, _| {
        let name = caps.get(1)?.as_str();
        if let Some(glyph) = ARROWS.get(name) {
            return Some(span(classes::SYMBOL, glyph));
        }
        FUNCTION_NAMES
            .get_key(name)
            .map(|label| span(classes::OPERATOR, label))
    })
}

/// `\left(` ... `\right\}` as individual glyph spans, plus `\;` spacing
pub fn render_delimiters(input: &str) -> String {
    let mut html = input.to_string();
    for (source, class, glyph) in DELIMITERS.iter() {
        if html.contains(source) {
            html = html.replace(source, &span(class, glyph));
        }
    }
    html.replace(r"\;", " ")
}
