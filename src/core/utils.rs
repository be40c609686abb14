//! Utility functions for LaTeX to HTML rendering
//!
//! This module contains pure helpers shared by the rendering stages: argument
//! scanning, guarded regex replacement and HTML tag builders.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::classes;

lazy_static! {
    /// A control word `\name`, or the `\\` row separator which never starts a name
    pub static ref CONTROL_WORD: Regex = Regex::new(r"\\\\|\\([a-zA-Z]+)").unwrap();
}

// =============================================================================
// Argument Scanning
// =============================================================================

/// Read a `{...}` group whose opening brace sits at byte `start`.
///
/// Nested groups are balanced and escaped `\{` / `\}` are skipped. Returns the
/// inner text and the byte offset just past the closing brace.
pub fn read_brace_group(input: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    if bytes.get(start) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[start + 1..i], i + 1));
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Read a non-empty `{...}` group, rejecting `{}`
pub fn read_argument(input: &str, start: usize) -> Option<(&str, usize)> {
    read_brace_group(input, start)
        .filter(|(inner, _)| !inner.is_empty())
}

/// Read a `[...]` optional argument up to the first `]`. Empty brackets are rejected.
pub fn read_bracket_group(input: &str, start: usize) -> Option<(&str, usize)> {
    let rest = input.get(start..)?.strip_prefix('[')?;
    let close = rest.find(']')?;
    if close == 0 {
        return None;
    }
    Some((&rest[..close], start + 1 + close + 1))
}

/// Whether the text directly after a match continues an identifier
#[inline]
pub fn continues_identifier(rest: &str) -> bool {
    rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

// =============================================================================
// Rewriting
// =============================================================================

/// Replace every match of `re` for which `f` returns a replacement.
///
/// `f` receives the captures and the remaining input after the match. Matches
/// for which it returns `None` are copied through unchanged.
pub fn replace_guarded<F>(re: &Regex, input: &str, mut f: F) -> String
where
    F: FnMut(&Captures<'_>, &str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for caps in re.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if let Some(replacement) = f(&caps, &input[whole.end()..]) {
            result.push_str(&input[last_end..whole.start()]);
            result.push_str(&replacement);
            last_end = whole.end();
        }
    }

    result.push_str(&input[last_end..]);
    result
}

/// Rewrite every `\name` immediately followed by the arguments `parse` accepts.
///
/// `parse` is called with the input and the offset just past the command name;
/// it returns the replacement and the offset where the construct ends. When it
/// returns `None` the command is left verbatim and scanning resumes after it.
pub fn rewrite_command<F>(input: &str, name: &str, mut parse: F) -> String
where
    F: FnMut(&str, usize) -> Option<(String, usize)>,
{
    let needle = format!("\\{}", name);
    let mut result = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(found) = input[pos..].find(&needle) {
        let start = pos + found;
        let after_name = start + needle.len();
        result.push_str(&input[pos..start]);

        match parse(input, after_name) {
            Some((replacement, end)) => {
                result.push_str(&replacement);
                pos = end;
            }
            None => {
                result.push_str(&needle);
                pos = after_name;
            }
        }
    }

    result.push_str(&input[pos..]);
    result
}

/// Strip `$$` from either end, then a single `$` from either end
pub fn strip_math_delimiters(input: &str) -> String {
    let s = input.strip_prefix("$$").unwrap_or(input);
    let s = s.strip_suffix("$$").unwrap_or(s);
    let s = s.strip_prefix('$').unwrap_or(s);
    let s = s.strip_suffix('$').unwrap_or(s);
    s.to_string()
}

// =============================================================================
// HTML Builders
// =============================================================================

/// `<span class="class">content</span>`
#[inline]
pub fn span(class: &str, content: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, content)
}

/// Subscript tag used by operators and the shorthand stage
#[inline]
pub fn subscript(content: &str) -> String {
    format!(r#"<sub class="{}">{}</sub>"#, classes::SUBSCRIPT, content)
}

/// Superscript tag used by operators and the shorthand stage
#[inline]
pub fn superscript(content: &str) -> String {
    format!(r#"<sup class="{}">{}</sup>"#, classes::SUPERSCRIPT, content)
}
