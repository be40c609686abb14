//! `pmatrix` and `cases` environments
//!
//! Rows are separated by `\\` and columns by `&`. Matrix cells are copied
//! literally; case branches are rendered recursively.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::utils::{replace_guarded, span, CONTROL_WORD};
use crate::data::{classes, MATRIX_DOTS};

use super::render;

lazy_static! {
    static ref PMATRIX: Regex = Regex::new(r"(?s)\\begin\{pmatrix\}(.*?)\\end\{pmatrix\}").unwrap();
    static ref CASES: Regex = Regex::new(r"(?s)\\begin\{cases\}(.*?)\\end\{cases\}").unwrap();
}

/// Gap placed between matrix cells
const CELL_GAP: &str = "&nbsp;&nbsp;";

/// Render both environments, then matrix dot leaders
pub fn render_environments(input: &str) -> String {
    let html = PMATRIX.replace_all(input, |caps: &Captures<'_>| render_pmatrix(&caps[1]));
    let html = CASES.replace_all(&html, |caps: &Captures<'_>| render_cases(&caps[1]));
    render_matrix_dots(&html)
}

/// Split environment content into trimmed, non-blank rows
fn rows(content: &str) -> impl Iterator<Item = &str> {
    content
        .trim()
        .split(r"\\")
        .map(str::trim)
        .filter(|row| !row.is_empty())
}

fn render_pmatrix(content: &str) -> String {
    let body = rows(content)
        .map(|row| {
            row.split('&')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(CELL_GAP)
        })
        .collect::<Vec<_>>()
        .join("<br>");
    span(classes::MATRIX, &format!("({})", body))
}

fn render_cases(content: &str) -> String {
    let mut html = String::new();
    for line in rows(content) {
        let parts: Vec<&str> = line.split('&').map(str::trim).collect();
        let row = if let [condition, value] = parts.as_slice() {
            span(classes::CASE_CONDITION, &render(condition))
                + &span(classes::CASE_VALUE, &render(value))
        } else {
            // More than two columns: everything after the first is dropped
            render(parts[0])
        };
        html.push_str(&span(classes::CASE_ROW, &row));
    }
    span(classes::CASES, &html)
}

fn render_matrix_dots(input: &str) -> String {
    replace_guarded(&CONTROL_WORD, input, |caps, _| {
        let glyph = MATRIX_DOTS.get(caps.get(1)?.as_str())?;
        Some(span(classes::MATRIX_DOTS, glyph))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_matrix() {
        assert_eq!(
            render_environments(r"\begin{pmatrix}1&0\\0&1\end{pmatrix}"),
            r#"<span class="katex-matrix">(1&nbsp;&nbsp;0<br>0&nbsp;&nbsp;1)</span>"#
        );
    }

    #[test]
    fn test_matrix_ignores_blank_rows() {
        let html =
            render_environments("\\begin{pmatrix}\n a & b \\\\\n c & d \\\\\n\\end{pmatrix}");
        assert_eq!(
            html,
            r#"<span class="katex-matrix">(a&nbsp;&nbsp;b<br>c&nbsp;&nbsp;d)</span>"#
        );
    }

    #[test]
    fn test_cases_two_columns() {
        let html = render_environments(r"\begin{cases}1 & x>0\\0 & x\leq 0\end{cases}");
        assert!(html.starts_with(
            r#"<span class="katex-cases"><span class="katex-case-row">"#
        ));
        assert_eq!(html.matches(r#"class="katex-case-row""#).count(), 2);
        assert!(html.contains(
            r#"<span class="katex-case-condition">1</span><span class="katex-case-value">x>0</span>"#
        ));
        assert!(html.contains(r#"<span class="katex-symbol">≤</span>"#));
    }

    #[test]
    fn test_cases_three_columns_keep_first() {
        assert_eq!(
            render_environments(r"\begin{cases}a & b & c\end{cases}"),
            r#"<span class="katex-cases"><span class="katex-case-row">a</span></span>"#
        );
    }

    #[test]
    fn test_cases_single_column() {
        assert_eq!(
            render_environments(r"\begin{cases}x\end{cases}"),
            r#"<span class="katex-cases"><span class="katex-case-row">x</span></span>"#
        );
    }

    #[test]
    fn test_matrix_dots() {
        assert_eq!(
            render_environments(r"\vdots \ddots \vdotsx"),
            r#"<span class="katex-matrix-dots">⋮</span> <span class="katex-matrix-dots">⋱</span> \vdotsx"#
        );
    }
}
