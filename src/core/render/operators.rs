//! Big operators (`\sum`, `\int`, `\prod`) and limits
//!
//! Bounds are emitted as-is; later stages still see their contents. The
//! subscript is always written before the superscript.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::utils::{continues_identifier, replace_guarded, span, subscript, superscript};
use crate::data::{classes, BIG_OPERATORS};

lazy_static! {
    /// `\op` with optional `_{a}^{b}`, `^{b}_{a}`, `_{a}` or `^{b}` bounds.
    /// Alternatives are tried left to right, so the two-bound forms win.
    static ref BIG_OPERATOR: Regex = Regex::new(&format!(
        r"\\({})(?:_\{{([^}}]+)\}}\^\{{([^}}]+)\}}|\^\{{([^}}]+)\}}_\{{([^}}]+)\}}|_\{{([^}}]+)\}}|\^\{{([^}}]+)\}})?",
        BIG_OPERATORS.keys().copied().collect::<Vec<_>>().join("|")
    ))
    .unwrap();

    static ref LIMIT: Regex = Regex::new(r"\\lim(?:_\{([^}]+)\})?").unwrap();
}

/// Render `\sum`, `\int` and `\prod` in all five accepted forms
pub fn render_big_operators(input: &str) -> String {
    replace_guarded(&BIG_OPERATOR, input, |caps, rest| {
        let glyph = BIG_OPERATORS.get(caps.get(1)?.as_str())?;
        let sub = [2, 5, 6].into_iter().find_map(|i| caps.get(i));
        let sup = [3, 4, 7].into_iter().find_map(|i| caps.get(i));

        if sub.is_none() && sup.is_none() && continues_identifier(rest) {
            return None;
        }

        Some(with_bounds(
            span(classes::OP, glyph),
            sub.map(|m| m.as_str()),
            sup.map(|m| m.as_str()),
        ))
    })
}

/// Render `\lim` and `\lim_{...}`
pub fn render_limits(input: &str) -> String {
    replace_guarded(&LIMIT, input, |caps, rest| {
        let sub = caps.get(1);
        if sub.is_none() && continues_identifier(rest) {
            return None;
        }
        Some(with_bounds(
            span(classes::OPERATOR, "lim"),
            sub.map(|m| m.as_str()),
            None,
        ))
    })
}

fn with_bounds(mut html: String, sub: Option<&str>, sup: Option<&str>) -> String {
    if let Some(sub) = sub {
        html.push_str(&subscript(sub));
    }
    if let Some(sup) = sup {
        html.push_str(&superscript(sup));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_operators() {
        assert_eq!(
            render_big_operators(r"\sum"),
            r#"<span class="katex-op">∑</span>"#
        );
        assert_eq!(
            render_big_operators(r"\int x"),
            r#"<span class="katex-op">∫</span> x"#
        );
        assert_eq!(
            render_big_operators(r"\prod"),
            r#"<span class="katex-op">∏</span>"#
        );
    }

    #[test]
    fn test_both_bounds() {
        assert_eq!(
            render_big_operators(r"\sum_{i=1}^{n}"),
            r#"<span class="katex-op">∑</span><sub class="katex-subscript">i=1</sub><sup class="katex-superscript">n</sup>"#
        );
    }

    #[test]
    fn test_bound_order_normalised() {
        assert_eq!(
            render_big_operators(r"\int^{b}_{a}"),
            render_big_operators(r"\int_{a}^{b}")
        );
    }

    #[test]
    fn test_single_bounds() {
        assert_eq!(
            render_big_operators(r"\prod_{k}"),
            r#"<span class="katex-op">∏</span><sub class="katex-subscript">k</sub>"#
        );
        assert_eq!(
            render_big_operators(r"\sum^{n}"),
            r#"<span class="katex-op">∑</span><sup class="katex-superscript">n</sup>"#
        );
    }

    #[test]
    fn test_longer_identifier_not_matched() {
        assert_eq!(render_big_operators(r"\summary"), r"\summary");
        assert_eq!(render_big_operators(r"\integral"), r"\integral");
        assert_eq!(render_big_operators(r"\infty"), r"\infty");
    }

    #[test]
    fn test_limits() {
        assert_eq!(
            render_limits(r"\lim_{x \to 0}"),
            r#"<span class="katex-operator">lim</span><sub class="katex-subscript">x \to 0</sub>"#
        );
        assert_eq!(
            render_limits(r"\lim f"),
            r#"<span class="katex-operator">lim</span> f"#
        );
        assert_eq!(render_limits(r"\limsup"), r"\limsup");
    }
}
