//! Structural commands: roots, binomials and fractions
//!
//! These are the only commands whose arguments are rendered recursively, so a
//! fraction inside a root inside a fraction comes out fully nested. Past
//! `MAX_NESTING_DEPTH` a command is left verbatim.

use crate::core::utils::{read_argument, read_bracket_group, rewrite_command, span};
use crate::data::classes;

use super::render_nested;

/// Apply the structural passes in order: `\sqrt`, `\sqrt[n]`, `\binom`, `\frac`
pub fn render_structural(input: &str) -> String {
    let html = render_sqrt(input);
    let html = render_nthroot(&html);
    let html = render_binom(&html);
    render_frac(&html)
}

fn render_sqrt(input: &str) -> String {
    rewrite_command(input, "sqrt", |src, at| {
        let (radicand, end) = read_argument(src, at)?;
        let root = span(classes::SQRT_ROOT, &render_nested(radicand)?);
        Some((span(classes::SQRT, &root), end))
    })
}

fn render_nthroot(input: &str) -> String {
    rewrite_command(input, "sqrt", |src, at| {
        let (index, after_index) = read_bracket_group(src, at)?;
        let (radicand, end) = read_argument(src, after_index)?;
        let inner = span(classes::NTHROOT_INDEX, index)
            + &span(classes::NTHROOT_ROOT, &render_nested(radicand)?);
        Some((span(classes::NTHROOT, &inner), end))
    })
}

fn render_binom(input: &str) -> String {
    render_two_argument(input, "binom", |top, bottom| {
        let inner = span(classes::BINOM_TOP, &render_nested(top)?)
            + &span(classes::BINOM_BOTTOM, &render_nested(bottom)?);
        Some(span(classes::BINOM, &inner))
    })
}

fn render_frac(input: &str) -> String {
    render_two_argument(input, "frac", |num, den| {
        let inner = span(classes::NUMERATOR, &render_nested(num)?)
            + &span(classes::DENOMINATOR, &render_nested(den)?);
        Some(span(classes::FRACTION, &inner))
    })
}

/// Rewrite `\name{a}{b}` with both arguments present and non-empty
fn render_two_argument<F>(input: &str, name: &str, build: F) -> String
where
    F: Fn(&str, &str) -> Option<String>,
{
    rewrite_command(input, name, |src, at| {
        let (first, after_first) = read_argument(src, at)?;
        let (second, end) = read_argument(src, after_first)?;
        Some((build(first, second)?, end))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        assert_eq!(
            render_structural(r"\sqrt{x}"),
            r#"<span class="katex-sqrt"><span class="katex-sqrt-root">x</span></span>"#
        );
    }

    #[test]
    fn test_nthroot() {
        assert_eq!(
            render_structural(r"\sqrt[3]{8}"),
            r#"<span class="katex-nthroot"><span class="katex-nthroot-index">3</span><span class="katex-nthroot-root">8</span></span>"#
        );
    }

    #[test]
    fn test_binom() {
        let html = render_structural(r"\binom{n}{k}");
        assert!(html.starts_with(r#"<span class="katex-binom">"#));
        assert!(html.contains(r#"katex-binom-top">n</span>"#));
        assert!(html.contains(r#"katex-binom-bottom">k</span>"#));
    }

    #[test]
    fn test_frac_inside_frac() {
        let html = render_structural(r"\frac{\frac{a}{b}}{c}");
        assert_eq!(html.matches(r#"class="katex-fraction""#).count(), 2);
        assert!(html.ends_with(r#"katex-denominator">c</span></span>"#));
    }

    #[test]
    fn test_missing_argument_left_verbatim() {
        assert_eq!(render_structural(r"\frac{a}"), r"\frac{a}");
        assert_eq!(render_structural(r"\frac{}{b}"), r"\frac{}{b}");
        assert_eq!(render_structural(r"\sqrt x"), r"\sqrt x");
    }

    #[test]
    fn test_sqrt_of_nthroot() {
        let html = render_structural(r"\sqrt{\sqrt[3]{x}}");
        assert!(html.starts_with(
            r#"<span class="katex-sqrt"><span class="katex-sqrt-root"><span class="katex-nthroot">"#
        ));
    }
}
