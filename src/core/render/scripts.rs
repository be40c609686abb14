//! Subscript and superscript shorthand
//!
//! Runs last so that bounds already claimed by operators and structural
//! commands are not consumed twice.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::utils::{subscript, superscript};

lazy_static! {
    static ref SUB_GROUP: Regex = Regex::new(r"_\{([^}]+)\}").unwrap();
    static ref SUB_CHAR: Regex = Regex::new(r"_([a-zA-Z0-9])").unwrap();
    static ref SUP_GROUP: Regex = Regex::new(r"\^\{([^}]+)\}").unwrap();
    static ref SUP_CHAR: Regex = Regex::new(r"\^([a-zA-Z0-9])").unwrap();
}

/// `_{..}`, `_c`, `^{..}`, `^c`, in that order
pub fn render_scripts(input: &str) -> String {
    let html = SUB_GROUP.replace_all(input, |caps: &Captures<'_>| subscript(&caps[1]));
    let html = SUB_CHAR.replace_all(&html, |caps: &Captures<'_>| subscript(&caps[1]));
    let html = SUP_GROUP.replace_all(&html, |caps: &Captures<'_>| superscript(&caps[1]));
    SUP_CHAR
        .replace_all(&html, |caps: &Captures<'_>| superscript(&caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_characters() {
        assert_eq!(
            render_scripts("x_1^2"),
            r#"x<sub class="katex-subscript">1</sub><sup class="katex-superscript">2</sup>"#
        );
    }

    #[test]
    fn test_groups() {
        assert_eq!(
            render_scripts("e^{-x}"),
            r#"e<sup class="katex-superscript">-x</sup>"#
        );
        assert_eq!(
            render_scripts("a_{ij}"),
            r#"a<sub class="katex-subscript">ij</sub>"#
        );
    }

    #[test]
    fn test_source_order_kept() {
        assert_eq!(
            render_scripts("x^{b}_{a}"),
            r#"x<sup class="katex-superscript">b</sup><sub class="katex-subscript">a</sub>"#
        );
    }

    #[test]
    fn test_only_first_character_taken() {
        assert_eq!(
            render_scripts("x^10"),
            r#"x<sup class="katex-superscript">1</sup>0"#
        );
    }

    #[test]
    fn test_non_alphanumeric_left_alone() {
        assert_eq!(render_scripts("a_ b^-"), "a_ b^-");
    }
}
