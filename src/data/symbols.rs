//! LaTeX command lookup tables
//!
//! Every table is keyed by the command name without its leading backslash.
//! The Greek and math-symbol tables never share a key, so the order in which
//! they are consulted does not matter.

use phf::{phf_ordered_map, phf_ordered_set};

/// Greek letters. Lowercase and uppercase variants are distinct entries.
pub static GREEK_LETTERS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    // Lowercase
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "pi" => "π",
    "rho" => "ρ",
    "sigma" => "σ",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",

    // Uppercase
    "Alpha" => "Α",
    "Beta" => "Β",
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
};

/// Operators, relations, set and logic symbols
pub static MATH_SYMBOLS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    // Calculus
    "infty" => "∞",
    "partial" => "∂",
    "nabla" => "∇",

    // Arithmetic
    "cdot" => "·",
    "times" => "×",
    "div" => "÷",
    "pm" => "±",
    "mp" => "∓",

    // Relations
    "leq" => "≤",
    "geq" => "≥",
    "neq" => "≠",
    "approx" => "≈",

    // Sets
    "cap" => "∩",
    "cup" => "∪",
    "subseteq" => "⊆",
    "supseteq" => "⊇",
    "in" => "∈",
    "notin" => "∉",

    // Logic
    "forall" => "∀",
    "exists" => "∃",
    "wedge" => "∧",
    "vee" => "∨",
    "iff" => "⇔",
    "therefore" => "∴",
    "because" => "∵",

    // Misc
    "lvert" => "|",
    "rvert" => "|",
    "percent" => "%",
};

/// Named arrows, substituted after accents and text have been handled
pub static ARROWS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "rightarrow" => "→",
    "leftarrow" => "←",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
};

/// Function names rendered as upright operator labels
pub static FUNCTION_NAMES: phf::OrderedSet<&'static str> = phf_ordered_set! {
    "sin",
    "cos",
    "tan",
    "arcsin",
    "arccos",
    "arctan",
    "ln",
    "log",
    "det",
    "max",
    "min",
    "sup",
    "inf",
};

/// Big operators that take optional `_{}` / `^{}` bounds
pub static BIG_OPERATORS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "sum" => "∑",
    "int" => "∫",
    "prod" => "∏",
};

/// Accent commands and the combining mark appended to their argument
pub static ACCENTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "bar" => "\u{0304}",
    "hat" => "\u{0302}",
};

/// Dot leaders used inside matrices
pub static MATRIX_DOTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "vdots" => "⋮",
    "ddots" => "⋱",
};

/// `\left` / `\right` tokens: (source, css class, glyph)
pub static DELIMITERS: [(&str, &str, &str); 6] = [
    (r"\left(", super::classes::PAREN, "("),
    (r"\right)", super::classes::PAREN, ")"),
    (r"\left[", super::classes::BRACKET, "["),
    (r"\right]", super::classes::BRACKET, "]"),
    (r"\left\{", super::classes::BRACE, "{"),
    (r"\right\}", super::classes::BRACE, "}"),
];

/// Commands consumed by a structural or environment stage rather than a table
pub static STRUCTURAL_COMMANDS: phf::OrderedSet<&'static str> = phf_ordered_set! {
    "sqrt",
    "binom",
    "frac",
    "lim",
    "text",
    "operatorname",
    "begin",
    "end",
    "left",
    "right",
};

/// Look up a Greek letter or math symbol by command name
#[inline]
pub fn lookup_symbol(name: &str) -> Option<&'static str> {
    GREEK_LETTERS
        .get(name)
        .or_else(|| MATH_SYMBOLS.get(name))
        .copied()
}

/// Check whether any rendering stage recognises `name`
pub fn is_known_command(name: &str) -> bool {
    lookup_symbol(name).is_some()
        || ARROWS.contains_key(name)
        || FUNCTION_NAMES.contains(name)
        || BIG_OPERATORS.contains_key(name)
        || ACCENTS.contains_key(name)
        || MATRIX_DOTS.contains_key(name)
        || STRUCTURAL_COMMANDS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_lookup() {
        assert_eq!(lookup_symbol("alpha"), Some("α"));
        assert_eq!(lookup_symbol("Omega"), Some("Ω"));
        assert_eq!(lookup_symbol("alphabet"), None);
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(lookup_symbol("infty"), Some("∞"));
        assert_eq!(lookup_symbol("in"), Some("∈"));
        assert_eq!(lookup_symbol("iff"), Some("⇔"));
    }

    #[test]
    fn test_tables_do_not_overlap() {
        for key in GREEK_LETTERS.keys() {
            assert!(!MATH_SYMBOLS.contains_key(*key), "'{}' in both tables", key);
            assert!(!ARROWS.contains_key(*key), "'{}' in both tables", key);
        }
        for key in MATH_SYMBOLS.keys() {
            assert!(!ARROWS.contains_key(*key), "'{}' in both tables", key);
            assert!(!FUNCTION_NAMES.contains(*key), "'{}' in both tables", key);
        }
    }

    #[test]
    fn test_case_sensitive_greek() {
        assert_ne!(GREEK_LETTERS.get("delta"), GREEK_LETTERS.get("Delta"));
        assert_eq!(GREEK_LETTERS.get("Epsilon"), None);
    }

    #[test]
    fn test_known_commands() {
        assert!(is_known_command("frac"));
        assert!(is_known_command("sum"));
        assert!(is_known_command("Rightarrow"));
        assert!(is_known_command("arctan"));
        assert!(!is_known_command("mathbb"));
    }
}
