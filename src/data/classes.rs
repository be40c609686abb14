//! CSS class names emitted by the renderer
//!
//! Stylesheets select on these exact names, so changing one is a breaking
//! change for every consumer of the generated markup.

// Span containers added by the document scanner
pub const MATH: &str = "katex";
pub const DISPLAY: &str = "katex-display";
pub const INLINE: &str = "katex-inline";

// Structural containers
pub const SQRT: &str = "katex-sqrt";
pub const SQRT_ROOT: &str = "katex-sqrt-root";
pub const NTHROOT: &str = "katex-nthroot";
pub const NTHROOT_INDEX: &str = "katex-nthroot-index";
pub const NTHROOT_ROOT: &str = "katex-nthroot-root";
pub const BINOM: &str = "katex-binom";
pub const BINOM_TOP: &str = "katex-binom-top";
pub const BINOM_BOTTOM: &str = "katex-binom-bottom";
pub const FRACTION: &str = "katex-fraction";
pub const NUMERATOR: &str = "katex-numerator";
pub const DENOMINATOR: &str = "katex-denominator";

// Leaves
pub const OP: &str = "katex-op";
pub const OPERATOR: &str = "katex-operator";
pub const SYMBOL: &str = "katex-symbol";
pub const TEXT: &str = "katex-text";
pub const SUBSCRIPT: &str = "katex-subscript";
pub const SUPERSCRIPT: &str = "katex-superscript";

// Environments
pub const MATRIX: &str = "katex-matrix";
pub const MATRIX_DOTS: &str = "katex-matrix-dots";
pub const CASES: &str = "katex-cases";
pub const CASE_ROW: &str = "katex-case-row";
pub const CASE_CONDITION: &str = "katex-case-condition";
pub const CASE_VALUE: &str = "katex-case-value";

// Delimiters
pub const PAREN: &str = "katex-paren";
pub const BRACKET: &str = "katex-bracket";
pub const BRACE: &str = "katex-brace";
