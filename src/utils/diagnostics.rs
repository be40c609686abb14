//! LaTeX diagnostics
//!
//! Rendering is fail-open: anything the renderer does not understand ends up
//! in the output verbatim. This module reports those places up front:
//!
//! - Unbalanced braces
//! - Mismatched or unclosed environments
//! - Environments other than `pmatrix` and `cases`
//! - Commands no rendering stage recognises
//! - A `$` that does not close
//!
//! It also notes accents over more than one character, whose mark lands on
//! the last character only.
//!
//! ## Example
//!
//! ```rust
//! use texspan::diagnostics::{check_latex, DiagnosticLevel};
//!
//! let result = check_latex(r"\begin{align}x\end{align}");
//! assert!(result
//!     .diagnostics
//!     .iter()
//!     .any(|d| d.level == DiagnosticLevel::Warning));
//! ```

use fxhash::FxHashSet;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::core::scanner::{DISPLAY_SPAN, INLINE_SPAN};
use crate::core::utils::CONTROL_WORD;
use crate::data::{is_known_command, ACCENTS};
use crate::utils::error::ConversionWarning;

lazy_static! {
    static ref ENVIRONMENT: Regex = Regex::new(r"\\(begin|end)\{([^}]*)\}").unwrap();

    static ref ACCENT_ARGUMENT: Regex = Regex::new(&format!(
        r"\\({})\{{([^}}]+)\}}",
        ACCENTS.keys().copied().collect::<Vec<_>>().join("|")
    ))
    .unwrap();

    /// Environments the renderer knows how to lay out
    static ref SUPPORTED_ENVIRONMENTS: FxHashSet<&'static str> =
        ["pmatrix", "cases"].into_iter().collect();
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - part of the input will be left verbatim
    Warning,
    /// Error - the input is malformed
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed)
    pub column: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add location information
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  --> line {}:{}", line, col)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

impl From<&Diagnostic> for ConversionWarning {
    fn from(diag: &Diagnostic) -> Self {
        ConversionWarning {
            message: diag.message.clone(),
            line: diag.line,
            suggestion: diag.suggestion.clone(),
        }
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Warnings and errors as conversion warnings
    pub fn to_warnings(&self) -> Vec<ConversionWarning> {
        self.diagnostics
            .iter()
            .filter(|d| d.level >= DiagnosticLevel::Warning)
            .map(ConversionWarning::from)
            .collect()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check LaTeX source (a formula or a whole document) for issues
pub fn check_latex(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let line_offsets = compute_line_offsets(input);

    check_brace_balance(input, &line_offsets, &mut result);
    check_environments(input, &line_offsets, &mut result);
    check_commands(input, &line_offsets, &mut result);
    check_accents(input, &line_offsets, &mut result);
    check_math_delimiters(input, &line_offsets, &mut result);

    result
}

/// Compute byte offsets for each line start
fn compute_line_offsets(input: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in input.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert byte offset to line and column
fn offset_to_location(offset: usize, line_offsets: &[usize]) -> (usize, usize) {
    let line = line_offsets
        .iter()
        .position(|&o| o > offset)
        .unwrap_or(line_offsets.len())
        - 1;

    let column = offset - line_offsets.get(line).unwrap_or(&0) + 1;
    (line + 1, column) // 1-indexed
}

/// Check for unbalanced braces; `\{` and `\}` are literal and not counted
fn check_brace_balance(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    let mut depth = 0i32;
    let mut last_open_line = 0;
    let mut escaped = false;

    for (offset, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => {
                if depth == 0 {
                    let (line, _) = offset_to_location(offset, line_offsets);
                    last_open_line = line;
                }
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth < 0 {
                    let (line, col) = offset_to_location(offset, line_offsets);
                    result.add(
                        Diagnostic::new(DiagnosticLevel::Error, "unmatched closing brace '}'")
                            .with_location(line, col)
                            .with_suggestion("Check for missing opening brace"),
                    );
                    depth = 0;
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!(
                    "{} unclosed brace{} (opened around line {})",
                    depth,
                    if depth == 1 { "" } else { "s" },
                    last_open_line
                ),
            )
            .with_suggestion("Check for missing closing brace '}'"),
        );
    }
}

/// Check `\begin` / `\end` pairing and flag environments the renderer ignores
fn check_environments(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    let mut env_stack: Vec<(&str, usize)> = Vec::new();

    for caps in ENVIRONMENT.captures_iter(input) {
        let (Some(whole), Some(kind), Some(name)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let env_name = name.as_str();
        let (line, col) = offset_to_location(whole.start(), line_offsets);

        if kind.as_str() == "begin" {
            if !SUPPORTED_ENVIRONMENTS.contains(env_name) {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        format!(
                            "environment '{}' is not supported and will be left verbatim",
                            env_name
                        ),
                    )
                    .with_location(line, col)
                    .with_source(whole.as_str())
                    .with_suggestion("Supported environments: pmatrix, cases"),
                );
            }
            env_stack.push((env_name, line));
            continue;
        }

        match env_stack.pop() {
            Some((open_name, open_line)) if open_name != env_name => {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Error,
                        format!(
                            "mismatched environment: opened '{}' (line {}), closed '{}' (line {})",
                            open_name, open_line, env_name, line
                        ),
                    )
                    .with_location(line, col)
                    .with_suggestion(format!("Use \\end{{{}}}", open_name)),
                );
            }
            Some(_) => {}
            None => {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Error,
                        format!("unmatched \\end{{{}}}", env_name),
                    )
                    .with_location(line, col)
                    .with_suggestion("Check for missing \\begin"),
                );
            }
        }
    }

    // Report unclosed environments
    for (env_name, line) in env_stack {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!(
                    "unclosed environment '{}' (opened at line {})",
                    env_name, line
                ),
            )
            .with_suggestion(format!("Add \\end{{{}}}", env_name)),
        );
    }
}

/// Report each unrecognised command once, at its first occurrence
fn check_commands(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    // name -> (first offset, occurrences)
    let mut unknown: IndexMap<&str, (usize, usize)> = IndexMap::new();

    for caps in CONTROL_WORD.captures_iter(input) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        if is_known_command(name.as_str()) {
            continue;
        }
        unknown
            .entry(name.as_str())
            .or_insert((name.start() - 1, 0))
            .1 += 1;
    }

    for (name, (offset, count)) in unknown {
        let (line, col) = offset_to_location(offset, line_offsets);
        let mut diag = Diagnostic::new(
            DiagnosticLevel::Warning,
            format!(
                "command '\\{}' is not recognised and will be left verbatim",
                name
            ),
        )
        .with_location(line, col)
        .with_source(format!("\\{}", name));
        if count > 1 {
            diag = diag.with_suggestion(format!("{} occurrences in total", count));
        }
        result.add(diag);
    }
}

/// Note accents whose argument is longer than one character
fn check_accents(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    for caps in ACCENT_ARGUMENT.captures_iter(input) {
        let (Some(whole), Some(accent), Some(base)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if base.as_str().chars().count() < 2 {
            continue;
        }

        let (line, col) = offset_to_location(whole.start(), line_offsets);
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Info,
                format!(
                    "\\{} over '{}' is drawn on its last character only",
                    accent.as_str(),
                    base.as_str()
                ),
            )
            .with_location(line, col)
            .with_source(whole.as_str()),
        );
    }
}

/// Find a `$` that is not part of any display or inline span
fn check_math_delimiters(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    // Blank out matched spans in place so offsets stay valid
    let mut masked = input.to_string();
    for pattern in [&*DISPLAY_SPAN, &*INLINE_SPAN] {
        let ranges: Vec<_> = pattern.find_iter(&masked).map(|m| m.range()).collect();
        for range in ranges {
            let blank = " ".repeat(range.len());
            masked.replace_range(range, &blank);
        }
    }

    if let Some(offset) = masked.find('$') {
        let (line, col) = offset_to_location(offset, line_offsets);
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                "math delimiter '$' is never closed",
            )
            .with_location(line, col)
            .with_suggestion("The text after it is rendered as plain text"),
        );
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
