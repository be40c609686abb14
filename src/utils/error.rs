//! Error handling for texspan
//!
//! Rendering itself never fails: unrecognised LaTeX is passed through. The
//! errors here come from reading and writing documents.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// The document could not be found
    NotFound { path: String },
    /// The document is not valid UTF-8
    InvalidEncoding { path: String },
    /// Any other I/O failure while reading or writing
    IoError {
        path: Option<String>,
        message: String,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotFound { path } => {
                write!(f, "Document not found: {}", path)
            }
            ConversionError::InvalidEncoding { path } => {
                write!(f, "Document is not valid UTF-8: {}", path)
            }
            ConversionError::IoError { path, message } => {
                if let Some(p) = path {
                    write!(f, "IO error on {}: {}", p, message)
                } else {
                    write!(f, "IO error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            path: None,
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone)]
pub struct ConversionWarning {
    pub message: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The rendered content
    pub content: String,
    /// Any warnings generated during rendering
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl ConversionError {
    /// Classify an I/O error raised while accessing `path`
    pub fn from_io(err: &std::io::Error, path: impl Into<String>) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => ConversionError::NotFound { path },
            std::io::ErrorKind::InvalidData => ConversionError::InvalidEncoding { path },
            _ => ConversionError::IoError {
                path: Some(path),
                message: err.to_string(),
            },
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        ConversionError::NotFound { path: path.into() }
    }

    /// Path of the document involved, when known
    pub fn path(&self) -> Option<&str> {
        match self {
            ConversionError::NotFound { path } | ConversionError::InvalidEncoding { path } => {
                Some(path)
            }
            ConversionError::IoError { path, .. } => path.as_deref(),
        }
    }
}
