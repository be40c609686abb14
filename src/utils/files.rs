//! Document storage and in-place batch processing
//!
//! The renderer only maps strings to strings. Reading a document, processing
//! it and writing it back to the same location happens here, behind the
//! `DocumentStore` trait so the CLI can use the real filesystem while tests
//! and WASM use memory.

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::core::scanner::{process_document_with_options, DocumentOptions};
use crate::utils::error::{ConversionError, ConversionResult};

/// Documents processed when the CLI is run without arguments
pub const DEFAULT_TARGETS: [&str; 4] = [
    "basics.html",
    "probability.html",
    "inference.html",
    "sampling.html",
];

/// Trait for reading and writing documents
///
/// Implementations:
/// - `StdDocumentStore`: Uses std::fs for real file system access (CLI)
/// - `MemoryDocumentStore`: In-memory storage (testing, WASM)
pub trait DocumentStore {
    /// Read a document's full contents
    fn read_document(&self, path: &str) -> ConversionResult<String>;

    /// Replace a document's contents
    fn write_document(&mut self, path: &str, content: &str) -> ConversionResult<()>;

    /// Get the base directory paths are resolved against
    fn base_dir(&self) -> Option<&str>;
}

/// Standard filesystem store (for CLI usage)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct StdDocumentStore {
    base_directory: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl StdDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_directory: Some(base_dir.as_ref().to_path_buf()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match self.base_directory {
            Some(ref base) => base.join(path),
            None => PathBuf::from(path),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentStore for StdDocumentStore {
    fn read_document(&self, path: &str) -> ConversionResult<String> {
        std::fs::read_to_string(self.resolve(path))
            .map_err(|e| ConversionError::from_io(&e, path))
    }

    fn write_document(&mut self, path: &str, content: &str) -> ConversionResult<()> {
        std::fs::write(self.resolve(path), content)
            .map_err(|e| ConversionError::from_io(&e, path))
    }

    fn base_dir(&self) -> Option<&str> {
        self.base_directory.as_ref().and_then(|p| p.to_str())
    }
}

/// Memory-based store (for testing and WASM)
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: HashMap<String, String>,
    base_directory: Option<String>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: &str) -> Self {
        Self {
            documents: HashMap::new(),
            base_directory: Some(base_dir.to_string()),
        }
    }

    /// Add a document to the in-memory storage
    pub fn add_document(&mut self, path: &str, content: &str) {
        self.documents.insert(path.to_string(), content.to_string());
    }

    /// Current contents of a document
    pub fn get(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read_document(&self, path: &str) -> ConversionResult<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ConversionError::not_found(path))
    }

    fn write_document(&mut self, path: &str, content: &str) -> ConversionResult<()> {
        self.documents.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn base_dir(&self) -> Option<&str> {
        self.base_directory.as_deref()
    }
}

/// Read `path`, process it and write the result back to the same location
pub fn process_file<S: DocumentStore + ?Sized>(
    store: &mut S,
    path: &str,
    options: &DocumentOptions,
) -> ConversionResult<()> {
    let content = store.read_document(path)?;
    let processed = process_document_with_options(&content, options);
    store.write_document(path, &processed)
}

/// Process documents in order, stopping at the first failure.
///
/// Returns the number of documents processed. Documents after a failing one
/// are not touched.
pub fn process_files<S, P>(
    store: &mut S,
    paths: &[P],
    options: &DocumentOptions,
) -> ConversionResult<usize>
where
    S: DocumentStore + ?Sized,
    P: AsRef<str>,
{
    for path in paths {
        process_file(store, path.as_ref(), options)?;
    }
    Ok(paths.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryDocumentStore::new();
        store.add_document("a.html", "Hello, world!");

        assert_eq!(store.read_document("a.html").unwrap(), "Hello, world!");
        assert!(store.read_document("missing.html").is_err());

        store.write_document("a.html", "changed").unwrap();
        assert_eq!(store.get("a.html"), Some("changed"));
    }

    #[test]
    fn test_process_file_in_place() {
        let mut store = MemoryDocumentStore::new();
        store.add_document("basics.html", r"<p>$\mu$</p>");

        let options = DocumentOptions::default();
        process_file(&mut store, "basics.html", &options).unwrap();

        let expected =
            r#"<p><span class="katex katex-inline"><span class="katex-symbol">μ</span></span></p>"#;
        assert_eq!(store.get("basics.html"), Some(expected));
    }

    #[test]
    fn test_process_files_aborts_on_failure() {
        let mut store = MemoryDocumentStore::new();
        store.add_document("one.html", r"$\pi$");
        store.add_document("three.html", r"$\pi$");

        let err = process_files(
            &mut store,
            &["one.html", "two.html", "three.html"],
            &DocumentOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ConversionError::NotFound { .. }));
        assert_eq!(err.path(), Some("two.html"));
        assert!(store.get("one.html").unwrap().contains("π"));
        assert_eq!(store.get("three.html"), Some(r"$\pi$"));
    }

    #[test]
    fn test_process_files_count() {
        let mut store = MemoryDocumentStore::with_base_dir("site");
        for name in DEFAULT_TARGETS {
            store.add_document(name, "$x$");
        }
        let options = DocumentOptions::default();
        let count = process_files(&mut store, &DEFAULT_TARGETS, &options);
        assert_eq!(count.ok(), Some(4));
        assert_eq!(store.base_dir(), Some("site"));
    }

    #[test]
    fn test_std_store_missing_file() {
        let store = StdDocumentStore::with_base_dir(std::env::temp_dir());
        let err = store
            .read_document("texspan-definitely-missing-file.html")
            .unwrap_err();
        assert!(matches!(err, ConversionError::NotFound { .. }));
    }

    #[test]
    fn test_std_store_round_trip() {
        let name = format!("texspan-test-{}", std::process::id());
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        let mut store = StdDocumentStore::with_base_dir(&dir);

        let source = r"$$\frac{a}{b}$$";
        store.write_document("page.html", source).unwrap();
        let options = DocumentOptions::default();
        process_file(&mut store, "page.html", &options).unwrap();
        let html = store.read_document("page.html").unwrap();

        assert!(html.starts_with(
            r#"<span class="katex katex-display"><span class="katex-fraction">"#
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
