//! Section loading with index-file and listing fallbacks.
//!
//! `load` is the targeted-fetch path: the caller named one document,
//! so a file that resolves but cannot be read as text is a hard
//! error. The bulk search path in [`crate::core::searcher`] skips
//! such files instead.

use std::fs;
use std::path::PathBuf;

use crate::core::error::{DocshelfError, Result};
use crate::core::index::DocIndex;
use crate::core::resolver::SectionResolver;

/// Loads documentation sections from one fixed root
pub struct SectionLoader {
    resolver: SectionResolver,
    index: DocIndex,
    index_file: String,
}

impl SectionLoader {
    pub fn new(
        root: impl Into<PathBuf>,
        extension: impl Into<String>,
        index_file: impl Into<String>,
    ) -> Self {
        let root = root.into();
        let extension = extension.into();
        Self {
            resolver: SectionResolver::new(root.clone(), extension.clone()),
            index: DocIndex::new(root, extension),
            index_file: index_file.into(),
        }
    }

    /// Load a documentation section.
    ///
    /// An empty (or all-whitespace) identifier returns the index file
    /// when present, otherwise a listing of every available section.
    /// An identifier that does not resolve returns a not-found message
    /// with the same listing, so callers can discover valid sections.
    pub fn load(&self, section: &str) -> Result<String> {
        let section = section.trim();

        if section.is_empty() {
            return self.load_default();
        }

        match self.resolver.resolve(section) {
            Some(doc) => read_document(&doc.path),
            None => Ok(self.not_found(section)),
        }
    }

    fn load_default(&self) -> Result<String> {
        let index_path = self.resolver.root().join(&self.index_file);
        if index_path.is_file() {
            return read_document(&index_path);
        }

        let docs = self.index.list_all();
        if docs.is_empty() {
            return Ok("No documentation files found.".to_string());
        }
        Ok(format!("Available sections:\n{}", bullets(&docs)))
    }

    fn not_found(&self, section: &str) -> String {
        let docs = self.index.list_all();
        format!(
            "Section '{}' not found.\n\nAvailable sections:\n{}",
            section,
            bullets(&docs)
        )
    }
}

fn read_document(path: &std::path::Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DocshelfError::ReadFailed {
        path: path.display().to_string(),
        source,
    })
}

fn bullets(docs: &[String]) -> String {
    docs.iter()
        .map(|d| format!("- {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}
