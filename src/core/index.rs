//! Live enumeration of the documentation corpus.
//!
//! Walks the docs root on every call; there is no cached index, so
//! listings always reflect current filesystem state.

use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::resolver::absolutize_root;

/// Enumerates documentation files under one fixed root
pub struct DocIndex {
    root: PathBuf,
    extension: String,
}

impl DocIndex {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: absolutize_root(root.into()),
            extension: extension.into(),
        }
    }

    /// List every documentation file under the root as a sorted,
    /// root-relative path. A missing root is an empty corpus.
    pub fn list_all(&self) -> Vec<String> {
        if !self.root.is_dir() {
            return Vec::new();
        }

        let mut docs = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                        continue;
                    }

                    if let Ok(rel) = path.strip_prefix(&self.root) {
                        docs.push(rel.to_string_lossy().into_owned());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        docs.sort();
        docs
    }
}
