//! Section resolution with sandbox containment.
//!
//! Maps caller-supplied section identifiers to files under the docs
//! root. Resolution fully collapses `..` segments and symlinks before
//! the containment check, so the comparison is between real absolute
//! paths, never textual ones. A path outside the root and a path that
//! does not exist are indistinguishable to callers.

use std::fs;
use std::path::{Path, PathBuf};

/// An existing documentation file under the root
#[derive(Debug, Clone)]
pub struct DocFile {
    /// Fully resolved absolute path
    pub path: PathBuf,

    /// Path relative to the docs root
    pub relative: PathBuf,
}

/// Resolves section identifiers against one fixed docs root
pub struct SectionResolver {
    root: PathBuf,
    extension: String,
}

/// Resolve a root directory to an absolute path.
///
/// Falls back to prefixing the working directory when the directory
/// does not exist yet; a missing root is an empty corpus, not an
/// error.
pub(crate) fn absolutize_root(root: PathBuf) -> PathBuf {
    match fs::canonicalize(&root) {
        Ok(resolved) => resolved,
        Err(_) if root.is_absolute() => root,
        Err(_) => std::env::current_dir()
            .map(|cwd| cwd.join(&root))
            .unwrap_or(root),
    }
}

impl SectionResolver {
    /// Create a resolver for `root`, with `extension` (no leading dot)
    /// as the conventional documentation suffix.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: absolutize_root(root.into()),
            extension: extension.into(),
        }
    }

    /// The absolute docs root this resolver is confined to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a section identifier to a file under the root.
    ///
    /// Appends the documentation extension when the identifier lacks
    /// it, fully resolves the candidate, and requires it to be a
    /// regular file inside the root. Returns `None` for anything else;
    /// callers cannot tell a missing file from an escape attempt.
    pub fn resolve(&self, section: &str) -> Option<DocFile> {
        let suffix = format!(".{}", self.extension);
        let mut name = section.to_string();
        if !name.ends_with(&suffix) {
            name.push_str(&suffix);
        }

        let candidate = self.root.join(&name);

        // canonicalize fails for paths that do not exist, which folds
        // the existence check into the containment check
        let resolved = fs::canonicalize(&candidate).ok()?;
        let relative = self.relative_to_root(&resolved)?;

        if !resolved.is_file() {
            tracing::debug!("Resolved section is not a regular file: {:?}", resolved);
            return None;
        }

        Some(DocFile {
            path: resolved,
            relative,
        })
    }

    /// Root-relative form of an already-absolute path, or `None` when
    /// it lies outside the root. This is the sandbox check.
    pub fn relative_to_root(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(&self.root).ok().map(Path::to_path_buf)
    }

    /// Containment check for paths produced by directory walks: fully
    /// resolves the path before comparing against the root.
    pub fn contains(&self, path: &Path) -> Option<PathBuf> {
        let resolved = fs::canonicalize(path).ok()?;
        self.relative_to_root(&resolved)
    }
}
