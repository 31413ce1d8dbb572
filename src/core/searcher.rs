//! Regex search across the documentation corpus.
//!
//! Every call re-walks the root and re-reads candidate files; there
//! is no cache to invalidate. Unreadable or non-text files are
//! skipped, unlike the targeted-fetch path in
//! [`crate::core::loader`], which fails hard on them.

use glob::Pattern;
use regex::RegexBuilder;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::resolver::SectionResolver;

/// Maximum matches formatted into one response
///
/// Everything past the cap is collapsed into a single summary line,
/// keeping output bounded for adversarially broad patterns.
pub const MAX_MATCHES: usize = 100;

/// Maximum characters of line content per match
pub const MAX_LINE_CHARS: usize = 200;

/// One search hit: root-relative file, 1-based line, trimmed text
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub file: String,
    pub line: usize,
    pub text: String,
}

/// Searches documentation content under one fixed root
pub struct DocSearcher {
    resolver: SectionResolver,
}

impl DocSearcher {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            resolver: SectionResolver::new(root, extension),
        }
    }

    /// Search documentation content with a case-insensitive regex.
    ///
    /// `include` is a glob filter over root-relative paths. Matches
    /// are ordered by file path ascending, then line number ascending,
    /// because files are scanned in sorted order and lines top to
    /// bottom. All outcomes, including an invalid pattern, are
    /// reported as plain text.
    pub fn search(&self, pattern: &str, include: &str) -> String {
        let root = self.resolver.root();
        if !root.is_dir() {
            return "No documentation directory found.".to_string();
        }

        let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => return format!("Invalid regex pattern: {e}"),
        };

        let glob = match Pattern::new(include) {
            Ok(p) => p,
            Err(e) => return format!("Invalid include pattern '{include}': {e}"),
        };

        let mut matches: Vec<MatchRecord> = Vec::new();

        for path in self.candidate_files(&glob) {
            // Defensive containment re-check; enumeration is already
            // rooted at the sandbox root
            let rel = match self.resolver.contains(&path) {
                Some(rel) => rel,
                None => continue,
            };

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {:?}: {}", path, e);
                    continue;
                }
            };

            for (idx, line) in content.lines().enumerate() {
                if regex.is_match(line) {
                    matches.push(MatchRecord {
                        file: rel.to_string_lossy().into_owned(),
                        line: idx + 1,
                        text: line.trim().to_string(),
                    });
                }
            }
        }

        if matches.is_empty() {
            return format!("No matches found for pattern '{pattern}' in {include}");
        }

        format_matches(&matches)
    }

    /// Files under the root matching the include glob, sorted by full
    /// path so match ordering is deterministic.
    fn candidate_files(&self, glob: &Pattern) -> Vec<PathBuf> {
        let root = self.resolver.root();
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();
                    let rel = match path.strip_prefix(root) {
                        Ok(rel) => rel,
                        Err(_) => continue,
                    };

                    if glob.matches(&rel.to_string_lossy()) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        // Byte-wise ordering, consistent with the sorted listing
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        files
    }
}

/// Format matches as `file:line: content`, capped at [`MAX_MATCHES`]
/// with a trailing summary when more were found.
fn format_matches(matches: &[MatchRecord]) -> String {
    let results: Vec<String> = matches
        .iter()
        .take(MAX_MATCHES)
        .map(|m| format!("{}:{}: {}", m.file, m.line, clip_line(&m.text)))
        .collect();

    let mut output = results.join("\n");
    if matches.len() > MAX_MATCHES {
        output.push_str(&format!(
            "\n\n... and {} more matches",
            matches.len() - MAX_MATCHES
        ));
    }
    output
}

/// Truncate line content at a character boundary
fn clip_line(line: &str) -> String {
    let mut chars = line.chars();
    let head: String = chars.by_ref().take(MAX_LINE_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
