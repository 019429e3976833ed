//! Convention for picking a folder's landing page.
//!
//! When a folder has no `_category_` file declaring a `link`, the first doc
//! inside it that looks like an index page becomes the category's link target
//! and is hidden from the category's children. A doc looks like an index when
//! its file stem, compared case-insensitively, is one of:
//!
//! - `index`
//! - `readme`
//! - the name of the folder it sits in (`guides/guides.md`)

use crate::types::Document;
use std::path::Path;

/// What an index matcher gets to see about a doc.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryIndexCandidate {
    /// File name without extension (`README` for `guides/README.md`).
    pub file_name: String,
    /// Extension including the dot, empty when the file has none.
    pub extension: String,
    /// Directory segments, nearest first (`a/b/c` → `["c", "b", "a"]`).
    pub directories: Vec<String>,
}

impl CategoryIndexCandidate {
    pub fn from_doc(doc: &Document) -> Self {
        let source = Path::new(&doc.source);
        let file_name = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let directories = doc
            .source_dir_name
            .split('/')
            .rev()
            .map(String::from)
            .collect();
        Self {
            file_name,
            extension,
            directories,
        }
    }
}

/// Signature shared by every category index matcher.
pub type CategoryIndexMatcher = dyn Fn(&CategoryIndexCandidate) -> bool;

/// Default matcher: `index`, `readme`, or the nearest folder's name.
pub fn is_category_index(candidate: &CategoryIndexCandidate) -> bool {
    let stem = candidate.file_name.to_lowercase();
    stem == "index"
        || stem == "readme"
        || candidate
            .directories
            .first()
            .is_some_and(|dir| dir.to_lowercase() == stem)
}
