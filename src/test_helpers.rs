//! Shared test utilities for the autosidebar test suite.
//!
//! Provides doc builders, lookup helpers that panic with the available
//! entries on a miss, and a sidebar shape assertion.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let docs = vec![
//!     positioned(doc("intro", ".", "intro.md"), 1.0),
//!     doc("guides/a", "guides", "guides/a.md"),
//! ];
//! let items = generate(&docs);
//!
//! assert_shape(&items, &["doc:intro", "category:guides"]);
//! assert_eq!(item_ids(&category(&items, "guides").items), vec!["guides/a"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{CategoryLink, CategoryMetadata, Document, SidebarItem, SidebarItemCategory};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

/// A doc with no position and no display overrides.
pub fn doc(id: &str, source_dir_name: &str, source: &str) -> Document {
    Document {
        id: id.to_string(),
        source_dir_name: source_dir_name.to_string(),
        source: source.to_string(),
        sidebar_position: None,
        label: None,
        class_name: None,
    }
}

pub fn positioned(mut doc: Document, position: f64) -> Document {
    doc.sidebar_position = Some(position);
    doc
}

/// Category metadata whose only setting is a doc link.
pub fn category_metadata_linking(id: &str) -> CategoryMetadata {
    CategoryMetadata {
        link: Some(Some(CategoryLink::Doc { id: id.to_string() })),
        ..Default::default()
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a doc by id. Panics if not found.
pub fn find_doc<'a>(docs: &'a [Document], id: &str) -> &'a Document {
    docs.iter().find(|d| d.id == id).unwrap_or_else(|| {
        panic!("doc '{id}' not found. Available: {:?}", doc_ids(docs))
    })
}

/// All doc ids in input order.
pub fn doc_ids(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.id.as_str()).collect()
}

/// Find a category by label among siblings. Panics if not found.
pub fn category<'a>(items: &'a [SidebarItem], label: &str) -> &'a SidebarItemCategory {
    items
        .iter()
        .find_map(|item| match item {
            SidebarItem::Category(c) if c.label == label => Some(c),
            _ => None,
        })
        .unwrap_or_else(|| panic!("category '{label}' not found. Available: {:?}", shape(items)))
}

// =========================================================================
// Sidebar shape
// =========================================================================

/// Doc ids among the given siblings, in order. Categories are skipped.
pub fn item_ids(items: &[SidebarItem]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| match item {
            SidebarItem::Doc(d) => Some(d.id.as_str()),
            SidebarItem::Category(_) => None,
        })
        .collect()
}

/// `doc:<id>` / `category:<label>` for each sibling, in order.
pub fn shape(items: &[SidebarItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            SidebarItem::Doc(d) => format!("doc:{}", d.id),
            SidebarItem::Category(c) => format!("category:{}", c.label),
        })
        .collect()
}

/// Assert the kind and identity of every sibling, in order.
///
/// ```rust
/// assert_shape(&items, &["doc:intro", "category:Guides"]);
/// ```
pub fn assert_shape(items: &[SidebarItem], expected: &[&str]) {
    assert_eq!(shape(items), expected, "sidebar shape mismatch");
}
