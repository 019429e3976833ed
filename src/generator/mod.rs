//! Autogenerated sidebar: flat docs in, ordered item tree out.
//!
//! ```text
//! 1. Select   docs + dir_name  →  docs under dir_name     (select.rs)
//! 2. Treeify  selected docs    →  Folder tree by segment  (tree.rs)
//! 3. Generate Folder tree      →  items with sort keys    (items.rs)
//! 4. Sort     items            →  public SidebarItem tree (sort.rs)
//! ```
//!
//! Every stage is a pure function of the previous stage's output plus the
//! read-only [`GeneratorContext`]. Nothing is cached between calls. A broken
//! explicit category link fails the whole call; no partial tree is returned.

mod items;
mod select;
mod sort;
mod tree;

pub use select::select_autogen_docs;
pub use tree::{Folder, Node, treeify};

use crate::category_index::CategoryIndexMatcher;
use crate::naming::NumberPrefixParser;
use crate::types::{CategoriesMetadata, Document, SidebarItem};
use std::collections::HashMap;
use thiserror::Error;

/// Autogeneration root meaning "the whole docs directory".
pub const CURRENT_DIR: &str = ".";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Can't find any doc with id={id}.\nAvailable doc ids:\n- {}", .available.join("\n- "))]
    DocNotFound { id: String, available: Vec<String> },
    #[error("{path} is both a doc and a folder")]
    PathConflict { path: String },
}

/// Everything the generator needs for one autogenerated sidebar slice.
pub struct GeneratorArgs<'a> {
    pub number_prefix_parser: &'a NumberPrefixParser,
    pub is_category_index: &'a CategoryIndexMatcher,
    /// All docs of the docs plugin instance, not only the ones under `dir_name`.
    pub docs: &'a [Document],
    /// Autogeneration root, relative to the docs root. `.` selects everything.
    pub dir_name: &'a str,
    pub categories_metadata: &'a CategoriesMetadata,
}

/// Lookup of docs by id.
pub type DocsById<'a> = HashMap<&'a str, &'a Document>;

pub fn create_docs_by_id_index(docs: &[Document]) -> DocsById<'_> {
    docs.iter().map(|doc| (doc.id.as_str(), doc)).collect()
}

/// Read-only lookup tables shared by the recursive stages.
pub(crate) struct GeneratorContext<'a> {
    pub autogen_dir: &'a str,
    pub docs_by_id: DocsById<'a>,
    pub categories_metadata: &'a CategoriesMetadata,
    pub number_prefix_parser: &'a NumberPrefixParser,
    pub is_category_index: &'a CategoryIndexMatcher,
}

impl<'a> GeneratorContext<'a> {
    fn new(args: &GeneratorArgs<'a>, autogen_dir: &'a str) -> Self {
        Self {
            autogen_dir,
            docs_by_id: create_docs_by_id_index(args.docs),
            categories_metadata: args.categories_metadata,
            number_prefix_parser: args.number_prefix_parser,
            is_category_index: args.is_category_index,
        }
    }

    pub fn get_doc(&self, id: &str) -> Result<&'a Document, GenerateError> {
        self.docs_by_id
            .get(id)
            .copied()
            .ok_or_else(|| GenerateError::DocNotFound {
                id: id.to_string(),
                available: self.available_ids(),
            })
    }

    fn available_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.docs_by_id.keys().map(|id| id.to_string()).collect();
        ids.sort();
        ids
    }
}

/// Normalize an autogeneration root: no trailing `/`, empty means `.`.
pub fn normalize_autogen_dir(dir_name: &str) -> &str {
    let trimmed = dir_name.trim_end_matches('/');
    if trimmed.is_empty() {
        CURRENT_DIR
    } else {
        trimmed
    }
}

/// Build the sidebar items for the docs under `args.dir_name`.
pub fn generate_sidebar_items(args: &GeneratorArgs) -> Result<Vec<SidebarItem>, GenerateError> {
    let autogen_dir = normalize_autogen_dir(args.dir_name);
    let context = GeneratorContext::new(args, autogen_dir);

    let docs = select_autogen_docs(args.docs, autogen_dir);
    let root = treeify(&docs, autogen_dir)?;
    let items = items::generate_items(&root, &context)?;
    Ok(sort::sort_items(items))
}
