//! End-to-end sidebar build for a docs directory on disk.
//!
//! ```text
//! 1. Scan      docs/        →  Documents + category metadata  (scan.rs)
//! 2. Generate  documents    →  SidebarItem tree               (generator/)
//! 3. Resolve   item tree    →  ResolvedItem tree              (defaults.rs)
//! ```
//!
//! The CLI calls [`build_sidebar`]; library users who already have their docs
//! in memory can call [`generate_sidebar_items`] directly.

use crate::category_index::is_category_index;
use crate::config::SidebarConfig;
use crate::defaults::{ResolvedItem, apply_sidebar_defaults};
use crate::generator::{GenerateError, GeneratorArgs, generate_sidebar_items};
use crate::naming::{NumberPrefixParser, disabled_number_prefix_parser, parse_number_prefix};
use crate::scan::{ScanError, scan_docs};
use log::info;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// The number prefix parser selected by `config.number_prefix_parser`.
pub fn configured_number_prefix_parser(config: &SidebarConfig) -> &'static NumberPrefixParser {
    if config.number_prefix_parser {
        &parse_number_prefix
    } else {
        &disabled_number_prefix_parser
    }
}

/// Scan `root` and build the fully resolved sidebar for `config.autogen_dir`.
pub fn build_sidebar(root: &Path, config: &SidebarConfig) -> Result<Vec<ResolvedItem>, BuildError> {
    let number_prefix_parser = configured_number_prefix_parser(config);
    let scanned = scan_docs(root, &config.scan, number_prefix_parser)?;
    info!(
        "scanned {} docs and {} category files in {}",
        scanned.docs.len(),
        scanned.categories_metadata.len(),
        root.display()
    );

    let items = generate_sidebar_items(&GeneratorArgs {
        number_prefix_parser,
        is_category_index: &is_category_index,
        docs: &scanned.docs,
        dir_name: &config.autogen_dir,
        categories_metadata: &scanned.categories_metadata,
    })?;

    Ok(apply_sidebar_defaults(items, &config.sidebar))
}
