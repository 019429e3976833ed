//! # Autosidebar
//!
//! Generates a documentation sidebar from a directory of docs. The directory
//! tree is the data source: folders become categories, doc files become
//! links, and number prefixes or front matter decide the order.
//!
//! # Architecture: Select, Treeify, Generate, Sort
//!
//! The generator takes a flat list of [`types::Document`]s and produces a
//! nested, ordered list of [`types::SidebarItem`]s:
//!
//! ```text
//! 1. Select    all docs        →  docs under the autogeneration root
//! 2. Treeify   selected docs   →  directory tree rebuilt from paths
//! 3. Generate  directory tree  →  items carrying sort keys, links resolved
//! 4. Sort      items           →  ordered sidebar, sort keys dropped
//! ```
//!
//! The generator never touches the filesystem. [`scan`] turns a docs
//! directory into its inputs, and [`defaults`] fills in the collapse flags
//! a later stage needs. [`pipeline`] runs all three for the CLI.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generator`] | The four generator stages and [`generator::generate_sidebar_items`] |
//! | [`types`] | Documents, category metadata, and sidebar items (serde) |
//! | [`naming`] | `NN-name` number prefix parser and path prefix stripping |
//! | [`category_index`] | Which doc is a folder's landing page by convention |
//! | [`scan`] | Walks a docs directory: front matter and `_category_` files |
//! | [`defaults`] | Applies global `collapsed`/`collapsible` defaults |
//! | [`config`] | `autosidebar.toml` loading, validation, and merging |
//! | [`pipeline`] | Scan, generate, and resolve defaults in one call |
//! | [`output`] | CLI output formatting, tree display of the sidebar |
//!
//! # Design Decisions
//!
//! ## Ordering Is Local
//!
//! Positions only ever compare siblings. A doc with `sidebar_position: -100`
//! deep in a folder never jumps out of that folder. Items without a position
//! go last, and ties fall back to the file or folder name so the result never
//! depends on the order docs were handed in.
//!
//! ## One Landing Page Per Category
//!
//! A category's label can link to a doc. The doc is picked by an explicit
//! `link` in the folder's `_category_` file, else by convention (`index`,
//! `README`, or a doc named like its folder). The chosen doc is removed from
//! the category's children so it isn't listed twice. An explicit link to a
//! doc that doesn't exist fails the whole build rather than producing a
//! sidebar with a dead link.
//!
//! ## Pluggable Conventions
//!
//! The number prefix parser and the landing page matcher are plain function
//! values. The defaults live in [`naming`] and [`category_index`]; callers
//! can pass their own.

pub mod category_index;
pub mod config;
pub mod defaults;
pub mod generator;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
