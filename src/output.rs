//! CLI output formatting for generated sidebars.
//!
//! # Information-First Display
//!
//! Every item leads with its positional index among its siblings and the text
//! a reader would see in the sidebar. Doc ids and category link targets are
//! shown as secondary context so the output doubles as an inventory of what
//! ended up where.
//!
//! # Output Format
//!
//! ```text
//! 001 intro
//! 002 Getting Started/ → doc:getting-started/index
//!     001 getting-started/requirements
//!     002 getting-started/install
//! 003 Guides/ [collapsed] → doc:guides/overview
//!     001 advanced/ [collapsed] → doc:guides/advanced/README
//!         001 Performance tuning (guides/advanced/tuning)
//! 004 api/ [collapsed] → generated-index
//!     001 api/client
//!     002 api/server
//! 005 faq
//!
//! Generated 7 docs in 4 categories
//! ```
//!
//! Categories end in `/`. Docs with a label override show the label first and
//! the id in parentheses; docs without one show the id.
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` for testability and have no side
//! effects. `print_*` wrappers write to stderr so stdout stays free for JSON.

use crate::defaults::ResolvedItem;
use crate::types::{CategoryLink, SidebarItemDoc};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a doc line: labelled docs show the label with the id in parens.
///
/// ```text
/// 001 Performance tuning (guides/advanced/tuning)   // labelled
/// 001 guides/overview                               // id is the identity
/// ```
fn doc_line(index: usize, doc: &SidebarItemDoc) -> String {
    match doc.label.as_deref() {
        Some(label) if !label.is_empty() => {
            format!("{} {} ({})", format_index(index), label, doc.id)
        }
        _ => format!("{} {}", format_index(index), doc.id),
    }
}

/// Where a category label points: `→ doc:<id>`, `→ generated-index`, or nothing.
fn link_target(link: Option<&CategoryLink>) -> Option<String> {
    match link? {
        CategoryLink::Doc { id } => Some(format!("doc:{id}")),
        CategoryLink::GeneratedIndex(_) => Some("generated-index".to_string()),
    }
}

fn category_line(index: usize, label: &str, collapsed: bool, link: Option<&CategoryLink>) -> String {
    let mut line = format!("{} {}/", format_index(index), label);
    if collapsed {
        line.push_str(" [collapsed]");
    }
    if let Some(target) = link_target(link) {
        line.push_str(" → ");
        line.push_str(&target);
    }
    line
}

// ============================================================================
// Sidebar tree
// ============================================================================

/// Format the sidebar tree, one line per item.
pub fn format_sidebar(items: &[ResolvedItem]) -> Vec<String> {
    let mut lines = Vec::new();
    format_sidebar_recursive(items, 0, &mut lines);
    lines
}

fn format_sidebar_recursive(items: &[ResolvedItem], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        let prefix = indent(depth);
        match item {
            ResolvedItem::Doc(doc) => lines.push(format!("{}{}", prefix, doc_line(i + 1, doc))),
            ResolvedItem::Category(category) => {
                lines.push(format!(
                    "{}{}",
                    prefix,
                    category_line(
                        i + 1,
                        &category.label,
                        category.collapsed,
                        category.link.as_ref()
                    )
                ));
                format_sidebar_recursive(&category.items, depth + 1, lines);
            }
        }
    }
}

/// Count `(docs, categories)` in the tree. Docs used as category links count.
fn count_items(items: &[ResolvedItem]) -> (usize, usize) {
    items.iter().fold((0, 0), |(docs, categories), item| match item {
        ResolvedItem::Doc(_) => (docs + 1, categories),
        ResolvedItem::Category(category) => {
            let linked = usize::from(matches!(category.link, Some(CategoryLink::Doc { .. })));
            let (d, c) = count_items(&category.items);
            (docs + d + linked, categories + c + 1)
        }
    })
}

/// One-line summary of the generated sidebar.
pub fn format_summary(items: &[ResolvedItem]) -> String {
    let (docs, categories) = count_items(items);
    format!(
        "Generated {} {} in {} {}",
        docs,
        if docs == 1 { "doc" } else { "docs" },
        categories,
        if categories == 1 { "category" } else { "categories" }
    )
}

pub fn print_sidebar(items: &[ResolvedItem]) {
    for line in format_sidebar(items) {
        eprintln!("{}", line);
    }
    eprintln!();
    eprintln!("{}", format_summary(items));
}
