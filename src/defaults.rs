//! Sidebar-wide defaults for category collapsing.
//!
//! The generator leaves `collapsed` and `collapsible` unset unless a
//! `_category_` file says otherwise. This stage fills them in from the
//! configured defaults, producing a tree where every category states both
//! flags explicitly.
//!
//! A category that cannot collapse is never shown collapsed, whatever its
//! `collapsed` setting says.

use crate::types::{CategoryLink, SidebarItem, SidebarItemDoc};
use serde::{Deserialize, Serialize};

/// Defaults for categories that don't set their own flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarDefaults {
    /// Whether categories can be expanded and collapsed at all.
    pub collapsible: bool,
    /// Whether collapsible categories start collapsed.
    pub collapsed: bool,
}

impl Default for SidebarDefaults {
    fn default() -> Self {
        Self {
            collapsible: true,
            collapsed: true,
        }
    }
}

/// A category with both collapse flags decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCategory {
    pub label: String,
    pub collapsed: bool,
    pub collapsible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub items: Vec<ResolvedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

/// Sidebar tree node after defaults are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedItem {
    Doc(SidebarItemDoc),
    Category(ResolvedCategory),
}

/// Apply `defaults` to every category in the tree.
pub fn apply_sidebar_defaults(items: Vec<SidebarItem>, defaults: &SidebarDefaults) -> Vec<ResolvedItem> {
    items
        .into_iter()
        .map(|item| match item {
            SidebarItem::Doc(doc) => ResolvedItem::Doc(doc),
            SidebarItem::Category(category) => {
                let collapsible = category.collapsible.unwrap_or(defaults.collapsible);
                let collapsed = collapsible && category.collapsed.unwrap_or(defaults.collapsed);
                ResolvedItem::Category(ResolvedCategory {
                    label: category.label,
                    collapsed,
                    collapsible,
                    class_name: category.class_name,
                    items: apply_sidebar_defaults(category.items, defaults),
                    link: category.link,
                })
            }
        })
        .collect()
}
