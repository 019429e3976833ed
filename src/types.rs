//! Shared types: the docs going in, the per-folder metadata alongside them,
//! and the sidebar items coming out.
//!
//! Field names serialize in camelCase so the generated sidebar can be dropped
//! straight into a JavaScript navigation config.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A documentation file as seen by the sidebar generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable unique id (`guides/intro`).
    pub id: String,
    /// Directory relative to the docs root, `/`-separated. `.` for the root itself.
    pub source_dir_name: String,
    /// Path of the file; only its last segment is used for tree keys.
    pub source: String,
    /// Explicit ordering hint (front matter, else the file's number prefix).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_position: Option<f64>,
    /// Display label override (`sidebar_label` front matter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// CSS class override (`sidebar_class_name` front matter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Where a category's label links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// Link to an existing doc, by local or fully-qualified id.
    Doc { id: String },
    /// Link to a page listing the category's children, rendered downstream.
    GeneratedIndex(GeneratedIndexLink),
}

/// Options for a generated index page. Passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedIndexLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Per-folder configuration, usually read from `_category_.{json,yml,yaml}`.
///
/// Unknown keys are ignored so newer metadata files keep working.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `None`: no `link` key, the index convention applies.
    /// `Some(None)`: `link: null`, the category links nowhere.
    /// `Some(Some(_))`: an explicit link.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<Option<CategoryLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Category metadata keyed by folder path joined onto the autogeneration root
/// (`api/guides`, or just `guides` when the root is `.`).
pub type CategoriesMetadata = HashMap<String, CategoryMetadata>;

/// A sidebar entry pointing at one doc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItemDoc {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// A sidebar entry for a folder.
///
/// Generic over its children so the generator can carry sort keys on them
/// while the public tree cannot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItemCategory<I = SidebarItem> {
    pub label: String,
    /// Unset means "use the sidebar-wide default", see [`crate::defaults`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub items: Vec<I>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

impl<I> SidebarItemCategory<I> {
    /// Same category with its children transformed.
    pub fn map_items<J>(self, f: impl FnOnce(Vec<I>) -> Vec<J>) -> SidebarItemCategory<J> {
        SidebarItemCategory {
            label: self.label,
            collapsed: self.collapsed,
            collapsible: self.collapsible,
            class_name: self.class_name,
            items: f(self.items),
            link: self.link,
        }
    }
}

/// Public sidebar tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    Doc(SidebarItemDoc),
    Category(SidebarItemCategory),
}
