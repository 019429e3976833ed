use super::tree::{Folder, Node};
use super::{CURRENT_DIR, GenerateError, GeneratorContext};
use crate::category_index::CategoryIndexCandidate;
use crate::types::{CategoryLink, CategoryMetadata, SidebarItemCategory, SidebarItemDoc};

/// A generated item still carrying its sort keys.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WithPosition<T> {
    /// Explicit position: front matter, category metadata, or number prefix.
    pub position: Option<f64>,
    /// File or folder name, the tie-breaker.
    pub source: String,
    pub item: T,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DraftItem {
    Doc(SidebarItemDoc),
    Category(SidebarItemCategory<PositionedItem>),
}

pub(crate) type PositionedItem = WithPosition<DraftItem>;

/// Last segment of a doc id: `guides/intro` → `intro`.
fn local_doc_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Category metadata key: the folder path joined onto the autogeneration root.
fn metadata_key(autogen_dir: &str, full_path: &str) -> String {
    if autogen_dir == CURRENT_DIR {
        full_path.to_string()
    } else {
        format!("{autogen_dir}/{full_path}")
    }
}

/// Turn a folder's entries into items, recursing into sub-folders.
pub(crate) fn generate_items(
    folder: &Folder,
    ctx: &GeneratorContext,
) -> Result<Vec<PositionedItem>, GenerateError> {
    folder
        .entries
        .iter()
        .map(|(key, node)| node_to_item(node, key, key, ctx))
        .collect()
}

/// `key` is the file or folder name; `full_path` is relative to the autogeneration root.
fn node_to_item(
    node: &Node,
    key: &str,
    full_path: &str,
    ctx: &GeneratorContext,
) -> Result<PositionedItem, GenerateError> {
    match node {
        Node::Leaf(id) => create_doc_item(id, key, ctx),
        Node::Folder(folder) => create_category_item(folder, full_path, key, ctx),
    }
}

fn create_doc_item(
    id: &str,
    file_name: &str,
    ctx: &GeneratorContext,
) -> Result<PositionedItem, GenerateError> {
    let doc = ctx.get_doc(id)?;
    Ok(WithPosition {
        position: doc.sidebar_position,
        source: file_name.to_string(),
        item: DraftItem::Doc(SidebarItemDoc {
            id: id.to_string(),
            label: doc.label.clone(),
            class_name: doc.class_name.clone(),
        }),
    })
}

fn create_category_item(
    folder: &Folder,
    full_path: &str,
    folder_name: &str,
    ctx: &GeneratorContext,
) -> Result<PositionedItem, GenerateError> {
    let metadata = ctx
        .categories_metadata
        .get(&metadata_key(ctx.autogen_dir, full_path));
    let parsed = (ctx.number_prefix_parser)(folder_name);

    // Children first: the linked doc is picked among them.
    let all_items = folder
        .entries
        .iter()
        .map(|(key, node)| node_to_item(node, key, &format!("{full_path}/{key}"), ctx))
        .collect::<Result<Vec<_>, _>>()?;

    let linked_doc_id = category_linked_doc_id(metadata, &all_items, ctx)?;

    let link = match &linked_doc_id {
        // Always the qualified id, even when matched by local id.
        Some(id) => Some(CategoryLink::Doc { id: id.clone() }),
        None => metadata.and_then(|m| m.link.clone().flatten()),
    };

    let items = all_items
        .into_iter()
        .filter(|child| {
            !matches!(&child.item, DraftItem::Doc(doc) if Some(&doc.id) == linked_doc_id.as_ref())
        })
        .collect();

    Ok(WithPosition {
        position: metadata
            .and_then(|m| m.position)
            .or(parsed.number_prefix.map(f64::from)),
        source: folder_name.to_string(),
        item: DraftItem::Category(SidebarItemCategory {
            label: metadata
                .and_then(|m| m.label.clone())
                .unwrap_or(parsed.filename),
            collapsed: metadata.and_then(|m| m.collapsed),
            collapsible: metadata.and_then(|m| m.collapsible),
            class_name: metadata.and_then(|m| m.class_name.clone()),
            items,
            link,
        }),
    })
}

/// Which doc, if any, the category label links to.
///
/// 1. `link: {type: doc, id}` → a child whose local id is `id`, else the doc
///    with that exact id anywhere. Neither existing is an error.
/// 2. Any other `link`, including `null` → none.
/// 3. No `link` key → the first child matching the index convention.
fn category_linked_doc_id(
    metadata: Option<&CategoryMetadata>,
    items: &[PositionedItem],
    ctx: &GeneratorContext,
) -> Result<Option<String>, GenerateError> {
    match metadata.and_then(|m| m.link.as_ref()) {
        Some(Some(CategoryLink::Doc { id })) => match find_doc_by_local_id(items, id) {
            Some(doc) => Ok(Some(doc.id.clone())),
            None => ctx.get_doc(id).map(|doc| Some(doc.id.clone())),
        },
        Some(_) => Ok(None),
        None => find_conventional_category_doc(items, ctx),
    }
}

fn doc_items(items: &[PositionedItem]) -> impl Iterator<Item = &SidebarItemDoc> {
    items.iter().filter_map(|child| match &child.item {
        DraftItem::Doc(doc) => Some(doc),
        DraftItem::Category(_) => None,
    })
}

/// First child doc, in child order, whose local id is `local_id`.
fn find_doc_by_local_id<'i>(
    items: &'i [PositionedItem],
    local_id: &str,
) -> Option<&'i SidebarItemDoc> {
    doc_items(items).find(|doc| local_doc_id(&doc.id) == local_id)
}

fn find_conventional_category_doc(
    items: &[PositionedItem],
    ctx: &GeneratorContext,
) -> Result<Option<String>, GenerateError> {
    for item in doc_items(items) {
        let doc = ctx.get_doc(&item.id)?;
        if (ctx.is_category_index)(&CategoryIndexCandidate::from_doc(doc)) {
            return Ok(Some(item.id.clone()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_index::is_category_index;
    use crate::generator::{GeneratorArgs, treeify};
    use crate::naming::parse_number_prefix;
    use crate::test_helpers::*;
    use crate::types::{CategoriesMetadata, Document};

    fn generate(
        docs: &[Document],
        autogen_dir: &str,
        metadata: &CategoriesMetadata,
    ) -> Result<Vec<PositionedItem>, GenerateError> {
        let args = GeneratorArgs {
            number_prefix_parser: &parse_number_prefix,
            is_category_index: &is_category_index,
            docs,
            dir_name: autogen_dir,
            categories_metadata: metadata,
        };
        let ctx = GeneratorContext::new(&args, autogen_dir);
        let refs: Vec<&Document> = docs.iter().collect();
        let root = treeify(&refs, autogen_dir)?;
        generate_items(&root, &ctx)
    }

    fn only_category(items: &[PositionedItem]) -> (&PositionedItem, &SidebarItemCategory<PositionedItem>) {
        assert_eq!(items.len(), 1, "expected a single item, got {items:?}");
        match &items[0].item {
            DraftItem::Category(category) => (&items[0], category),
            DraftItem::Doc(doc) => panic!("expected a category, got doc {}", doc.id),
        }
    }

    fn child_ids(category: &SidebarItemCategory<PositionedItem>) -> Vec<&str> {
        doc_items(&category.items).map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn local_doc_id_is_last_segment() {
        assert_eq!(local_doc_id("guides/advanced/intro"), "intro");
        assert_eq!(local_doc_id("intro"), "intro");
    }

    #[test]
    fn metadata_key_joins_root() {
        assert_eq!(metadata_key(".", "guides/advanced"), "guides/advanced");
        assert_eq!(metadata_key("api", "guides"), "api/guides");
    }

    #[test]
    fn doc_item_carries_sort_keys_and_overrides() {
        let mut d = positioned(doc("intro", ".", "docs/01-intro.md"), 1.0);
        d.label = Some("Start here".to_string());
        let items = generate(&[d], ".", &CategoriesMetadata::new()).unwrap();

        assert_eq!(
            items,
            vec![WithPosition {
                position: Some(1.0),
                source: "01-intro.md".to_string(),
                item: DraftItem::Doc(SidebarItemDoc {
                    id: "intro".to_string(),
                    label: Some("Start here".to_string()),
                    class_name: None,
                }),
            }]
        );
    }

    #[test]
    fn folder_prefix_becomes_position_and_label() {
        let docs = [doc("tutorials/a", "02-tutorials", "02-tutorials/a.md")];
        let items = generate(&docs, ".", &CategoriesMetadata::new()).unwrap();

        let (positioned, category) = only_category(&items);
        assert_eq!(positioned.position, Some(2.0));
        assert_eq!(positioned.source, "02-tutorials");
        assert_eq!(category.label, "tutorials");
        assert_eq!(category.collapsed, None);
        assert_eq!(category.collapsible, None);
        assert_eq!(category.link, None);
    }

    #[test]
    fn metadata_overrides_prefix() {
        let docs = [doc("tutorials/a", "02-tutorials", "02-tutorials/a.md")];
        let metadata = CategoriesMetadata::from([(
            "02-tutorials".to_string(),
            CategoryMetadata {
                label: Some("Tutorials".to_string()),
                position: Some(7.5),
                collapsible: Some(false),
                ..Default::default()
            },
        )]);
        let items = generate(&docs, ".", &metadata).unwrap();

        let (positioned, category) = only_category(&items);
        assert_eq!(positioned.position, Some(7.5));
        assert_eq!(category.label, "Tutorials");
        assert_eq!(category.collapsible, Some(false));
    }

    #[test]
    fn nested_metadata_keyed_by_full_path() {
        let docs = [doc("api/a/b/x", "api/a/b", "api/a/b/x.md")];
        let metadata = CategoriesMetadata::from([(
            "api/a/b".to_string(),
            CategoryMetadata {
                label: Some("Deep".to_string()),
                ..Default::default()
            },
        )]);
        let items = generate(&docs, "api", &metadata).unwrap();

        let (_, a) = only_category(&items);
        assert_eq!(a.label, "a");
        let (_, b) = only_category(&a.items);
        assert_eq!(b.label, "Deep");
    }

    #[test]
    fn local_id_match_takes_first_child_in_order() {
        let docs = [
            doc("guides/index", "guides", "guides/a.md"),
            doc("other/index", "guides", "guides/b.md"),
        ];
        let metadata =
            CategoriesMetadata::from([("guides".to_string(), category_metadata_linking("index"))]);
        let items = generate(&docs, ".", &metadata).unwrap();

        let (_, guides) = only_category(&items);
        assert_eq!(
            guides.link,
            Some(CategoryLink::Doc {
                id: "guides/index".to_string()
            })
        );
        assert_eq!(child_ids(guides), vec!["other/index"]);
    }

    #[test]
    fn local_id_match_ignores_grandchildren() {
        let docs = [
            doc("guides/deep/intro", "guides/deep", "guides/deep/intro.md"),
            doc("intro", ".", "intro.md"),
        ];
        let metadata =
            CategoriesMetadata::from([("guides".to_string(), category_metadata_linking("intro"))]);
        let items = generate(&docs, ".", &metadata).unwrap();

        let guides = items
            .iter()
            .find_map(|i| match &i.item {
                DraftItem::Category(c) => Some(c),
                DraftItem::Doc(_) => None,
            })
            .unwrap();
        // Falls back to the qualified id `intro`, which is the root doc.
        assert_eq!(
            guides.link,
            Some(CategoryLink::Doc {
                id: "intro".to_string()
            })
        );
        let (_, deep) = only_category(&guides.items);
        assert_eq!(child_ids(deep), vec!["guides/deep/intro"]);
    }

    #[test]
    fn qualified_link_id_resolves_child() {
        let docs = [
            doc("guides/start", "guides", "guides/start.md"),
            doc("guides/next", "guides", "guides/next.md"),
        ];
        let metadata = CategoriesMetadata::from([(
            "guides".to_string(),
            category_metadata_linking("guides/start"),
        )]);
        let items = generate(&docs, ".", &metadata).unwrap();

        let (_, guides) = only_category(&items);
        assert_eq!(child_ids(guides), vec!["guides/next"]);
    }

    #[test]
    fn unresolvable_link_fails() {
        let docs = [doc("guides/a", "guides", "guides/a.md")];
        let metadata =
            CategoriesMetadata::from([("guides".to_string(), category_metadata_linking("nope"))]);
        let err = generate(&docs, ".", &metadata).unwrap_err();
        assert!(matches!(err, GenerateError::DocNotFound { ref id, .. } if id == "nope"));
    }

    #[test]
    fn convention_picks_folder_named_doc() {
        let docs = [
            doc("guides/guides", "guides", "guides/guides.md"),
            doc("guides/zz", "guides", "guides/zz.md"),
        ];
        let items = generate(&docs, ".", &CategoriesMetadata::new()).unwrap();

        let (_, guides) = only_category(&items);
        assert_eq!(
            guides.link,
            Some(CategoryLink::Doc {
                id: "guides/guides".to_string()
            })
        );
        assert_eq!(child_ids(guides), vec!["guides/zz"]);
    }

    #[test]
    fn convention_uses_supplied_matcher() {
        let docs = [
            doc("guides/index", "guides", "guides/index.md"),
            doc("guides/landing", "guides", "guides/landing.md"),
        ];
        let metadata = CategoriesMetadata::new();
        let landing_only = |c: &CategoryIndexCandidate| c.file_name == "landing";
        let args = GeneratorArgs {
            number_prefix_parser: &parse_number_prefix,
            is_category_index: &landing_only,
            docs: &docs,
            dir_name: ".",
            categories_metadata: &metadata,
        };
        let ctx = GeneratorContext::new(&args, ".");
        let refs: Vec<&Document> = docs.iter().collect();
        let items = generate_items(&treeify(&refs, ".").unwrap(), &ctx).unwrap();

        let (_, guides) = only_category(&items);
        assert_eq!(
            guides.link,
            Some(CategoryLink::Doc {
                id: "guides/landing".to_string()
            })
        );
        assert_eq!(child_ids(guides), vec!["guides/index"]);
    }

    #[test]
    fn no_match_leaves_children_and_link_alone() {
        let docs = [doc("guides/a", "guides", "guides/a.md")];
        let items = generate(&docs, ".", &CategoriesMetadata::new()).unwrap();

        let (_, guides) = only_category(&items);
        assert_eq!(guides.link, None);
        assert_eq!(child_ids(guides), vec!["guides/a"]);
    }
}
