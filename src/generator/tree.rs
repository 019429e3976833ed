use super::{CURRENT_DIR, GenerateError};
use crate::types::Document;
use std::collections::BTreeMap;

/// One entry of the reconstructed directory tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// A sub-directory.
    Folder(Folder<'a>),
    /// A doc file; holds the doc id.
    Leaf(&'a str),
}

/// Directory contents keyed by folder name or doc file name.
///
/// Key order carries no meaning; the sorter decides the final order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder<'a> {
    pub entries: BTreeMap<String, Node<'a>>,
}

/// Directory segments between `autogen_dir` and the doc's own directory.
///
/// - `autogen_dir=a/b`, doc in `a/b/c/d` → `["c", "d"]`
/// - `autogen_dir=a/b`, doc in `a/b` → `[]`
fn relative_breadcrumb<'d>(doc: &'d Document, autogen_dir: &str) -> Vec<&'d str> {
    if doc.source_dir_name == autogen_dir {
        return Vec::new();
    }
    let relative = if autogen_dir == CURRENT_DIR {
        doc.source_dir_name.as_str()
    } else {
        doc.source_dir_name
            .strip_prefix(autogen_dir)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&doc.source_dir_name)
    };
    relative.split('/').filter(|s| !s.is_empty()).collect()
}

fn file_name(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}

/// Rebuild the directory tree from the docs' directory paths.
///
/// Docs sitting directly in `autogen_dir` land on the returned root folder.
pub fn treeify<'a>(docs: &[&'a Document], autogen_dir: &str) -> Result<Folder<'a>, GenerateError> {
    let mut root = Folder::default();

    for &doc in docs {
        let breadcrumb = relative_breadcrumb(doc, autogen_dir);
        let mut current = &mut root;
        for (depth, segment) in breadcrumb.iter().enumerate() {
            let node = current
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| Node::Folder(Folder::default()));
            current = match node {
                Node::Folder(folder) => folder,
                Node::Leaf(_) => {
                    return Err(GenerateError::PathConflict {
                        path: breadcrumb[..=depth].join("/"),
                    });
                }
            };
        }

        let key = file_name(&doc.source);
        if let Some(Node::Folder(_)) = current.entries.get(key) {
            let mut path = breadcrumb.clone();
            path.push(key);
            return Err(GenerateError::PathConflict {
                path: path.join("/"),
            });
        }
        current
            .entries
            .insert(key.to_string(), Node::Leaf(doc.id.as_str()));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::doc;

    fn folder<'a>(entries: Vec<(&str, Node<'a>)>) -> Node<'a> {
        Node::Folder(Folder {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        })
    }

    #[test]
    fn breadcrumb_of_root_doc_is_empty() {
        let d = doc("api/intro", "api", "api/intro.md");
        assert!(relative_breadcrumb(&d, "api").is_empty());
    }

    #[test]
    fn breadcrumb_strips_root_and_separator() {
        let d = doc("a/b/c/d/x", "a/b/c/d", "a/b/c/d/x.md");
        assert_eq!(relative_breadcrumb(&d, "a/b"), vec!["c", "d"]);
    }

    #[test]
    fn breadcrumb_under_current_dir() {
        let d = doc("guides/x", "guides/deep", "guides/deep/x.md");
        assert_eq!(relative_breadcrumb(&d, "."), vec!["guides", "deep"]);
        let root_doc = doc("x", ".", "x.md");
        assert!(relative_breadcrumb(&root_doc, ".").is_empty());
    }

    #[test]
    fn root_docs_registered_on_root() {
        let docs = [doc("intro", ".", "intro.md"), doc("faq", ".", "faq.mdx")];
        let refs: Vec<&Document> = docs.iter().collect();
        let root = treeify(&refs, ".").unwrap();

        assert_eq!(root.entries.len(), 2);
        assert_eq!(root.entries["intro.md"], Node::Leaf("intro"));
        assert_eq!(root.entries["faq.mdx"], Node::Leaf("faq"));
    }

    #[test]
    fn nested_docs_share_folders() {
        let docs = [
            doc("api/intro", "api", "api/intro.md"),
            doc("api/a/guide", "api/a", "api/a/guide.md"),
            doc("api/a/b/deep", "api/a/b", "api/a/b/deep.md"),
            doc("api/a/other", "api/a", "api/a/other.md"),
        ];
        let refs: Vec<&Document> = docs.iter().collect();
        let root = treeify(&refs, "api").unwrap();

        let expected = folder(vec![
            ("intro.md", Node::Leaf("api/intro")),
            (
                "a",
                folder(vec![
                    ("guide.md", Node::Leaf("api/a/guide")),
                    ("other.md", Node::Leaf("api/a/other")),
                    ("b", folder(vec![("deep.md", Node::Leaf("api/a/b/deep"))])),
                ]),
            ),
        ]);
        assert_eq!(Node::Folder(root), expected);
    }

    #[test]
    fn leaf_key_is_file_name_not_id() {
        let docs = [doc("custom-id", "guides", "guides/01-start.md")];
        let refs: Vec<&Document> = docs.iter().collect();
        let root = treeify(&refs, ".").unwrap();

        let Node::Folder(guides) = &root.entries["guides"] else {
            panic!("guides should be a folder");
        };
        assert_eq!(guides.entries["01-start.md"], Node::Leaf("custom-id"));
    }

    #[test]
    fn file_and_folder_with_same_name_conflict() {
        let docs = [
            doc("weird", ".", "guides"),
            doc("guides/intro", "guides", "guides/intro.md"),
        ];
        let refs: Vec<&Document> = docs.iter().collect();
        let err = treeify(&refs, ".").unwrap_err();
        assert!(matches!(err, GenerateError::PathConflict { ref path } if path == "guides"));
    }
}
