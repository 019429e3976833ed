//! Docs directory scanning.
//!
//! Walks a docs root and produces the flat inputs the generator consumes:
//! one [`Document`] per doc file and one [`CategoryMetadata`] per
//! `_category_` file.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Docs root
//! ├── autosidebar.toml             # Config (optional)
//! ├── intro.md                     # Doc, id "intro"
//! ├── 01-getting-started/          # Folder, label "getting-started", position 1
//! │   ├── _category_.json          # Folder metadata (optional)
//! │   ├── index.md                 # Folder landing page by convention
//! │   └── 02-install.md            # Doc, id "getting-started/install", position 2
//! ├── _partials/                   # `_` prefix: ignored
//! │   └── snippet.md
//! └── .drafts/                     # Hidden: ignored
//!     └── wip.md
//! ```
//!
//! ## Doc Fields
//!
//! | Field | Source |
//! |-------|--------|
//! | `id` | folder path and file stem with number prefixes stripped; front matter `id` replaces the stem |
//! | `sidebar_position` | front matter `sidebar_position`, else the file's number prefix |
//! | `label` | front matter `sidebar_label` |
//! | `class_name` | front matter `sidebar_class_name` |
//!
//! ## Validation
//!
//! - Front matter must be valid YAML
//! - Front matter `id` cannot contain `/`
//! - Doc ids must be unique
//! - `_category_` files must parse as category metadata

use crate::config::ScanConfig;
use crate::naming::{NumberPrefixParser, strip_path_number_prefixes};
use crate::types::{CategoriesMetadata, CategoryMetadata, Document};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid category metadata in {path}: {message}")]
    CategoryMetadata { path: PathBuf, message: String },
    #[error("Doc id {id:?} in {path} cannot contain a slash")]
    SlashInId { id: String, path: PathBuf },
    #[error("Duplicate doc id {id:?}: {first} and {second}")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
}

const CATEGORY_FILE_STEM: &str = "_category_";
const CATEGORY_FILE_EXTENSIONS: &[&str] = &["json", "yml", "yaml"];

/// Everything the generator needs from the docs directory.
#[derive(Debug, Default)]
pub struct ScannedDocs {
    pub docs: Vec<Document>,
    pub categories_metadata: CategoriesMetadata,
}

/// The front matter keys the sidebar cares about. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    id: Option<String>,
    sidebar_position: Option<f64>,
    sidebar_label: Option<String>,
    sidebar_class_name: Option<String>,
}

pub fn scan_docs(
    root: &Path,
    config: &ScanConfig,
    number_prefix_parser: &NumberPrefixParser,
) -> Result<ScannedDocs, ScanError> {
    let mut scanned = ScannedDocs::default();
    let mut sources_by_id: HashMap<String, String> = HashMap::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel_path = to_posix(entry.path().strip_prefix(root).unwrap_or(entry.path()));
        let name = entry.file_name().to_string_lossy();

        if is_category_file(&name) {
            load_category_file(entry.path(), &rel_path, &mut scanned.categories_metadata)?;
            continue;
        }
        if name.starts_with('_') || !has_doc_extension(entry.path(), &config.extensions) {
            continue;
        }

        let doc = read_doc(entry.path(), &rel_path, number_prefix_parser)?;
        debug!("doc {} ← {}", doc.id, rel_path);
        if let Some(first) = sources_by_id.insert(doc.id.clone(), rel_path.clone()) {
            return Err(ScanError::DuplicateId {
                id: doc.id,
                first,
                second: rel_path,
            });
        }
        scanned.docs.push(doc);
    }

    Ok(scanned)
}

/// Hidden entries and `_`-prefixed folders are skipped along with their contents.
fn is_hidden(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && name.starts_with('_'))
}

fn is_category_file(name: &str) -> bool {
    Path::new(name)
        .file_stem()
        .is_some_and(|stem| stem == CATEGORY_FILE_STEM)
        && Path::new(name)
            .extension()
            .is_some_and(|ext| CATEGORY_FILE_EXTENSIONS.iter().any(|e| ext == *e))
}

fn has_doc_extension(path: &Path, extensions: &[String]) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
}

/// `/`-separated form of a relative path.
fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory part of a posix path, `.` when there is none.
fn posix_dir_name(rel_path: &str) -> &str {
    match rel_path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => ".",
    }
}

fn load_category_file(
    path: &Path,
    rel_path: &str,
    metadata: &mut CategoriesMetadata,
) -> Result<(), ScanError> {
    let dir = posix_dir_name(rel_path);
    if dir == "." {
        debug!("ignoring {rel_path}: the docs root is not a category");
        return Ok(());
    }
    if metadata.contains_key(dir) {
        warn!("{dir} has more than one {CATEGORY_FILE_STEM} file, ignoring {rel_path}");
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let parsed = parse_category_metadata(path, &content)?;
    debug!("category metadata {dir} ← {rel_path}");
    metadata.insert(dir.to_string(), parsed);
    Ok(())
}

fn parse_category_metadata(path: &Path, content: &str) -> Result<CategoryMetadata, ScanError> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let result = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else if content.trim().is_empty() {
        Ok(CategoryMetadata::default())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };
    result.map_err(|message| ScanError::CategoryMetadata {
        path: path.to_path_buf(),
        message,
    })
}

/// The YAML between a leading `---` line and the next `---` line.
fn split_front_matter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

fn parse_front_matter(path: &Path, content: &str) -> Result<FrontMatter, ScanError> {
    match split_front_matter(content) {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|source| ScanError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Ok(FrontMatter::default()),
    }
}

fn read_doc(
    path: &Path,
    rel_path: &str,
    number_prefix_parser: &NumberPrefixParser,
) -> Result<Document, ScanError> {
    let content = fs::read_to_string(path)?;
    let front_matter = parse_front_matter(path, &content)?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parsed = number_prefix_parser(&stem);

    if let Some(id) = &front_matter.id
        && id.contains('/')
    {
        return Err(ScanError::SlashInId {
            id: id.clone(),
            path: path.to_path_buf(),
        });
    }
    let base_id = front_matter.id.unwrap_or(parsed.filename);

    let source_dir_name = posix_dir_name(rel_path).to_string();
    let id = if source_dir_name == "." {
        base_id
    } else {
        format!(
            "{}/{}",
            strip_path_number_prefixes(&source_dir_name, number_prefix_parser),
            base_id
        )
    };

    Ok(Document {
        id,
        source_dir_name,
        source: rel_path.to_string(),
        sidebar_position: front_matter
            .sidebar_position
            .or(parsed.number_prefix.map(f64::from)),
        label: front_matter.sidebar_label,
        class_name: front_matter.sidebar_class_name,
    })
}
