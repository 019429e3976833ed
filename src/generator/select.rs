use super::CURRENT_DIR;
use crate::types::Document;

/// Keep the docs that live in `autogen_dir` or below it.
///
/// `api` matches `api` and `api/guides`, never `api2`. The `.` root matches
/// everything. An empty selection is not an error, only a warning: the
/// sidebar slice simply ends up empty.
pub fn select_autogen_docs<'a>(docs: &'a [Document], autogen_dir: &str) -> Vec<&'a Document> {
    let nested_prefix = format!("{autogen_dir}/");
    let selected: Vec<&Document> = docs
        .iter()
        .filter(|doc| {
            doc.source_dir_name == autogen_dir
                || autogen_dir == CURRENT_DIR
                || doc.source_dir_name.starts_with(&nested_prefix)
        })
        .collect();

    if selected.is_empty() {
        log::warn!("No docs found in path={autogen_dir}: can't auto-generate a sidebar.");
    }
    selected
}
