//! File listing evaluation.
//!
//! Applies a [`FileQuery`] to a set of documents the way the hosted document
//! database does: visibility first (owner or shared-with), then the type and
//! name filters, then ordering and the optional limit.

use std::cmp::Ordering;

use super::models::{FileList, FileQuery, SortOrder};
use crate::domain::{File, UserProfile};

/// Returns whether `file` passes the type and name filters of `query`.
///
/// The name filter is a case-insensitive substring match on the trimmed
/// search text.
#[must_use]
pub fn matches(file: &File, query: &FileQuery) -> bool {
    if !query.types.is_empty() && !query.types.contains(&file.file_type) {
        return false;
    }

    let needle = query.search_text.trim().to_lowercase();
    needle.is_empty() || file.name.to_lowercase().contains(&needle)
}

/// Sorts documents in place by `order`.
///
/// Ties keep the identifier order so listings are stable across calls.
pub fn sort_files(files: &mut [File], order: SortOrder) {
    files.sort_by(|a, b| {
        let primary = match order {
            SortOrder::CreatedDesc => b.created_at.cmp(&a.created_at),
            SortOrder::CreatedAsc => a.created_at.cmp(&b.created_at),
            SortOrder::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            SortOrder::SizeDesc => b.size.cmp(&a.size),
            SortOrder::SizeAsc => a.size.cmp(&b.size),
        };
        match primary {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        }
    });
}

/// Evaluates `query` for `user` over `files`.
pub fn select_files<'a>(
    files: impl IntoIterator<Item = &'a File>,
    user: &UserProfile,
    query: &FileQuery,
) -> FileList {
    let mut documents: Vec<File> = files
        .into_iter()
        .filter(|file| file.is_accessible_by(user) && matches(file, query))
        .cloned()
        .collect();

    sort_files(&mut documents, query.sort);

    let total = documents.len();
    if let Some(limit) = query.limit {
        documents.truncate(limit);
    }

    tracing::trace!(
        search_text = %query.search_text,
        total = total,
        returned = documents.len(),
        "files selected"
    );

    FileList { total, documents }
}
