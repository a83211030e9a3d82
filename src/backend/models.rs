//! Request and response models for backend calls.
//!
//! These types mirror the payloads of the remote operations. They are kept
//! separate from the domain types so the transport shape can evolve without
//! touching the controllers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::FiledeckError;
use crate::domain::{File, FileType};

/// Result ordering for file listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    CreatedDesc,
    CreatedAsc,
    NameAsc,
    NameDesc,
    SizeDesc,
    SizeAsc,
}

impl SortOrder {
    /// Wire form `field-direction`, e.g. `$createdAt-desc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedDesc => "$createdAt-desc",
            Self::CreatedAsc => "$createdAt-asc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::SizeDesc => "size-desc",
            Self::SizeAsc => "size-asc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = FiledeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$createdAt-desc" => Ok(Self::CreatedDesc),
            "$createdAt-asc" => Ok(Self::CreatedAsc),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "size-desc" => Ok(Self::SizeDesc),
            "size-asc" => Ok(Self::SizeAsc),
            other => Err(FiledeckError::Backend(format!("unknown sort order: {other}"))),
        }
    }
}

/// Parameters of a file listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileQuery {
    /// Restrict to these types; empty means every type.
    pub types: Vec<FileType>,
    /// Case-insensitive substring of the file name; empty matches all.
    pub search_text: String,
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl FileQuery {
    /// Name search across every type with the default ordering.
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Self::default()
        }
    }
}

/// Listing response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileList {
    /// Number of matches before the limit was applied.
    pub total: usize,
    pub documents: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFile {
    pub file_id: String,
    /// New name, with or without the extension.
    pub name: String,
    pub extension: String,
    /// Route to revalidate after the change.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFileUsers {
    pub file_id: String,
    pub emails: Vec<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFile {
    pub file_id: String,
    pub bucket_file_id: String,
    pub path: String,
}
