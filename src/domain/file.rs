//! File document model.
//!
//! A [`File`] is the backend's metadata document for one uploaded object. The
//! client core never creates files; it reads them from search results and
//! passes their identifiers back to mutations. Field names follow the
//! backend's JSON (`$id`, `$createdAt`, `bucketFileId`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::route::FileCategory;
use super::user::UserProfile;

/// Coarse MIME class of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Document,
    Image,
    Video,
    Audio,
    Other,
}

impl FileType {
    /// Lowercase name as stored by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Other => "other",
        }
    }

    /// Category page that lists files of this type.
    ///
    /// Video and audio share the media page; every other type maps to its
    /// pluralized name.
    #[must_use]
    pub const fn category(self) -> FileCategory {
        match self {
            Self::Document => FileCategory::Documents,
            Self::Image => FileCategory::Images,
            Self::Video | Self::Audio => FileCategory::Media,
            Self::Other => FileCategory::Others,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owning account of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOwner {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Metadata document for one stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Unique, immutable document identifier.
    #[serde(rename = "$id")]
    pub id: String,

    /// Display name including the extension.
    pub name: String,

    /// Extension without the leading dot.
    pub extension: String,

    #[serde(rename = "type")]
    pub file_type: FileType,

    /// Size in bytes.
    pub size: u64,

    pub owner: FileOwner,

    /// Emails of the users the file is shared with.
    #[serde(default)]
    pub users: Vec<String>,

    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// Object identifier inside the storage bucket.
    #[serde(rename = "bucketFileId")]
    pub bucket_file_id: String,

    /// Public view URL.
    pub url: String,
}

impl File {
    /// Full display name for a rename: `name` trimmed, with `.{extension}`
    /// appended unless it already ends with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use filedeck::domain::File;
    ///
    /// assert_eq!(File::name_with_extension(" summary ", "pdf"), "summary.pdf");
    /// assert_eq!(File::name_with_extension("summary.pdf", "pdf"), "summary.pdf");
    /// assert_eq!(File::name_with_extension("Makefile", ""), "Makefile");
    /// ```
    #[must_use]
    pub fn name_with_extension(name: &str, extension: &str) -> String {
        let base = name.trim();
        if extension.is_empty() || base.ends_with(&format!(".{extension}")) {
            base.to_string()
        } else {
            format!("{base}.{extension}")
        }
    }

    /// Returns whether `user` owns the file or has it shared with them.
    #[must_use]
    pub fn is_accessible_by(&self, user: &UserProfile) -> bool {
        self.owner.id == user.id || self.users.iter().any(|email| email == &user.email)
    }

    /// Users list with `email` removed, leaving the file untouched.
    #[must_use]
    pub fn users_without(&self, email: &str) -> Vec<String> {
        self.users
            .iter()
            .filter(|e| e.as_str() != email)
            .cloned()
            .collect()
    }
}
