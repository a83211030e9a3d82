//! JSON file-based backend.
//!
//! A local stand-in for the hosted service with the same contract as the
//! remote operations. Documents, the bucket index, user profiles and the
//! current session live in one human-readable JSON file written atomically
//! (write-to-temp + rename) after every mutation.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "session": "user-1",
//!   "users": [
//!     { "$id": "user-1", "accountId": "acct-1", "fullName": "Ada", "email": "ada@example.com" }
//!   ],
//!   "files": {
//!     "f1": { "$id": "f1", "name": "report.pdf", "extension": "pdf", "type": "document", "...": "..." }
//!   },
//!   "bucket": ["bucket-f1"]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};

use crate::backend::backend::Backend;
use crate::backend::models::{DeleteFile, FileList, FileQuery, RenameFile, UpdateFileUsers};
use crate::backend::query::select_files;
use crate::domain::error::{FiledeckError, Result};
use crate::domain::{File, UserProfile};

/// On-disk container format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageData {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Profile id of the signed-in user.
    #[serde(default)]
    pub session: Option<String>,

    #[serde(default)]
    pub users: Vec<UserProfile>,

    /// Documents indexed by `$id`.
    #[serde(default)]
    pub files: BTreeMap<String, File>,

    /// Object ids present in the storage bucket.
    #[serde(default)]
    pub bucket: BTreeSet<String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            session: None,
            users: Vec::new(),
            files: BTreeMap::new(),
            bucket: BTreeSet::new(),
        }
    }
}

impl StorageData {
    fn current_user(&self) -> Option<&UserProfile> {
        let id = self.session.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    fn require_user(&self) -> Result<UserProfile> {
        self.current_user()
            .cloned()
            .ok_or_else(|| FiledeckError::Backend("no active session".to_string()))
    }

    /// Mutable access to a document the signed-in user can see.
    fn accessible_file_mut(&mut self, file_id: &str) -> Result<&mut File> {
        let user = self.require_user()?;
        self.files
            .get_mut(file_id)
            .filter(|f| f.is_accessible_by(&user))
            .ok_or_else(|| FiledeckError::Backend(format!("file not found: {file_id}")))
    }
}

/// JSON file backend.
///
/// The whole dataset is kept in memory and persisted after each mutation.
/// A mutation becomes visible only once it has been written; a failed write
/// leaves the previous dataset in place. A backend built with
/// [`JsonBackend::in_memory`] never touches disk.
///
/// Writes are synchronous and happen on the task that polls the mutation.
pub struct JsonBackend {
    file_path: Option<PathBuf>,
    data: Mutex<StorageData>,
}

impl JsonBackend {
    /// Opens a JSON backend, creating an empty dataset if the file is missing.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but does not contain a valid dataset.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON backend");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty dataset");
            StorageData::default()
        };

        tracing::debug!(
            file_count = data.files.len(),
            user_count = data.users.len(),
            signed_in = data.session.is_some(),
            "JSON backend ready"
        );

        Ok(Self {
            file_path: Some(file_path),
            data: Mutex::new(data),
        })
    }

    /// Backend over `data` that is never persisted.
    #[must_use]
    pub fn in_memory(data: StorageData) -> Self {
        Self {
            file_path: None,
            data: Mutex::new(data),
        }
    }

    /// Copy of the current dataset.
    ///
    /// # Errors
    ///
    /// Fails only if the internal lock was poisoned.
    pub fn snapshot(&self) -> Result<StorageData> {
        Ok(self.lock()?.clone())
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| FiledeckError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, files = data.files.len(), "loaded dataset");
        Ok(data)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StorageData>> {
        self.data
            .lock()
            .map_err(|e| FiledeckError::Storage(format!("lock poisoned: {e}")))
    }

    /// Writes `data` with an atomic temp-file rename.
    fn save(&self, data: &StorageData) -> Result<()> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(data)
            .map_err(|e| FiledeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::trace!(path = ?path, "dataset saved");
        Ok(())
    }

    /// Applies `op` to a copy of the dataset and commits it once saved.
    fn mutate<T>(&self, op: impl FnOnce(&mut StorageData) -> Result<T>) -> Result<T> {
        let mut current = self.lock()?;
        let mut next = current.clone();
        let value = op(&mut next)?;
        if let Err(e) = self.save(&next) {
            tracing::warn!(error = %e, "failed to persist dataset, change discarded");
            return Err(e);
        }
        *current = next;
        Ok(value)
    }

    fn rename_now(&self, request: &RenameFile) -> Result<bool> {
        let _span = tracing::debug_span!("json_rename_file", file_id = %request.file_id).entered();

        if request.name.trim().is_empty() {
            return Err(FiledeckError::Backend("file name cannot be empty".to_string()));
        }
        let name = File::name_with_extension(&request.name, &request.extension);

        self.mutate(|data| {
            let file = data.accessible_file_mut(&request.file_id)?;
            file.name.clone_from(&name);
            file.updated_at = Utc::now();
            Ok(true)
        })?;

        tracing::debug!(name = %name, "file renamed");
        Ok(true)
    }

    fn update_users_now(&self, request: &UpdateFileUsers) -> Result<bool> {
        let _span = tracing::debug_span!("json_update_file_users",
            file_id = %request.file_id,
            count = request.emails.len()
        )
        .entered();

        let mut emails: Vec<String> = Vec::with_capacity(request.emails.len());
        for email in request.emails.iter().map(|e| e.trim()).filter(|e| !e.is_empty()) {
            if !emails.iter().any(|existing| existing == email) {
                emails.push(email.to_string());
            }
        }

        self.mutate(|data| {
            let file = data.accessible_file_mut(&request.file_id)?;
            file.users = emails;
            file.updated_at = Utc::now();
            Ok(true)
        })
    }

    fn delete_now(&self, request: &DeleteFile) -> Result<bool> {
        let _span = tracing::debug_span!("json_delete_file", file_id = %request.file_id).entered();

        self.mutate(|data| {
            let file = data.accessible_file_mut(&request.file_id)?;
            if file.bucket_file_id != request.bucket_file_id {
                return Err(FiledeckError::Backend(format!(
                    "bucket object {} does not belong to file {}",
                    request.bucket_file_id, request.file_id
                )));
            }
            data.files.remove(&request.file_id);
            data.bucket.remove(&request.bucket_file_id);
            Ok(true)
        })
    }
}

impl Backend for JsonBackend {
    fn current_user(&self) -> BoxFuture<'_, Result<Option<UserProfile>>> {
        let result = self.lock().map(|data| data.current_user().cloned());
        future::ready(result).boxed()
    }

    fn get_files(&self, query: FileQuery) -> BoxFuture<'_, Result<FileList>> {
        let result = self.lock().and_then(|data| {
            let user = data.require_user()?;
            Ok(select_files(data.files.values(), &user, &query))
        });
        future::ready(result).boxed()
    }

    fn rename_file(&self, request: RenameFile) -> BoxFuture<'_, Result<bool>> {
        future::ready(self.rename_now(&request)).boxed()
    }

    fn update_file_users(&self, request: UpdateFileUsers) -> BoxFuture<'_, Result<bool>> {
        future::ready(self.update_users_now(&request)).boxed()
    }

    fn delete_file(&self, request: DeleteFile) -> BoxFuture<'_, Result<bool>> {
        future::ready(self.delete_now(&request)).boxed()
    }

    fn sign_out(&self) -> BoxFuture<'_, Result<()>> {
        let result = self.mutate(|data| {
            data.session = None;
            Ok(())
        });
        future::ready(result).boxed()
    }
}
