//! Backend abstraction.
//!
//! This module defines the [`Backend`] trait: the remote operations the client
//! core consumes from the backend-as-a-service. Each method maps to one use
//! case (read the session, search files, rename, share, delete, sign out).
//!
//! Methods return boxed futures so the worker can move an `Arc<B>` into a
//! spawned task and await the call there.

use futures_util::future::BoxFuture;

use crate::backend::models::{DeleteFile, FileList, FileQuery, RenameFile, UpdateFileUsers};
use crate::domain::error::Result;
use crate::domain::UserProfile;

/// Remote operations offered by the file drive backend.
///
/// Mutations resolve to `Ok(true)` when the change was applied. `Ok(false)`
/// and `Err(_)` are both treated as failures by the caller; the error variant
/// carries a reason worth logging.
///
/// # Implementations
///
/// - [`JsonBackend`](crate::backend::JsonBackend): local JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use filedeck::backend::{Backend, FileQuery, JsonBackend};
///
/// # async fn demo() -> filedeck::Result<()> {
/// let backend = JsonBackend::open("/tmp/filedeck.json")?;
/// let files = backend.get_files(FileQuery::search("report")).await?;
/// println!("{} matches", files.total);
/// # Ok(())
/// # }
/// ```
pub trait Backend: Send + Sync {
    /// Returns the signed-in user, or `None` without a session.
    fn current_user(&self) -> BoxFuture<'_, Result<Option<UserProfile>>>;

    /// Lists files visible to the signed-in user that match `query`.
    ///
    /// # Errors
    ///
    /// Fails without a session or when the backend is unreachable.
    fn get_files(&self, query: FileQuery) -> BoxFuture<'_, Result<FileList>>;

    /// Renames a file, keeping its extension.
    fn rename_file(&self, request: RenameFile) -> BoxFuture<'_, Result<bool>>;

    /// Replaces the list of users a file is shared with.
    fn update_file_users(&self, request: UpdateFileUsers) -> BoxFuture<'_, Result<bool>>;

    /// Deletes the file document and its bucket object.
    fn delete_file(&self, request: DeleteFile) -> BoxFuture<'_, Result<bool>>;

    /// Ends the current session.
    fn sign_out(&self) -> BoxFuture<'_, Result<()>>;
}
