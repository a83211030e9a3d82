//! Request and response protocol between the event handler and the worker.
//!
//! The handler never awaits a backend call. It emits a [`WorkerMessage`];
//! the worker runs the call on a spawned task and reports back with a
//! [`WorkerResponse`] tagged with the same generation or ticket so stale
//! completions can be recognised.

use crate::backend::{DeleteFile, FileList, FileQuery, RenameFile, UpdateFileUsers};
use crate::domain::UserProfile;

/// A remote mutation issued by the action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Rename(RenameFile),
    UpdateUsers(UpdateFileUsers),
    Delete(DeleteFile),
}

impl Mutation {
    /// Identifier of the file the mutation targets.
    #[must_use]
    pub fn file_id(&self) -> &str {
        match self {
            Self::Rename(request) => &request.file_id,
            Self::UpdateUsers(request) => &request.file_id,
            Self::Delete(request) => &request.file_id,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Rename(_) => "rename_file",
            Self::UpdateUsers(_) => "update_file_users",
            Self::Delete(_) => "delete_file",
        }
    }
}

/// Messages sent from the event handler to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Read the signed-in user.
    LoadCurrentUser,

    /// Search files for the search box.
    FetchFiles {
        /// Search generation the request belongs to.
        generation: u64,
        query: FileQuery,
    },

    /// Apply a mutation from the action menu.
    Mutate {
        /// Ticket of the submit that issued the mutation.
        ticket: u64,
        mutation: Mutation,
    },

    /// End the session.
    SignOut,
}

/// Responses sent from the worker back to the event handler.
///
/// Failures carry the error's display string so responses stay comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    UserLoaded {
        result: Result<Option<UserProfile>, String>,
    },

    FilesFetched {
        generation: u64,
        result: Result<FileList, String>,
    },

    MutationApplied {
        ticket: u64,
        /// `Ok(true)` when the backend applied the change.
        result: Result<bool, String>,
    },

    SignedOut {
        result: Result<(), String>,
    },
}
