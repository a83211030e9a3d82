//! Backend layer: the remote operations the client consumes.
//!
//! # Modules
//!
//! - `backend`: the [`Backend`] trait
//! - `models`: request and response payloads
//! - `query`: listing evaluation shared by local backends
//! - `json`: JSON file implementation

pub mod backend;
pub mod json;
pub mod models;
pub mod query;

pub use backend::Backend;
pub use json::{JsonBackend, StorageData};
pub use models::{DeleteFile, FileList, FileQuery, RenameFile, SortOrder, UpdateFileUsers};
