//! Domain layer for filedeck.
//!
//! Core types shared by every other layer, independent of the backend
//! transport and of any rendering concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`file`]: File metadata documents
//! - [`route`]: Navigable routes and file categories
//! - [`user`]: Signed-in user profile

pub mod error;
pub mod file;
pub mod route;
pub mod user;

pub use error::{FiledeckError, Result};
pub use file::{File, FileOwner, FileType};
pub use route::{FileCategory, Page, Route};
pub use user::UserProfile;
