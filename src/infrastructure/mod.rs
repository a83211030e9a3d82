//! Infrastructure layer for filesystem locations and object storage links.

pub mod links;
pub mod paths;

pub use links::Links;
pub use paths::{default_data_file, default_log_file, expand_tilde, get_data_dir};
