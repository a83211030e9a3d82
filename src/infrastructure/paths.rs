//! Filesystem locations used by filedeck.

use std::path::PathBuf;

/// Application directory name under the platform data directory.
const APP_DIR: &str = "filedeck";

/// Returns the data directory for filedeck files.
///
/// Resolves to the platform data directory (for example
/// `~/.local/share/filedeck` on Linux), falling back to `./.filedeck` when
/// the platform reports none.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".filedeck"), |dir| dir.join(APP_DIR))
}

/// Default location of the JSON backend file.
#[must_use]
pub fn default_data_file() -> PathBuf {
    get_data_dir().join("drive.json")
}

/// Default location of the rotating log file.
#[must_use]
pub fn default_log_file() -> PathBuf {
    get_data_dir().join("filedeck.log")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or when no home directory is known, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use filedeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix("~"), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}
