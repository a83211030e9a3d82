//! filedeck: client core for a cloud file drive.
//!
//! filedeck provides the interactive pieces of a file drive front end,
//! independent of any UI toolkit:
//! - A debounced search box that looks files up by name and routes to the
//!   listing page of the chosen file's type
//! - A per-file action menu (rename, details, share, download, delete) with
//!   modal dialogs and a single guarded submit
//! - A navigation shell with the signed-in user and sign-out
//! - A local JSON backend and a console front end for driving it all
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console front end (main.rs, console.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Effect executor
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Search controller, action dispatcher, nav shell  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Backend Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (backend/)    │   │ (worker/)     │
//! │ - View models │   │ - Backend API │   │ - Spawned I/O │
//! │ - Text render │   │ - JSON file   │   │ - Debounce    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and storage URLs (infrastructure/)         │
//! │  - Files, users, routes, errors (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                    │
//! │  - tracing subscriber with rotating file output     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/effect model
//! - [`backend`]: Backend trait and the JSON file implementation
//! - [`console`]: Command parsing for the console front end
//! - [`domain`]: Core domain types (files, users, routes, errors)
//! - [`infrastructure`]: Platform paths and storage URL construction
//! - [`runtime`]: Effect executor and event loop
//! - [`worker`]: Spawned backend calls and the debounce timer
//! - [`ui`]: View models and plain text rendering
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! debounce_ms = 300
//! max_results = 6
//! endpoint = "https://cloud.example.com/v1"
//! project_id = "drive"
//! bucket_id = "files"
//! data_file = "~/drive.json"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use filedeck::{handle_event, AppState, Config, Effect, Event};
//!
//! let mut state = AppState::new(&Config::default());
//!
//! let (_, effects) = handle_event(&mut state, &Event::QueryChanged("report".into()))?;
//! let Effect::RestartDebounce { generation, .. } = effects[0] else { unreachable!() };
//!
//! // The runtime feeds the timer back once the quiet period is over.
//! let (_, effects) = handle_event(&mut state, &Event::DebounceElapsed { generation })?;
//! assert!(matches!(effects[0], Effect::PostToWorker(_)));
//! # Ok::<(), filedeck::FiledeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod backend;
pub mod console;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod ui;
pub mod worker;

pub use app::{handle_event, AppState, Effect, Event};
pub use domain::{FiledeckError, Result};
pub use runtime::Runtime;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::{default_data_file, default_log_file, expand_tilde, Links};

const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_MAX_RESULTS: usize = 6;

/// Client configuration.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period after the last keystroke before a search is issued.
    pub debounce_ms: u64,

    /// Search rows displayed at most.
    pub max_results: usize,

    /// Storage API base, e.g. `https://cloud.example.com/v1`.
    pub endpoint: String,
    pub project_id: String,
    pub bucket_id: String,

    /// JSON backend file. Default: `<data dir>/drive.json`
    pub data_file: Option<PathBuf>,

    /// Log file. Default: `<data dir>/filedeck.log`
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `filedeck=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let links = Links::default();
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_results: DEFAULT_MAX_RESULTS,
            endpoint: links.endpoint,
            project_id: links.project_id,
            bucket_id: links.bucket_id,
            data_file: None,
            log_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from string key/value pairs.
    ///
    /// Unknown keys are ignored. Numbers that fail to parse, and a zero
    /// `max_results`, fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use filedeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("max_results".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.max_results, 6);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let debounce_ms = map
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        let max_results = map
            .get("max_results")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_results);

        let text = |key: &str, fallback: String| {
            map.get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            debounce_ms,
            max_results,
            endpoint: text("endpoint", defaults.endpoint),
            project_id: text("project_id", defaults.project_id),
            bucket_id: text("bucket_id", defaults.bucket_id),
            data_file: map.get("data_file").map(|p| expand_tilde(p)),
            log_file: map.get("log_file").map(|p| expand_tilde(p)),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FiledeckError::Config`] if the file cannot be read or is
    /// not valid TOML for this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FiledeckError::Config(format!("{}: {e}", path.display())))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| FiledeckError::Config(format!("{}: {e}", path.display())))?;

        if config.max_results == 0 {
            config.max_results = DEFAULT_MAX_RESULTS;
        }
        config.data_file = config.data_file.map(|p| expand_tilde(&p.to_string_lossy()));
        config.log_file = config.log_file.map(|p| expand_tilde(&p.to_string_lossy()));

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// URL builder for the configured storage endpoint.
    #[must_use]
    pub fn links(&self) -> Links {
        Links::new(&self.endpoint, &self.project_id, &self.bucket_id)
    }

    #[must_use]
    pub fn data_file_path(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }

    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_file)
    }
}
