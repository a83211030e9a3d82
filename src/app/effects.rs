//! Side effects requested by the event handler.
//!
//! This module defines the [`Effect`] type: imperative commands produced by
//! the event handler after processing an event. Effects are the boundary
//! between pure state transitions and everything that touches time, the
//! backend, or the host's navigation.
//!
//! # Example
//!
//! ```rust
//! use filedeck::app::Effect;
//! use filedeck::domain::Route;
//!
//! let effects = vec![Effect::Navigate(Route::sign_in())];
//! assert_eq!(effects.len(), 1);
//! ```

use std::time::Duration;

use crate::domain::Route;
use crate::worker::WorkerMessage;

/// A file download handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub url: String,
    /// Suggested file name for the saved object.
    pub file_name: String,
}

/// Commands executed by the runtime after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancels any pending debounce timer and starts a new one.
    ///
    /// On expiry the runtime feeds back `Event::DebounceElapsed` with the
    /// same generation.
    RestartDebounce {
        generation: u64,
        delay: Duration,
    },

    /// Cancels the pending debounce timer, if any.
    CancelDebounce,

    /// Hands a backend call to the worker.
    PostToWorker(WorkerMessage),

    /// Pushes a route onto the host's history.
    Navigate(Route),

    /// Starts a download of a stored object.
    Download(DownloadLink),
}
