//! Event loop host.
//!
//! [`Runtime`] owns the application state and the worker, feeds events
//! through [`handle_event`] and executes the resulting effects. Timers and
//! backend calls complete on spawned tasks and come back through the event
//! channel; [`Runtime::process_next`] waits for the next one.
//!
//! Must be driven from inside a tokio runtime.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use filedeck::backend::{JsonBackend, StorageData};
//! use filedeck::runtime::Runtime;
//! use filedeck::{Config, Event};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> filedeck::Result<()> {
//! let backend = Arc::new(JsonBackend::in_memory(StorageData::default()));
//! let mut runtime = Runtime::new(&Config::default(), backend);
//!
//! runtime.dispatch(Event::Start)?;
//! runtime.process_next().await;
//! assert_eq!(runtime.state().route.to_string(), "/sign-in");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::app::{handle_event, AppState, DownloadLink, Effect, Event};
use crate::backend::Backend;
use crate::domain::error::Result;
use crate::domain::Route;
use crate::ui::viewmodel::UIViewModel;
use crate::worker::Worker;
use crate::Config;

/// Single-client event loop.
pub struct Runtime<B> {
    state: AppState,
    worker: Worker<B>,
    events: UnboundedReceiver<Event>,
    /// Routes pushed by navigation effects, oldest first.
    history: Vec<Route>,
    downloads: Vec<DownloadLink>,
}

impl<B: Backend + 'static> Runtime<B> {
    #[must_use]
    pub fn new(config: &Config, backend: Arc<B>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config),
            worker: Worker::new(backend, tx),
            events: rx,
            history: Vec::new(),
            downloads: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.worker.backend()
    }

    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    #[must_use]
    pub fn downloads(&self) -> &[DownloadLink] {
        &self.downloads
    }

    #[must_use]
    pub fn viewmodel(&self) -> UIViewModel {
        self.state.compute_viewmodel()
    }

    /// Handles `event` and executes its effects.
    ///
    /// Returns whether the view should be redrawn.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (render, effects) = handle_event(&mut self.state, &event)?;
        for effect in effects {
            self.execute(effect);
        }
        Ok(render)
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::RestartDebounce { generation, delay } => {
                self.worker.restart_debounce(generation, delay);
            }
            Effect::CancelDebounce => self.worker.cancel_debounce(),
            Effect::PostToWorker(message) => self.worker.handle_message(message),
            Effect::Navigate(route) => {
                tracing::debug!(route = %route, "route pushed");
                self.history.push(route);
            }
            Effect::Download(link) => {
                tracing::info!(url = %link.url, file_name = %link.file_name, "download started");
                self.downloads.push(link);
            }
        }
    }

    /// Waits for the next timer or worker completion and dispatches it.
    ///
    /// Returns `None` once the event channel is closed.
    pub async fn process_next(&mut self) -> Option<Result<bool>> {
        let event = self.events.recv().await?;
        Some(self.dispatch(event))
    }

    /// Dispatches every completion that is already queued, without waiting.
    ///
    /// Returns whether any of them asked for a redraw.
    ///
    /// # Errors
    ///
    /// Propagates the first error from the event handler.
    pub fn drain_pending(&mut self) -> Result<bool> {
        let mut render = false;
        while let Ok(event) = self.events.try_recv() {
            render |= self.dispatch(event)?;
        }
        Ok(render)
    }
}
