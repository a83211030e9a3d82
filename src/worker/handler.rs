//! Worker that runs backend calls and timers off the event loop.
//!
//! Every backend call runs on its own spawned tokio task and posts a
//! [`WorkerResponse`] back through the event channel. The debounce timer is
//! a single task whose handle is aborted and replaced on every restart, so
//! at most one timer is ever pending.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::app::Event;
use crate::backend::Backend;
use crate::domain::error::Result;
use crate::worker::{Mutation, WorkerMessage, WorkerResponse};

/// Executes worker messages and timers for one client.
pub struct Worker<B> {
    backend: Arc<B>,
    events: UnboundedSender<Event>,
    debounce: Option<JoinHandle<()>>,
}

impl<B: Backend + 'static> Worker<B> {
    #[must_use]
    pub const fn new(backend: Arc<B>, events: UnboundedSender<Event>) -> Self {
        Self {
            backend,
            events,
            debounce: None,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether a debounce timer is pending.
    #[must_use]
    pub fn has_pending_debounce(&self) -> bool {
        self.debounce.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Aborts the pending timer and starts a new one for `generation`.
    pub fn restart_debounce(&mut self, generation: u64, delay: Duration) {
        self.cancel_debounce();

        let events = self.events.clone();
        self.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(Event::DebounceElapsed { generation }).is_err() {
                tracing::debug!(generation = generation, "event channel closed before debounce fired");
            }
        }));
    }

    pub fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }

    /// Runs `message` on a spawned task; the response arrives as
    /// [`Event::WorkerResponse`].
    pub fn handle_message(&self, message: WorkerMessage) {
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();

        tokio::spawn(async move {
            let response = process(backend.as_ref(), message).await;
            if events.send(Event::WorkerResponse(response)).is_err() {
                tracing::debug!("event channel closed before worker response");
            }
        });
    }
}

impl<B> Drop for Worker<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }
}

/// Logs the outcome of a backend call and flattens its error for the response.
fn handle_backend_result<T>(operation: &str, result: Result<T>) -> std::result::Result<T, String> {
    match result {
        Ok(value) => {
            tracing::debug!(operation = operation, "backend call successful");
            Ok(value)
        }
        Err(e) => {
            tracing::debug!(operation = operation, error = %e, "backend call failed");
            Err(e.to_string())
        }
    }
}

/// Performs the backend call for `message` and builds its response.
pub async fn process<B: Backend + ?Sized>(backend: &B, message: WorkerMessage) -> WorkerResponse {
    let span = tracing::debug_span!("worker_handle_message", message_type = ?message);

    async move {
        match message {
            WorkerMessage::LoadCurrentUser => WorkerResponse::UserLoaded {
                result: handle_backend_result("current_user", backend.current_user().await),
            },

            WorkerMessage::FetchFiles { generation, query } => WorkerResponse::FilesFetched {
                generation,
                result: handle_backend_result("get_files", backend.get_files(query).await),
            },

            WorkerMessage::Mutate { ticket, mutation } => {
                let operation = mutation.operation();
                tracing::debug!(
                    file_id = %mutation.file_id(),
                    operation = operation,
                    ticket = ticket,
                    "applying mutation"
                );
                let result = match mutation {
                    Mutation::Rename(request) => backend.rename_file(request).await,
                    Mutation::UpdateUsers(request) => backend.update_file_users(request).await,
                    Mutation::Delete(request) => backend.delete_file(request).await,
                };
                WorkerResponse::MutationApplied {
                    ticket,
                    result: handle_backend_result(operation, result),
                }
            }

            WorkerMessage::SignOut => WorkerResponse::SignedOut {
                result: handle_backend_result("sign_out", backend.sign_out().await),
            },
        }
    }
    .instrument(span)
    .await
}
