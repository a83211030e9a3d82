//! Application layer coordinating state, events, and effects.
//!
//! This layer sits between the runtime and the domain/backend/worker layers.
//! Components never call the backend or the clock themselves; they describe
//! what should happen as [`Effect`]s and receive the outcome as [`Event`]s.
//!
//! # Architecture
//!
//! ```text
//! Input → Event → handle_event → State Mutations → Effects → Runtime
//!                     ↑                                        ↓
//!                     └──── DebounceElapsed / WorkerResponse ──┘
//! ```
//!
//! # Modules
//!
//! - [`dispatcher`]: Per-file action menu and dialogs
//! - [`effects`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Search phases and mutation outcomes
//! - [`navigation`]: Sidebar, mobile sheet and session
//! - [`search`]: Debounced search box
//! - [`state`]: Central state container and view model computation

pub mod dispatcher;
pub mod effects;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod search;
pub mod state;

pub use dispatcher::{ActionDispatcher, ActionKind, ActionRequest, AppliedChange};
pub use effects::{DownloadLink, Effect};
pub use handler::{handle_event, Event};
pub use modes::{MutationOutcome, SearchPhase};
pub use navigation::{NavShell, NAV_ITEMS};
pub use search::SearchController;
pub use state::AppState;
