//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. It turns
//! one [`Event`] into state mutations plus a list of [`Effect`]s for the
//! runtime, and reports whether the view needs redrawing.
//!
//! # Event Types
//!
//! - **Search**: `QueryChanged`, `SearchFocused`, `SearchBlurred`,
//!   `DismissSearch`, `DebounceElapsed`, `SelectResult`, `RetrySearch`
//! - **Actions**: `OpenMenu`, `CloseMenu`, `OpenAction`, `RenameInput`,
//!   `ShareInput`, `RemoveUser`, `SubmitAction`, `CloseDialog`
//! - **Navigation**: `Start`, `ToggleNav`, `Navigate`, `SignOut`
//! - **Worker**: `WorkerResponse` with typed completion variants
//!
//! # Example
//!
//! ```rust
//! use filedeck::app::{handle_event, AppState, Effect, Event};
//! use filedeck::Config;
//!
//! let mut state = AppState::new(&Config::default());
//! let (render, effects) = handle_event(&mut state, &Event::QueryChanged("report".into()))?;
//! assert!(render);
//! assert!(matches!(effects[0], Effect::RestartDebounce { generation: 1, .. }));
//! # Ok::<(), filedeck::domain::FiledeckError>(())
//! ```

use super::dispatcher::{ActionDispatcher, ActionKind};
use super::effects::Effect;
use super::modes::MutationOutcome;
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::{File, Route};
use crate::worker::WorkerResponse;

/// Input from the user, the clock, or the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Client booted; loads the current user.
    Start,

    /// The search input text changed.
    QueryChanged(String),
    SearchFocused,
    SearchBlurred,
    /// Escape pressed in the search box.
    DismissSearch,
    /// The debounce timer started under `generation` fired.
    DebounceElapsed { generation: u64 },
    /// A displayed search row was chosen.
    SelectResult(usize),
    RetrySearch,

    /// Opens the action menu for a file.
    OpenMenu(File),
    CloseMenu,
    OpenAction(ActionKind),
    RenameInput(String),
    ShareInput(String),
    /// Removes a user from the open share dialog.
    RemoveUser(String),
    SubmitAction,
    CloseDialog,

    /// Opens or closes the mobile navigation sheet.
    ToggleNav,
    /// The host moved to a new route.
    Navigate(Route),
    SignOut,

    WorkerResponse(WorkerResponse),
}

/// Moves to `route`, closing the sheet and syncing the search box.
fn navigate(state: &mut AppState, route: Route) -> Vec<Effect> {
    tracing::debug!(from = %state.route, to = %route, "navigating");
    state.shell.close_sheet();
    let mut effects = state.search.sync_route(&route);
    state.route = route.clone();
    effects.push(Effect::Navigate(route));
    effects
}

/// Applies navigation effects requested by a component to the local route
/// before they are handed to the runtime.
fn follow(state: &mut AppState, effects: Vec<Effect>) -> Vec<Effect> {
    let mut out = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            Effect::Navigate(route) => out.extend(navigate(state, route)),
            other => out.push(other),
        }
    }
    out
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Effect>) {
    match response {
        WorkerResponse::UserLoaded { result } => {
            let effects = state.shell.user_loaded(result.clone());
            (true, follow(state, effects))
        }
        WorkerResponse::FilesFetched { generation, result } => {
            let applied = state.search.fetch_completed(*generation, result.clone());
            (applied, vec![])
        }
        WorkerResponse::MutationApplied { ticket, result } => {
            let Some(dispatcher) = state.dispatcher.as_mut() else {
                tracing::debug!(ticket = ticket, "mutation response without an action menu");
                return (false, vec![]);
            };
            match dispatcher.mutation_completed(*ticket, result) {
                MutationOutcome::Ignored => (false, vec![]),
                MutationOutcome::Failed => (true, vec![]),
                MutationOutcome::Applied(change) => {
                    state.search.apply_change(&change);
                    (true, vec![])
                }
            }
        }
        WorkerResponse::SignedOut { result } => {
            let effects = state.shell.signed_out(result.clone());
            if !effects.is_empty() {
                state.dispatcher = None;
            }
            (true, follow(state, effects))
        }
    }
}

/// Processes an event, mutates application state, and returns effects to execute.
///
/// The boolean is `true` when the view changed and should be redrawn.
///
/// # Errors
///
/// Returns an error if a state transition fails. Failed backend calls are
/// not errors here; they arrive as worker responses and become notices.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Effect>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => Ok((true, vec![state.shell.start()])),

        Event::QueryChanged(text) => Ok(state
            .search
            .set_query(text.as_str())
            .map_or((false, vec![]), |effect| (true, vec![effect]))),
        Event::SearchFocused => {
            state.search.focus();
            Ok((true, vec![]))
        }
        Event::SearchBlurred | Event::DismissSearch => {
            state.search.blur();
            Ok((true, vec![]))
        }
        Event::DebounceElapsed { generation } => {
            let route = state.route.clone();
            let effects = state.search.debounce_elapsed(*generation, &route);
            let effects = follow(state, effects);
            Ok((true, effects))
        }
        Event::SelectResult(index) => {
            let Some(route) = state.search.select(*index) else {
                tracing::debug!(index = index, "no search result at index");
                return Ok((false, vec![]));
            };
            Ok((true, navigate(state, route)))
        }
        Event::RetrySearch => Ok((true, state.search.retry())),

        Event::OpenMenu(file) => {
            let path = state.route.page.path();
            state.dispatcher = Some(ActionDispatcher::open_menu(file.clone(), path));
            Ok((true, vec![]))
        }
        Event::CloseMenu => {
            if let Some(dispatcher) = state.dispatcher.as_mut() {
                dispatcher.close_menu();
            }
            Ok((true, vec![]))
        }
        Event::OpenAction(kind) => {
            let links = state.links.clone();
            let Some(dispatcher) = state.dispatcher.as_mut() else {
                tracing::debug!(action = kind.label(), "no file menu open");
                return Ok((false, vec![]));
            };
            Ok((true, dispatcher.open_action(*kind, &links)))
        }
        Event::RenameInput(text) => {
            if let Some(dispatcher) = state.dispatcher.as_mut() {
                dispatcher.set_rename_input(text.as_str());
            }
            Ok((true, vec![]))
        }
        Event::ShareInput(text) => {
            if let Some(dispatcher) = state.dispatcher.as_mut() {
                dispatcher.set_share_input(text.as_str());
            }
            Ok((true, vec![]))
        }
        Event::RemoveUser(email) => {
            let ticket = state.next_ticket();
            let effects = state
                .dispatcher
                .as_mut()
                .and_then(|d| d.remove_user(email, ticket))
                .into_iter()
                .collect();
            Ok((true, effects))
        }
        Event::SubmitAction => {
            let ticket = state.next_ticket();
            let effects = state
                .dispatcher
                .as_mut()
                .and_then(|d| d.submit(ticket))
                .into_iter()
                .collect();
            Ok((true, effects))
        }
        Event::CloseDialog => {
            if let Some(dispatcher) = state.dispatcher.as_mut() {
                dispatcher.close();
            }
            Ok((true, vec![]))
        }

        Event::ToggleNav => {
            state.shell.toggle_sheet();
            Ok((true, vec![]))
        }
        Event::Navigate(route) => Ok((true, navigate(state, route.clone()))),
        Event::SignOut => Ok((false, vec![state.shell.sign_out()])),

        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}
