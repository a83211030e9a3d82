//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of every piece of client state: the
//! current route, the search box, the action menu of the file the user is
//! working on, and the navigation shell. The event handler mutates it; the
//! renderer only ever sees the [`UIViewModel`] computed from it.
//!
//! # Example
//!
//! ```rust
//! use filedeck::app::AppState;
//! use filedeck::Config;
//!
//! let state = AppState::new(&Config::default());
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.route, "/");
//! assert!(viewmodel.dialog.is_none());
//! ```

use super::dispatcher::ActionDispatcher;
use super::navigation::NavShell;
use super::search::SearchController;
use crate::domain::Route;
use crate::infrastructure::Links;
use crate::ui::viewmodel::UIViewModel;
use crate::Config;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route the host is currently showing.
    pub route: Route,

    pub search: SearchController,

    /// Action menu of the file the user last opened a menu for.
    ///
    /// Replaced when another file's menu is opened.
    pub dispatcher: Option<ActionDispatcher>,

    pub shell: NavShell,

    /// Builds download and view URLs.
    pub links: Links,

    next_ticket: u64,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            route: Route::default(),
            search: SearchController::new(config.debounce(), config.max_results),
            dispatcher: None,
            shell: NavShell::default(),
            links: config.links(),
            next_ticket: 0,
        }
    }

    /// Allocates a ticket for a new mutation.
    pub fn next_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// Builds the view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let active = self.dispatcher.as_ref();
        UIViewModel {
            route: self.route.to_string(),
            nav: self.shell.view(&self.route),
            search: self.search.view(),
            menu: active.and_then(ActionDispatcher::menu_view),
            dialog: active.and_then(ActionDispatcher::render_dialog),
        }
    }
}
