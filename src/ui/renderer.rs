//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and lays the components
//! out into a plain text screen.
//!
//! # Example
//!
//! ```rust
//! use filedeck::app::AppState;
//! use filedeck::ui::render;
//! use filedeck::Config;
//!
//! let state = AppState::new(&Config::default());
//! let screen = render(&state, 60);
//! assert!(screen.contains("Search:"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the application state into screen text `cols` columns wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, cols: usize) -> String {
    let mut out = String::new();
    if let Err(e) = components::render_layout(&mut out, vm, cols) {
        tracing::warn!(error = %e, "failed to render view");
    }
    out
}
