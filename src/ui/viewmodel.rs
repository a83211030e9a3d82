//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: formatted dates, thumbnail URLs and highlight
//! ranges are computed up front.
//!
//! # Example
//!
//! ```rust
//! use filedeck::ui::viewmodel::{DialogBody, DialogView};
//!
//! let dialog = DialogView {
//!     title: "Delete".to_string(),
//!     body: DialogBody::Delete {
//!         message: "Are you sure you want to delete report.pdf?".to_string(),
//!     },
//!     buttons: vec!["Cancel", "Delete"],
//!     loading: false,
//!     notice: None,
//! };
//! assert_eq!(dialog.buttons.len(), 2);
//! ```

use crate::app::ActionKind;
use crate::domain::FileType;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Current route as a path with query string.
    pub route: String,
    pub nav: NavView,
    pub search: SearchView,
    /// Action menu, when open.
    pub menu: Option<MenuView>,
    /// Modal dialog, when open.
    pub dialog: Option<DialogView>,
}

/// Sidebar and account header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// Full name and email of the signed-in user.
    pub user: Option<(String, String)>,
    /// The current user has not been read yet.
    pub loading: bool,
    pub sheet_open: bool,
    pub items: Vec<NavItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub name: &'static str,
    pub url: String,
    pub active: bool,
}

/// Search input and dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub open: bool,
    /// A lookup is in flight.
    pub loading: bool,
    pub rows: Vec<SearchRow>,
    /// Shown instead of rows when a lookup found nothing.
    pub empty_message: Option<String>,
    /// Failure notice with a retry hint.
    pub notice: Option<String>,
}

/// One search result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub id: String,
    pub name: String,
    pub file_type: FileType,
    pub extension: String,
    /// Image URL for pictures, icon path otherwise.
    pub thumbnail: String,
    /// Creation time, e.g. `9:05pm, 3 Jan`.
    pub created: String,
    /// Character ranges of `name` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Dropdown of per-file actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub file_name: String,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemView {
    pub kind: ActionKind,
    pub label: &'static str,
}

/// Modal dialog of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub body: DialogBody,
    /// Button labels, left to right. Empty for read-only dialogs.
    pub buttons: Vec<&'static str>,
    /// A submit is in flight.
    pub loading: bool,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    Rename {
        value: String,
    },
    Details {
        /// Label and value pairs.
        rows: Vec<(String, String)>,
    },
    Share {
        file_name: String,
        /// Pending comma-separated emails.
        input: String,
        shared_with: Vec<String>,
    },
    Delete {
        message: String,
    },
}
