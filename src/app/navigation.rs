//! Sidebar, mobile sheet and session state.

use super::effects::Effect;
use crate::domain::{FileCategory, Page, Route, UserProfile};
use crate::ui::viewmodel::{NavItemView, NavView};
use crate::worker::WorkerMessage;

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub page: Page,
}

/// Sidebar entries in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Dashboard",
        page: Page::Dashboard,
    },
    NavItem {
        name: "Documents",
        page: Page::Category(FileCategory::Documents),
    },
    NavItem {
        name: "Images",
        page: Page::Category(FileCategory::Images),
    },
    NavItem {
        name: "Media",
        page: Page::Category(FileCategory::Media),
    },
    NavItem {
        name: "Others",
        page: Page::Category(FileCategory::Others),
    },
];

#[derive(Debug, Clone, Default)]
pub struct NavShell {
    user: Option<UserProfile>,
    /// Whether the current user has been read at least once.
    loaded: bool,
    sheet_open: bool,
}

impl NavShell {
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_sheet_open(&self) -> bool {
        self.sheet_open
    }

    /// Requests the signed-in user.
    #[must_use]
    pub const fn start(&self) -> Effect {
        Effect::PostToWorker(WorkerMessage::LoadCurrentUser)
    }

    /// Records the current user; without one the client goes to sign-in.
    pub fn user_loaded(&mut self, result: Result<Option<UserProfile>, String>) -> Vec<Effect> {
        self.loaded = true;
        match result {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.id, "signed in");
                self.user = Some(user);
                vec![]
            }
            Ok(None) => {
                tracing::info!("no active session");
                self.user = None;
                vec![Effect::Navigate(Route::sign_in())]
            }
            Err(error) => {
                tracing::warn!(error = %error, "failed to load current user");
                self.user = None;
                vec![Effect::Navigate(Route::sign_in())]
            }
        }
    }

    pub fn toggle_sheet(&mut self) {
        self.sheet_open = !self.sheet_open;
    }

    pub fn close_sheet(&mut self) {
        self.sheet_open = false;
    }

    #[must_use]
    pub const fn sign_out(&self) -> Effect {
        Effect::PostToWorker(WorkerMessage::SignOut)
    }

    /// Clears the session once the backend confirmed the sign-out.
    pub fn signed_out(&mut self, result: Result<(), String>) -> Vec<Effect> {
        if let Err(error) = result {
            tracing::warn!(error = %error, "sign out failed");
            return vec![];
        }
        self.user = None;
        self.sheet_open = false;
        vec![Effect::Navigate(Route::sign_in())]
    }

    #[must_use]
    pub fn view(&self, route: &Route) -> NavView {
        NavView {
            user: self.user.as_ref().map(|u| (u.full_name.clone(), u.email.clone())),
            loading: !self.loaded,
            sheet_open: self.sheet_open,
            items: NAV_ITEMS
                .iter()
                .map(|item| NavItemView {
                    name: item.name,
                    url: item.page.path(),
                    active: item.page == route.page,
                })
                .collect(),
        }
    }
}
