//! Per-file action menu.
//!
//! An [`ActionDispatcher`] is created when the user opens the dropdown menu
//! of one file. Picking an item either triggers a download straight away or
//! opens a modal dialog backed by an [`ActionRequest`]; submitting the dialog
//! issues exactly one backend mutation.
//!
//! Mutations are tagged with a ticket. Closing the dialog forgets the
//! pending ticket, so a response that arrives afterwards is ignored instead
//! of reopening or mutating a dialog the user already dismissed.

use super::effects::{DownloadLink, Effect};
use super::modes::MutationOutcome;
use crate::backend::{DeleteFile, RenameFile, UpdateFileUsers};
use crate::domain::File;
use crate::infrastructure::Links;
use crate::ui::helpers::{convert_file_size, format_date_time};
use crate::ui::viewmodel::{DialogBody, DialogView, MenuItemView, MenuView};
use crate::worker::{Mutation, WorkerMessage};

/// Entries of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Rename,
    Details,
    Share,
    Download,
    Delete,
}

impl ActionKind {
    /// Menu entries in display order.
    pub const MENU: [Self; 5] = [
        Self::Rename,
        Self::Details,
        Self::Share,
        Self::Download,
        Self::Delete,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Details => "Details",
            Self::Share => "Share",
            Self::Download => "Download",
            Self::Delete => "Delete",
        }
    }

    /// Whether picking the entry opens a modal dialog.
    #[must_use]
    pub const fn needs_dialog(self) -> bool {
        !matches!(self, Self::Download)
    }

    /// Parses a menu label case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::MENU
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Pending input of an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    Rename { new_name: String },
    Details,
    Share { input: String, emails: Vec<String> },
    Delete,
}

impl ActionRequest {
    /// Fresh request for `kind`, or `None` for kinds without a dialog.
    fn fresh(kind: ActionKind, file: &File) -> Option<Self> {
        match kind {
            ActionKind::Rename => Some(Self::Rename {
                new_name: file.name.clone(),
            }),
            ActionKind::Details => Some(Self::Details),
            ActionKind::Share => Some(Self::Share {
                input: String::new(),
                emails: Vec::new(),
            }),
            ActionKind::Delete => Some(Self::Delete),
            ActionKind::Download => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Rename { .. } => ActionKind::Rename,
            Self::Details => ActionKind::Details,
            Self::Share { .. } => ActionKind::Share,
            Self::Delete => ActionKind::Delete,
        }
    }
}

/// A mutation the backend confirmed, for other components to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedChange {
    /// The file's name or users changed.
    Updated(File),
    Deleted { file_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingKind {
    /// Submit of the open dialog.
    Submit,
    /// Removal of one user from the share list.
    RemoveUser { remaining: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    ticket: u64,
    kind: PendingKind,
}

/// Action menu and dialog state for one file.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    file: File,
    /// Route revalidated by the backend after a mutation.
    path: String,
    menu_open: bool,
    modal_open: bool,
    request: Option<ActionRequest>,
    is_loading: bool,
    pending: Option<Pending>,
    notice: Option<String>,
}

impl ActionDispatcher {
    /// Opens the dropdown menu for `file`.
    #[must_use]
    pub fn open_menu(file: File, path: impl Into<String>) -> Self {
        tracing::debug!(file_id = %file.id, "action menu opened");
        Self {
            file,
            path: path.into(),
            menu_open: true,
            modal_open: false,
            request: None,
            is_loading: false,
            pending: None,
            notice: None,
        }
    }

    #[must_use]
    pub const fn file(&self) -> &File {
        &self.file
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn request(&self) -> Option<&ActionRequest> {
        self.request.as_ref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the dispatcher still shows anything.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.menu_open || self.modal_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Picks a menu entry.
    ///
    /// Download hands a link to the host and closes the menu; every other
    /// entry opens its dialog with a fresh request.
    pub fn open_action(&mut self, kind: ActionKind, links: &Links) -> Vec<Effect> {
        self.menu_open = false;
        self.notice = None;

        let Some(request) = ActionRequest::fresh(kind, &self.file) else {
            tracing::debug!(file_id = %self.file.id, "download requested");
            return vec![Effect::Download(DownloadLink {
                url: links.construct_download_url(&self.file.bucket_file_id),
                file_name: self.file.name.clone(),
            })];
        };

        tracing::debug!(file_id = %self.file.id, action = kind.label(), "dialog opened");
        self.request = Some(request);
        self.modal_open = true;
        self.is_loading = false;
        self.pending = None;
        vec![]
    }

    /// Edits the rename field. Ignored unless the rename dialog is open.
    pub fn set_rename_input(&mut self, text: impl Into<String>) {
        if let Some(ActionRequest::Rename { new_name }) = &mut self.request {
            *new_name = text.into();
        }
    }

    /// Edits the share field; the input is split on commas into emails.
    pub fn set_share_input(&mut self, text: impl Into<String>) {
        if let Some(ActionRequest::Share { input, emails }) = &mut self.request {
            *input = text.into();
            *emails = input
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    fn mutation_for(&self, request: &ActionRequest) -> Result<Option<Mutation>, String> {
        let mutation = match request {
            ActionRequest::Rename { new_name } => {
                if new_name.trim().is_empty() {
                    return Err("Name cannot be empty".to_string());
                }
                Mutation::Rename(RenameFile {
                    file_id: self.file.id.clone(),
                    name: new_name.trim().to_string(),
                    extension: self.file.extension.clone(),
                    path: self.path.clone(),
                })
            }
            ActionRequest::Share { emails, .. } => {
                if emails.is_empty() {
                    return Err("Enter at least one email address".to_string());
                }
                let mut all = self.file.users.clone();
                for email in emails {
                    if !all.contains(email) {
                        all.push(email.clone());
                    }
                }
                Mutation::UpdateUsers(UpdateFileUsers {
                    file_id: self.file.id.clone(),
                    emails: all,
                    path: self.path.clone(),
                })
            }
            ActionRequest::Delete => Mutation::Delete(DeleteFile {
                file_id: self.file.id.clone(),
                bucket_file_id: self.file.bucket_file_id.clone(),
                path: self.path.clone(),
            }),
            ActionRequest::Details => return Ok(None),
        };
        Ok(Some(mutation))
    }

    /// Submits the open dialog under `ticket`.
    ///
    /// Returns `None` when there is nothing to send: no dialog, a submit
    /// already in flight, the details dialog, or input that failed
    /// validation (which sets a notice instead).
    pub fn submit(&mut self, ticket: u64) -> Option<Effect> {
        if self.is_loading {
            tracing::debug!(file_id = %self.file.id, "submit ignored while loading");
            return None;
        }
        let request = self.request.as_ref()?;

        let mutation = match self.mutation_for(request) {
            Ok(Some(mutation)) => mutation,
            Ok(None) => return None,
            Err(message) => {
                self.notice = Some(message);
                return None;
            }
        };

        tracing::debug!(
            file_id = %self.file.id,
            operation = mutation.operation(),
            ticket = ticket,
            "submitting action"
        );

        self.is_loading = true;
        self.notice = None;
        self.pending = Some(Pending {
            ticket,
            kind: PendingKind::Submit,
        });
        Some(Effect::PostToWorker(WorkerMessage::Mutate { ticket, mutation }))
    }

    /// Removes `email` from the share list and saves immediately.
    pub fn remove_user(&mut self, email: &str, ticket: u64) -> Option<Effect> {
        if self.is_loading || !matches!(self.request, Some(ActionRequest::Share { .. })) {
            return None;
        }
        if !self.file.users.iter().any(|e| e == email) {
            return None;
        }

        let remaining = self.file.users_without(email);
        tracing::debug!(file_id = %self.file.id, ticket = ticket, "removing shared user");

        self.is_loading = true;
        self.notice = None;
        self.pending = Some(Pending {
            ticket,
            kind: PendingKind::RemoveUser {
                remaining: remaining.clone(),
            },
        });
        Some(Effect::PostToWorker(WorkerMessage::Mutate {
            ticket,
            mutation: Mutation::UpdateUsers(UpdateFileUsers {
                file_id: self.file.id.clone(),
                emails: remaining,
                path: self.path.clone(),
            }),
        }))
    }

    /// Applies the response for the mutation issued under `ticket`.
    pub fn mutation_completed(&mut self, ticket: u64, result: &Result<bool, String>) -> MutationOutcome {
        if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
            tracing::debug!(ticket = ticket, "discarding response for closed or superseded action");
            return MutationOutcome::Ignored;
        }
        let Some(pending) = self.pending.take() else {
            return MutationOutcome::Ignored;
        };
        self.is_loading = false;

        if !matches!(result, Ok(true)) {
            if let Err(error) = result {
                tracing::warn!(file_id = %self.file.id, error = %error, "action failed");
            }
            let action = self.request.as_ref().map_or("update", |r| r.kind().label());
            self.notice = Some(format!("{action} failed. Please try again."));
            return MutationOutcome::Failed;
        }

        let change = match (pending.kind, &self.request) {
            (PendingKind::RemoveUser { remaining }, _) => {
                self.file.users = remaining;
                AppliedChange::Updated(self.file.clone())
            }
            (PendingKind::Submit, Some(ActionRequest::Rename { new_name })) => {
                self.file.name = File::name_with_extension(new_name, &self.file.extension);
                AppliedChange::Updated(self.file.clone())
            }
            (PendingKind::Submit, Some(ActionRequest::Share { emails, .. })) => {
                for email in emails {
                    if !self.file.users.contains(email) {
                        self.file.users.push(email.clone());
                    }
                }
                AppliedChange::Updated(self.file.clone())
            }
            (PendingKind::Submit, _) => AppliedChange::Deleted {
                file_id: self.file.id.clone(),
            },
        };

        tracing::info!(file_id = %self.file.id, "action applied");
        self.close();
        MutationOutcome::Applied(change)
    }

    /// Closes the dialog and menu without waiting for an in-flight mutation.
    pub fn close(&mut self) {
        self.menu_open = false;
        self.modal_open = false;
        self.request = None;
        self.is_loading = false;
        self.pending = None;
        self.notice = None;
    }

    #[must_use]
    pub fn menu_view(&self) -> Option<MenuView> {
        self.menu_open.then(|| MenuView {
            file_name: self.file.name.clone(),
            items: ActionKind::MENU
                .into_iter()
                .map(|kind| MenuItemView {
                    kind,
                    label: kind.label(),
                })
                .collect(),
        })
    }

    /// Dialog contents for the open request.
    #[must_use]
    pub fn render_dialog(&self) -> Option<DialogView> {
        if !self.modal_open {
            return None;
        }
        let request = self.request.as_ref()?;
        let file = &self.file;

        let body = match request {
            ActionRequest::Rename { new_name } => DialogBody::Rename {
                value: new_name.clone(),
            },
            ActionRequest::Details => DialogBody::Details {
                rows: vec![
                    ("Format".to_string(), file.extension.clone()),
                    ("Size".to_string(), convert_file_size(file.size)),
                    ("Owner".to_string(), file.owner.full_name.clone()),
                    ("Last edit".to_string(), format_date_time(Some(&file.updated_at))),
                ],
            },
            ActionRequest::Share { input, .. } => DialogBody::Share {
                file_name: file.name.clone(),
                input: input.clone(),
                shared_with: file.users.clone(),
            },
            ActionRequest::Delete => DialogBody::Delete {
                message: format!("Are you sure you want to delete {}?", file.name),
            },
        };

        let kind = request.kind();
        let buttons = match kind {
            ActionKind::Details => vec![],
            _ => vec!["Cancel", kind.label()],
        };

        Some(DialogView {
            title: kind.label().to_string(),
            body,
            buttons,
            loading: self.is_loading,
            notice: self.notice.clone(),
        })
    }
}
