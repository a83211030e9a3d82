//! Per-file actions driven through the runtime.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{dispatch, document, drive, search, start, Call, Outcome, ScriptedBackend, TestRuntime};
use filedeck::app::ActionKind;
use filedeck::backend::DeleteFile;
use filedeck::ui::viewmodel::DialogBody;
use filedeck::Event;

/// Searches for `report.pdf` and opens its action menu.
async fn menu_on_report(backend: &Arc<ScriptedBackend>) -> TestRuntime {
    let mut runtime = start(backend).await;
    search(&mut runtime, "report").await;
    let file = runtime.state().search.visible_results()[0].clone();
    dispatch(&mut runtime, Event::OpenMenu(file));
    runtime
}

fn backend() -> Arc<ScriptedBackend> {
    Arc::new(ScriptedBackend::new(vec![document("f1", "report.pdf")]))
}

fn shared_with(runtime: &TestRuntime) -> Vec<String> {
    match runtime.viewmodel().dialog.map(|d| d.body) {
        Some(DialogBody::Share { shared_with, .. }) => shared_with,
        other => panic!("expected the share dialog, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn delete_calls_the_backend_once_and_closes() {
    let backend = backend();
    backend.delay_mutations(Duration::from_millis(200));
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Delete));
    let dialog = runtime.viewmodel().dialog.unwrap();
    assert_eq!(
        dialog.body,
        DialogBody::Delete {
            message: "Are you sure you want to delete report.pdf?".to_string()
        }
    );

    dispatch(&mut runtime, Event::SubmitAction);
    dispatch(&mut runtime, Event::SubmitAction);
    assert!(runtime.viewmodel().dialog.unwrap().loading);

    drive(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(
        backend.calls(),
        vec![Call::Delete(DeleteFile {
            file_id: "f1".to_string(),
            bucket_file_id: "bucket-f1".to_string(),
            path: "/".to_string(),
        })]
    );
    assert_eq!(runtime.viewmodel().dialog, None);
    assert!(runtime.state().search.results().is_empty());
    assert!(backend.files().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rename_updates_the_listed_file() {
    let backend = backend();
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Rename));
    dispatch(&mut runtime, Event::RenameInput("summary".to_string()));
    dispatch(&mut runtime, Event::SubmitAction);
    drive(&mut runtime, Duration::from_secs(1)).await;

    let Call::Rename(request) = &backend.calls()[0] else {
        panic!("expected a rename, got {:?}", backend.calls());
    };
    assert_eq!(request.name, "summary");
    assert_eq!(request.extension, "pdf");
    assert_eq!(runtime.state().search.results()[0].name, "summary.pdf");
    assert_eq!(runtime.viewmodel().dialog, None);
}

#[tokio::test(start_paused = true)]
async fn blank_rename_is_rejected_locally() {
    let backend = backend();
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Rename));
    dispatch(&mut runtime, Event::RenameInput("   ".to_string()));
    dispatch(&mut runtime, Event::SubmitAction);
    drive(&mut runtime, Duration::from_secs(1)).await;

    assert!(backend.calls().is_empty());
    let dialog = runtime.viewmodel().dialog.unwrap();
    assert_eq!(dialog.notice.as_deref(), Some("Name cannot be empty"));
}

#[tokio::test(start_paused = true)]
async fn share_adds_new_addresses_to_existing_users() {
    let backend = backend();
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Share));
    dispatch(&mut runtime, Event::ShareInput("dave@example.com, bob@example.com".to_string()));
    dispatch(&mut runtime, Event::SubmitAction);
    drive(&mut runtime, Duration::from_secs(1)).await;

    let Call::UpdateUsers(request) = &backend.calls()[0] else {
        panic!("expected a user update, got {:?}", backend.calls());
    };
    assert_eq!(
        request.emails,
        vec!["bob@example.com", "carol@example.com", "dave@example.com"]
    );
    assert_eq!(runtime.state().search.results()[0].users.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn removing_a_user_sends_the_remaining_list() {
    let backend = backend();
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Share));
    dispatch(&mut runtime, Event::RemoveUser("bob@example.com".to_string()));
    drive(&mut runtime, Duration::from_secs(1)).await;

    let Call::UpdateUsers(request) = &backend.calls()[0] else {
        panic!("expected a user update, got {:?}", backend.calls());
    };
    assert_eq!(request.emails, vec!["carol@example.com"]);
    assert_eq!(runtime.viewmodel().dialog, None);
    assert_eq!(runtime.state().search.results()[0].users, vec!["carol@example.com"]);
}

#[tokio::test(start_paused = true)]
async fn rejected_removal_keeps_the_dialog_and_list() {
    let backend = backend();
    backend.push_outcome(Outcome::Rejected);
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Share));
    dispatch(&mut runtime, Event::RemoveUser("bob@example.com".to_string()));
    drive(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(shared_with(&runtime), vec!["bob@example.com", "carol@example.com"]);
    let dialog = runtime.viewmodel().dialog.unwrap();
    assert!(!dialog.loading);
    assert_eq!(dialog.notice.as_deref(), Some("Share failed. Please try again."));
}

#[tokio::test(start_paused = true)]
async fn backend_error_is_reported_and_submit_can_be_repeated() {
    let backend = backend();
    backend.push_outcome(Outcome::Fails);
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Delete));
    dispatch(&mut runtime, Event::SubmitAction);
    drive(&mut runtime, Duration::from_secs(1)).await;

    let dialog = runtime.viewmodel().dialog.unwrap();
    assert_eq!(dialog.notice.as_deref(), Some("Delete failed. Please try again."));
    assert_eq!(runtime.state().search.results().len(), 1);

    dispatch(&mut runtime, Event::SubmitAction);
    drive(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(backend.calls().len(), 2);
    assert_eq!(runtime.viewmodel().dialog, None);
    assert!(runtime.state().search.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn closing_during_a_submit_ignores_the_late_response() {
    let backend = backend();
    backend.delay_mutations(Duration::from_millis(500));
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Delete));
    dispatch(&mut runtime, Event::SubmitAction);
    dispatch(&mut runtime, Event::CloseDialog);
    drive(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(backend.calls().len(), 1);
    assert_eq!(runtime.viewmodel().dialog, None);
    assert_eq!(runtime.state().search.results().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn download_produces_a_link_without_a_dialog() {
    let backend = backend();
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Download));

    assert_eq!(runtime.viewmodel().dialog, None);
    let link = &runtime.downloads()[0];
    assert_eq!(link.file_name, "report.pdf");
    assert!(link.url.contains("/files/bucket-f1/download"));
    assert!(backend.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn details_dialog_is_read_only() {
    let backend = backend();
    let mut runtime = menu_on_report(&backend).await;

    dispatch(&mut runtime, Event::OpenAction(ActionKind::Details));
    dispatch(&mut runtime, Event::SubmitAction);
    drive(&mut runtime, Duration::from_secs(1)).await;

    let dialog = runtime.viewmodel().dialog.unwrap();
    assert!(dialog.buttons.is_empty());
    let DialogBody::Details { rows } = dialog.body else {
        panic!("expected details");
    };
    assert!(rows.contains(&("Size".to_string(), "1.0 KB".to_string())));
    assert!(rows.contains(&("Owner".to_string(), "Ada Lovelace".to_string())));
    assert!(backend.calls().is_empty());
}
