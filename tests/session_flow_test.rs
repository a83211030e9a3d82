//! Session handling and the JSON backend behind a full runtime.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{ada, dispatch, document, drive, start, ScriptedBackend};
use filedeck::app::ActionKind;
use filedeck::backend::{JsonBackend, StorageData};
use filedeck::domain::{FileCategory, Route};
use filedeck::{Config, Event, Runtime};

#[tokio::test(start_paused = true)]
async fn signed_in_user_appears_in_the_header() {
    let backend = Arc::new(ScriptedBackend::new(vec![]));
    let runtime = start(&backend).await;

    let nav = runtime.viewmodel().nav;
    assert!(!nav.loading);
    assert_eq!(nav.user, Some(("Ada Lovelace".to_string(), "ada@example.com".to_string())));
    assert!(runtime.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn missing_session_redirects_to_sign_in() {
    let backend = Arc::new(ScriptedBackend::new(vec![]).signed_out());
    let runtime = start(&backend).await;

    assert_eq!(runtime.state().route, Route::sign_in());
    assert_eq!(runtime.history(), &[Route::sign_in()]);
    assert_eq!(runtime.viewmodel().nav.user, None);
}

#[tokio::test(start_paused = true)]
async fn sign_out_clears_the_session() {
    let backend = Arc::new(ScriptedBackend::new(vec![]));
    let mut runtime = start(&backend).await;

    dispatch(&mut runtime, Event::ToggleNav);
    dispatch(&mut runtime, Event::SignOut);
    drive(&mut runtime, Duration::from_millis(10)).await;

    assert_eq!(backend.sign_outs(), 1);
    assert_eq!(runtime.state().route, Route::sign_in());
    let nav = runtime.viewmodel().nav;
    assert_eq!(nav.user, None);
    assert!(!nav.sheet_open);
}

#[tokio::test(start_paused = true)]
async fn nav_marks_the_current_page() {
    let backend = Arc::new(ScriptedBackend::new(vec![document("f1", "a.txt")]));
    let mut runtime = start(&backend).await;

    dispatch(&mut runtime, Event::Navigate(Route::category(FileCategory::Images, "cat")));

    let active: Vec<&str> = runtime
        .viewmodel()
        .nav
        .items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.name)
        .collect();
    assert_eq!(active, vec!["Images"]);
}

async fn settle(runtime: &mut Runtime<JsonBackend>, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        tokio::select! {
            biased;
            _ = tokio::time::sleep_until(deadline) => break,
            next = runtime.process_next() => {
                next.expect("event channel open").unwrap();
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn json_backend_persists_a_delete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drive.json");

    let mut data = StorageData {
        session: Some("user-1".to_string()),
        users: vec![ada()],
        ..StorageData::default()
    };
    for file in [document("f1", "report.pdf"), document("f2", "notes.txt")] {
        data.bucket.insert(file.bucket_file_id.clone());
        data.files.insert(file.id.clone(), file);
    }
    std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

    let backend = Arc::new(JsonBackend::open(&path).unwrap());
    let mut runtime = Runtime::new(&Config::default(), Arc::clone(&backend));
    runtime.dispatch(Event::Start).unwrap();
    runtime.dispatch(Event::QueryChanged("report".to_string())).unwrap();
    settle(&mut runtime, Duration::from_secs(1)).await;

    let file = runtime.state().search.visible_results()[0].clone();
    assert_eq!(file.id, "f1");

    runtime.dispatch(Event::OpenMenu(file)).unwrap();
    runtime.dispatch(Event::OpenAction(ActionKind::Delete)).unwrap();
    runtime.dispatch(Event::SubmitAction).unwrap();
    settle(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(runtime.viewmodel().dialog, None);

    let reopened = JsonBackend::open(&path).unwrap().snapshot().unwrap();
    assert!(!reopened.files.contains_key("f1"));
    assert!(!reopened.bucket.contains("bucket-f1"));
    assert!(reopened.files.contains_key("f2"));
}
