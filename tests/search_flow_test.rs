//! Search box behavior against a scripted backend, on tokio's paused clock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{dispatch, document, drive, search, start, type_query, FileBuilder, ScriptedBackend};
use filedeck::app::SearchPhase;
use filedeck::domain::{FileCategory, FileType, Route};
use filedeck::Event;

const KEYSTROKE: Duration = Duration::from_millis(100);

fn reports() -> Vec<filedeck::domain::File> {
    vec![
        document("r1", "report-q1.pdf"),
        document("r2", "report-q2.pdf"),
        document("r3", "annual report.docx"),
        document("n1", "notes.txt"),
    ]
}

#[tokio::test(start_paused = true)]
async fn only_the_last_query_of_a_burst_is_fetched() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    for text in ["r", "re", "rep", "repo", "report"] {
        type_query(&mut runtime, text, KEYSTROKE).await;
    }
    assert!(backend.searches().is_empty());

    drive(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(backend.searches(), vec!["report"]);
    assert_eq!(runtime.state().search.phase(), SearchPhase::Idle);
    assert_eq!(runtime.viewmodel().search.rows.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn query_is_sent_trimmed_without_type_filter() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    search(&mut runtime, "  notes ").await;

    let queries = backend.search_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].search_text, "notes");
    assert!(queries[0].types.is_empty());
}

#[tokio::test(start_paused = true)]
async fn whitespace_never_reaches_the_backend() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    search(&mut runtime, "   ").await;

    assert!(backend.searches().is_empty());
    let view = runtime.viewmodel().search;
    assert!(view.rows.is_empty());
    assert!(!view.open);
}

#[tokio::test(start_paused = true)]
async fn report_lists_three_rows_with_creation_dates() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    search(&mut runtime, "report").await;

    let view = runtime.viewmodel().search;
    assert!(view.open);
    assert_eq!(view.empty_message, None);
    let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["report-q1.pdf", "report-q2.pdf", "annual report.docx"]);
    assert!(view.rows.iter().all(|r| r.created == "9:05pm, 3 Jan"));
}

#[tokio::test(start_paused = true)]
async fn shows_at_most_six_rows() {
    let files = (0..10).map(|i| document(&format!("f{i}"), &format!("scan-{i}.png"))).collect();
    let backend = Arc::new(ScriptedBackend::new(files));
    let mut runtime = start(&backend).await;

    search(&mut runtime, "scan").await;

    assert_eq!(runtime.state().search.results().len(), 10);
    assert_eq!(runtime.viewmodel().search.rows.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn no_match_shows_empty_message() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    search(&mut runtime, "zebra").await;

    let view = runtime.viewmodel().search;
    assert!(view.open);
    assert!(view.rows.is_empty());
    assert_eq!(view.empty_message.as_deref(), Some("No files found"));
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_does_not_overwrite_newer_results() {
    let backend = Arc::new(ScriptedBackend::new(vec![
        document("a1", "alpha.txt"),
        document("a2", "abacus.txt"),
    ]));
    backend.delay_search("a", Duration::from_millis(500));
    let mut runtime = start(&backend).await;

    // "a" is fetched at 300ms and answers at 800ms; "ab" answers at 650ms.
    type_query(&mut runtime, "a", Duration::from_millis(350)).await;
    search(&mut runtime, "ab").await;

    assert_eq!(backend.searches(), vec!["a", "ab"]);
    let ids: Vec<&str> = runtime
        .state()
        .search
        .results()
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a2"]);
}

#[tokio::test(start_paused = true)]
async fn selecting_a_result_routes_to_its_category() {
    let backend = Arc::new(ScriptedBackend::new(vec![
        FileBuilder::new("v1").name("clip.mp4").file_type(FileType::Video).build(),
        FileBuilder::new("v2").name("clip.mp3").file_type(FileType::Audio).build(),
    ]));
    let mut runtime = start(&backend).await;

    search(&mut runtime, " clip ").await;
    dispatch(&mut runtime, Event::SelectResult(0));

    let expected = Route::category(FileCategory::Media, "clip");
    assert_eq!(runtime.state().route, expected);
    assert_eq!(runtime.history().last(), Some(&expected));
    assert_eq!(expected.to_string(), "/media?q=clip");
    assert!(!runtime.viewmodel().search.open);
}

#[tokio::test(start_paused = true)]
async fn closed_list_ignores_selection() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    search(&mut runtime, "report").await;
    dispatch(&mut runtime, Event::DismissSearch);
    dispatch(&mut runtime, Event::SelectResult(0));

    assert_eq!(runtime.state().route, Route::dashboard());
    assert!(runtime.history().is_empty());
    assert_eq!(runtime.state().search.results().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_strips_the_route_parameter() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    dispatch(&mut runtime, Event::Navigate(Route::category(FileCategory::Images, "x")));
    search(&mut runtime, "x").await;
    search(&mut runtime, "").await;

    let images = Route::new(filedeck::domain::Page::Category(FileCategory::Images));
    assert_eq!(runtime.state().route, images);
    assert_eq!(runtime.history().last(), Some(&images));
    assert_eq!(backend.searches(), vec!["x"]);
}

#[tokio::test(start_paused = true)]
async fn failed_search_can_be_retried() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    backend.fail_searches(true);
    let mut runtime = start(&backend).await;

    search(&mut runtime, "notes").await;
    let view = runtime.viewmodel().search;
    assert!(view.rows.is_empty());
    assert!(view.notice.is_some());

    backend.fail_searches(false);
    dispatch(&mut runtime, Event::RetrySearch);
    drive(&mut runtime, Duration::from_secs(1)).await;

    assert_eq!(backend.searches(), vec!["notes", "notes"]);
    let view = runtime.viewmodel().search;
    assert_eq!(view.notice, None);
    assert_eq!(view.rows.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn navigating_away_cancels_a_pending_search() {
    let backend = Arc::new(ScriptedBackend::new(reports()));
    let mut runtime = start(&backend).await;

    type_query(&mut runtime, "report", KEYSTROKE).await;
    dispatch(&mut runtime, Event::Navigate(Route::dashboard()));
    drive(&mut runtime, Duration::from_secs(1)).await;

    assert!(backend.searches().is_empty());
    assert_eq!(runtime.state().search.query(), "");
}
