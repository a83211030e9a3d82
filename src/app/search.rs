//! Debounced search box.
//!
//! [`SearchController`] owns the live query, the result list and the
//! visibility flag of the search dropdown. It never talks to the backend or
//! the clock directly: every method returns the [`Effect`]s the runtime must
//! execute, and timer expiries and fetch responses come back in as calls to
//! [`debounce_elapsed`](SearchController::debounce_elapsed) and
//! [`fetch_completed`](SearchController::fetch_completed).
//!
//! # Generations
//!
//! Every query change bumps a generation counter. Timers and fetches carry
//! the generation they were started under; anything that comes back with an
//! older generation is discarded. This is what keeps a slow response for
//! `"rep"` from overwriting the results for `"report"`.

use std::time::Duration;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::dispatcher::AppliedChange;
use super::effects::Effect;
use super::modes::SearchPhase;
use crate::backend::{FileList, FileQuery};
use crate::domain::{File, Route};
use crate::ui::helpers::{format_date_time, thumbnail_for};
use crate::ui::viewmodel::{SearchRow, SearchView};
use crate::worker::WorkerMessage;

/// Default quiet period before a lookup is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default number of rows shown in the dropdown.
pub const DEFAULT_MAX_RESULTS: usize = 6;

/// Message shown when a lookup succeeds with no matches.
pub const EMPTY_MESSAGE: &str = "No files found";

/// State of the search box.
#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    generation: u64,
    phase: SearchPhase,
    results: Vec<File>,
    open: bool,
    /// A lookup for the current generation has completed.
    settled: bool,
    failure: Option<String>,
    debounce: Duration,
    max_results: usize,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS)
    }
}

impl SearchController {
    #[must_use]
    pub const fn new(debounce: Duration, max_results: usize) -> Self {
        Self {
            query: String::new(),
            generation: 0,
            phase: SearchPhase::Idle,
            results: Vec::new(),
            open: false,
            settled: false,
            failure: None,
            debounce,
            max_results,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Every document returned by the last accepted lookup.
    #[must_use]
    pub fn results(&self) -> &[File] {
        &self.results
    }

    /// The rows actually displayed, capped at the configured maximum.
    #[must_use]
    pub fn visible_results(&self) -> &[File] {
        let end = self.results.len().min(self.max_results);
        &self.results[..end]
    }

    fn trimmed(&self) -> &str {
        self.query.trim()
    }

    fn fetch_effect(&self) -> Effect {
        Effect::PostToWorker(WorkerMessage::FetchFiles {
            generation: self.generation,
            query: FileQuery::search(self.trimmed()),
        })
    }

    /// Replaces the live query and restarts the debounce timer.
    ///
    /// Returns `None` when the text did not change.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<Effect> {
        let text = text.into();
        if text == self.query {
            return None;
        }

        self.query = text;
        self.generation += 1;
        self.phase = SearchPhase::Debouncing;
        self.settled = false;
        self.failure = None;

        tracing::trace!(query = %self.query, generation = self.generation, "search query updated");

        Some(Effect::RestartDebounce {
            generation: self.generation,
            delay: self.debounce,
        })
    }

    /// Handles the end of a quiet period.
    ///
    /// A blank query clears the results and, when the current route carries
    /// a search parameter, navigates to the same page without it. Any other
    /// query issues one lookup for the trimmed text.
    pub fn debounce_elapsed(&mut self, generation: u64, route: &Route) -> Vec<Effect> {
        if generation != self.generation {
            tracing::debug!(
                generation = generation,
                current = self.generation,
                "discarding stale debounce expiry"
            );
            return vec![];
        }

        if self.trimmed().is_empty() {
            self.results.clear();
            self.open = false;
            self.settled = false;
            self.phase = SearchPhase::Idle;

            return if route.query.is_some() {
                vec![Effect::Navigate(route.without_query())]
            } else {
                vec![]
            };
        }

        self.phase = SearchPhase::Fetching;
        tracing::debug!(query = %self.trimmed(), generation = generation, "issuing search");
        vec![self.fetch_effect()]
    }

    /// Applies a lookup response.
    ///
    /// Returns `false` when the response belongs to a superseded generation
    /// and was dropped.
    pub fn fetch_completed(&mut self, generation: u64, result: Result<FileList, String>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation = generation,
                current = self.generation,
                "discarding stale search response"
            );
            return false;
        }

        match result {
            Ok(list) => {
                tracing::debug!(total = list.total, returned = list.documents.len(), "search completed");
                self.results = list.documents;
                self.failure = None;
            }
            Err(message) => {
                tracing::warn!(error = %message, query = %self.query, "search failed");
                self.results.clear();
                self.failure = Some(message);
            }
        }

        self.phase = SearchPhase::Idle;
        self.settled = true;
        self.open = true;
        true
    }

    /// Re-issues the lookup for the current query under a fresh generation.
    pub fn retry(&mut self) -> Vec<Effect> {
        if self.trimmed().is_empty() {
            return vec![];
        }

        self.generation += 1;
        self.phase = SearchPhase::Fetching;
        self.settled = false;
        self.failure = None;
        vec![self.fetch_effect()]
    }

    /// Input gained focus; reopens the dropdown if there is something to show.
    pub fn focus(&mut self) {
        if self.settled && !self.trimmed().is_empty() {
            self.open = true;
        }
    }

    /// Input lost focus or the user pressed Escape.
    pub fn blur(&mut self) {
        self.open = false;
    }

    /// Chooses displayed row `index`.
    ///
    /// Closes the dropdown, clears the results and returns the listing page
    /// for the file's type carrying the query. Nothing can be chosen while
    /// the dropdown is hidden; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<Route> {
        if !self.open {
            return None;
        }
        let file = self.visible_results().get(index)?;
        let route = Route::category(file.file_type.category(), self.trimmed());

        tracing::debug!(file_id = %file.id, route = %route, "search result selected");

        self.open = false;
        self.results.clear();
        self.settled = false;
        Some(route)
    }

    /// Follows an external route change.
    ///
    /// When the new route has no search parameter the live query is cleared
    /// without issuing a lookup, and any pending timer is cancelled.
    pub fn sync_route(&mut self, route: &Route) -> Vec<Effect> {
        if route.query.is_some() || self.query.is_empty() {
            return vec![];
        }

        self.query.clear();
        self.generation += 1;
        self.results.clear();
        self.open = false;
        self.settled = false;
        self.failure = None;
        self.phase = SearchPhase::Idle;
        vec![Effect::CancelDebounce]
    }

    /// Reflects a successful mutation in the displayed results.
    pub fn apply_change(&mut self, change: &AppliedChange) {
        match change {
            AppliedChange::Updated(file) => {
                if let Some(existing) = self.results.iter_mut().find(|f| f.id == file.id) {
                    existing.clone_from(file);
                }
            }
            AppliedChange::Deleted { file_id } => self.results.retain(|f| &f.id != file_id),
        }
    }

    /// Builds the dropdown view.
    #[must_use]
    pub fn view(&self) -> SearchView {
        let matcher = (!self.trimmed().is_empty()).then(SkimMatcherV2::default);

        let rows: Vec<SearchRow> = self
            .visible_results()
            .iter()
            .map(|file| SearchRow {
                id: file.id.clone(),
                name: file.name.clone(),
                file_type: file.file_type,
                extension: file.extension.clone(),
                thumbnail: thumbnail_for(file),
                created: format_date_time(Some(&file.created_at)),
                highlight_ranges: matcher
                    .as_ref()
                    .map_or_else(Vec::new, |m| highlight_ranges(m, &file.name, self.trimmed())),
            })
            .collect();

        let empty_message = (self.open && self.settled && self.failure.is_none() && rows.is_empty())
            .then(|| EMPTY_MESSAGE.to_string());

        SearchView {
            query: self.query.clone(),
            open: self.open,
            loading: self.phase == SearchPhase::Fetching,
            rows,
            empty_message,
            notice: self
                .failure
                .as_ref()
                .map(|_| "Search failed. Type `retry` to try again.".to_string()),
        }
    }
}

/// Character ranges of `text` matched by `pattern`, coalesced into runs.
///
/// Each tuple is `(start, end)` with an exclusive end.
fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, pattern: &str) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, pattern) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
