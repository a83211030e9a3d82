//! Shared fixtures for the integration tests.
//!
//! [`ScriptedBackend`] is an in-memory [`Backend`] whose latency and
//! mutation outcomes are set per test, and which records every call it
//! receives. Tests run on tokio's paused clock, so delays are exact and
//! cost no wall time.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use filedeck::backend::{Backend, DeleteFile, FileList, FileQuery, RenameFile, UpdateFileUsers};
use filedeck::domain::{File, FileOwner, FileType, UserProfile};
use filedeck::{Config, Event, FiledeckError, Result, Runtime};

/// A mutation the backend received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Rename(RenameFile),
    UpdateUsers(UpdateFileUsers),
    Delete(DeleteFile),
}

/// Scripted result of the next mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected,
    Fails,
}

pub struct ScriptedBackend {
    user: Mutex<Option<UserProfile>>,
    files: Mutex<Vec<File>>,
    search_delays: Mutex<HashMap<String, Duration>>,
    mutation_delay: Mutex<Duration>,
    outcomes: Mutex<VecDeque<Outcome>>,
    fail_searches: AtomicBool,
    searches: Mutex<Vec<FileQuery>>,
    calls: Mutex<Vec<Call>>,
    sign_outs: Mutex<usize>,
}

impl ScriptedBackend {
    pub fn new(files: Vec<File>) -> Self {
        Self {
            user: Mutex::new(Some(ada())),
            files: Mutex::new(files),
            search_delays: Mutex::new(HashMap::new()),
            mutation_delay: Mutex::new(Duration::from_millis(20)),
            outcomes: Mutex::new(VecDeque::new()),
            fail_searches: AtomicBool::new(false),
            searches: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            sign_outs: Mutex::new(0),
        }
    }

    pub fn signed_out(self) -> Self {
        *self.user.lock().unwrap() = None;
        self
    }

    /// Delays the response to searches for exactly `text`.
    pub fn delay_search(&self, text: &str, delay: Duration) {
        self.search_delays.lock().unwrap().insert(text.to_string(), delay);
    }

    pub fn delay_mutations(&self, delay: Duration) {
        *self.mutation_delay.lock().unwrap() = delay;
    }

    /// Queues the outcome of the next mutation; unqueued ones are applied.
    pub fn push_outcome(&self, outcome: Outcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn fail_searches(&self, fail: bool) {
        self.fail_searches.store(fail, Ordering::SeqCst);
    }

    /// Search texts received, in call order.
    pub fn searches(&self) -> Vec<String> {
        self.searches
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.search_text.clone())
            .collect()
    }

    pub fn search_queries(&self) -> Vec<FileQuery> {
        self.searches.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sign_outs(&self) -> usize {
        *self.sign_outs.lock().unwrap()
    }

    pub fn files(&self) -> Vec<File> {
        self.files.lock().unwrap().clone()
    }

    fn search_delay(&self, text: &str) -> Duration {
        self.search_delays
            .lock()
            .unwrap()
            .get(text)
            .copied()
            .unwrap_or(Duration::from_millis(10))
    }

    fn current_mutation_delay(&self) -> Duration {
        *self.mutation_delay.lock().unwrap()
    }

    fn next_outcome(&self) -> Outcome {
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Outcome::Applied)
    }

    /// Records `call`, waits, and applies `apply` if the outcome allows.
    fn mutate(&self, call: Call, apply: impl FnOnce(&mut Vec<File>) + Send + 'static) -> BoxFuture<'_, Result<bool>> {
        async move {
            self.calls.lock().unwrap().push(call);
            tokio::time::sleep(self.current_mutation_delay()).await;
            match self.next_outcome() {
                Outcome::Applied => {
                    let mut files = self.files.lock().unwrap();
                    apply(&mut *files);
                    Ok(true)
                }
                Outcome::Rejected => Ok(false),
                Outcome::Fails => Err(FiledeckError::Backend("service unavailable".to_string())),
            }
        }
        .boxed()
    }
}

impl Backend for ScriptedBackend {
    fn current_user(&self) -> BoxFuture<'_, Result<Option<UserProfile>>> {
        let user = self.user.lock().unwrap().clone();
        async move { Ok(user) }.boxed()
    }

    fn get_files(&self, query: FileQuery) -> BoxFuture<'_, Result<FileList>> {
        async move {
            let delay = self.search_delay(&query.search_text);
            let needle = query.search_text.to_lowercase();
            self.searches.lock().unwrap().push(query);

            tokio::time::sleep(delay).await;

            if self.fail_searches.load(Ordering::SeqCst) {
                return Err(FiledeckError::Backend("search unavailable".to_string()));
            }
            let documents: Vec<File> = self
                .files
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            Ok(FileList {
                total: documents.len(),
                documents,
            })
        }
        .boxed()
    }

    fn rename_file(&self, request: RenameFile) -> BoxFuture<'_, Result<bool>> {
        let id = request.file_id.clone();
        let name = File::name_with_extension(&request.name, &request.extension);
        self.mutate(Call::Rename(request), move |files| {
            if let Some(file) = files.iter_mut().find(|f| f.id == id) {
                file.name = name;
            }
        })
    }

    fn update_file_users(&self, request: UpdateFileUsers) -> BoxFuture<'_, Result<bool>> {
        let id = request.file_id.clone();
        let emails = request.emails.clone();
        self.mutate(Call::UpdateUsers(request), move |files| {
            if let Some(file) = files.iter_mut().find(|f| f.id == id) {
                file.users = emails;
            }
        })
    }

    fn delete_file(&self, request: DeleteFile) -> BoxFuture<'_, Result<bool>> {
        let id = request.file_id.clone();
        self.mutate(Call::Delete(request), move |files| files.retain(|f| f.id != id))
    }

    fn sign_out(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            *self.sign_outs.lock().unwrap() += 1;
            *self.user.lock().unwrap() = None;
            Ok(())
        }
        .boxed()
    }
}

pub fn ada() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        account_id: "acct-1".to_string(),
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        avatar: String::new(),
    }
}

/// Builder for test files.
pub struct FileBuilder {
    file: File,
}

impl FileBuilder {
    pub fn new(id: &str) -> Self {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 3, 21, 5, 0).unwrap();
        Self {
            file: File {
                id: id.to_string(),
                name: format!("{id}.txt"),
                extension: "txt".to_string(),
                file_type: FileType::Document,
                size: 1024,
                owner: FileOwner {
                    id: "user-1".to_string(),
                    full_name: "Ada Lovelace".to_string(),
                },
                users: vec!["bob@example.com".to_string(), "carol@example.com".to_string()],
                created_at,
                updated_at: created_at,
                bucket_file_id: format!("bucket-{id}"),
                url: format!("https://cdn.example.com/{id}"),
            },
        }
    }

    /// Sets the name; the extension follows the last dot.
    pub fn name(mut self, name: &str) -> Self {
        self.file.name = name.to_string();
        self.file.extension = name.rsplit_once('.').map_or("", |(_, ext)| ext).to_string();
        self
    }

    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.file.file_type = file_type;
        self
    }

    pub fn users(mut self, users: &[&str]) -> Self {
        self.file.users = users.iter().map(|u| (*u).to_string()).collect();
        self
    }

    pub fn build(self) -> File {
        self.file
    }
}

pub fn document(id: &str, name: &str) -> File {
    FileBuilder::new(id).name(name).build()
}

pub type TestRuntime = Runtime<ScriptedBackend>;

/// Runtime over `backend`, already past the initial user load.
pub async fn start(backend: &Arc<ScriptedBackend>) -> TestRuntime {
    let mut runtime = Runtime::new(&Config::default(), Arc::clone(backend));
    runtime.dispatch(Event::Start).unwrap();
    drive(&mut runtime, Duration::from_millis(1)).await;
    runtime
}

/// Processes timers and worker responses for `duration` of (paused) time.
pub async fn drive(runtime: &mut TestRuntime, duration: Duration) {
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

pub fn dispatch(runtime: &mut TestRuntime, event: Event) {
    runtime.dispatch(event).unwrap();
}

/// Types `text` into the search box, then lets `gap` pass.
pub async fn type_query(runtime: &mut TestRuntime, text: &str, gap: Duration) {
    dispatch(runtime, Event::QueryChanged(text.to_string()));
    drive(runtime, gap).await;
}

/// Types `text` and waits well past the debounce window.
pub async fn search(runtime: &mut TestRuntime, text: &str) {
    type_query(runtime, text, Duration::from_secs(1)).await;
}
