//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use moviedeck::movies::{Movie, MovieApi, MovieDraft, MovieError, MovieId};
use parking_lot::Mutex;
use tokio::time::Instant;

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id: MovieId::Number(id),
        title: title.to_string(),
        opening_text: format!("Opening crawl of {}", title),
        release_date: "1977-05-25".to_string(),
    }
}

pub fn trilogy() -> Vec<Movie> {
    vec![
        movie(4, "A New Hope"),
        movie(5, "The Empire Strikes Back"),
        movie(6, "Return of the Jedi"),
    ]
}

// -- Scripted API -------------------------------------------------------------

/// In-memory [`MovieApi`] returning queued outcomes.
///
/// Failures are given as HTTP status codes. An exhausted `list` queue
/// answers 500; an exhausted `create` queue hands out `-Ngen<n>` keys; an
/// exhausted `delete` queue succeeds.
pub struct ScriptedApi {
    writes: bool,
    list_delay: Duration,
    create_delay: Duration,
    lists: Mutex<VecDeque<Result<Vec<Movie>, u16>>>,
    creates: Mutex<VecDeque<Result<String, u16>>>,
    deletes: Mutex<VecDeque<Result<(), u16>>>,
    list_times: Mutex<Vec<Instant>>,
    created: Mutex<Vec<MovieDraft>>,
    deleted: Mutex<Vec<MovieId>>,
    generated: AtomicUsize,
}

impl ScriptedApi {
    pub fn read_only() -> Self {
        Self::new(false)
    }

    pub fn writable() -> Self {
        Self::new(true)
    }

    fn new(writes: bool) -> Self {
        Self {
            writes,
            list_delay: Duration::ZERO,
            create_delay: Duration::ZERO,
            lists: Mutex::new(VecDeque::new()),
            creates: Mutex::new(VecDeque::new()),
            deletes: Mutex::new(VecDeque::new()),
            list_times: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            generated: AtomicUsize::new(0),
        }
    }

    /// Every `list` call takes this long before answering.
    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = delay;
        self
    }

    /// Every `create` call takes this long before answering.
    pub fn with_create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = delay;
        self
    }

    pub fn push_list(&self, movies: Vec<Movie>) -> &Self {
        self.lists.lock().push_back(Ok(movies));
        self
    }

    pub fn push_list_failure(&self, status: u16) -> &Self {
        self.lists.lock().push_back(Err(status));
        self
    }

    pub fn push_create(&self, key: &str) -> &Self {
        self.creates.lock().push_back(Ok(key.to_string()));
        self
    }

    pub fn push_create_failure(&self, status: u16) -> &Self {
        self.creates.lock().push_back(Err(status));
        self
    }

    pub fn push_delete_failure(&self, status: u16) -> &Self {
        self.deletes.lock().push_back(Err(status));
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_times.lock().len()
    }

    /// Instants at which `list` was entered.
    pub fn list_times(&self) -> Vec<Instant> {
        self.list_times.lock().clone()
    }

    pub fn created(&self) -> Vec<MovieDraft> {
        self.created.lock().clone()
    }

    pub fn deleted(&self) -> Vec<MovieId> {
        self.deleted.lock().clone()
    }
}

#[async_trait]
impl MovieApi for ScriptedApi {
    async fn list(&self) -> Result<Vec<Movie>, MovieError> {
        self.list_times.lock().push(Instant::now());
        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        let outcome = self.lists.lock().pop_front().unwrap_or(Err(500));
        outcome.map_err(|status| MovieError::Status { status })
    }

    async fn create(&self, draft: &MovieDraft) -> Result<Movie, MovieError> {
        self.created.lock().push(draft.clone());
        if !self.create_delay.is_zero() {
            tokio::time::sleep(self.create_delay).await;
        }
        let outcome = self.creates.lock().pop_front();
        let key = match outcome {
            Some(Ok(key)) => key,
            Some(Err(status)) => return Err(MovieError::Status { status }),
            None => format!("-Ngen{}", self.generated.fetch_add(1, Ordering::SeqCst)),
        };
        Ok(Movie::from_draft(MovieId::Key(key), draft))
    }

    async fn delete(&self, id: &MovieId) -> Result<(), MovieError> {
        self.deleted.lock().push(id.clone());
        let outcome = self.deletes.lock().pop_front().unwrap_or(Ok(()));
        outcome.map_err(|status| MovieError::Status { status })
    }

    fn supports_writes(&self) -> bool {
        self.writes
    }
}
