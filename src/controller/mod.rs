//! Side-effect owner for the movie catalog.
//!
//! The controller holds the single [`CatalogState`] and is the only thing that
//! mutates it, always through [`CatalogReducer`]. Around each reduction it
//! performs the effects the new state calls for:
//!
//! - a fetch generation was started → spawn the GET
//! - the state became retrying → start the [`RetryTimer`]
//! - the state stopped retrying → cancel the timer
//!
//! Request results and timer ticks come back as [`CatalogIntent`]s over one
//! channel, drained by [`CatalogController::process_next`].

mod retry;

pub use retry::RetryTimer;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::movies::{DraftField, Movie, MovieApi, MovieId};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::mvi::Reducer;

pub struct CatalogController {
    api: Arc<dyn MovieApi>,
    state: CatalogState,
    retry_interval: Duration,
    retry_timer: Option<RetryTimer>,
    events_tx: UnboundedSender<CatalogIntent>,
    events_rx: UnboundedReceiver<CatalogIntent>,
}

impl CatalogController {
    /// Must be called inside a tokio runtime; effects are spawned tasks.
    pub fn new(api: Arc<dyn MovieApi>, retry_interval: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: CatalogState::default(),
            retry_interval,
            retry_timer: None,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Whether the retry timer task is currently scheduled.
    pub fn is_retry_scheduled(&self) -> bool {
        self.retry_timer.is_some()
    }

    /// Fetch the listing. Ignored while the retry loop is armed.
    pub fn fetch_movies(&mut self) {
        self.dispatch(CatalogIntent::FetchRequested);
    }

    /// Stop the retry loop and show the cancel message.
    pub fn cancel_retrying(&mut self) {
        self.dispatch(CatalogIntent::CancelRetry);
    }

    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        self.dispatch(CatalogIntent::DraftEdited { field, value });
    }

    /// Submit the current draft.
    ///
    /// Read-only endpoints get the movie appended immediately under a
    /// generated id. Writable endpoints are POSTed to first and the
    /// confirmed record is appended when the result is processed. The draft
    /// is cleared in both outcomes.
    pub fn add_movie(&mut self) {
        let draft = self.state.draft.clone();

        if !self.api.supports_writes() {
            let movie = Movie::from_draft(MovieId::generate(), &draft);
            tracing::info!(id = %movie.id, title = %movie.title, "Added movie locally");
            self.dispatch(CatalogIntent::MovieAdded { movie });
            return;
        }

        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let intent = match api.create(&draft).await {
                Ok(movie) => {
                    tracing::info!(id = %movie.id, title = %movie.title, "Created movie");
                    CatalogIntent::MovieAdded { movie }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Create failed");
                    CatalogIntent::AddFailed {
                        message: err.add_message(),
                    }
                }
            };
            let _ = events.send(intent);
        });
    }

    /// Delete a movie by id. Writable endpoints confirm remotely first.
    pub fn delete_movie(&mut self, id: MovieId) {
        if !self.api.supports_writes() {
            tracing::info!(id = %id, "Removed movie locally");
            self.dispatch(CatalogIntent::MovieRemoved { id });
            return;
        }

        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let intent = match api.delete(&id).await {
                Ok(()) => {
                    tracing::info!(id = %id, "Deleted movie");
                    CatalogIntent::MovieRemoved { id }
                }
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "Delete failed");
                    CatalogIntent::DeleteFailed {
                        message: err.delete_message(),
                    }
                }
            };
            let _ = events.send(intent);
        });
    }

    /// Wait for the next request result or timer tick and apply it.
    pub async fn process_next(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Apply every event that is already queued, without waiting.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.events_rx.try_recv() {
            self.dispatch(intent);
            applied += 1;
        }
        applied
    }

    /// Run one intent through the reducer and perform the resulting effects.
    pub fn dispatch(&mut self, intent: CatalogIntent) {
        let previous_generation = self.state.generation();
        self.state = CatalogReducer::reduce(std::mem::take(&mut self.state), intent);

        if let Some(generation) = self.state.in_flight() {
            if generation != previous_generation {
                self.spawn_fetch(generation);
            }
        }

        self.sync_retry_timer();
    }

    fn spawn_fetch(&self, generation: u64) {
        tracing::debug!(generation, retrying = self.state.is_retrying(), "Fetching movies");
        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let intent = match api.list().await {
                Ok(movies) => {
                    tracing::info!(generation, count = movies.len(), "Fetched movies");
                    CatalogIntent::FetchSucceeded { generation, movies }
                }
                Err(err) => {
                    tracing::warn!(generation, error = %err, "Fetch failed");
                    CatalogIntent::FetchFailed {
                        generation,
                        message: err.fetch_message(),
                    }
                }
            };
            let _ = events.send(intent);
        });
    }

    fn sync_retry_timer(&mut self) {
        let retrying = self.state.is_retrying();
        if retrying && self.retry_timer.is_none() {
            tracing::info!(period = ?self.retry_interval, "Retry loop armed");
            self.retry_timer = Some(RetryTimer::start(
                self.retry_interval,
                self.events_tx.clone(),
            ));
        } else if !retrying {
            if let Some(timer) = self.retry_timer.take() {
                tracing::info!("Retry loop stopped");
                timer.cancel();
            }
        }
    }
}
