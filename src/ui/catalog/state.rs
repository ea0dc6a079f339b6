//! State for the movie catalog.

use crate::movies::{Movie, MovieDraft, MovieId};
use crate::ui::mvi::UiState;

/// Error text after the user stops the retry loop.
pub const RETRY_CANCELED_MESSAGE: &str = "Retrying canceled by user";

/// Where the catalog is in the fetch/retry cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchPhase {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading {
        /// The fetch was issued by the retry loop, which stays armed.
        retrying: bool,
    },

    /// The last fetch succeeded.
    Loaded,

    /// The last operation failed.
    Failed {
        /// Text shown in place of the list.
        error: String,
        /// Whether the retry loop is still armed.
        retrying: bool,
    },
}

/// Catalog state: the movie list plus fetch and draft bookkeeping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub movies: Vec<Movie>,
    pub phase: FetchPhase,
    pub draft: MovieDraft,
    /// Counter bumped every time a fetch starts or is invalidated.
    pub(super) generation: u64,
    /// Generation of the fetch whose result is still awaited.
    pub(super) in_flight: Option<u64>,
    /// Ids removed while `in_flight` was set; filtered from that result.
    pub(super) tombstones: Vec<MovieId>,
    /// Movies added while `in_flight` was set; kept if that result lacks them.
    pub(super) pending_adds: Vec<Movie>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading { .. })
    }

    /// Whether the automatic retry loop is armed.
    pub fn is_retrying(&self) -> bool {
        match self.phase {
            FetchPhase::Loading { retrying } | FetchPhase::Failed { retrying, .. } => retrying,
            FetchPhase::Idle | FetchPhase::Loaded => false,
        }
    }

    /// Current error text, if the error branch is active.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Generation of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the fetch whose result is awaited, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Manual fetches are disabled while the retry loop runs.
    pub fn can_fetch(&self) -> bool {
        !self.is_retrying()
    }

    pub fn find(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| &movie.id == id)
    }
}
