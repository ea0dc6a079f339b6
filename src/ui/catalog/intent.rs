//! Intents for the movie catalog.

use crate::movies::{DraftField, Movie, MovieId};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    /// Start a fetch (on startup or user request). Ignored while retrying.
    FetchRequested,

    /// The retry timer fired.
    RetryTick,

    /// A fetch completed successfully.
    FetchSucceeded {
        /// Generation of the fetch that produced this result.
        generation: u64,
        movies: Vec<Movie>,
    },

    /// A fetch failed.
    FetchFailed {
        /// Generation of the fetch that produced this result.
        generation: u64,
        message: String,
    },

    /// User stopped the retry loop.
    CancelRetry,

    /// User edited one field of the draft.
    DraftEdited { field: DraftField, value: String },

    /// A movie was added, locally or confirmed by the server.
    MovieAdded { movie: Movie },

    /// Remote create failed.
    AddFailed { message: String },

    /// A movie was deleted, locally or confirmed by the server.
    MovieRemoved { id: MovieId },

    /// Remote delete failed.
    DeleteFailed { message: String },
}

impl Intent for CatalogIntent {}
