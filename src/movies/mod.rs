//! Movie records and the endpoints that serve them.

mod api;
mod error;
mod http;
mod model;
mod source;

pub use api::MovieApi;
pub use error::{MovieError, FETCH_FAILED_MESSAGE};
pub use http::HttpMovieApi;
pub use model::{DraftField, Movie, MovieDraft, MovieId};
pub use source::{item_url, parse_created_key, parse_listing, SourceStyle};
