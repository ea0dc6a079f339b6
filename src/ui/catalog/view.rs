//! Mapping from catalog state to what the body shows.

use crate::movies::{Movie, MovieId};

use super::state::CatalogState;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "Found no movies";

/// The single branch of the body that is active.
///
/// Error takes precedence over loading, which takes precedence over the list.
#[derive(Debug, PartialEq)]
pub enum CatalogView<'a> {
    Error {
        message: &'a str,
        /// Offered only while the retry loop is armed.
        can_cancel: bool,
    },
    Loading,
    Movies(Vec<MovieItem<'a>>),
    Empty,
}

/// One displayed movie.
#[derive(Debug, PartialEq)]
pub struct MovieItem<'a> {
    pub id: &'a MovieId,
    pub title: &'a str,
    pub release_date: &'a str,
    pub opening_text: &'a str,
}

impl<'a> From<&'a Movie> for MovieItem<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            id: &movie.id,
            title: &movie.title,
            release_date: &movie.release_date,
            opening_text: &movie.opening_text,
        }
    }
}

pub fn catalog_view(state: &CatalogState) -> CatalogView<'_> {
    if let Some(message) = state.error() {
        return CatalogView::Error {
            message,
            can_cancel: state.is_retrying(),
        };
    }
    if state.is_loading() {
        return CatalogView::Loading;
    }
    if state.movies.is_empty() {
        return CatalogView::Empty;
    }
    CatalogView::Movies(state.movies.iter().map(MovieItem::from).collect())
}

/// Label and availability of the fetch action.
pub fn fetch_action(state: &CatalogState) -> (&'static str, bool) {
    if state.is_retrying() {
        ("Retrying...", false)
    } else {
        ("Fetch Movies", true)
    }
}
