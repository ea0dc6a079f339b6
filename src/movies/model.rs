use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a movie record.
///
/// The films endpoint numbers its records (`episode_id`), while the
/// document store hands out generated string keys. Locally added movies
/// get a generated key as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Key(String),
}

impl MovieId {
    /// Generate a fresh key for a movie that never touched the server.
    pub fn generate() -> Self {
        MovieId::Key(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Key(key) => f.write_str(key),
        }
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        MovieId::Number(value)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        MovieId::Key(value.to_string())
    }
}

/// A movie as displayed and mutated by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub opening_text: String,
    /// Release date as reported by the source (`YYYY-MM-DD`).
    pub release_date: String,
}

impl Movie {
    /// Build a movie from a submitted draft and the id assigned to it.
    pub fn from_draft(id: MovieId, draft: &MovieDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            opening_text: draft.opening_text.clone(),
            release_date: draft.release_date.clone(),
        }
    }
}

/// Field of the new-movie draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    OpeningText,
    ReleaseDate,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::Title,
        DraftField::OpeningText,
        DraftField::ReleaseDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::OpeningText => "Opening Text",
            DraftField::ReleaseDate => "Release Date",
        }
    }

    /// Next field in form order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            DraftField::Title => DraftField::OpeningText,
            DraftField::OpeningText => DraftField::ReleaseDate,
            DraftField::ReleaseDate => DraftField::Title,
        }
    }
}

/// In-progress new-movie form state.
///
/// Serializes to the body the document store expects on create.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl MovieDraft {
    pub fn new(
        title: impl Into<String>,
        opening_text: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            opening_text: opening_text.into(),
            release_date: release_date.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.opening_text.is_empty() && self.release_date.is_empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::OpeningText => &self.opening_text,
            DraftField::ReleaseDate => &self.release_date,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::OpeningText => self.opening_text = value,
            DraftField::ReleaseDate => self.release_date = value,
        }
    }
}
