//! Endpoint styles and the field mapping from their JSON to [`Movie`].
//!
//! Two shapes are understood:
//!
//! ```text
//! films:           { "results": [ { "episode_id", "title", "opening_crawl", "release_date" } ] }
//! document_store:  { "<key>": { "title", "openingText", "releaseDate" }, ... }   (or null)
//! ```
//!
//! Records that do not match the expected shape are skipped, so the parsed
//! list holds exactly the valid records of the response.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::MovieError;
use super::model::{Movie, MovieId};

/// Shape of the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SourceStyle {
    /// Read-only public films listing.
    #[default]
    Films,
    /// Writable document store keyed by generated ids.
    #[value(name = "document_store")]
    DocumentStore,
}

impl SourceStyle {
    /// Whether the endpoint accepts POST and DELETE.
    pub fn supports_writes(self) -> bool {
        matches!(self, SourceStyle::DocumentStore)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceStyle::Films => "films",
            SourceStyle::DocumentStore => "document_store",
        }
    }
}

#[derive(Deserialize)]
struct FilmsEnvelope {
    results: Vec<Value>,
}

#[derive(Deserialize)]
struct FilmRecord {
    episode_id: i64,
    title: String,
    opening_crawl: String,
    release_date: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    title: String,
    opening_text: String,
    release_date: String,
}

#[derive(Deserialize)]
struct CreatedKey {
    name: String,
}

/// Parse a listing response body into movies.
pub fn parse_listing(style: SourceStyle, body: &[u8]) -> Result<Vec<Movie>, MovieError> {
    match style {
        SourceStyle::Films => parse_films(body),
        SourceStyle::DocumentStore => parse_documents(body),
    }
}

fn parse_films(body: &[u8]) -> Result<Vec<Movie>, MovieError> {
    let envelope: FilmsEnvelope =
        serde_json::from_slice(body).map_err(|e| MovieError::Decode(e.to_string()))?;

    let mut movies = Vec::with_capacity(envelope.results.len());
    for (index, value) in envelope.results.into_iter().enumerate() {
        match serde_json::from_value::<FilmRecord>(value) {
            Ok(record) => movies.push(Movie {
                id: MovieId::Number(record.episode_id),
                title: record.title,
                opening_text: record.opening_crawl,
                release_date: record.release_date,
            }),
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping malformed film record");
            }
        }
    }
    Ok(movies)
}

fn parse_documents(body: &[u8]) -> Result<Vec<Movie>, MovieError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| MovieError::Decode(e.to_string()))?;

    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(entries) => entries,
        other => {
            return Err(MovieError::Decode(format!(
                "expected an object keyed by id, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut movies = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match serde_json::from_value::<StoredRecord>(value) {
            Ok(record) => movies.push(Movie {
                id: MovieId::Key(key),
                title: record.title,
                opening_text: record.opening_text,
                release_date: record.release_date,
            }),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Skipping malformed stored record");
            }
        }
    }
    Ok(movies)
}

/// Extract the generated key from a create response (`{"name": "<key>"}`).
pub fn parse_created_key(body: &[u8]) -> Result<String, MovieError> {
    serde_json::from_slice::<CreatedKey>(body)
        .map(|created| created.name)
        .map_err(|_| MovieError::MissingKey)
}

/// URL addressing a single record: `<base>/<id>.json`.
///
/// `<base>` is the endpoint path with a trailing `.json` and slashes
/// removed, so both `https://db/movies` and `https://db/movies.json` address
/// the same collection. The id is percent-encoded as one path segment and
/// any query string on the endpoint is kept.
pub fn item_url(endpoint: &str, id: &MovieId) -> Result<String, MovieError> {
    let invalid = |message: String| MovieError::InvalidUrl {
        url: endpoint.to_string(),
        message,
    };
    let mut url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;

    let path = url.path().trim_end_matches('/');
    let base = path.strip_suffix(".json").unwrap_or(path);
    let base = base.trim_end_matches('/').to_string();
    url.set_path(&base);

    url.path_segments_mut()
        .map_err(|_| invalid("endpoint cannot carry a path".to_string()))?
        .pop_if_empty()
        .push(&format!("{}.json", id));
    Ok(url.into())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
