//! Core trait for movie endpoints.

use async_trait::async_trait;

use super::error::MovieError;
use super::model::{Movie, MovieDraft, MovieId};

/// Remote collaborator the catalog reads from and writes to.
///
/// The catalog only ever talks to the endpoint through this trait, so the
/// fetch/retry machinery can be driven by scripted implementations in tests.
#[async_trait]
pub trait MovieApi: Send + Sync + 'static {
    /// Fetch the full movie listing.
    async fn list(&self) -> Result<Vec<Movie>, MovieError>;

    /// Create a movie remotely and return the server-confirmed record.
    async fn create(&self, draft: &MovieDraft) -> Result<Movie, MovieError>;

    /// Delete a movie remotely.
    async fn delete(&self, id: &MovieId) -> Result<(), MovieError>;

    /// Whether `create` and `delete` reach the server.
    ///
    /// When false the catalog mutates its list locally instead.
    fn supports_writes(&self) -> bool;
}
