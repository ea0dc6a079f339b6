use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::SourceConfig;

use super::api::MovieApi;
use super::error::MovieError;
use super::model::{Movie, MovieDraft, MovieId};
use super::source::{item_url, parse_created_key, parse_listing, SourceStyle};

/// [`MovieApi`] backed by a JSON endpoint over HTTP.
pub struct HttpMovieApi {
    client: Client,
    endpoint: String,
    style: SourceStyle,
}

impl HttpMovieApi {
    pub fn new(
        source: &SourceConfig,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, MovieError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| MovieError::Transport {
                url: source.endpoint.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            endpoint: source.endpoint.clone(),
            style: source.style,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn style(&self) -> SourceStyle {
        self.style
    }

    fn require_writes(&self, operation: &'static str) -> Result<(), MovieError> {
        if self.style.supports_writes() {
            Ok(())
        } else {
            Err(MovieError::Unsupported { operation })
        }
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn list(&self) -> Result<Vec<Movie>, MovieError> {
        tracing::debug!(endpoint = %self.endpoint, style = self.style.as_str(), "GET listing");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| transport(&self.endpoint, e))?;

        let body = read_success_body(response, &self.endpoint).await?;
        parse_listing(self.style, &body)
    }

    async fn create(&self, draft: &MovieDraft) -> Result<Movie, MovieError> {
        self.require_writes("POST")?;
        tracing::debug!(endpoint = %self.endpoint, title = %draft.title, "POST movie");
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport(&self.endpoint, e))?;

        let body = read_success_body(response, &self.endpoint).await?;
        let key = parse_created_key(&body)?;
        Ok(Movie::from_draft(MovieId::Key(key), draft))
    }

    async fn delete(&self, id: &MovieId) -> Result<(), MovieError> {
        self.require_writes("DELETE")?;
        let url = item_url(&self.endpoint, id)?;
        tracing::debug!(url = %url, "DELETE movie");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        read_success_body(response, &url).await?;
        Ok(())
    }

    fn supports_writes(&self) -> bool {
        self.style.supports_writes()
    }
}

fn transport(url: &str, source: reqwest::Error) -> MovieError {
    MovieError::Transport {
        url: url.to_string(),
        source,
    }
}

async fn read_success_body(response: Response, url: &str) -> Result<Vec<u8>, MovieError> {
    let status = response.status();
    if !status.is_success() {
        return Err(MovieError::Status {
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes().await.map_err(|e| transport(url, e))?;
    Ok(bytes.to_vec())
}
