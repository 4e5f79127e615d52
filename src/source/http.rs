//! HTTP client for the posts/users API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::model::{NewPost, Post, User};

use super::error::SourceError;
use super::RemoteSource;

/// Talks JSON to `{base_url}/posts` and `{base_url}/users`.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Build a client with the transport timeouts from `config`.
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let start = Instant::now();
        let response = self.client.get(&url).send().await?;
        let result = read_json(response).await;

        tracing::debug!(
            url = %url,
            latency_ms = start.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "GET complete"
        );
        result
    }
}

/// Decode a success body, or turn a non-2xx answer into [`SourceError::Status`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());

        tracing::warn!(status = %status, error = %message, "API error");

        return Err(SourceError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl RemoteSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        self.get_json("posts").await
    }

    async fn add_post(&self, new_post: NewPost) -> Result<Post, SourceError> {
        let url = self.url("posts");
        tracing::debug!(url = %url, user = %new_post.user, "POST");

        let response = self.client.post(&url).json(&new_post).send().await?;
        read_json(response).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        self.get_json("users").await
    }
}
