//! HuggingFace hub client for the model bootstrap
//!
//! This crate provides the remote side of the bootstrap: resolving a file
//! inside a hub repo to a download URL, streaming it to a local path, and
//! checking the configured access token against the account endpoint.
//!
//! The [`ArtifactSource`] trait is the seam between the fetch logic and the
//! network; tests substitute an in-memory implementation.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use common::error::{Error, Result};

/// A source that can materialize one remote artifact at a local path
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Fetches `repo_path` from the repo `repo_id` into `dest`
    ///
    /// Returns the number of bytes written. On failure the caller owns
    /// cleanup of whatever was partially written at `dest`.
    async fn fetch(&self, repo_id: &str, repo_path: &str, dest: &Path) -> Result<u64>;

    /// Checks the configured credential against the source
    ///
    /// Returns the account name the credential belongs to.
    async fn check_token(&self) -> Result<String>;
}

/// Hub client backed by HTTP
pub struct HubClient {
    /// HTTP client
    client: Client,

    /// Hub base URL, no trailing slash
    endpoint: String,

    /// Optional bearer token for gated repos
    token: Option<String>,
}

impl HubClient {
    /// Creates a new hub client
    pub fn new(endpoint: &str, token: Option<String>) -> Result<Self> {
        // No overall request timeout: artifacts run to tens of gigabytes
        let client = Client::builder()
            .user_agent("model-bootstrap/0.1.0")
            .connect_timeout(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Returns the resolve URL for a file inside a hub repo
    pub fn resolve_url(&self, repo_id: &str, repo_path: &str) -> String {
        format!("{}/{}/resolve/main/{}", self.endpoint, repo_id, repo_path)
    }

    fn authorized_get(&self, url: &str) -> reqwest::RequestBuilder {
        let req = self.client.get(url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl ArtifactSource for HubClient {
    async fn fetch(&self, repo_id: &str, repo_path: &str, dest: &Path) -> Result<u64> {
        let url = self.resolve_url(repo_id, repo_path);
        debug!(%url, "Requesting artifact");

        let resp = self
            .authorized_get(&url)
            .send()
            .await
            .map_err(|e| Error::TransferFailed(format!("Request to {} failed: {}", url, e)))?;

        if !resp.status().is_success() {
            return Err(map_status(resp.status(), &format!("{}/{}", repo_id, repo_path)));
        }

        let mut file = File::create(dest).await?;
        let mut stream = resp.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result
                .map_err(|e| Error::TransferFailed(format!("Stream from {} broke: {}", url, e)))?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;

        Ok(written)
    }

    /// Checks the token against the account endpoint
    async fn check_token(&self) -> Result<String> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::Unauthorized("No hub token configured".to_string()))?;

        let url = format!("{}/api/whoami-v2", self.endpoint);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::TransferFailed(format!("whoami request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(map_status(resp.status(), "whoami-v2"));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::TransferFailed(format!("whoami response unreadable: {}", e)))?;

        Ok(body
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string())
    }
}

/// Maps an unsuccessful HTTP status to the bootstrap error taxonomy
pub fn map_status(status: StatusCode, context: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(format!(
            "{}: HTTP {} (token missing, invalid, or license not accepted)",
            context, status
        )),
        StatusCode::NOT_FOUND => Error::NotFound(format!("{}: HTTP 404", context)),
        _ => Error::TransferFailed(format!("{}: HTTP {}", context, status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_url_joins_repo_and_path() {
        let client = HubClient::new("https://huggingface.co/", None).unwrap();
        assert_eq!(
            client.resolve_url(
                "Comfy-Org/Qwen-Image_ComfyUI",
                "split_files/vae/qwen_image_vae.safetensors"
            ),
            "https://huggingface.co/Comfy-Org/Qwen-Image_ComfyUI/resolve/main/split_files/vae/qwen_image_vae.safetensors"
        );
    }

    #[test]
    fn status_mapping_covers_the_taxonomy() {
        assert!(map_status(StatusCode::UNAUTHORIZED, "x").is_unauthorized());
        assert!(map_status(StatusCode::FORBIDDEN, "x").is_unauthorized());
        assert!(map_status(StatusCode::NOT_FOUND, "x").is_not_found());
        assert!(map_status(StatusCode::INTERNAL_SERVER_ERROR, "x").is_transfer_failed());
        assert!(map_status(StatusCode::BAD_GATEWAY, "x").is_transfer_failed());
    }

    #[tokio::test]
    async fn check_token_requires_a_token() {
        let client = HubClient::new("https://huggingface.co", None).unwrap();
        let err = client.check_token().await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
