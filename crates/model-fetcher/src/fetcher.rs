//! Idempotent artifact fetching
//!
//! This module provides the ensure-local routine: a file already present at
//! its destination is reported without touching the network; a missing file
//! is streamed to a `.part` staging path and renamed into place, so the
//! destination only ever holds complete files.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use common::error::Error;
use common::utils::format_bytes;
use hub_client::ArtifactSource;

use crate::artifact::ArtifactSpec;

/// Outcome of one ensure-local call
#[derive(Debug)]
pub enum FetchOutcome {
    /// Destination file already existed; no network activity
    AlreadyPresent,

    /// Artifact was downloaded
    Downloaded {
        /// Bytes written to the destination
        bytes: u64,
    },

    /// Fetch failed; the destination holds no partial file
    Failed {
        /// Underlying reason
        error: Error,
    },
}

impl FetchOutcome {
    /// Returns true if the artifact is present after the call
    pub fn is_success(&self) -> bool {
        !matches!(self, FetchOutcome::Failed { .. })
    }
}

/// Ensures catalog artifacts exist locally
pub struct Fetcher {
    /// Remote artifact source
    source: Arc<dyn ArtifactSource>,

    /// Models root directory
    models_dir: PathBuf,
}

impl Fetcher {
    /// Creates a new fetcher over a models root
    pub fn new(source: Arc<dyn ArtifactSource>, models_dir: PathBuf) -> Self {
        Self { source, models_dir }
    }

    /// Returns the models root the fetcher writes under
    pub fn models_dir(&self) -> &PathBuf {
        &self.models_dir
    }

    /// Ensures one artifact exists at its destination
    ///
    /// Failures are returned as an outcome, not propagated; one bad
    /// artifact must not abort the rest of the run.
    pub async fn ensure_local(&self, spec: &ArtifactSpec) -> FetchOutcome {
        let name = spec.file_name();
        let dest = spec.dest_path(&self.models_dir);

        // Presence check only; a file with the right name is trusted
        if dest.exists() {
            info!(artifact = name, "Already present");
            return FetchOutcome::AlreadyPresent;
        }

        if let Some(parent) = dest.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                error!(artifact = name, "Failed to create {}: {}", parent.display(), e);
                return FetchOutcome::Failed { error: e.into() };
            }
        }

        info!(
            artifact = name,
            "Downloading from {}/{}", spec.repo_id, spec.repo_path
        );

        let staging = dest.with_extension(match dest.extension() {
            Some(ext) => format!("{}.part", ext.to_string_lossy()),
            None => "part".to_string(),
        });

        let result = self
            .source
            .fetch(&spec.repo_id, &spec.repo_path, &staging)
            .await;

        match result {
            Ok(bytes) => {
                if let Err(e) = tokio::fs::rename(&staging, &dest).await {
                    error!(artifact = name, "Failed to move into place: {}", e);
                    let _ = tokio::fs::remove_file(&staging).await;
                    return FetchOutcome::Failed { error: e.into() };
                }
                info!(artifact = name, "Done ({})", format_bytes(bytes));
                FetchOutcome::Downloaded { bytes }
            }
            Err(error) => {
                error!(artifact = name, "FAILED: {}", error);
                let _ = tokio::fs::remove_file(&staging).await;
                FetchOutcome::Failed { error }
            }
        }
    }
}
