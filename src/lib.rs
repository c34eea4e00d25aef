//! Main integration module for the model bootstrap
//!
//! This module wires the configuration, hub client, and fetcher together
//! and provides the run loop: walk the catalog group by group, fully
//! sequential, and keep going no matter how many individual artifacts fail.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use config::BootstrapConfig;
use hub_client::{ArtifactSource, HubClient};
use model_fetcher::catalog::{catalog, FLUX1_DEV_LICENSE_URL};
use model_fetcher::{FetchOutcome, Fetcher};

/// Tally of one full catalog run
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    /// Artifacts downloaded this run
    pub downloaded: usize,

    /// Artifacts already on disk
    pub already_present: usize,

    /// Artifacts that failed to fetch
    pub failed: usize,

    /// Gated artifacts skipped for lack of a token
    pub skipped: usize,
}

impl RunReport {
    /// Returns true if any artifact failed to fetch
    ///
    /// Skipped gated artifacts do not count; skipping them without a token
    /// is the expected behavior, not a failure.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Main bootstrap orchestrator
pub struct ModelBootstrap {
    /// Bootstrap configuration
    config: BootstrapConfig,

    /// Remote artifact source, kept for the token check
    source: Arc<dyn ArtifactSource>,

    /// Artifact fetcher
    fetcher: Fetcher,
}

impl ModelBootstrap {
    /// Creates a bootstrap backed by the real hub
    pub fn new(config: BootstrapConfig) -> common::Result<Self> {
        let client = HubClient::new(&config.hub_endpoint, config.hf_token.clone())?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Creates a bootstrap over an arbitrary artifact source
    pub fn with_source(config: BootstrapConfig, source: Arc<dyn ArtifactSource>) -> Self {
        let fetcher = Fetcher::new(source.clone(), config.models_dir());
        Self {
            config,
            source,
            fetcher,
        }
    }

    /// Returns the configuration the bootstrap runs with
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Checks the configured token with the source, if one is set
    ///
    /// Returns the account name on success. A token that fails the check
    /// is logged as a warning and the run proceeds with it anyway; the
    /// gated download itself is the authoritative rejection point.
    pub async fn login(&self) -> Option<String> {
        if !self.config.has_token() {
            info!("HF_TOKEN not set — gated models (FLUX.1-dev) will be skipped");
            return None;
        }

        match self.source.check_token().await {
            Ok(account) => {
                info!("Logged in to the hub as {}", account);
                Some(account)
            }
            Err(e) => {
                warn!("Token check failed ({}); gated downloads may be rejected", e);
                None
            }
        }
    }

    /// Runs the full catalog sequentially
    ///
    /// Every fetch completes before the next begins. Gated groups are
    /// skipped entirely when no token is configured; per-artifact failures
    /// are tallied and the run always reaches the end of the catalog.
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::default();

        for group in catalog() {
            info!("── {} ──", group.title);

            if group.gated && !self.config.has_token() {
                warn!(
                    "Skipped {} — set HF_TOKEN and accept the license at {}",
                    group.title, FLUX1_DEV_LICENSE_URL
                );
                report.skipped += group.artifacts.len();
                continue;
            }

            for spec in &group.artifacts {
                match self.fetcher.ensure_local(spec).await {
                    FetchOutcome::AlreadyPresent => report.already_present += 1,
                    FetchOutcome::Downloaded { .. } => report.downloaded += 1,
                    FetchOutcome::Failed { .. } => report.failed += 1,
                }
            }
        }

        info!(
            downloaded = report.downloaded,
            already_present = report.already_present,
            failed = report.failed,
            skipped = report.skipped,
            "Catalog run finished"
        );

        report
    }
}

/// Initializes logging
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}
