//! Configuration management for the model bootstrap
//!
//! This crate reads the bootstrap configuration from environment variables:
//!
//! - `COMFYUI_DIR`  path to the ComfyUI root (default `/workspace/ComfyUI`)
//! - `HF_TOKEN`     HuggingFace access token, required only for gated models
//! - `HF_ENDPOINT`  hub base URL override (default `https://huggingface.co`)
//!
//! An unset or empty `HF_TOKEN` disables gated artifacts rather than
//! erroring; the run skips them with an instructional message.

use std::path::PathBuf;

use tracing::debug;

/// Default ComfyUI root when `COMFYUI_DIR` is not set
pub const DEFAULT_COMFYUI_DIR: &str = "/workspace/ComfyUI";

/// Default hub endpoint when `HF_ENDPOINT` is not set
pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";

/// Bootstrap configuration, read once at startup
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// ComfyUI root directory
    pub comfyui_dir: PathBuf,

    /// Optional hub access token for gated models
    pub hf_token: Option<String>,

    /// Hub base URL
    pub hub_endpoint: String,
}

impl BootstrapConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    ///
    /// Used by tests to stay independent of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let comfyui_dir = lookup("COMFYUI_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMFYUI_DIR));

        // An empty token counts as unset
        let hf_token = lookup("HF_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let hub_endpoint = lookup("HF_ENDPOINT")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HUB_ENDPOINT.to_string());

        debug!(
            comfyui_dir = %comfyui_dir.display(),
            token_configured = hf_token.is_some(),
            endpoint = %hub_endpoint,
            "Loaded bootstrap configuration"
        );

        Self {
            comfyui_dir,
            hf_token,
            hub_endpoint,
        }
    }

    /// Returns the models directory under the ComfyUI root
    pub fn models_dir(&self) -> PathBuf {
        self.comfyui_dir.join("models")
    }

    /// Returns true if a hub token is configured
    pub fn has_token(&self) -> bool {
        self.hf_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = BootstrapConfig::from_lookup(|_| None);

        assert_eq!(config.comfyui_dir, PathBuf::from(DEFAULT_COMFYUI_DIR));
        assert_eq!(config.hub_endpoint, DEFAULT_HUB_ENDPOINT);
        assert!(!config.has_token());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = BootstrapConfig::from_lookup(|key| match key {
            "COMFYUI_DIR" => Some("/srv/comfy".to_string()),
            "HF_TOKEN" => Some("hf_abc123".to_string()),
            "HF_ENDPOINT" => Some("http://127.0.0.1:9000/".to_string()),
            _ => None,
        });

        assert_eq!(config.comfyui_dir, PathBuf::from("/srv/comfy"));
        assert_eq!(config.models_dir(), PathBuf::from("/srv/comfy/models"));
        assert_eq!(config.hf_token.as_deref(), Some("hf_abc123"));
        assert_eq!(config.hub_endpoint, "http://127.0.0.1:9000");
    }

    #[test]
    fn empty_token_counts_as_unset() {
        let config = BootstrapConfig::from_lookup(|key| match key {
            "HF_TOKEN" => Some("   ".to_string()),
            _ => None,
        });

        assert!(!config.has_token());
    }
}
