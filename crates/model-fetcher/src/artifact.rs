//! Artifact descriptions
//!
//! An [`ArtifactSpec`] names one downloadable file: where it lives on the
//! hub and where it must end up under the local models directory. Specs are
//! compile-time literals in the catalog; they carry no runtime state.

use std::path::{Path, PathBuf};

/// Subdirectory for full checkpoints
pub const CHECKPOINTS: &str = "checkpoints";

/// Subdirectory for VAEs
pub const VAE: &str = "vae";

/// Subdirectory for text encoders
pub const TEXT_ENCODERS: &str = "text_encoders";

/// Subdirectory for diffusion models
pub const DIFFUSION_MODELS: &str = "diffusion_models";

/// Describes one downloadable model file
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    /// Hub repo holding the file
    pub repo_id: String,

    /// Path of the file within the repo
    pub repo_path: String,

    /// Destination subdirectory under the models root
    pub subdir: String,

    /// Local filename override; defaults to the last segment of `repo_path`
    pub dest_name: Option<String>,
}

impl ArtifactSpec {
    /// Creates a new artifact spec with the default destination name
    pub fn new(repo_id: &str, repo_path: &str, subdir: &str) -> Self {
        Self {
            repo_id: repo_id.to_string(),
            repo_path: repo_path.to_string(),
            subdir: subdir.to_string(),
            dest_name: None,
        }
    }

    /// Overrides the local filename
    pub fn with_dest_name(mut self, dest_name: &str) -> Self {
        self.dest_name = Some(dest_name.to_string());
        self
    }

    /// Returns the local filename the artifact lands under
    pub fn file_name(&self) -> &str {
        match &self.dest_name {
            Some(name) => name,
            None => self
                .repo_path
                .rsplit('/')
                .next()
                .unwrap_or(&self.repo_path),
        }
    }

    /// Resolves the destination path under a models root
    ///
    /// `models_dir / subdir / file_name` uniquely determines on-disk
    /// identity; two specs resolving to the same path are the same file.
    pub fn dest_path(&self, models_dir: &Path) -> PathBuf {
        models_dir.join(&self.subdir).join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_is_last_path_segment() {
        let spec = ArtifactSpec::new(
            "Comfy-Org/vae-text-encorder-for-flux-klein-4b",
            "split_files/vae/flux2-vae.safetensors",
            VAE,
        );
        assert_eq!(spec.file_name(), "flux2-vae.safetensors");
    }

    #[test]
    fn default_name_handles_bare_filenames() {
        let spec = ArtifactSpec::new(
            "stable-diffusion-v1-5/stable-diffusion-v1-5",
            "v1-5-pruned-emaonly.safetensors",
            CHECKPOINTS,
        );
        assert_eq!(spec.file_name(), "v1-5-pruned-emaonly.safetensors");
    }

    #[test]
    fn dest_name_overrides_the_default() {
        let spec = ArtifactSpec::new("black-forest-labs/FLUX.1-schnell", "ae.safetensors", VAE)
            .with_dest_name("flux1-ae.safetensors");
        assert_eq!(spec.file_name(), "flux1-ae.safetensors");
    }

    #[test]
    fn dest_path_joins_root_subdir_and_name() {
        let spec = ArtifactSpec::new("repo/x", "a/b/model.safetensors", DIFFUSION_MODELS);
        assert_eq!(
            spec.dest_path(Path::new("/workspace/ComfyUI/models")),
            PathBuf::from("/workspace/ComfyUI/models/diffusion_models/model.safetensors")
        );
    }
}
