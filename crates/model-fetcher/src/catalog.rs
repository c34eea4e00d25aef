//! The fixed artifact catalog
//!
//! Ordered groups of artifacts, one group per logical model. Shared files
//! (the FLUX text encoders, the FLUX.2 Klein VAE, the Qwen VAE and text
//! encoder) are declared in the first group that needs them and reused by
//! later models without re-declaration; the presence check makes a repeat
//! declaration harmless but the catalog avoids them anyway.
//!
//! Group order matters only for readability of the run log; there is no
//! dependency between artifacts.

use crate::artifact::{ArtifactSpec, CHECKPOINTS, DIFFUSION_MODELS, TEXT_ENCODERS, VAE};

/// License page that must be accepted before FLUX.1-dev can be fetched
pub const FLUX1_DEV_LICENSE_URL: &str = "https://huggingface.co/black-forest-labs/FLUX.1-dev";

/// One logical model's worth of artifacts
#[derive(Debug, Clone)]
pub struct ModelGroup {
    /// Human-readable group title
    pub title: &'static str,

    /// Whether the group needs an authenticated, license-accepted token
    pub gated: bool,

    /// Artifacts in fetch order
    pub artifacts: Vec<ArtifactSpec>,
}

impl ModelGroup {
    fn new(title: &'static str, artifacts: Vec<ArtifactSpec>) -> Self {
        Self {
            title,
            gated: false,
            artifacts,
        }
    }

    fn gated(title: &'static str, artifacts: Vec<ArtifactSpec>) -> Self {
        Self {
            title,
            gated: true,
            artifacts,
        }
    }
}

/// Returns the full catalog in fetch order
pub fn catalog() -> Vec<ModelGroup> {
    vec![
        ModelGroup::new(
            "Stable Diffusion 1.5",
            vec![ArtifactSpec::new(
                "stable-diffusion-v1-5/stable-diffusion-v1-5",
                "v1-5-pruned-emaonly.safetensors",
                CHECKPOINTS,
            )],
        ),
        ModelGroup::new(
            "Stable Diffusion XL",
            vec![
                ArtifactSpec::new(
                    "stabilityai/stable-diffusion-xl-base-1.0",
                    "sd_xl_base_1.0.safetensors",
                    CHECKPOINTS,
                ),
                // fp16-fixed VAE prevents the washed-out color issue with SDXL
                ArtifactSpec::new(
                    "madebyollin/sdxl-vae-fp16-fix",
                    "sdxl_vae.safetensors",
                    VAE,
                ),
            ],
        ),
        ModelGroup::new(
            "FLUX.1 shared text encoders + VAE",
            vec![
                // clip_l and t5xxl are also used by FLUX.2 Klein
                ArtifactSpec::new(
                    "comfyanonymous/flux_text_encoders",
                    "clip_l.safetensors",
                    TEXT_ENCODERS,
                ),
                ArtifactSpec::new(
                    "comfyanonymous/flux_text_encoders",
                    "t5xxl_fp8_e4m3fn.safetensors",
                    TEXT_ENCODERS,
                ),
                // The FLUX VAE ships with FLUX.1-schnell (Apache 2.0, no auth)
                ArtifactSpec::new(
                    "black-forest-labs/FLUX.1-schnell",
                    "ae.safetensors",
                    VAE,
                )
                .with_dest_name("flux1-ae.safetensors"),
            ],
        ),
        ModelGroup::gated(
            "FLUX.1-dev diffusion model",
            vec![ArtifactSpec::new(
                "black-forest-labs/FLUX.1-dev",
                "flux1-dev.safetensors",
                DIFFUSION_MODELS,
            )],
        ),
        ModelGroup::new(
            "FLUX.2 Klein shared VAE",
            vec![
                // flux2-vae differs from the FLUX.1 ae; shared by Klein 4B + 9B
                ArtifactSpec::new(
                    "Comfy-Org/vae-text-encorder-for-flux-klein-4b",
                    "split_files/vae/flux2-vae.safetensors",
                    VAE,
                )
                .with_dest_name("flux2-vae.safetensors"),
            ],
        ),
        ModelGroup::new(
            "FLUX.2 Klein 4B (fp8)",
            vec![
                ArtifactSpec::new(
                    "Comfy-Org/vae-text-encorder-for-flux-klein-4b",
                    "split_files/text_encoders/qwen_3_4b.safetensors",
                    TEXT_ENCODERS,
                )
                .with_dest_name("qwen_3_4b.safetensors"),
                ArtifactSpec::new(
                    "black-forest-labs/FLUX.2-klein-4b-fp8",
                    "flux-2-klein-4b-fp8.safetensors",
                    DIFFUSION_MODELS,
                ),
            ],
        ),
        ModelGroup::new(
            "FLUX.2 Klein 9B (fp8)",
            vec![
                ArtifactSpec::new(
                    "Comfy-Org/vae-text-encorder-for-flux-klein-9b",
                    "split_files/text_encoders/qwen_3_8b_fp8mixed.safetensors",
                    TEXT_ENCODERS,
                )
                .with_dest_name("qwen_3_8b_fp8mixed.safetensors"),
                ArtifactSpec::new(
                    "black-forest-labs/FLUX.2-klein-9b-fp8",
                    "flux-2-klein-9b-fp8.safetensors",
                    DIFFUSION_MODELS,
                ),
            ],
        ),
        ModelGroup::new(
            "Qwen Image shared VAE + text encoder",
            vec![
                // Shared with Qwen Image Edit 2509
                ArtifactSpec::new(
                    "Comfy-Org/Qwen-Image_ComfyUI",
                    "split_files/vae/qwen_image_vae.safetensors",
                    VAE,
                )
                .with_dest_name("qwen_image_vae.safetensors"),
                ArtifactSpec::new(
                    "Comfy-Org/Qwen-Image_ComfyUI",
                    "split_files/text_encoders/qwen_2.5_vl_7b_fp8_scaled.safetensors",
                    TEXT_ENCODERS,
                )
                .with_dest_name("qwen_2.5_vl_7b_fp8_scaled.safetensors"),
            ],
        ),
        ModelGroup::new(
            "Qwen Image base generation model",
            vec![ArtifactSpec::new(
                "Comfy-Org/Qwen-Image_ComfyUI",
                "split_files/diffusion_models/qwen_image_fp8_e4m3fn.safetensors",
                DIFFUSION_MODELS,
            )
            .with_dest_name("qwen_image_fp8_e4m3fn.safetensors")],
        ),
        ModelGroup::new(
            "Qwen Image Edit 2509",
            vec![ArtifactSpec::new(
                "Comfy-Org/Qwen-Image-Edit_ComfyUI",
                "split_files/diffusion_models/qwen_image_edit_2509_fp8_e4m3fn.safetensors",
                DIFFUSION_MODELS,
            )
            .with_dest_name("qwen_image_edit_2509_fp8_e4m3fn.safetensors")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn only_the_flux1_dev_group_is_gated() {
        let gated: Vec<&str> = catalog()
            .iter()
            .filter(|g| g.gated)
            .map(|g| g.title)
            .collect();
        assert_eq!(gated, vec!["FLUX.1-dev diffusion model"]);
    }

    #[test]
    fn shared_artifacts_are_declared_exactly_once() {
        let root = Path::new("/models");
        let mut seen = HashSet::new();
        for group in catalog() {
            for spec in &group.artifacts {
                assert!(
                    seen.insert(spec.dest_path(root)),
                    "duplicate destination: {}",
                    spec.dest_path(root).display()
                );
            }
        }
    }

    #[test]
    fn every_artifact_lands_in_a_known_subdir() {
        let known = [CHECKPOINTS, VAE, TEXT_ENCODERS, DIFFUSION_MODELS];
        for group in catalog() {
            for spec in &group.artifacts {
                assert!(known.contains(&spec.subdir.as_str()), "{}", spec.subdir);
            }
        }
    }
}
