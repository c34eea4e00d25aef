//! Artifact fetching for the model bootstrap
//!
//! This crate provides the idempotent fetch routine at the center of the
//! bootstrap, the fixed catalog of model artifacts it is run against, and
//! the final on-disk inventory report.

pub mod artifact;
pub mod catalog;
pub mod fetcher;
pub mod inventory;

// Re-export commonly used types
pub use artifact::ArtifactSpec;
pub use catalog::{catalog, ModelGroup};
pub use fetcher::{FetchOutcome, Fetcher};
pub use inventory::Inventory;
