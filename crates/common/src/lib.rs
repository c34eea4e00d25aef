//! Common utilities and types for the model bootstrap
//!
//! This crate provides shared functionality used across the bootstrap,
//! including the error type and byte-formatting helpers.

pub mod error;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, Result};
