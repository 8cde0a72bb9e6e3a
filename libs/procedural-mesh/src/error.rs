//! # Mesh Errors
//!
//! Error types for mesh generation.
//!
//! ## Error Policy
//!
//! - Invalid requests are rejected before any buffer is allocated
//! - Internal count or index mismatches are reported, never truncated
//! - Errors carry the offending values for debugging

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A subdivision count was zero.
    #[error("Invalid dimensions: {axis} size must be at least 1")]
    InvalidDimensions { axis: char },

    /// Rounding radius larger than half the smallest dimension.
    #[error("Roundness {roundness} exceeds the maximum of {max} for these dimensions")]
    RoundnessTooLarge { roundness: u32, max: u32 },

    /// The configuration snapshot was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many indices
    #[error("Too many indices: {count} (max: {max})")]
    TooManyIndices { count: usize, max: usize },

    /// The builder produced buffers that disagree with the closed-form layout.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
