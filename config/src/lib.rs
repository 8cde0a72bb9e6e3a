//! # Config Crate
//!
//! Centralized configuration constants for procedural mesh generation.
//! All safety limits and tunable parameters are defined here so the mesh
//! generators and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, GlobalConfig, MAX_VERTICES};
//!
//! // Float comparisons share one tolerance
//! assert!(approx_equal(1.0, 1.0 + 1e-12));
//!
//! // Generators validate buffer sizes against the configured limit
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.max_vertices, MAX_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` rejects unusable limits up front
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
