//! Centralized configuration values shared across the mesh generation
//! workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated coordinates.
///
/// Generated lattice positions are integers, and rounded positions come from a
/// single normalize-and-scale, so errors stay far below this bound.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Checks if two f64 values are approximately equal within
/// [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_TOLERANCE
}

/// Checks if a f64 value is approximately zero within [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single generated mesh may hold.
///
/// Subdivision counts grow the buffers quadratically, so requests are checked
/// against this bound before any allocation happens.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES >= 1_000_000);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangle indices a single generated mesh may hold.
///
/// # Examples
/// ```
/// use config::constants::{MAX_INDICES, MAX_VERTICES};
/// assert!(MAX_INDICES >= MAX_VERTICES);
/// ```
pub const MAX_INDICES: usize = 60_000_000;

// =============================================================================
// PARALLELISM CONSTANTS
// =============================================================================

/// Vertex count above which rounded vertex placement is spread over the
/// rayon thread pool.
///
/// Below this size the sequential loop is faster than the pool hand-off.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_PLACEMENT_THRESHOLD;
/// assert!(PARALLEL_PLACEMENT_THRESHOLD > 0);
/// ```
pub const PARALLEL_PLACEMENT_THRESHOLD: usize = 16_384;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance used by geometry checks.
    pub tolerance: f64,
    /// Upper bound on generated vertex buffers.
    pub max_vertices: usize,
    /// Vertex count above which placement runs in parallel.
    pub parallel_threshold: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// The vertex limit must be positive and small enough for every vertex to
    /// be addressed by a `u32` index.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1_000, 256).expect("valid config");
    /// assert_eq!(cfg.max_vertices, 1_000);
    /// ```
    pub fn new(
        tolerance: f64,
        max_vertices: usize,
        parallel_threshold: usize,
    ) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_vertices == 0 || max_vertices > u32::MAX as usize {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            tolerance,
            max_vertices,
            parallel_threshold,
        })
    }

    /// Returns the maximum index buffer length implied by this configuration.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{GlobalConfig, MAX_INDICES};
    /// assert_eq!(GlobalConfig::default().max_indices(), MAX_INDICES);
    /// ```
    pub fn max_indices(&self) -> usize {
        self.max_vertices.saturating_mul(6).min(MAX_INDICES)
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_vertices: MAX_VERTICES,
            parallel_threshold: PARALLEL_PLACEMENT_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the vertex limit is zero or exceeds the `u32` index range.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be in 1..={}: {value}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
