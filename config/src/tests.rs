//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(
        EPSILON_TOLERANCE < 1e-6,
        "EPSILON_TOLERANCE should be small for precision"
    );
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON_TOLERANCE / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON_TOLERANCE * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON_TOLERANCE / 2.0;
    assert!(approx_zero(0.0));
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-1.0));
    assert!(!approx_zero(0.1));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_reasonable() {
    // Should allow dense subdivisions but prevent memory exhaustion
    assert!(MAX_VERTICES >= 1_000_000);
    assert!(MAX_VERTICES <= u32::MAX as usize);
}

#[test]
fn test_max_indices_covers_vertex_limit() {
    assert!(MAX_INDICES >= MAX_VERTICES);
}

#[test]
fn test_parallel_threshold_below_vertex_limit() {
    assert!(PARALLEL_PLACEMENT_THRESHOLD < MAX_VERTICES);
}
