pub mod config;
pub mod yaml_include;

/// Common utilities shared across the review monitoring workspace
///
/// This crate provides shared functionality used by the `detection` and
/// `monitor` crates:
///
/// - Configuration loading and YAML include merging
/// - Shared review fixtures for tests

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export commonly used test fixtures for easier access
#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{
    BALANCED_REVIEW, HYPE_REVIEW, PROMO_REVIEW, SHORT_REVIEW, repetitive_review,
};
