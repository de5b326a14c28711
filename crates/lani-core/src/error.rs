// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lani hybrid router.

use thiserror::Error;

/// The primary error type used across Lani crates.
///
/// Scoring and routing on validated configuration are total functions and
/// never fail; errors arise only from configuration loading and from
/// backend execution.
#[derive(Debug, Error)]
pub enum LaniError {
    /// Configuration errors (invalid TOML, out-of-range threshold, negative weights).
    #[error("configuration error: {0}")]
    Config(String),

    /// Model backend errors (connection failure, API error, timeout).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
