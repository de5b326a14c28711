// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. Validation runs exactly once, at load time: the scorer and
//! router assume a validated configuration and are total functions over it.

use crate::diagnostic::ConfigError;
use crate::model::LaniConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LaniConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let routing = &config.routing;

    if !routing.threshold.is_finite() || !(0.0..=1.0).contains(&routing.threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.threshold must be within [0.0, 1.0], got {}",
                routing.threshold
            ),
        });
    }

    for (phrase, weight) in &routing.keyword_weights {
        if phrase.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "routing.keyword_weights contains an empty phrase".to_string(),
            });
        }
        if !weight.is_finite() || *weight < 0.0 {
            errors.push(ConfigError::Validation {
                message: format!(
                    "routing.keyword_weights[`{phrase}`] must be a non-negative finite number, got {weight}"
                ),
            });
        }
    }

    for (name, weight) in [
        ("routing.length_weight", routing.length_weight),
        ("routing.question_weight", routing.question_weight),
        ("routing.request_weight", routing.request_weight),
    ] {
        if !weight.is_finite() || weight < 0.0 {
            errors.push(ConfigError::Validation {
                message: format!("{name} must be a non-negative finite number, got {weight}"),
            });
        }
    }

    if routing.length_saturation_point == 0 {
        errors.push(ConfigError::Validation {
            message: "routing.length_saturation_point must be at least 1".to_string(),
        });
    }

    for phrase in &routing.request_phrases {
        if phrase.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "routing.request_phrases contains an empty phrase".to_string(),
            });
        }
    }

    if routing.local_backend_id.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "routing.local_backend_id must not be empty".to_string(),
        });
    }

    if routing.cloud_backend_id.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "routing.cloud_backend_id must not be empty".to_string(),
        });
    }

    let baseline = config.cost.baseline_cloud_cost_usd;
    if !baseline.is_finite() || baseline < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "cost.baseline_cloud_cost_usd must be non-negative, got {baseline}"
            ),
        });
    }

    if config.history.window == 0 {
        errors.push(ConfigError::Validation {
            message: "history.window must be at least 1".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
