// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lani hybrid router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages. Every field
//! has a compiled-in default so an empty config file is valid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level Lani configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LaniConfig {
    /// Complexity scoring and routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Cost estimation settings.
    #[serde(default)]
    pub cost: CostConfig,

    /// Rolling query history settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Complexity scoring and routing configuration.
///
/// Controls the signals the scorer combines into a [0, 1] complexity score
/// and the threshold at which queries are routed to the cloud backend. The
/// keyword table is a `BTreeMap` so the signal breakdown is produced in a
/// deterministic order regardless of how the table was written.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Score at or above which a query routes to the cloud backend (0.0-1.0).
    /// The comparison is inclusive on the cloud side.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Case-insensitive substring phrases mapped to additive weight
    /// contributions. Multiple matches accumulate.
    #[serde(default = "default_keyword_weights")]
    pub keyword_weights: BTreeMap<String, f64>,

    /// Maximum contribution of the length signal.
    #[serde(default = "default_length_weight")]
    pub length_weight: f64,

    /// Word count at which the length signal saturates.
    #[serde(default = "default_length_saturation_point")]
    pub length_saturation_point: usize,

    /// Contribution of the first question mark and of each additional one.
    #[serde(default = "default_question_weight")]
    pub question_weight: f64,

    /// Contribution added once when any request phrase matches.
    #[serde(default = "default_request_weight")]
    pub request_weight: f64,

    /// Phrases that signal a request for enumeration or step-by-step detail.
    #[serde(default = "default_request_phrases")]
    pub request_phrases: Vec<String>,

    /// Identifier of the local backend decisions name.
    #[serde(default = "default_local_backend_id")]
    pub local_backend_id: String,

    /// Identifier of the cloud backend decisions name.
    #[serde(default = "default_cloud_backend_id")]
    pub cloud_backend_id: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            keyword_weights: default_keyword_weights(),
            length_weight: default_length_weight(),
            length_saturation_point: default_length_saturation_point(),
            question_weight: default_question_weight(),
            request_weight: default_request_weight(),
            request_phrases: default_request_phrases(),
            local_backend_id: default_local_backend_id(),
            cloud_backend_id: default_cloud_backend_id(),
        }
    }
}

fn default_threshold() -> f64 {
    0.6
}

fn default_keyword_weights() -> BTreeMap<String, f64> {
    [
        ("analyze deeply", 0.3),
        ("comprehensive analysis", 0.3),
        ("compare and contrast", 0.25),
        ("critically evaluate", 0.25),
        ("detailed explanation", 0.2),
        ("strategic planning", 0.2),
        ("analyze", 0.2),
        ("implications", 0.2),
        ("compliance", 0.2),
        ("compare", 0.15),
        ("evaluate", 0.15),
        ("complex", 0.15),
        ("explain", 0.1),
        ("multiple", 0.1),
        ("various", 0.1),
    ]
    .into_iter()
    .map(|(k, w)| (k.to_string(), w))
    .collect()
}

fn default_length_weight() -> f64 {
    0.3
}

fn default_length_saturation_point() -> usize {
    100
}

fn default_question_weight() -> f64 {
    0.1
}

fn default_request_weight() -> f64 {
    0.15
}

fn default_request_phrases() -> Vec<String> {
    [
        "step by step",
        "step-by-step",
        "list the steps",
        "explain in detail",
        "walk me through",
        "examples",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_local_backend_id() -> String {
    "deepseek-r1:7b".to_string()
}

fn default_cloud_backend_id() -> String {
    "claude-sonnet-4-20250514".to_string()
}

/// Cost estimation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CostConfig {
    /// Assumed average per-query cost if every query went to the cloud.
    /// Used for the estimated-savings figure in history summaries.
    #[serde(default = "default_baseline_cloud_cost_usd")]
    pub baseline_cloud_cost_usd: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            baseline_cloud_cost_usd: default_baseline_cloud_cost_usd(),
        }
    }
}

fn default_baseline_cloud_cost_usd() -> f64 {
    0.005
}

/// Rolling query history configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Number of most recent entries retained in the rolling window.
    /// Running totals are not affected by eviction.
    #[serde(default = "default_history_window")]
    pub window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window: default_history_window(),
        }
    }
}

fn default_history_window() -> usize {
    50
}
