// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Threshold routing with manual overrides.
//!
//! Converts a complexity score into a binary local/cloud decision.
//! Priority order: caller override > threshold comparison. The score is
//! computed and recorded either way so audit trails stay complete.

use serde::Serialize;
use tracing::debug;

use lani_config::RoutingConfig;
use lani_core::{DecisionMode, Route};

use crate::scorer::{ComplexityScorer, Signal};

/// The recorded outcome of routing one query.
///
/// Created once per query and never mutated; hand it off to logging,
/// metrics, or history collaborators as-is.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    /// The originating query text.
    pub query: String,
    /// Computed complexity score in [0.0, 1.0]. Recorded even when the
    /// decision was overridden.
    pub score: f64,
    /// The selected routing target.
    pub route: Route,
    /// Identifier of the backend the route maps to.
    pub backend_id: String,
    /// Whether the decision came from scoring or a manual override.
    pub mode: DecisionMode,
    /// The threshold in effect when the decision was made.
    pub threshold: f64,
    /// The signals that contributed to the score.
    pub signals: Vec<Signal>,
}

/// Routes queries between a local and a cloud backend.
///
/// Pure over its configuration snapshot: no shared mutable state, no I/O,
/// safe to call concurrently. Construct one router per configuration
/// snapshot; hot reloads build a new router over the new snapshot.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    scorer: ComplexityScorer,
}

impl QueryRouter {
    /// Create a router over the given (validated) routing configuration.
    pub fn new(config: RoutingConfig) -> Self {
        Self {
            scorer: ComplexityScorer::new(config),
        }
    }

    /// Route a query by its complexity score.
    ///
    /// `score < threshold` routes local; `score >= threshold` routes cloud.
    /// The comparison is inclusive on the cloud side: a score exactly equal
    /// to the threshold routes to the cloud.
    pub fn route(&self, query: &str) -> RoutingDecision {
        self.route_with_override(query, None)
    }

    /// Route a query, optionally forcing the target.
    ///
    /// When `forced` is given, it takes precedence over the threshold and
    /// the decision is marked [`DecisionMode::Override`]; the complexity
    /// score is still computed and recorded for audit. Never fails on valid
    /// (possibly empty) input.
    pub fn route_with_override(&self, query: &str, forced: Option<Route>) -> RoutingDecision {
        let breakdown = self.scorer.score(query);
        let config = self.scorer.config();

        let (route, mode) = match forced {
            Some(route) => (route, DecisionMode::Override),
            None => {
                let route = if breakdown.score >= config.threshold {
                    Route::Cloud
                } else {
                    Route::Local
                };
                (route, DecisionMode::Scored)
            }
        };

        let backend_id = match route {
            Route::Local => config.local_backend_id.clone(),
            Route::Cloud => config.cloud_backend_id.clone(),
        };

        debug!(
            score = breakdown.score,
            threshold = config.threshold,
            route = %route,
            mode = %mode,
            "routing decision"
        );

        RoutingDecision {
            query: query.to_string(),
            score: breakdown.score,
            route,
            backend_id,
            mode,
            threshold: config.threshold,
            signals: breakdown.signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn router() -> QueryRouter {
        QueryRouter::new(RoutingConfig::default())
    }

    /// A config whose only signal is a single keyword with an exact weight,
    /// for engineering precise scores.
    fn keyword_only_config(phrase: &str, weight: f64, threshold: f64) -> RoutingConfig {
        RoutingConfig {
            threshold,
            keyword_weights: BTreeMap::from([(phrase.to_string(), weight)]),
            length_weight: 0.0,
            question_weight: 0.0,
            request_weight: 0.0,
            ..RoutingConfig::default()
        }
    }

    #[test]
    fn simple_query_routes_local() {
        let decision = router().route("What is HIPAA?");
        assert_eq!(decision.route, Route::Local);
        assert_eq!(decision.mode, DecisionMode::Scored);
        assert_eq!(decision.backend_id, "deepseek-r1:7b");
    }

    #[test]
    fn complex_query_routes_cloud() {
        let decision = router().route(
            "Analyze the legal implications of using AI for patient diagnosis in Hawaii, \
             considering HIPAA compliance, malpractice liability, and state regulations.",
        );
        assert_eq!(decision.route, Route::Cloud);
        assert_eq!(decision.mode, DecisionMode::Scored);
        assert_eq!(decision.backend_id, "claude-sonnet-4-20250514");
    }

    #[test]
    fn empty_query_routes_local_with_zero_score() {
        let decision = router().route("");
        assert_eq!(decision.score, 0.0);
        assert_eq!(decision.route, Route::Local);
        assert!(decision.signals.is_empty());
    }

    #[test]
    fn score_exactly_at_threshold_routes_cloud() {
        // Engineered so the score is exactly the threshold: one keyword,
        // weight 0.6, every other signal weight zero.
        let router = QueryRouter::new(keyword_only_config("frobnicate", 0.6, 0.6));
        let decision = router.route("frobnicate");
        assert_eq!(decision.score, 0.6);
        assert_eq!(
            decision.route,
            Route::Cloud,
            "threshold comparison must be inclusive on the cloud side"
        );
    }

    #[test]
    fn score_just_below_threshold_routes_local() {
        let router = QueryRouter::new(keyword_only_config("frobnicate", 0.59, 0.6));
        let decision = router.route("frobnicate");
        assert_eq!(decision.route, Route::Local);
    }

    #[test]
    fn override_takes_precedence_over_score() {
        let decision = router().route_with_override("What is HIPAA?", Some(Route::Cloud));
        assert_eq!(decision.route, Route::Cloud);
        assert_eq!(decision.mode, DecisionMode::Override);
        // The computed score is still recorded for audit.
        assert!(decision.score > 0.1 && decision.score < 0.25);
    }

    #[test]
    fn override_to_local_on_complex_query() {
        let decision = router().route_with_override(
            "Analyze the implications of compliance requirements in detail.",
            Some(Route::Local),
        );
        assert_eq!(decision.route, Route::Local);
        assert_eq!(decision.mode, DecisionMode::Override);
        assert_eq!(decision.backend_id, "deepseek-r1:7b");
    }

    #[test]
    fn no_override_is_marked_scored() {
        let decision = router().route_with_override("hello there", None);
        assert_eq!(decision.mode, DecisionMode::Scored);
    }

    #[test]
    fn decision_carries_threshold_and_query() {
        let decision = router().route("some query");
        assert!((decision.threshold - 0.6).abs() < f64::EPSILON);
        assert_eq!(decision.query, "some query");
    }

    #[test]
    fn custom_backend_ids_flow_into_decision() {
        let config = RoutingConfig {
            local_backend_id: "llama3:8b".to_string(),
            cloud_backend_id: "gpt-4o".to_string(),
            ..RoutingConfig::default()
        };
        let router = QueryRouter::new(config);
        let local = router.route("hi");
        assert_eq!(local.backend_id, "llama3:8b");
        let cloud = router.route_with_override("hi", Some(Route::Cloud));
        assert_eq!(cloud.backend_id, "gpt-4o");
    }

    #[test]
    fn threshold_zero_routes_everything_cloud() {
        let config = RoutingConfig {
            threshold: 0.0,
            ..RoutingConfig::default()
        };
        let router = QueryRouter::new(config);
        // Even an empty query scores 0.0 >= 0.0 and routes cloud.
        assert_eq!(router.route("").route, Route::Cloud);
        assert_eq!(router.route("hi").route, Route::Cloud);
    }
}
