// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic query complexity scoring.
//!
//! Maps a query string to a [0, 1] complexity score from a small set of
//! interpretable signals, so a non-expert can audit why a query was
//! classified as simple or complex. Zero cost, zero latency: no LLM
//! pre-call, no network, no wall clock, no state from previous queries.
//! Identical (query, config) pairs always produce an identical score and
//! an identical signal breakdown.

use serde::Serialize;
use strum::Display;

use lani_config::RoutingConfig;

/// The kind of signal that contributed to a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Word-count signal, saturating at the configured maximum.
    Length,
    /// A configured keyword or phrase matched the query.
    Keyword,
    /// Question-mark count.
    Questions,
    /// The query asks for enumeration or step-by-step detail.
    Request,
}

/// One signal's contribution to a score, kept for audit/explainability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    /// Which signal fired.
    pub kind: SignalKind,
    /// Human-readable detail, e.g. the matched phrase or the word count.
    pub detail: String,
    /// The weight this signal added to the raw sum.
    pub weight: f64,
}

/// A computed complexity score with its contributing signals.
///
/// The score is the clamped sum of the signal weights; the signal list
/// records pre-clamp contributions in a deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Complexity score in [0.0, 1.0]. Never NaN.
    pub score: f64,
    /// The signals that contributed, in signal order (length, keywords,
    /// questions, request).
    pub signals: Vec<Signal>,
}

/// Heuristic complexity scorer over a fixed configuration snapshot.
///
/// Pure and stateless: safe to call concurrently from any number of
/// parallel callers. Assumes the configuration passed in was validated at
/// load time (non-negative finite weights, saturation point >= 1).
#[derive(Debug, Clone)]
pub struct ComplexityScorer {
    config: RoutingConfig,
}

impl ComplexityScorer {
    /// Create a scorer over the given routing configuration.
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Score a query's complexity.
    ///
    /// Total function: every input string maps to exactly one score in
    /// [0.0, 1.0]. Empty or whitespace-only input scores exactly 0.0 with
    /// no signals recorded.
    pub fn score(&self, query: &str) -> ScoreBreakdown {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return ScoreBreakdown {
                score: 0.0,
                signals: Vec::new(),
            };
        }

        let mut signals = Vec::new();
        let lower = trimmed.to_lowercase();

        // Signal 1: length, saturating at the configured word count.
        let word_count = trimmed.split_whitespace().count();
        let length_weight = self.length_contribution(word_count);
        if length_weight > 0.0 {
            signals.push(Signal {
                kind: SignalKind::Length,
                detail: format!("{word_count} words"),
                weight: length_weight,
            });
        }

        // Signal 2: keyword matches accumulate (sum, not max). BTreeMap
        // iteration keeps the breakdown order deterministic.
        for (phrase, weight) in &self.config.keyword_weights {
            if *weight > 0.0 && lower.contains(&phrase.to_lowercase()) {
                signals.push(Signal {
                    kind: SignalKind::Keyword,
                    detail: phrase.clone(),
                    weight: *weight,
                });
            }
        }

        // Signal 3: question marks. The first counts once, each additional
        // one adds the same increment.
        let question_count = trimmed.chars().filter(|c| *c == '?').count();
        if question_count > 0 && self.config.question_weight > 0.0 {
            signals.push(Signal {
                kind: SignalKind::Questions,
                detail: if question_count == 1 {
                    "1 question".to_string()
                } else {
                    format!("{question_count} questions")
                },
                weight: self.config.question_weight * question_count as f64,
            });
        }

        // Signal 4: request for enumeration / step-by-step detail adds a
        // fixed increment once, however many phrases match.
        if self.config.request_weight > 0.0 {
            if let Some(phrase) = self
                .config
                .request_phrases
                .iter()
                .find(|p| lower.contains(&p.to_lowercase()))
            {
                signals.push(Signal {
                    kind: SignalKind::Request,
                    detail: phrase.clone(),
                    weight: self.config.request_weight,
                });
            }
        }

        let raw: f64 = signals.iter().map(|s| s.weight).sum();

        ScoreBreakdown {
            score: raw.clamp(0.0, 1.0),
            signals,
        }
    }

    /// Length contribution: monotonically increasing in the word count,
    /// saturating at `length_saturation_point`.
    fn length_contribution(&self, word_count: usize) -> f64 {
        let sat = self.config.length_saturation_point.max(1);
        let normalized = (word_count.min(sat) as f64) / (sat as f64);
        self.config.length_weight * normalized.sqrt()
    }

    /// The configuration this scorer was built over.
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scorer() -> ComplexityScorer {
        ComplexityScorer::new(RoutingConfig::default())
    }

    #[test]
    fn empty_query_scores_zero_with_no_signals() {
        let s = scorer();
        for query in ["", "   ", "\t\n"] {
            let breakdown = s.score(query);
            assert_eq!(breakdown.score, 0.0);
            assert!(breakdown.signals.is_empty());
        }
    }

    #[test]
    fn simple_factual_question_scores_low() {
        // Scenario: low length, no keywords, single question.
        let breakdown = scorer().score("What is HIPAA?");
        assert!(
            breakdown.score > 0.1 && breakdown.score < 0.25,
            "expected a low score, got {}",
            breakdown.score
        );
        assert!(breakdown.signals.iter().all(|s| s.kind != SignalKind::Keyword));
    }

    #[test]
    fn analytical_query_scores_high() {
        // Scenario: multiple keyword matches plus a long query.
        let breakdown = scorer().score(
            "Analyze the legal implications of using AI for patient diagnosis in Hawaii, \
             considering HIPAA compliance, malpractice liability, and state regulations.",
        );
        assert!(
            breakdown.score > 0.65 && breakdown.score < 0.8,
            "expected a high score, got {}",
            breakdown.score
        );

        let matched: Vec<&str> = breakdown
            .signals
            .iter()
            .filter(|s| s.kind == SignalKind::Keyword)
            .map(|s| s.detail.as_str())
            .collect();
        assert!(matched.contains(&"analyze"));
        assert!(matched.contains(&"implications"));
        assert!(matched.contains(&"compliance"));
    }

    #[test]
    fn single_question_short_query_scores_near_point_one() {
        let breakdown = scorer().score("Is Honolulu the capital of Hawaii?");
        assert!(
            breakdown.score >= 0.1 && breakdown.score <= 0.2,
            "expected 0.1-0.2, got {}",
            breakdown.score
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let s = scorer();
        let query = "Compare and contrast various approaches? Explain in detail.";
        let first = s.score(query);
        let second = s.score(query);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
        assert_eq!(first.signals, second.signals);
    }

    #[test]
    fn keyword_matches_accumulate() {
        let s = scorer();
        let one = s.score("analyze this");
        let two = s.score("analyze and evaluate this");
        assert!(two.score > one.score, "two keywords should outscore one");
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let s = scorer();
        let lower = s.score("analyze the data");
        let upper = s.score("ANALYZE THE DATA");
        assert_eq!(lower.score.to_bits(), upper.score.to_bits());
    }

    #[test]
    fn each_additional_question_adds_fixed_increment() {
        let s = scorer();
        let one = s.score("Why? That is all");
        let three = s.score("Why? How? When? That is all");
        let q = RoutingConfig::default().question_weight;
        let one_q = one
            .signals
            .iter()
            .find(|sig| sig.kind == SignalKind::Questions)
            .unwrap()
            .weight;
        let three_q = three
            .signals
            .iter()
            .find(|sig| sig.kind == SignalKind::Questions)
            .unwrap()
            .weight;
        assert!((three_q - one_q - 2.0 * q).abs() < 1e-12);
    }

    #[test]
    fn request_phrase_adds_increment_once() {
        let s = scorer();
        let plain = s.score("describe the deployment");
        let request = s.score("describe the deployment step by step");
        let double = s.score("describe the deployment step by step with examples");

        let req_weight = |b: &ScoreBreakdown| {
            b.signals
                .iter()
                .filter(|sig| sig.kind == SignalKind::Request)
                .map(|sig| sig.weight)
                .sum::<f64>()
        };

        assert_eq!(req_weight(&plain), 0.0);
        let w = RoutingConfig::default().request_weight;
        assert!((req_weight(&request) - w).abs() < 1e-12);
        // Two matching phrases still add the increment only once.
        assert!((req_weight(&double) - w).abs() < 1e-12);
    }

    #[test]
    fn oversized_sum_clamps_to_one() {
        let s = scorer();
        let query = "Analyze deeply, critically evaluate, compare and contrast, and provide \
                     a comprehensive analysis with a detailed explanation of the multiple \
                     complex implications? And compliance? And strategic planning?";
        let breakdown = s.score(query);
        assert_eq!(breakdown.score, 1.0);
        // Raw signal sum exceeds 1.0; the clamp is what bounds the score.
        let raw: f64 = breakdown.signals.iter().map(|sig| sig.weight).sum();
        assert!(raw > 1.0);
    }

    #[test]
    fn length_signal_saturates() {
        let mut config = RoutingConfig::default();
        config.length_saturation_point = 10;
        let s = ComplexityScorer::new(config);

        let at_sat = s.score(&"word ".repeat(10));
        let beyond_sat = s.score(&"word ".repeat(200));
        assert_eq!(at_sat.score.to_bits(), beyond_sat.score.to_bits());
    }

    #[test]
    fn length_signal_is_monotone() {
        let s = scorer();
        let mut previous = 0.0;
        for n in [1usize, 5, 20, 60, 100, 150] {
            let breakdown = s.score(&"word ".repeat(n));
            assert!(
                breakdown.score >= previous,
                "length signal decreased at {n} words"
            );
            previous = breakdown.score;
        }
    }

    #[test]
    fn zero_weight_keywords_do_not_fire() {
        let mut config = RoutingConfig::default();
        config.keyword_weights.insert("hello".to_string(), 0.0);
        let s = ComplexityScorer::new(config);
        let breakdown = s.score("hello there");
        assert!(breakdown.signals.iter().all(|sig| sig.detail != "hello"));
    }

    proptest! {
        /// For all query strings the score is within [0, 1] and never NaN.
        #[test]
        fn score_is_always_in_unit_range(query in ".{0,400}") {
            let breakdown = scorer().score(&query);
            prop_assert!(breakdown.score.is_finite());
            prop_assert!((0.0..=1.0).contains(&breakdown.score));
        }

        /// Appending a recognized keyword never decreases the score.
        #[test]
        fn appending_keyword_never_decreases_score(query in ".{0,200}") {
            let s = scorer();
            let base = s.score(&query).score;
            let extended = s.score(&format!("{query} analyze deeply")).score;
            prop_assert!(extended >= base);
        }

        /// Scoring the same input twice is bit-identical.
        #[test]
        fn repeated_scoring_is_bit_identical(query in ".{0,400}") {
            let s = scorer();
            let a = s.score(&query);
            let b = s.score(&query);
            prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
            prop_assert_eq!(a.signals, b.signals);
        }
    }
}
