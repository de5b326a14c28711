// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend pricing tables and cost calculation.
//!
//! Claude Sonnet: input=$3.00/MTok, output=$15.00/MTok
//! GPT-4o:        input=$2.50/MTok, output=$10.00/MTok
//! Local backends have zero marginal cost per query.

use lani_core::TokenUsage;

/// Per-backend pricing in USD per million tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendPricing {
    /// Cost per million input tokens.
    pub input_per_mtok: f64,
    /// Cost per million output tokens.
    pub output_per_mtok: f64,
}

impl BackendPricing {
    /// Pricing for a zero-marginal-cost backend.
    pub const FREE: BackendPricing = BackendPricing {
        input_per_mtok: 0.0,
        output_per_mtok: 0.0,
    };
}

/// Look up pricing for a given backend identifier.
///
/// Matches on substrings: "claude" and "gpt" select their cloud price
/// tables; anything else is treated as a local backend with zero cost, so
/// self-hosted model names never accrue phantom charges.
pub fn pricing_for(backend_id: &str) -> BackendPricing {
    let lower = backend_id.to_lowercase();

    if lower.contains("claude") {
        BackendPricing {
            input_per_mtok: 3.0,
            output_per_mtok: 15.0,
        }
    } else if lower.contains("gpt") {
        BackendPricing {
            input_per_mtok: 2.5,
            output_per_mtok: 10.0,
        }
    } else {
        BackendPricing::FREE
    }
}

/// Rough token estimation for text without a tokenizer: ~4 chars per token.
pub fn estimate_tokens(text: &str) -> u32 {
    (text.len() / 4) as u32
}

/// Calculate cost in USD for a given token usage and pricing.
///
/// Formula: sum of (tokens / 1_000_000) * price_per_million per token type.
pub fn calculate_cost(usage: &TokenUsage, pricing: &BackendPricing) -> f64 {
    let input = (usage.input_tokens as f64 / 1_000_000.0) * pricing.input_per_mtok;
    let output = (usage.output_tokens as f64 / 1_000_000.0) * pricing.output_per_mtok;
    input + output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claude_pricing() {
        let p = pricing_for("claude-sonnet-4-20250514");
        assert!((p.input_per_mtok - 3.0).abs() < f64::EPSILON);
        assert!((p.output_per_mtok - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gpt_pricing() {
        let p = pricing_for("gpt-4o");
        assert!((p.input_per_mtok - 2.5).abs() < f64::EPSILON);
        assert!((p.output_per_mtok - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn local_backends_are_free() {
        for id in ["deepseek-r1:7b", "llama3:8b", "mistral"] {
            assert_eq!(pricing_for(id), BackendPricing::FREE);
        }
    }

    #[test]
    fn estimate_tokens_four_chars_per_token() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens(&"x".repeat(400)), 100);
    }

    #[test]
    fn calculate_cost_claude_example() {
        let pricing = pricing_for("claude-sonnet-4-20250514");
        let usage = TokenUsage {
            input_tokens: 1000,
            output_tokens: 500,
        };
        let cost = calculate_cost(&usage, &pricing);
        // input: 1000/1M * 3.0 = 0.003; output: 500/1M * 15.0 = 0.0075
        let expected = 0.003 + 0.0075;
        assert!(
            (cost - expected).abs() < 1e-10,
            "expected {expected}, got {cost}"
        );
    }

    #[test]
    fn local_execution_costs_nothing() {
        let usage = TokenUsage {
            input_tokens: 100_000,
            output_tokens: 100_000,
        };
        let cost = calculate_cost(&usage, &pricing_for("deepseek-r1:7b"));
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn zero_tokens_zero_cost() {
        let cost = calculate_cost(&TokenUsage::default(), &pricing_for("claude-sonnet-4-20250514"));
        assert!((cost - 0.0).abs() < f64::EPSILON);
    }
}
