// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Lani workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two routing targets the router can select between.
///
/// A `Local` backend is an inference engine on infrastructure the deploying
/// organization controls, assumed to have zero marginal cost per query.
/// A `Cloud` backend is a third-party hosted API billed per token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Local,
    Cloud,
}

/// How a routing decision was reached.
///
/// `Scored` decisions came from the complexity threshold; `Override`
/// decisions were forced by the caller. Downstream cost accounting uses
/// this to separate automatic routing from manual intervention.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DecisionMode {
    Scored,
    Override,
}

/// Token counts reported by a backend execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of input (prompt) tokens.
    pub input_tokens: u32,
    /// Number of output (completion) tokens.
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens across input and output.
    ///
    /// Saturates rather than overflowing on pathological counts.
    pub fn total(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
