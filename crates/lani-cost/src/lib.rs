// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pricing and cost estimation for the Lani hybrid router.
//!
//! This crate provides:
//! - **Pricing**: per-backend price tables with zero-cost local backends
//! - **Token estimation**: tokenizer-free chars/4 heuristic
//! - **Cost calculation**: per-call USD cost from token usage

pub mod pricing;

pub use pricing::{BackendPricing, calculate_cost, estimate_tokens, pricing_for};
