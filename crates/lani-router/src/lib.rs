// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query complexity scoring and local/cloud routing for Lani.
//!
//! This crate provides:
//! - [`ComplexityScorer`]: deterministic [0, 1] complexity scoring from
//!   interpretable signals (zero-cost, zero-latency)
//! - [`QueryRouter`]: threshold routing with manual overrides
//!
//! The router inspects a query before any model call and decides whether it
//! should run on the cheap local backend or the capable cloud backend.
//! Scoring and routing are pure functions over an immutable configuration
//! snapshot; persistence and metrics belong to external collaborators.

pub mod router;
pub mod scorer;

pub use router::{QueryRouter, RoutingDecision};
pub use scorer::{ComplexityScorer, ScoreBreakdown, Signal, SignalKind};
