// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rolling routing history and savings aggregation for Lani.
//!
//! Every routing decision, together with its eventual execution outcome,
//! is appended to a bounded recent-N window and folded into running totals:
//! query counts per route, cumulative spend, and estimated savings against
//! an all-cloud baseline. Totals survive window eviction.

pub mod window;

pub use window::{ExecutionOutcome, HistoryEntry, HistorySummary, QueryHistory};
