// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded history window with running totals.
//!
//! The window keeps the most recent N entries for display and debugging;
//! the running totals cover every recorded query regardless of eviction,
//! so the savings figure stays honest over long sessions.

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use lani_config::{CostConfig, HistoryConfig};
use lani_core::{DecisionMode, Route, TokenUsage};
use lani_router::RoutingDecision;

/// The execution outcome the caller reports back after running a query
/// against the backend the decision named.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionOutcome {
    /// Wall-clock time the backend call took.
    pub latency: Duration,
    /// Token counts for the call.
    pub usage: TokenUsage,
    /// Monetary cost of the call in USD. Zero for local backends.
    pub cost_usd: f64,
    /// Whether the backend call succeeded.
    pub success: bool,
}

/// One recorded query: the routing decision plus its execution outcome.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Unique entry identifier (UUID v4).
    pub id: String,
    /// The originating query text.
    pub query: String,
    /// Complexity score the decision was based on.
    pub score: f64,
    /// The route taken.
    pub route: Route,
    /// Backend the query ran on.
    pub backend_id: String,
    /// Whether the decision was scored or overridden.
    pub mode: DecisionMode,
    /// The reported execution outcome.
    pub outcome: ExecutionOutcome,
    /// ISO 8601 timestamp of when the entry was recorded.
    pub created_at: String,
}

/// Aggregated statistics over every recorded query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    /// Total queries recorded.
    pub total_queries: u64,
    /// Queries that ran locally.
    pub local_queries: u64,
    /// Queries that ran on the cloud backend.
    pub cloud_queries: u64,
    /// Queries whose route was manually overridden.
    pub override_queries: u64,
    /// Cumulative actual spend in USD.
    pub total_cost_usd: f64,
    /// What the same queries would have cost all-cloud, per the configured
    /// baseline.
    pub estimated_all_cloud_usd: f64,
    /// Baseline minus actual spend. Negative when overrides pushed cheap
    /// queries to the cloud.
    pub estimated_savings_usd: f64,
}

/// In-memory rolling history of routing decisions and outcomes.
pub struct QueryHistory {
    window: VecDeque<HistoryEntry>,
    capacity: usize,
    baseline_cloud_cost_usd: f64,
    total_queries: u64,
    local_queries: u64,
    cloud_queries: u64,
    override_queries: u64,
    total_cost_usd: f64,
}

impl QueryHistory {
    /// Create an empty history with the configured window bound and
    /// all-cloud baseline.
    pub fn new(history: &HistoryConfig, cost: &CostConfig) -> Self {
        Self {
            window: VecDeque::with_capacity(history.window),
            capacity: history.window.max(1),
            baseline_cloud_cost_usd: cost.baseline_cloud_cost_usd,
            total_queries: 0,
            local_queries: 0,
            cloud_queries: 0,
            override_queries: 0,
            total_cost_usd: 0.0,
        }
    }

    /// Record a routing decision and its execution outcome.
    ///
    /// Appends to the window, evicting the oldest entry beyond the bound,
    /// and updates the running totals.
    pub fn record(&mut self, decision: &RoutingDecision, outcome: ExecutionOutcome) {
        self.total_queries += 1;
        match decision.route {
            Route::Local => self.local_queries += 1,
            Route::Cloud => self.cloud_queries += 1,
        }
        if decision.mode == DecisionMode::Override {
            self.override_queries += 1;
        }
        self.total_cost_usd += outcome.cost_usd;

        info!(
            route = %decision.route,
            mode = %decision.mode,
            score = decision.score,
            backend_id = %decision.backend_id,
            cost_usd = outcome.cost_usd,
            latency_ms = outcome.latency.as_millis() as u64,
            success = outcome.success,
            "query recorded"
        );

        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(HistoryEntry {
            id: uuid::Uuid::new_v4().to_string(),
            query: decision.query.clone(),
            score: decision.score,
            route: decision.route,
            backend_id: decision.backend_id.clone(),
            mode: decision.mode,
            outcome,
            created_at: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        });
    }

    /// Entries currently in the window, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.window.iter().rev()
    }

    /// Number of entries currently held in the window.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Aggregate statistics over every recorded query.
    pub fn summary(&self) -> HistorySummary {
        let estimated_all_cloud_usd = self.total_queries as f64 * self.baseline_cloud_cost_usd;
        HistorySummary {
            total_queries: self.total_queries,
            local_queries: self.local_queries,
            cloud_queries: self.cloud_queries,
            override_queries: self.override_queries,
            total_cost_usd: self.total_cost_usd,
            estimated_all_cloud_usd,
            estimated_savings_usd: estimated_all_cloud_usd - self.total_cost_usd,
        }
    }
}
