// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock model backend for deterministic testing.
//!
//! `MockBackend` implements `ModelBackend` with pre-configured responses,
//! fixed latency, and cost derived from the real pricing tables, so
//! integration tests exercise the same accounting paths as production.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use lani_core::{BackendResponse, LaniError, ModelBackend, TokenUsage};
use lani_cost::{calculate_cost, estimate_tokens, pricing_for};

/// A mock backend that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty, a
/// default "mock response" text is returned. Token counts come from the
/// chars/4 estimator and cost from the pricing table for the backend id,
/// so a mock with a "claude-..." id accrues cloud costs and any other id
/// is free.
pub struct MockBackend {
    id: String,
    latency: Duration,
    responses: Arc<Mutex<VecDeque<String>>>,
    fail: bool,
}

impl MockBackend {
    /// Create a mock backend with the given identifier and an empty queue.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latency: Duration::from_millis(50),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fail: false,
        }
    }

    /// Create a mock backend pre-loaded with the given responses.
    pub fn with_responses(id: impl Into<String>, responses: Vec<String>) -> Self {
        Self {
            id: id.into(),
            latency: Duration::from_millis(50),
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            fail: false,
        }
    }

    /// Create a mock backend whose `execute` always fails.
    pub fn failing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latency: Duration::from_millis(50),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fail: true,
        }
    }

    /// Set the fixed latency reported by every execution.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// Pop the next response, or return the default.
    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string())
    }
}

#[async_trait]
impl ModelBackend for MockBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn execute(&self, query: &str) -> Result<BackendResponse, LaniError> {
        if self.fail {
            return Err(LaniError::Backend {
                message: format!("mock backend `{}` configured to fail", self.id),
                source: None,
            });
        }

        let text = self.next_response().await;
        let usage = TokenUsage {
            input_tokens: estimate_tokens(query),
            output_tokens: estimate_tokens(&text),
        };
        let cost_usd = calculate_cost(&usage, &pricing_for(&self.id));

        Ok(BackendResponse {
            text,
            usage,
            latency: self.latency,
            cost_usd,
        })
    }
}
