// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The model backend trait implemented by execution adapters.
//!
//! The router itself never executes queries; it hands a decision to the
//! surrounding application, which invokes whichever [`ModelBackend`] the
//! decision names. Keeping execution behind this trait means additional
//! backends (a second cloud vendor, a different local runtime) can be added
//! without touching the scorer or router.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::LaniError;
use crate::types::TokenUsage;

/// The outcome of executing a query against a model backend.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    /// The generated completion text.
    pub text: String,
    /// Token counts for the call.
    pub usage: TokenUsage,
    /// Wall-clock time the call took.
    pub latency: Duration,
    /// Monetary cost of the call in USD. Zero for local backends.
    pub cost_usd: f64,
}

/// An inference backend that can answer a query.
///
/// Implementations wrap a local runtime (e.g. an Ollama process) or a cloud
/// API client. Retry and fallback policy is the caller's concern, not the
/// backend's.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Stable identifier for this backend (e.g. a model name).
    fn id(&self) -> &str;

    /// Execute a query and return the completion with usage and cost.
    async fn execute(&self, query: &str) -> Result<BackendResponse, LaniError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal backend that echoes the query back.
    struct EchoBackend;

    #[async_trait]
    impl ModelBackend for EchoBackend {
        fn id(&self) -> &str {
            "echo"
        }

        async fn execute(&self, query: &str) -> Result<BackendResponse, LaniError> {
            Ok(BackendResponse {
                text: query.to_string(),
                usage: TokenUsage {
                    input_tokens: query.len() as u32,
                    output_tokens: query.len() as u32,
                },
                latency: Duration::from_millis(1),
                cost_usd: 0.0,
            })
        }
    }

    #[tokio::test]
    async fn trait_object_executes_through_dynamic_dispatch() {
        let backend: Box<dyn ModelBackend> = Box::new(EchoBackend);
        assert_eq!(backend.id(), "echo");

        let response = backend.execute("hello").await.expect("echo never fails");
        assert_eq!(response.text, "hello");
        assert_eq!(response.usage.total(), 10);
        assert!((response.cost_usd - 0.0).abs() < f64::EPSILON);
    }
}
