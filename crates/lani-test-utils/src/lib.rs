// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lani integration tests.
//!
//! Provides mock model backends for fast, deterministic, CI-runnable tests
//! without a local model runtime or cloud credentials.

pub mod mock_backend;

pub use mock_backend::MockBackend;
