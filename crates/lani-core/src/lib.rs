// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lani hybrid query router.
//!
//! This crate provides the foundational types shared across the Lani
//! workspace: the [`Route`] and [`DecisionMode`] enums, token accounting,
//! the [`LaniError`] error type, and the [`ModelBackend`] trait that
//! execution backends implement.

pub mod backend;
pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use backend::{BackendResponse, ModelBackend};
pub use error::LaniError;
pub use types::{DecisionMode, Route, TokenUsage};
