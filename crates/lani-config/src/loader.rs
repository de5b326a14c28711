// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./lani.toml` > `~/.config/lani/lani.toml` > `/etc/lani/lani.toml`
//! with environment variable overrides via `LANI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LaniConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lani/lani.toml` (system-wide)
/// 3. `~/.config/lani/lani.toml` (user XDG config)
/// 4. `./lani.toml` (local directory)
/// 5. `LANI_*` environment variables
pub fn load_config() -> Result<LaniConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LaniConfig::default()))
        .merge(Toml::file("/etc/lani/lani.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lani/lani.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lani.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LaniConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LaniConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LaniConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LaniConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `LANI_ROUTING_LENGTH_SATURATION_POINT`
/// must map to `routing.length_saturation_point`, not `routing.length.saturation.point`.
fn env_provider() -> Env {
    Env::prefixed("LANI_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: LANI_ROUTING_THRESHOLD -> "routing_threshold"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("routing_", "routing.", 1)
            .replacen("cost_", "cost.", 1)
            .replacen("history_", "history.", 1);
        mapped.into()
    })
}
