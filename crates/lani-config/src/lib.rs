// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Lani hybrid router.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, miette diagnostic rendering with typo suggestions, and
//! atomically published hot-reload snapshots.
//!
//! # Usage
//!
//! ```no_run
//! use lani_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("threshold: {}", config.routing.threshold);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod snapshot;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{CostConfig, HistoryConfig, LaniConfig, RoutingConfig};
pub use snapshot::ConfigHandle;

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
///
/// Returns either a valid `LaniConfig` or a list of diagnostic errors.
/// Validation happens once here, never per-query.
pub fn load_and_validate() -> Result<LaniConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<LaniConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
