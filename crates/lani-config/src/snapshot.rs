// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Atomically published configuration snapshots.
//!
//! Concurrent scorers read the configuration through a [`ConfigHandle`].
//! A reload publishes a complete new snapshot with a single atomic swap;
//! readers observe either the old or the new configuration in full, never
//! a partial update.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::diagnostic::ConfigError;
use crate::model::LaniConfig;
use crate::validation::validate_config;

/// Shared handle to the current configuration snapshot.
///
/// Cheap to clone; all clones observe the same published snapshot.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<ArcSwap<LaniConfig>>,
}

impl ConfigHandle {
    /// Create a handle publishing the given configuration as the first snapshot.
    ///
    /// The configuration is validated before being published.
    pub fn new(config: LaniConfig) -> Result<Self, Vec<ConfigError>> {
        validate_config(&config)?;
        Ok(Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        })
    }

    /// Load the current snapshot.
    pub fn load(&self) -> Arc<LaniConfig> {
        self.inner.load_full()
    }

    /// Validate and atomically publish a new snapshot.
    ///
    /// On validation failure the previous snapshot stays in effect and the
    /// errors are returned to the caller.
    pub fn publish(&self, config: LaniConfig) -> Result<(), Vec<ConfigError>> {
        validate_config(&config)?;
        self.inner.store(Arc::new(config));
        info!("configuration snapshot published");
        Ok(())
    }
}
