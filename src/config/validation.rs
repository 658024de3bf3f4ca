//! Configuration validation
//!
//! Zero capacities, empty names and malformed categories are already
//! rejected by the field types. This checks what they cannot express.

use anyhow::Result;
use std::collections::HashSet;

use super::types::Config;

impl Config {
    /// Validate configuration for correctness
    ///
    /// - tick interval and spike window must be non-zero
    /// - categories must be unique
    /// - transport port must be non-zero and the host non-empty
    pub fn validate(&self) -> Result<()> {
        if self.engine.tick_interval.is_zero() {
            return Err(anyhow::anyhow!("engine.tick_interval must be greater than 0"));
        }

        if self.engine.spike_window.is_zero() {
            return Err(anyhow::anyhow!("engine.spike_window must be greater than 0"));
        }

        let mut seen = HashSet::new();
        for category in &self.engine.categories {
            if !seen.insert(category.as_str()) {
                return Err(anyhow::anyhow!(
                    "engine.categories lists '{}' more than once",
                    category
                ));
            }
        }

        if self.transport.host.trim().is_empty() {
            return Err(anyhow::anyhow!("transport.host cannot be empty"));
        }

        if self.transport.port == 0 {
            return Err(anyhow::anyhow!("transport.port cannot be 0"));
        }

        if self.engine.spike_window_capacity.get() < self.engine.spike_threshold.get() {
            tracing::warn!(
                "engine.spike_window_capacity ({}) is below engine.spike_threshold ({}); \
                 a DNS spike can never be reported",
                self.engine.spike_window_capacity,
                self.engine.spike_threshold
            );
        }

        Ok(())
    }
}
