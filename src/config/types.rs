//! Configuration type definitions

use crate::constants;
use crate::types::{CategoryName, InterfaceName, SpikeThreshold, WindowCapacity, secs_f64_serde};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Packet capture settings
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Statistics engine settings
    #[serde(default)]
    pub engine: EngineConfig,
    /// Telemetry destination
    #[serde(default)]
    pub transport: TransportConfig,
}

/// Packet capture settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureConfig {
    /// Interface to capture on
    #[serde(default = "super::defaults::interface")]
    pub interface: InterfaceName,
    /// Path to the `tshark` binary
    #[serde(default = "super::defaults::tshark_path")]
    pub tshark_path: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            interface: super::defaults::interface(),
            tshark_path: super::defaults::tshark_path(),
        }
    }
}

/// Statistics engine settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Interval between emitted snapshots, in seconds
    #[serde(
        with = "secs_f64_serde",
        default = "super::defaults::tick_interval"
    )]
    pub tick_interval: Duration,
    /// Packets retained for payload size and data rate
    #[serde(default = "super::defaults::size_window_capacity")]
    pub size_window_capacity: WindowCapacity,
    /// Packets retained for the inter-packet interval
    #[serde(default = "super::defaults::interval_window_capacity")]
    pub interval_window_capacity: WindowCapacity,
    /// DNS queries inside `spike_window` that count as a spike
    #[serde(default)]
    pub spike_threshold: SpikeThreshold,
    /// Trailing window for spike detection, in seconds
    #[serde(
        with = "secs_f64_serde",
        default = "super::defaults::spike_window"
    )]
    pub spike_window: Duration,
    /// Upper bound on DNS timestamps held by the spike detector
    #[serde(default = "super::defaults::spike_window_capacity")]
    pub spike_window_capacity: WindowCapacity,
    /// DNS categories in match priority order
    #[serde(default = "super::defaults::categories")]
    pub categories: Vec<CategoryName>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: super::defaults::tick_interval(),
            size_window_capacity: super::defaults::size_window_capacity(),
            interval_window_capacity: super::defaults::interval_window_capacity(),
            spike_threshold: SpikeThreshold::default(),
            spike_window: super::defaults::spike_window(),
            spike_window_capacity: super::defaults::spike_window_capacity(),
            categories: super::defaults::categories(),
        }
    }
}

/// Telemetry destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransportConfig {
    /// Receiver host or IP
    pub host: String,
    /// Receiver UDP port
    pub port: u16,
}

impl TransportConfig {
    /// `host:port` form accepted by socket address resolution
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: constants::transport::DEFAULT_HOST.to_string(),
            port: constants::transport::DEFAULT_PORT,
        }
    }
}
