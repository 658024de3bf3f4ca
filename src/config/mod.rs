//! Configuration module
//!
//! This module handles all configuration types and loading.

mod defaults;
mod loading;
mod types;
mod validation;

pub use loading::{
    ConfigSource, ENV_INTERFACE, ENV_OSC_HOST, ENV_OSC_PORT, apply_env_overrides,
    create_default_config, load_config, load_config_with_fallback, parse_config,
    write_default_config,
};
pub use types::{CaptureConfig, Config, EngineConfig, TransportConfig};

pub use defaults::{
    categories as default_categories, interval_window_capacity, size_window_capacity,
    spike_window, spike_window_capacity, tick_interval,
};
