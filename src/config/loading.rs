//! Configuration loading from files and environment variables
//!
//! Values come from a TOML file (or built-in defaults when the file is
//! missing), then environment variables override individual fields.

use anyhow::{Context, Result};
use std::path::Path;

use super::types::Config;
use crate::types::InterfaceName;

/// Environment variable overriding `capture.interface`
pub const ENV_INTERFACE: &str = "NETPULSE_INTERFACE";
/// Environment variable overriding `transport.host`
pub const ENV_OSC_HOST: &str = "NETPULSE_OSC_HOST";
/// Environment variable overriding `transport.port`
pub const ENV_OSC_PORT: &str = "NETPULSE_OSC_PORT";

/// Where the configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from a TOML file
    File,
    /// File missing, built-in defaults used
    Defaults,
}

impl ConfigSource {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::File => "configuration file",
            Self::Defaults => "built-in defaults",
        }
    }
}

/// Apply environment variable overrides
///
/// Unparseable values are logged and ignored so a typo in the environment
/// cannot silently zero a setting.
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(value) = std::env::var(ENV_INTERFACE) {
        match InterfaceName::new(value) {
            Ok(interface) => config.capture.interface = interface,
            Err(e) => tracing::warn!("Ignoring {}: {}", ENV_INTERFACE, e),
        }
    }

    if let Ok(host) = std::env::var(ENV_OSC_HOST) {
        config.transport.host = host;
    }

    if let Ok(value) = std::env::var(ENV_OSC_PORT) {
        match value.parse::<u16>() {
            Ok(port) => config.transport.port = port,
            Err(e) => tracing::warn!("Ignoring {}='{}': {}", ENV_OSC_PORT, value, e),
        }
    }
}

/// Parse configuration from TOML text without touching the environment
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file, with environment variable overrides
pub fn load_config(config_path: &str) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", config_path, e))?;

    let mut config: Config = toml::from_str(&config_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", config_path, e))?;

    apply_env_overrides(&mut config);

    config.validate()?;

    Ok(config)
}

/// Load configuration, falling back to defaults when the file is missing
///
/// A file that exists but fails to parse is an error, never a fallback.
pub fn load_config_with_fallback(config_path: &str) -> Result<(Config, ConfigSource)> {
    if Path::new(config_path).exists() {
        return load_config(config_path).map(|config| (config, ConfigSource::File));
    }

    let mut config = create_default_config();
    apply_env_overrides(&mut config);
    config.validate()?;
    Ok((config, ConfigSource::Defaults))
}

/// Write the default configuration to `config_path` as pretty TOML
pub fn write_default_config(config_path: &str) -> Result<()> {
    let config_toml = toml::to_string_pretty(&create_default_config())?;
    std::fs::write(config_path, config_toml)
        .with_context(|| format!("Failed to write default config '{}'", config_path))?;
    Ok(())
}

/// Create the default configuration
#[must_use]
pub fn create_default_config() -> Config {
    Config::default()
}
