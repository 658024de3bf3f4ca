//! Command-line argument parsing
//!
//! Flags override the config file and the `NETPULSE_*` environment
//! variables it is merged with.

use crate::config::Config;
use crate::types::{ConfigPath, InterfaceName, ThreadCount};
use clap::Parser;
use std::path::PathBuf;

/// Stream packet statistics from a capture interface as OSC telemetry
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (written with defaults if missing)
    #[arg(short, long, default_value = "netpulse.toml", env = "NETPULSE_CONFIG")]
    pub config: ConfigPath,

    /// Capture interface (overrides config file)
    #[arg(short, long)]
    pub interface: Option<InterfaceName>,

    /// Telemetry receiver host (overrides config file)
    #[arg(long)]
    pub osc_host: Option<String>,

    /// Telemetry receiver port (overrides config file)
    #[arg(long)]
    pub osc_port: Option<u16>,

    /// Read capture records from a file instead of running tshark
    ///
    /// One record per line: `<frame length>\t<dns query name>[\t<capture time>]`.
    /// Records carrying a capture time are replayed at their recorded pace.
    #[arg(long, value_name = "PATH")]
    pub replay: Option<PathBuf>,

    /// Number of worker threads (default: 1, use 0 for CPU cores)
    #[arg(short, long, env = "NETPULSE_THREADS")]
    pub threads: Option<ThreadCount>,
}

impl Args {
    /// Apply command-line overrides to a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(interface) = &self.interface {
            config.capture.interface = interface.clone();
        }
        if let Some(host) = &self.osc_host {
            config.transport.host = host.clone();
        }
        if let Some(port) = self.osc_port {
            config.transport.port = port;
        }
    }
}
