//! Constants used throughout netpulse
//!
//! Centralizes outbound metric names and the defaults for every tunable.

use std::time::Duration;

/// Outbound metric names
///
/// Dotted names are what the engine produces; the OSC transport turns
/// `a.b` into the address `/a/b`.
pub mod metric {
    pub const DNS_TOTAL: &str = "dns_requests.total";

    /// Prefix for per-category DNS counters (`dns_requests.<category>`)
    pub const DNS_CATEGORY_PREFIX: &str = "dns_requests.";

    pub const PAYLOAD_SIZE: &str = "payload_size";
    pub const PAYLOAD_SIZE_NORMALIZED: &str = "payload_size_normalized";
    pub const DATA_RATE: &str = "data_rate";
    pub const DATA_RATE_NORMALIZED: &str = "data_rate_normalized";
    pub const INTER_PACKET_INTERVAL: &str = "inter_packet_interval";
    pub const DNS_SPIKE: &str = "dns_spike";
}

/// Engine defaults
pub mod engine {
    use super::Duration;

    /// Emission cadence
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Trailing window for DNS spike detection
    pub const SPIKE_WINDOW: Duration = Duration::from_millis(500);

    /// Categories tracked when the config does not list any
    pub const DEFAULT_CATEGORIES: &[&str] = &[
        "instagram",
        "facebook",
        "google",
        "apple",
        "spotify",
        "whatsapp",
    ];
}

/// Capture defaults
pub mod capture {
    /// Interface captured when none is configured
    ///
    /// The remote virtual interface macOS exposes for a tethered iOS device.
    pub const DEFAULT_INTERFACE: &str = "rvi0";

    /// Capture helper binary, resolved through `PATH`
    pub const DEFAULT_TSHARK_PATH: &str = "tshark";

    /// Separator between fields in a capture record line
    pub const FIELD_SEPARATOR: char = '\t';

    /// Separator between multiple values of one field
    pub const VALUE_SEPARATOR: char = ',';
}

/// Transport defaults
pub mod transport {
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    pub const DEFAULT_PORT: u16 = 7400;
}

/// Logging
pub mod logging {
    /// File the log is mirrored to, in the working directory
    pub const LOG_FILE: &str = "netpulse.log";

    /// Level used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "info";
}
