//! netpulse: rolling traffic statistics from live packet capture
//!
//! Packets flow from a [`capture::PacketSource`] into the
//! [`engine::Engine`], which maintains count-bounded windows, lifetime
//! normalization ranges and a DNS spike detector. On a fixed cadence the
//! engine produces a [`engine::MetricsSnapshot`] that a
//! [`transport::MetricsSink`] sends onward as OSC over UDP.

pub mod args;
pub mod capture;
pub mod config;
pub mod constants;
pub mod engine;
pub mod formatting;
pub mod logging;
pub mod pipeline;
pub mod runtime;
pub mod stats;
pub mod transport;
pub mod types;

pub use capture::{
    CaptureError, LineSource, PacedSource, PacketRecord, PacketSource, TsharkSource,
};
pub use config::{
    Config, ConfigSource, create_default_config, load_config, load_config_with_fallback,
};
pub use engine::{Engine, MetricValue, MetricsSnapshot};
pub use pipeline::{PipelineStats, run_pipeline};
pub use transport::{MetricsSink, OscUdpSink};
pub use types::Observation;
