//! Test helpers for integration tests
//!
//! Scripted capture sources and an in-memory sink for driving the
//! pipeline without tshark or a network receiver.

#![allow(dead_code)]

use async_trait::async_trait;
use netpulse::config::EngineConfig;
use netpulse::types::WindowCapacity;
use netpulse::{CaptureError, MetricsSink, MetricsSnapshot, PacketRecord, PacketSource};
use tokio::sync::mpsc;

/// Sink that keeps every snapshot it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub snapshots: Vec<MetricsSnapshot>,
}

impl MetricsSink for RecordingSink {
    fn send(&mut self, snapshot: &MetricsSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

/// Capture source fed through a channel
///
/// Ends once every sender is dropped.
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<PacketRecord>,
}

#[async_trait]
impl PacketSource for ChannelSource {
    async fn next_record(&mut self) -> Result<Option<PacketRecord>, CaptureError> {
        Ok(self.rx.recv().await)
    }
}

pub fn channel_source() -> (mpsc::UnboundedSender<PacketRecord>, ChannelSource) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, ChannelSource { rx })
}

pub fn packet(length: u64) -> PacketRecord {
    PacketRecord {
        length: Some(length),
        dns_query: None,
        capture_time: None,
    }
}

pub fn dns(length: u64, query: &str) -> PacketRecord {
    PacketRecord {
        length: Some(length),
        dns_query: Some(query.to_string()),
        capture_time: None,
    }
}

/// Default engine config with a custom size/time window capacity
pub fn engine_config_with_size_window(capacity: usize) -> EngineConfig {
    EngineConfig {
        size_window_capacity: WindowCapacity::new(capacity).unwrap(),
        ..EngineConfig::default()
    }
}
