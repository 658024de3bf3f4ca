//! Outbound telemetry
//!
//! A [`MetricsSink`] receives every snapshot. Sending is best effort:
//! sinks swallow and log their own failures so the pipeline never stalls
//! or stops because the receiver is gone.

pub mod osc;
mod udp;

pub use udp::OscUdpSink;

use crate::engine::MetricsSnapshot;

/// Receiver of per-tick snapshots
pub trait MetricsSink: Send {
    /// Emit every value of `snapshot`; must not block
    fn send(&mut self, snapshot: &MetricsSnapshot);
}

impl<S> MetricsSink for Box<S>
where
    S: MetricsSink + ?Sized,
{
    fn send(&mut self, snapshot: &MetricsSnapshot) {
        (**self).send(snapshot);
    }
}
