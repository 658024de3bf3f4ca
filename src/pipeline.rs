//! Capture-to-telemetry loop
//!
//! One task owns the [`Engine`] and multiplexes three events with
//! `tokio::select!`: shutdown, the emission timer and the next capture
//! record. `observe` and `tick` therefore never overlap and need no lock.
//! Each is synchronous, so when shutdown wins the select no engine update
//! is left half applied.

use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::capture::{CaptureError, PacketSource};
use crate::engine::{Engine, MetricsSnapshot};
use crate::formatting::format_rate;
use crate::transport::MetricsSink;

/// Monotonic seconds since pipeline start
///
/// Observation timestamps and tick times come from the same clock.
#[derive(Debug, Clone, Copy)]
pub struct PipelineClock {
    start: Instant,
}

impl PipelineClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Counters describing one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Records read from the capture source
    pub records: u64,
    /// Records with no usable field
    pub dropped: u64,
    /// Snapshots emitted
    pub ticks: u64,
}

/// Drive `engine` from `source`, emitting a snapshot to `sink` every
/// `tick_interval` until `shutdown` resolves
///
/// Returns the run's counters on shutdown. The end of the capture stream,
/// or any capture error, is fatal and returned as the error. When the
/// stream ends a last snapshot is emitted first.
pub async fn run_pipeline<S, K, F>(
    engine: &mut Engine,
    source: &mut S,
    sink: &mut K,
    tick_interval: Duration,
    shutdown: F,
) -> Result<PipelineStats, CaptureError>
where
    S: PacketSource + ?Sized,
    K: MetricsSink + ?Sized,
    F: Future<Output = ()>,
{
    let clock = PipelineClock::start();
    let mut stats = PipelineStats::default();

    let mut ticker = tokio::time::interval_at(Instant::now() + tick_interval, tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tokio::pin!(shutdown);

    info!("Pipeline running, emitting every {:?}", tick_interval);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!(
                    "Shutdown requested, pipeline stopped after {} records and {} ticks",
                    stats.records, stats.ticks
                );
                return Ok(stats);
            }

            _ = ticker.tick() => {
                emit(engine, sink, clock.now(), &mut stats);
            }

            record = source.next_record() => {
                match record? {
                    Some(record) => {
                        stats.records += 1;
                        match record.into_observation(clock.now()) {
                            Some(observation) => engine.observe(&observation),
                            None => {
                                stats.dropped += 1;
                                trace!("Dropping capture record {} with no usable fields", stats.records);
                            }
                        }
                    }
                    None => {
                        // Flush what the stream delivered since the last tick
                        emit(engine, sink, clock.now(), &mut stats);
                        return Err(CaptureError::Terminated {
                            reason: format!(
                                "capture stream ended after {} records and {} snapshots",
                                stats.records, stats.ticks
                            ),
                        });
                    }
                }
            }
        }
    }
}

fn emit<K>(engine: &mut Engine, sink: &mut K, now: f64, stats: &mut PipelineStats)
where
    K: MetricsSink + ?Sized,
{
    let snapshot = engine.tick(now);
    sink.send(&snapshot);
    stats.ticks += 1;
    log_snapshot(&snapshot, engine.packets_observed());
}

fn log_snapshot(snapshot: &MetricsSnapshot, packets: u64) {
    debug!(
        "packets={} payload_avg={:.2} data_rate={} payload_norm={:.2} rate_norm={:.2} \
         interval={:.4}s dns_total={} dns_spike={}",
        packets,
        snapshot.payload_size,
        format_rate(snapshot.data_rate),
        snapshot.payload_size_normalized,
        snapshot.data_rate_normalized,
        snapshot.inter_packet_interval,
        snapshot.dns_total,
        u8::from(snapshot.dns_spike),
    );
}
