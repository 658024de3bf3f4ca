//! DNS burst detection over a short trailing window

use crate::types::{SpikeThreshold, WindowCapacity};
use std::collections::VecDeque;
use std::time::Duration;

/// Flags a spike while at least `threshold` DNS queries fall inside the
/// trailing `window`
///
/// No hysteresis: the flag follows the current count on every check.
/// Timestamps arrive in non-decreasing order, so pruning only ever pops
/// from the head.
#[derive(Debug, Clone)]
pub struct SpikeDetector {
    recent: VecDeque<f64>,
    threshold: usize,
    window: f64,
    capacity: usize,
}

impl SpikeDetector {
    #[must_use]
    pub fn new(threshold: SpikeThreshold, window: Duration, capacity: WindowCapacity) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity.get()),
            threshold: threshold.get(),
            window: window.as_secs_f64(),
            capacity: capacity.get(),
        }
    }

    /// Record a DNS query at `timestamp`, prune relative to it and report
    /// whether the window is spiking
    pub fn record_and_check(&mut self, timestamp: f64) -> bool {
        self.record(timestamp);
        self.check(timestamp)
    }

    /// Record a DNS query without evaluating the window
    pub fn record(&mut self, timestamp: f64) {
        while self.recent.len() >= self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(timestamp);
    }

    /// Prune relative to `now` and report whether the window is spiking
    ///
    /// Used on every tick so the flag decays once DNS traffic stops.
    pub fn check(&mut self, now: f64) -> bool {
        self.prune(now);
        self.recent.len() >= self.threshold
    }

    fn prune(&mut self, now: f64) {
        while let Some(&oldest) = self.recent.front() {
            if now - oldest > self.window {
                self.recent.pop_front();
            } else {
                break;
            }
        }
    }

    /// Number of queries currently retained (as of the last prune)
    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
