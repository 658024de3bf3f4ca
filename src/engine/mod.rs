//! Streaming statistics engine
//!
//! [`Engine`] owns every window, counter and range. `observe` folds one
//! packet into that state and `tick` derives a [`MetricsSnapshot`] from
//! it. Both are synchronous and bounded; the caller is responsible for
//! never running them concurrently (the pipeline drives both from one
//! task).

mod classifier;
mod snapshot;

pub use classifier::CategoryClassifier;
pub use snapshot::{CategoryCount, MetricValue, MetricsSnapshot, NamedValue};

use crate::config::EngineConfig;
use crate::constants::metric;
use crate::stats::{IntervalWindow, Normalizer, SizeTimeWindow, SpikeDetector};
use crate::types::Observation;

/// Owner of all rolling statistics state
#[derive(Debug, Clone)]
pub struct Engine {
    classifier: CategoryClassifier,
    dns_total: u64,
    dns_by_category: Vec<u64>,
    size_window: SizeTimeWindow,
    interval_window: IntervalWindow,
    spikes: SpikeDetector,
    normalizer: Normalizer,
    packets_observed: u64,
}

impl Engine {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let classifier = CategoryClassifier::new(config.categories.clone());
        let dns_by_category = vec![0; classifier.len()];
        Self {
            classifier,
            dns_total: 0,
            dns_by_category,
            size_window: SizeTimeWindow::new(config.size_window_capacity),
            interval_window: IntervalWindow::new(config.interval_window_capacity),
            spikes: SpikeDetector::new(
                config.spike_threshold,
                config.spike_window,
                config.spike_window_capacity,
            ),
            normalizer: Normalizer::new(),
            packets_observed: 0,
        }
    }

    /// Fold one packet observation into the engine state
    pub fn observe(&mut self, obs: &Observation) {
        if let Some(query) = obs.dns_query.as_deref() {
            self.dns_total += 1;
            if let Some(index) = self.classifier.classify(query) {
                self.dns_by_category[index] += 1;
            }
            self.spikes.record(obs.timestamp);
        }

        self.size_window.push(obs.timestamp, obs.size_bytes);
        self.interval_window.push(obs.timestamp);
        self.packets_observed += 1;
    }

    /// Derive the metrics snapshot for the current state at `now`
    ///
    /// `now` must be on the same clock as observation timestamps. Only the
    /// normalization ranges and the spike window's expired head change;
    /// counters and packet windows are left as they are.
    pub fn tick(&mut self, now: f64) -> MetricsSnapshot {
        let payload_size = self.size_window.average_size();
        let data_rate = self.size_window.data_rate();

        let payload_size_normalized = self
            .normalizer
            .normalize(metric::PAYLOAD_SIZE, payload_size);
        let data_rate_normalized = self.normalizer.normalize(metric::DATA_RATE, data_rate);

        let inter_packet_interval = self.interval_window.mean_interval();
        let dns_spike = self.spikes.check(now);

        MetricsSnapshot {
            dns_total: self.dns_total,
            dns_by_category: self
                .classifier
                .categories()
                .iter()
                .zip(&self.dns_by_category)
                .map(|(category, &count)| CategoryCount {
                    category: category.clone(),
                    count,
                })
                .collect(),
            payload_size,
            data_rate,
            payload_size_normalized,
            data_rate_normalized,
            inter_packet_interval,
            dns_spike,
        }
    }

    /// Lifetime number of observations
    #[must_use]
    pub fn packets_observed(&self) -> u64 {
        self.packets_observed
    }

    #[must_use]
    pub fn dns_total(&self) -> u64 {
        self.dns_total
    }

    #[must_use]
    pub fn size_window(&self) -> &SizeTimeWindow {
        &self.size_window
    }

    #[must_use]
    pub fn interval_window(&self) -> &IntervalWindow {
        &self.interval_window
    }

    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}
