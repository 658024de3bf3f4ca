//! Lifetime min/max normalization
//!
//! Ranges are never reset, so the output for a given value becomes less
//! reactive the longer the process runs.

use std::collections::HashMap;

/// Running minimum and maximum of one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningRange {
    pub min: f64,
    pub max: f64,
}

impl RunningRange {
    /// Identity range: widened by the first value seen
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Widen the range to include `value`
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Position of `value` within the range, 0 for a degenerate range
    #[must_use]
    pub fn proportion(&self, value: f64) -> f64 {
        if self.max > self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for RunningRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Independent lifetime ranges keyed by metric name
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    ranges: HashMap<String, RunningRange>,
}

impl Normalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the metric's range with `value`, then map `value` into it
    ///
    /// The first value for a metric (and any value while min == max)
    /// yields 0. NaN is not folded into the range and yields 0.
    pub fn normalize(&mut self, metric: &str, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        let range = self.ranges.entry(metric.to_string()).or_default();
        range.include(value);
        range.proportion(value)
    }

    /// Current range of a metric, `None` if it was never normalized
    #[must_use]
    pub fn range(&self, metric: &str) -> Option<RunningRange> {
        self.ranges.get(metric).copied()
    }
}
