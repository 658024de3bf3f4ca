//! Immutable per-tick metrics snapshot

use crate::constants::metric;
use crate::types::CategoryName;
use std::borrow::Cow;
use std::fmt;

/// Numeric value of one outbound metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(u64),
    Float(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:.4}", v),
        }
    }
}

/// One named outbound value
#[derive(Debug, Clone, PartialEq)]
pub struct NamedValue {
    pub name: Cow<'static, str>,
    pub value: MetricValue,
}

impl NamedValue {
    fn int(name: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self {
            name: name.into(),
            value: MetricValue::Int(value),
        }
    }

    fn float(name: &'static str, value: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: MetricValue::Float(value),
        }
    }
}

/// DNS query count for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: CategoryName,
    pub count: u64,
}

/// Snapshot of the engine's derived metrics at one tick
///
/// Created by [`Engine::tick`](super::Engine::tick), handed to a sink and
/// dropped. DNS counters are cumulative over the process lifetime; the
/// rest describe the current windows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSnapshot {
    pub dns_total: u64,
    pub dns_by_category: Vec<CategoryCount>,
    pub payload_size: f64,
    pub data_rate: f64,
    pub payload_size_normalized: f64,
    pub data_rate_normalized: f64,
    pub inter_packet_interval: f64,
    pub dns_spike: bool,
}

impl MetricsSnapshot {
    /// Count for a category, `None` if it is not tracked
    #[must_use]
    pub fn category_count(&self, category: &str) -> Option<u64> {
        self.dns_by_category
            .iter()
            .find(|c| c.category.as_str() == category)
            .map(|c| c.count)
    }

    /// All outbound values, one per metric
    ///
    /// Order is stable but carries no meaning for receivers.
    #[must_use]
    pub fn values(&self) -> Vec<NamedValue> {
        let mut values = Vec::with_capacity(7 + self.dns_by_category.len());
        values.push(NamedValue::int(metric::DNS_TOTAL, self.dns_total));
        values.extend(self.dns_by_category.iter().map(|c| {
            NamedValue::int(
                format!("{}{}", metric::DNS_CATEGORY_PREFIX, c.category),
                c.count,
            )
        }));
        values.push(NamedValue::float(metric::PAYLOAD_SIZE, self.payload_size));
        values.push(NamedValue::float(
            metric::PAYLOAD_SIZE_NORMALIZED,
            self.payload_size_normalized,
        ));
        values.push(NamedValue::float(metric::DATA_RATE, self.data_rate));
        values.push(NamedValue::float(
            metric::DATA_RATE_NORMALIZED,
            self.data_rate_normalized,
        ));
        values.push(NamedValue::float(
            metric::INTER_PACKET_INTERVAL,
            self.inter_packet_interval,
        ));
        values.push(NamedValue::int(metric::DNS_SPIKE, u64::from(self.dns_spike)));
        values
    }
}
