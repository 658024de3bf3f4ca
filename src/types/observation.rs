//! Per-packet observation fed into the statistics engine

/// Metadata extracted from one captured packet
///
/// `timestamp` is monotonic seconds on the pipeline clock; the engine
/// never looks at wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: f64,
    pub size_bytes: u64,
    pub dns_query: Option<String>,
}

impl Observation {
    /// Observation for a non-DNS packet
    #[must_use]
    pub fn packet(timestamp: f64, size_bytes: u64) -> Self {
        Self {
            timestamp,
            size_bytes,
            dns_query: None,
        }
    }

    /// Observation for a DNS packet carrying a query name
    #[must_use]
    pub fn dns(timestamp: f64, size_bytes: u64, query: impl Into<String>) -> Self {
        Self {
            timestamp,
            size_bytes,
            dns_query: Some(query.into()),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_dns(&self) -> bool {
        self.dns_query.is_some()
    }
}
