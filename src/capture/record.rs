//! Capture record format and tolerant parsing
//!
//! One record per line, fields separated by a tab:
//!
//! ```text
//! <frame length>\t<dns query names>[\t<capture time>]
//! ```
//!
//! This is what `tshark -T fields -e frame.len -e dns.qry.name
//! -e frame.time_relative` prints. Multiple query names in one packet are
//! comma separated; the first is used. The capture time is seconds since
//! the first packet and only paces replays. Any field that fails to parse
//! is treated as absent.

use crate::constants::capture::{FIELD_SEPARATOR, VALUE_SEPARATOR};
use crate::types::Observation;

/// Fields extracted from one captured packet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PacketRecord {
    pub length: Option<u64>,
    pub dns_query: Option<String>,
    /// Seconds since capture start, finite and non-negative
    pub capture_time: Option<f64>,
}

impl PacketRecord {
    /// Parse one record line
    ///
    /// Returns `None` only for blank lines; everything else yields a record
    /// whose unparseable fields are absent.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let mut fields = line.split(FIELD_SEPARATOR);
        let length = fields
            .next()
            .and_then(|field| field.trim().parse::<u64>().ok());
        let dns_query = fields.next().and_then(|field| {
            field
                .split(VALUE_SEPARATOR)
                .map(str::trim)
                .find(|name| !name.is_empty())
                .map(str::to_string)
        });
        let capture_time = fields
            .next()
            .and_then(|field| field.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0);

        Some(Self {
            length,
            dns_query,
            capture_time,
        })
    }

    /// Whether neither a length nor a query could be extracted
    ///
    /// A capture time alone does not make a usable record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.dns_query.is_none()
    }

    /// Stamp the record with its arrival time
    ///
    /// A missing length counts as 0 bytes; a record with no fields at all
    /// yields `None` and is dropped by the caller.
    #[must_use]
    pub fn into_observation(self, timestamp: f64) -> Option<Observation> {
        if self.is_empty() {
            return None;
        }
        Some(Observation {
            timestamp,
            size_bytes: self.length.unwrap_or(0),
            dns_query: self.dns_query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_packet() {
        let record = PacketRecord::parse_line("1514").unwrap();
        assert_eq!(record.length, Some(1514));
        assert_eq!(record.dns_query, None);
    }

    #[test]
    fn test_plain_packet_with_empty_dns_field() {
        let record = PacketRecord::parse_line("60\t\n").unwrap();
        assert_eq!(record.length, Some(60));
        assert_eq!(record.dns_query, None);
    }

    #[test]
    fn test_dns_packet() {
        let record = PacketRecord::parse_line("123\twww.google.com").unwrap();
        assert_eq!(record.length, Some(123));
        assert_eq!(record.dns_query.as_deref(), Some("www.google.com"));
    }

    #[test]
    fn test_multiple_queries_take_first() {
        let record = PacketRecord::parse_line("90\ta.example,b.example\r\n").unwrap();
        assert_eq!(record.dns_query.as_deref(), Some("a.example"));

        let record = PacketRecord::parse_line("90\t,b.example").unwrap();
        assert_eq!(record.dns_query.as_deref(), Some("b.example"));
    }

    #[test]
    fn test_bad_length_is_absent() {
        let record = PacketRecord::parse_line("abc\t").unwrap();
        assert_eq!(record, PacketRecord::default());
        assert!(record.is_empty());

        let record = PacketRecord::parse_line("-5\tapple.com").unwrap();
        assert_eq!(record.length, None);
        assert_eq!(record.dns_query.as_deref(), Some("apple.com"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(PacketRecord::parse_line(""), None);
        assert_eq!(PacketRecord::parse_line("  \r\n"), None);
    }

    #[test]
    fn test_capture_time_column() {
        let record = PacketRecord::parse_line("77\tspotify.com\t1.250000000").unwrap();
        assert_eq!(record.length, Some(77));
        assert_eq!(record.dns_query.as_deref(), Some("spotify.com"));
        assert_eq!(record.capture_time, Some(1.25));

        let record = PacketRecord::parse_line("60\t\t0.5").unwrap();
        assert_eq!(record.dns_query, None);
        assert_eq!(record.capture_time, Some(0.5));
    }

    #[test]
    fn test_bad_capture_time_is_absent() {
        for line in ["77\tspotify.com\textra", "77\t\t-1.0", "77\t\tNaN", "77\t\tinf"] {
            let record = PacketRecord::parse_line(line).unwrap();
            assert_eq!(record.length, Some(77), "{line}");
            assert_eq!(record.capture_time, None, "{line}");
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = PacketRecord::parse_line("77\tspotify.com\t0.1\textra").unwrap();
        assert_eq!(record.length, Some(77));
        assert_eq!(record.capture_time, Some(0.1));
    }

    #[test]
    fn test_capture_time_alone_is_empty() {
        let record = PacketRecord::parse_line("\t\t3.0").unwrap();
        assert!(record.is_empty());
        assert!(record.into_observation(3.0).is_none());
    }

    #[test]
    fn test_into_observation() {
        let obs = PacketRecord::parse_line("120\tinstagram.com")
            .unwrap()
            .into_observation(2.5)
            .unwrap();
        assert_eq!(obs, Observation::dns(2.5, 120, "instagram.com"));

        let obs = PacketRecord::parse_line("x\tinstagram.com")
            .unwrap()
            .into_observation(3.0)
            .unwrap();
        assert_eq!(obs.size_bytes, 0);

        assert!(PacketRecord::default().into_observation(1.0).is_none());
    }
}
