//! Minimal OSC 1.0 message encoding
//!
//! Only what telemetry needs: one address and one numeric argument per
//! message. Strings are NUL terminated and padded to a 4-byte boundary;
//! arguments are big-endian.

use crate::engine::MetricValue;

/// OSC address for a dotted metric name (`dns_requests.total` -> `/dns_requests/total`)
#[must_use]
pub fn address_for(metric: &str) -> String {
    let mut address = String::with_capacity(metric.len() + 1);
    address.push('/');
    address.extend(metric.chars().map(|c| if c == '.' { '/' } else { c }));
    address
}

/// Encode a single-argument OSC message
///
/// Integers that fit in 32 bits are sent as `i`, larger ones as `h`
/// (int64). Floats are sent as `f` (float32).
#[must_use]
pub fn encode_message(address: &str, value: MetricValue) -> Vec<u8> {
    let mut packet = Vec::with_capacity(padded_len(address.len()) + 12);
    write_padded_str(&mut packet, address);

    match value {
        MetricValue::Int(v) => match i32::try_from(v) {
            Ok(small) => {
                write_padded_str(&mut packet, ",i");
                packet.extend_from_slice(&small.to_be_bytes());
            }
            Err(_) => {
                write_padded_str(&mut packet, ",h");
                let wide = i64::try_from(v).unwrap_or(i64::MAX);
                packet.extend_from_slice(&wide.to_be_bytes());
            }
        },
        MetricValue::Float(v) => {
            write_padded_str(&mut packet, ",f");
            packet.extend_from_slice(&(v as f32).to_be_bytes());
        }
    }

    packet
}

/// Length of a string once NUL terminated and padded
#[inline]
const fn padded_len(len: usize) -> usize {
    (len + 4) & !3
}

fn write_padded_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    let padding = padded_len(s.len()) - s.len();
    buf.extend(std::iter::repeat_n(0u8, padding));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_for() {
        assert_eq!(address_for("dns_requests.total"), "/dns_requests/total");
        assert_eq!(address_for("dns_requests.google"), "/dns_requests/google");
        assert_eq!(address_for("payload_size"), "/payload_size");
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 4);
        assert_eq!(padded_len(3), 4);
        assert_eq!(padded_len(4), 8);
        assert_eq!(padded_len(5), 8);
    }

    #[test]
    fn test_encode_int() {
        let packet = encode_message("/dns_spike", MetricValue::Int(1));
        let mut expected = b"/dns_spike\0\0".to_vec();
        expected.extend_from_slice(b",i\0\0");
        expected.extend_from_slice(&[0, 0, 0, 1]);
        assert_eq!(packet, expected);
        assert_eq!(packet.len() % 4, 0);
    }

    #[test]
    fn test_encode_float() {
        let packet = encode_message("/data_rate", MetricValue::Float(1.5));
        assert_eq!(&packet[..12], b"/data_rate\0\0");
        assert_eq!(&packet[12..16], b",f\0\0");
        assert_eq!(&packet[16..], &1.5f32.to_be_bytes());
    }

    #[test]
    fn test_address_multiple_of_four_gets_full_pad() {
        // "/abc" is 4 bytes, so 4 NULs follow
        let packet = encode_message("/abc", MetricValue::Int(0));
        assert_eq!(&packet[..8], b"/abc\0\0\0\0");
    }

    #[test]
    fn test_large_int_uses_int64() {
        let value = u64::from(u32::MAX) + 1;
        let packet = encode_message("/n", MetricValue::Int(value));
        assert_eq!(&packet[4..8], b",h\0\0");
        assert_eq!(&packet[8..], &(value as i64).to_be_bytes());
    }
}
