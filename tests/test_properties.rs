//! Property-based tests using proptest
//!
//! These tests verify invariants of the statistics primitives and the
//! capture parser with arbitrary input generation.

use netpulse::PacketRecord;
use netpulse::stats::{BoundedWindow, Normalizer, SpikeDetector};
use netpulse::types::{SpikeThreshold, WindowCapacity};
use proptest::prelude::*;
use std::time::Duration;

/// Non-decreasing timestamps built from non-negative gaps
fn timestamps(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u32..400, 0..max_len).prop_map(|gaps| {
        let mut t = 0.0;
        gaps.into_iter()
            .map(|gap| {
                t += f64::from(gap) / 1000.0;
                t
            })
            .collect()
    })
}

// =============================================================================
// 1. BoundedWindow - retains exactly the most recent items
// =============================================================================

proptest! {
    #[test]
    fn prop_window_keeps_last_items(
        capacity in 1usize..32,
        items in prop::collection::vec(any::<u32>(), 0..128)
    ) {
        let mut window = BoundedWindow::new(WindowCapacity::new(capacity).unwrap());
        for &item in &items {
            window.push(item);
        }

        let expected: Vec<u32> = items
            .iter()
            .copied()
            .skip(items.len().saturating_sub(capacity))
            .collect();
        let actual: Vec<u32> = window.iter().copied().collect();

        prop_assert_eq!(actual, expected);
        prop_assert!(window.len() <= capacity);
    }
}

// =============================================================================
// 2. Normalizer - output bounded and anchored to the lifetime range
// =============================================================================

proptest! {
    #[test]
    fn prop_normalized_in_unit_range(
        values in prop::collection::vec(-1.0e9f64..1.0e9, 1..64)
    ) {
        let mut normalizer = Normalizer::new();
        for value in values {
            let n = normalizer.normalize("metric", value);
            prop_assert!((0.0..=1.0).contains(&n), "{} -> {}", value, n);
        }
    }

    #[test]
    fn prop_new_maximum_normalizes_to_one(
        start in -1.0e6f64..1.0e6,
        steps in prop::collection::vec(1.0f64..1000.0, 1..32)
    ) {
        let mut normalizer = Normalizer::new();
        normalizer.normalize("metric", start);

        let mut value = start;
        for step in steps {
            value += step;
            prop_assert_eq!(normalizer.normalize("metric", value), 1.0);
        }
    }

    #[test]
    fn prop_metrics_normalize_independently(
        a in prop::collection::vec(-1.0e3f64..1.0e3, 1..16),
        b in -1.0e3f64..1.0e3
    ) {
        let mut normalizer = Normalizer::new();
        for value in a {
            normalizer.normalize("a", value);
        }
        prop_assert_eq!(normalizer.normalize("b", b), 0.0);
    }
}

// =============================================================================
// 3. SpikeDetector - agrees with a brute-force count
// =============================================================================

proptest! {
    #[test]
    fn prop_spike_matches_brute_force(
        ts in timestamps(64),
        threshold in 1usize..6
    ) {
        let window = 0.5;
        let mut detector = SpikeDetector::new(
            SpikeThreshold::new(threshold).unwrap(),
            Duration::from_millis(500),
            WindowCapacity::new(1024).unwrap(),
        );

        for (i, &now) in ts.iter().enumerate() {
            let flagged = detector.record_and_check(now);
            let in_window = ts[..=i].iter().filter(|&&t| now - t <= window).count();
            prop_assert_eq!(flagged, in_window >= threshold, "at index {}", i);
        }
    }
}

// =============================================================================
// 4. PacketRecord::parse_line - tolerant parsing
// =============================================================================

proptest! {
    #[test]
    fn prop_parse_line_never_panics(s in ".*") {
        let _ = PacketRecord::parse_line(&s);
    }

    #[test]
    fn prop_parse_line_reads_length_and_first_query(
        length in any::<u64>(),
        queries in prop::collection::vec("[a-z0-9.-]{1,20}", 1..4)
    ) {
        let line = format!("{}\t{}", length, queries.join(","));
        let record = PacketRecord::parse_line(&line).unwrap();

        prop_assert_eq!(record.length, Some(length));
        prop_assert_eq!(record.dns_query.as_deref(), Some(queries[0].as_str()));
    }
}
