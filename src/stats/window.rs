//! Count-bounded windows over recent packets
//!
//! Eviction is purely by count: the oldest entry is dropped once the
//! window is full, regardless of its age. The wall-clock span a window
//! covers therefore varies with the packet rate.

use crate::types::WindowCapacity;
use std::collections::VecDeque;

/// Fixed-capacity FIFO ring
///
/// `push` never lets the stored count exceed the capacity; the head
/// (oldest entry) is evicted first.
#[derive(Debug, Clone)]
pub struct BoundedWindow<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedWindow<T> {
    #[must_use]
    pub fn new(capacity: WindowCapacity) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Append to the tail, evicting from the head while at capacity
    pub fn push(&mut self, item: T) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(item);
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in arrival order, oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.entries.front()
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.entries.back()
    }
}

/// `(timestamp, size_bytes)` pairs for payload size and data rate
#[derive(Debug, Clone)]
pub struct SizeTimeWindow {
    inner: BoundedWindow<(f64, u64)>,
}

impl SizeTimeWindow {
    #[must_use]
    pub fn new(capacity: WindowCapacity) -> Self {
        Self {
            inner: BoundedWindow::new(capacity),
        }
    }

    pub fn push(&mut self, timestamp: f64, size_bytes: u64) {
        self.inner.push((timestamp, size_bytes));
    }

    /// Mean of the stored sizes, 0 when empty
    #[must_use]
    pub fn average_size(&self) -> f64 {
        if self.inner.is_empty() {
            return 0.0;
        }
        self.total_bytes() as f64 / self.inner.len() as f64
    }

    /// Stored bytes divided by the span between first and last timestamp
    ///
    /// Returns 0 with fewer than 2 entries or a non-positive span.
    #[must_use]
    pub fn data_rate(&self) -> f64 {
        if self.inner.len() < 2 {
            return 0.0;
        }
        let (Some(&(first, _)), Some(&(last, _))) = (self.inner.front(), self.inner.back()) else {
            return 0.0;
        };
        let span = last - first;
        if span > 0.0 {
            self.total_bytes() as f64 / span
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.inner
            .iter()
            .fold(0u64, |acc, &(_, size)| acc.saturating_add(size))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &(f64, u64)> + '_ {
        self.inner.iter()
    }
}

/// Packet arrival timestamps for the mean inter-packet interval
#[derive(Debug, Clone)]
pub struct IntervalWindow {
    inner: BoundedWindow<f64>,
}

impl IntervalWindow {
    #[must_use]
    pub fn new(capacity: WindowCapacity) -> Self {
        Self {
            inner: BoundedWindow::new(capacity),
        }
    }

    pub fn push(&mut self, timestamp: f64) {
        self.inner.push(timestamp);
    }

    /// Mean of consecutive timestamp differences, 0 with fewer than 2 entries
    ///
    /// The consecutive differences telescope, so this is
    /// `(last - first) / (len - 1)`.
    #[must_use]
    pub fn mean_interval(&self) -> f64 {
        let len = self.inner.len();
        if len < 2 {
            return 0.0;
        }
        match (self.inner.front(), self.inner.back()) {
            (Some(first), Some(last)) => (last - first) / (len - 1) as f64,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &f64> + '_ {
        self.inner.iter()
    }
}
