//! Capacity and threshold configuration types

use std::num::NonZeroUsize;

nonzero_newtype! {
    /// A non-zero window capacity
    ///
    /// Bounds the number of entries a rolling window retains.
    ///
    /// # Examples
    /// ```
    /// use netpulse::types::WindowCapacity;
    ///
    /// let cap = WindowCapacity::new(600).unwrap();
    /// assert_eq!(cap.get(), 600);
    ///
    /// assert!(WindowCapacity::new(0).is_none());
    /// ```
    #[doc(alias = "maxlen")]
    pub struct WindowCapacity(NonZeroUsize: usize, serialize as serialize_u64);
}

impl WindowCapacity {
    /// Size/time window default (about 60 s of packets at the expected rate)
    pub const SIZE_TIME: Self = Self(NonZeroUsize::new(600).unwrap());

    /// Inter-packet interval window default
    pub const INTERVAL: Self = Self(NonZeroUsize::new(60).unwrap());

    /// Spike window safety cap default
    pub const SPIKE: Self = Self(NonZeroUsize::new(60).unwrap());
}

nonzero_newtype! {
    /// Minimum number of DNS queries inside the spike window that counts as a spike
    pub struct SpikeThreshold(NonZeroUsize: usize, serialize as serialize_u64);
}

impl SpikeThreshold {
    pub const DEFAULT: Self = Self(NonZeroUsize::new(3).unwrap());
}

impl Default for SpikeThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

nonzero_newtype! {
    /// A non-zero thread count
    ///
    /// Ensures the runtime always has at least 1 worker thread.
    pub struct ThreadCount(NonZeroUsize: usize, serialize as serialize_u64);
}

impl ThreadCount {
    pub const SINGLE: Self = Self(NonZeroUsize::new(1).unwrap());
}

impl Default for ThreadCount {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl std::str::FromStr for ThreadCount {
    type Err = std::num::ParseIntError;

    /// `0` means "one worker per CPU core"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<usize>()?;
        if value == 0 {
            let cores = std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1);
            return Ok(Self::new(cores).unwrap_or(Self::SINGLE));
        }
        Ok(Self::new(value).unwrap_or(Self::SINGLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_capacity_zero_rejected() {
        assert!(WindowCapacity::new(0).is_none());
        assert_eq!(WindowCapacity::new(3).unwrap().get(), 3);
    }

    #[test]
    fn test_window_capacity_defaults() {
        assert_eq!(WindowCapacity::SIZE_TIME.get(), 600);
        assert_eq!(WindowCapacity::INTERVAL.get(), 60);
        assert_eq!(WindowCapacity::SPIKE.get(), 60);
    }

    #[test]
    fn test_window_capacity_deserialize_zero_fails() {
        #[derive(Debug, serde::Deserialize)]
        struct Holder {
            #[allow(dead_code)]
            cap: WindowCapacity,
        }
        let err = toml::from_str::<Holder>("cap = 0").unwrap_err();
        assert!(err.to_string().contains("WindowCapacity cannot be 0"));
    }

    #[test]
    fn test_spike_threshold_default() {
        assert_eq!(SpikeThreshold::default().get(), 3);
    }

    #[test]
    fn test_thread_count_from_str() {
        let count: ThreadCount = "4".parse().unwrap();
        assert_eq!(count.get(), 4);

        let auto: ThreadCount = "0".parse().unwrap();
        assert!(auto.get() >= 1);

        assert!("abc".parse::<ThreadCount>().is_err());
    }
}
