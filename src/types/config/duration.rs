//! Duration serialization helpers for configuration files

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

/// Serde adapter for a Duration written as (possibly fractional) seconds
///
/// Tick intervals are typically sub-second (`tick_interval = 0.1`), so
/// whole-second integers are not enough. Integers are accepted as well.
pub mod secs_f64_serde {
    use super::*;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(format!(
                "duration must be a finite, non-negative number of seconds (got {})",
                secs
            ))
        })
    }
}
