//! Default values for configuration fields
//!
//! This module centralizes all default value functions used in serde deserialization.

use crate::constants;
use crate::types::{CategoryName, InterfaceName, WindowCapacity};
use std::time::Duration;

#[inline]
pub fn interface() -> InterfaceName {
    InterfaceName::new(constants::capture::DEFAULT_INTERFACE.to_string())
        .expect("default interface name is valid")
}

#[inline]
pub fn tshark_path() -> String {
    constants::capture::DEFAULT_TSHARK_PATH.to_string()
}

#[inline]
pub fn tick_interval() -> Duration {
    constants::engine::TICK_INTERVAL
}

#[inline]
pub fn size_window_capacity() -> WindowCapacity {
    WindowCapacity::SIZE_TIME
}

#[inline]
pub fn interval_window_capacity() -> WindowCapacity {
    WindowCapacity::INTERVAL
}

#[inline]
pub fn spike_window() -> Duration {
    constants::engine::SPIKE_WINDOW
}

#[inline]
pub fn spike_window_capacity() -> WindowCapacity {
    WindowCapacity::SPIKE
}

/// Default tracked categories (social media and app-store domains)
pub fn categories() -> Vec<CategoryName> {
    constants::engine::DEFAULT_CATEGORIES
        .iter()
        .map(|name| CategoryName::new((*name).to_string()).expect("default category is valid"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_order() {
        let names: Vec<String> = categories().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            ["instagram", "facebook", "google", "apple", "spotify", "whatsapp"]
        );
    }

    #[test]
    fn test_default_windows() {
        assert_eq!(size_window_capacity().get(), 600);
        assert_eq!(interval_window_capacity().get(), 60);
        assert_eq!(spike_window(), Duration::from_millis(500));
        assert_eq!(tick_interval(), Duration::from_millis(100));
    }
}
