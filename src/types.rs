//! Core value types shared by the engine, capture and transport layers

pub mod config;
mod observation;
pub mod validated;

pub use config::{SpikeThreshold, ThreadCount, WindowCapacity, secs_f64_serde};
pub use observation::Observation;
pub use validated::{CategoryName, ConfigPath, InterfaceName, ValidationError};
