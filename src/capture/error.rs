//! Capture error types

use std::io;
use thiserror::Error;

/// Failures of the packet capture source
///
/// All of these end the pipeline: capture loss is not retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaptureError {
    /// The capture helper could not be started
    #[error("failed to start capture command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading from the capture stream failed
    #[error("failed to read capture stream: {0}")]
    Read(#[from] io::Error),

    /// The capture stream ended
    #[error("capture source terminated: {reason}")]
    Terminated { reason: String },
}

impl CaptureError {
    pub(crate) fn terminated(reason: impl Into<String>) -> Self {
        Self::Terminated {
            reason: reason.into(),
        }
    }
}
