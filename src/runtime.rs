//! Tokio runtime configuration and shutdown handling for the binary

use crate::types::ThreadCount;
use anyhow::Result;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Number of worker threads
    worker_threads: usize,
}

impl RuntimeConfig {
    /// Create runtime config from optional thread count
    ///
    /// Defaults to a single thread: the pipeline is one task, extra workers
    /// only help the capture child's I/O.
    #[must_use]
    pub fn from_args(threads: Option<ThreadCount>) -> Self {
        Self {
            worker_threads: threads.unwrap_or_default().get(),
        }
    }

    #[must_use]
    pub const fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    #[must_use]
    pub const fn is_single_threaded(&self) -> bool {
        self.worker_threads == 1
    }

    /// Build the tokio runtime
    ///
    /// Current-thread for one worker, multi-threaded otherwise.
    pub fn build_runtime(self) -> Result<tokio::runtime::Runtime> {
        let rt = if self.is_single_threaded() {
            tracing::info!("Starting netpulse with single-threaded runtime");
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
        } else {
            tracing::info!(
                "Starting netpulse with {} worker threads",
                self.worker_threads
            );
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(self.worker_threads)
                .enable_all()
                .build()?
        };
        Ok(rt)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_args(None)
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM on Unix)
///
/// If a handler cannot be installed that branch never resolves, leaving
/// the other signal (or capture loss) to end the run.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
