//! Live capture through a `tshark` child process

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::BufReader;
use tokio::process::{Child, ChildStdout, Command};
use tracing::{info, warn};

use super::{CaptureError, LineSource, PacketRecord, PacketSource};
use crate::config::CaptureConfig;

/// Captures on one interface by running `tshark` in field-output mode
///
/// The child is killed when the source is dropped. Once its output ends
/// the source reports [`CaptureError::Terminated`] on every call.
pub struct TsharkSource {
    child: Child,
    lines: LineSource<BufReader<ChildStdout>>,
    finished: bool,
}

impl TsharkSource {
    /// Arguments passed to `tshark` for an interface
    #[must_use]
    pub fn command_args(interface: &str) -> Vec<String> {
        [
            "-l",
            "-n",
            "-Q",
            "-i",
            interface,
            "-T",
            "fields",
            "-E",
            "separator=/t",
            "-E",
            "occurrence=a",
            "-E",
            "aggregator=,",
            "-e",
            "frame.len",
            "-e",
            "dns.qry.name",
            "-e",
            "frame.time_relative",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    /// Start capturing
    pub fn spawn(config: &CaptureConfig) -> Result<Self, CaptureError> {
        let args = Self::command_args(config.interface.as_str());
        let mut child = Command::new(&config.tshark_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CaptureError::Spawn {
                program: config.tshark_path.clone(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| CaptureError::terminated("capture process has no stdout"))?;

        info!(
            "Capturing on interface {} via {} (pid {:?})",
            config.interface,
            config.tshark_path,
            child.id()
        );

        Ok(Self {
            child,
            lines: LineSource::new(BufReader::new(stdout)),
            finished: false,
        })
    }

    /// Kill the capture process
    pub async fn stop(&mut self) {
        if let Err(e) = self.child.kill().await {
            warn!("Failed to stop capture process: {}", e);
        }
    }
}

#[async_trait]
impl PacketSource for TsharkSource {
    async fn next_record(&mut self) -> Result<Option<PacketRecord>, CaptureError> {
        if self.finished {
            return Err(CaptureError::terminated("capture process already exited"));
        }

        match self.lines.next_record().await? {
            Some(record) => Ok(Some(record)),
            None => {
                self.finished = true;
                let status = self.child.wait().await?;
                Err(CaptureError::terminated(format!(
                    "capture process exited with {}",
                    status
                )))
            }
        }
    }
}
