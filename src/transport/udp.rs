//! Fire-and-forget OSC over UDP

use anyhow::{Context, Result};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

use super::MetricsSink;
use super::osc::{address_for, encode_message};
use crate::config::TransportConfig;
use crate::engine::MetricsSnapshot;

/// Sends each snapshot value as its own OSC message over UDP
///
/// Uses non-blocking `try_send`; a full socket buffer or an unreachable
/// receiver drops the message. The first failure after a success is
/// logged at warn, repeats at debug.
#[derive(Debug)]
pub struct OscUdpSink {
    socket: UdpSocket,
    target: SocketAddr,
    failed_sends: u64,
    sent_messages: u64,
}

impl OscUdpSink {
    /// Bind an ephemeral local socket connected to the configured receiver
    pub async fn connect(config: &TransportConfig) -> Result<Self> {
        let address = config.address();
        let target = tokio::net::lookup_host(&address)
            .await
            .with_context(|| format!("Failed to resolve telemetry target '{}'", address))?
            .next()
            .ok_or_else(|| anyhow::anyhow!("Telemetry target '{}' resolved to nothing", address))?;

        Self::connect_addr(target).await
    }

    /// Like [`connect`](Self::connect) with an already resolved address
    pub async fn connect_addr(target: SocketAddr) -> Result<Self> {
        let local = if target.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };
        let socket = UdpSocket::bind(local)
            .await
            .context("Failed to bind telemetry socket")?;
        socket
            .connect(target)
            .await
            .with_context(|| format!("Failed to connect telemetry socket to {}", target))?;

        info!("Sending OSC telemetry to {}", target);

        Ok(Self {
            socket,
            target,
            failed_sends: 0,
            sent_messages: 0,
        })
    }

    #[must_use]
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// Messages handed to the socket successfully
    #[must_use]
    pub fn sent_messages(&self) -> u64 {
        self.sent_messages
    }

    /// Current run of consecutive failed sends
    #[must_use]
    pub fn failed_sends(&self) -> u64 {
        self.failed_sends
    }
}

impl MetricsSink for OscUdpSink {
    fn send(&mut self, snapshot: &MetricsSnapshot) {
        for value in snapshot.values() {
            let packet = encode_message(&address_for(&value.name), value.value);
            match self.socket.try_send(&packet) {
                Ok(_) => {
                    if self.failed_sends > 0 {
                        info!(
                            "Telemetry to {} recovered after {} failed sends",
                            self.target, self.failed_sends
                        );
                        self.failed_sends = 0;
                    }
                    self.sent_messages += 1;
                }
                Err(e) => {
                    if self.failed_sends == 0 {
                        warn!("Failed to send telemetry to {}: {}", self.target, e);
                    } else {
                        debug!("Telemetry send to {} failed again: {}", self.target, e);
                    }
                    self.failed_sends += 1;
                }
            }
        }
    }
}
