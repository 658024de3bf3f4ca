//! Replay pacing by recorded capture time

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

use super::{CaptureError, PacketRecord, PacketSource};

/// Releases records no earlier than their capture time allows
///
/// The first timed record fixes the origin: a record captured `d` seconds
/// after it is released `d` seconds after the origin was read. Records
/// without a capture time, or whose time is already due, pass straight
/// through. Without this a file source is always ready and a whole replay
/// is consumed in one burst.
pub struct PacedSource<S> {
    inner: S,
    pending: Option<PacketRecord>,
    origin: Option<(Instant, f64)>,
}

impl<S> PacedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pending: None,
            origin: None,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn release_at(&mut self, capture_time: f64) -> Instant {
        let (start, first) = *self
            .origin
            .get_or_insert_with(|| (Instant::now(), capture_time));
        let offset = (capture_time - first).max(0.0);
        start + Duration::from_secs_f64(offset)
    }
}

#[async_trait]
impl<S> PacketSource for PacedSource<S>
where
    S: PacketSource,
{
    async fn next_record(&mut self) -> Result<Option<PacketRecord>, CaptureError> {
        // The record is parked in `pending` before waiting, so a cancelled
        // call loses nothing.
        if self.pending.is_none() {
            match self.inner.next_record().await? {
                Some(record) => self.pending = Some(record),
                None => return Ok(None),
            }
        }

        if let Some(capture_time) = self.pending.as_ref().and_then(|r| r.capture_time) {
            let deadline = self.release_at(capture_time);
            if deadline > Instant::now() {
                tokio::time::sleep_until(deadline).await;
            }
        }

        Ok(self.pending.take())
    }
}
