//! Packet capture sources
//!
//! A [`PacketSource`] yields [`PacketRecord`]s until its stream ends.
//! Records are stamped with their arrival time by the pipeline, not here.

mod error;
mod line_source;
mod paced;
mod record;
mod tshark;

pub use error::CaptureError;
pub use line_source::LineSource;
pub use paced::PacedSource;
pub use record::PacketRecord;
pub use tshark::TsharkSource;

use async_trait::async_trait;

/// Producer of captured packet records
#[async_trait]
pub trait PacketSource: Send {
    /// Next record, `Ok(None)` once the stream has ended
    ///
    /// Must be cancel safe: the pipeline polls it inside `tokio::select!`.
    async fn next_record(&mut self) -> Result<Option<PacketRecord>, CaptureError>;
}

#[async_trait]
impl<S> PacketSource for Box<S>
where
    S: PacketSource + ?Sized,
{
    async fn next_record(&mut self) -> Result<Option<PacketRecord>, CaptureError> {
        (**self).next_record().await
    }
}
