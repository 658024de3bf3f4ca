//! Record source over any line-oriented async reader

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::trace;

use super::{CaptureError, PacketRecord, PacketSource};

/// Reads [`PacketRecord`] lines from an async reader
///
/// Used for replaying recorded captures and, wrapped by
/// [`TsharkSource`](super::TsharkSource), for live capture. Invalid UTF-8
/// is replaced rather than rejected so a corrupt line cannot end the
/// stream.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    lines_read: u64,
}

impl<R> LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            lines_read: 0,
        }
    }

    /// Lines consumed so far, including skipped ones
    #[must_use]
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

#[async_trait]
impl<R> PacketSource for LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_record(&mut self) -> Result<Option<PacketRecord>, CaptureError> {
        // `buf` is only cleared after a full line, so bytes read by a
        // cancelled call are kept for the next one.
        loop {
            let n = self.reader.read_until(b'\n', &mut self.buf).await?;
            if n == 0 && self.buf.is_empty() {
                return Ok(None);
            }
            self.lines_read += 1;

            let record = PacketRecord::parse_line(&String::from_utf8_lossy(&self.buf));
            self.buf.clear();
            match record {
                Some(record) => return Ok(Some(record)),
                None => trace!("Skipping blank capture line {}", self.lines_read),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_records_and_skips_blank_lines() {
        let input: &[u8] = b"100\n\n200\tgoogle.com\n   \n300";
        let mut source = LineSource::new(input);

        let first = source.next_record().await.unwrap().unwrap();
        assert_eq!(first.length, Some(100));

        let second = source.next_record().await.unwrap().unwrap();
        assert_eq!(second.dns_query.as_deref(), Some("google.com"));

        // final line without newline still parses
        let third = source.next_record().await.unwrap().unwrap();
        assert_eq!(third.length, Some(300));

        assert!(source.next_record().await.unwrap().is_none());
        assert_eq!(source.lines_read(), 5);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_tolerated() {
        let input: &[u8] = b"64\t\xff\xfe.example\n128\n";
        let mut source = LineSource::new(input);

        let first = source.next_record().await.unwrap().unwrap();
        assert_eq!(first.length, Some(64));
        assert!(first.dns_query.unwrap().ends_with(".example"));

        let second = source.next_record().await.unwrap().unwrap();
        assert_eq!(second.length, Some(128));
    }

    #[tokio::test]
    async fn test_empty_input_ends_immediately() {
        let mut source = LineSource::new(&b""[..]);
        assert!(source.next_record().await.unwrap().is_none());
    }
}
