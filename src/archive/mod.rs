//! Streaming ZIP sink.
//!
//! The archive is written entry by entry into one half of an in-process
//! duplex pipe while the HTTP layer streams the other half out to the
//! client, so the finished archive never sits in memory as a whole. When
//! the client disconnects the read half is dropped, the next write fails
//! with a broken pipe, and the harvest task winds down. No orphaned
//! background work outlives a request.

use anyhow::{Context, Result};
use async_zip::tokio::write::ZipFileWriter;
use async_zip::{Compression, DeflateOption, ZipEntryBuilder};
use tokio::io::DuplexStream;
use tokio_util::io::ReaderStream;

/// Buffer between the zip writer and the HTTP response stream.
///
/// Large enough to decouple fetch completions from socket writes without
/// holding a meaningful share of an archive in memory.
const DUPLEX_BUFFER_SIZE: usize = 64 * 1024;

/// Incremental writer for one archive, opened once per harvest job.
///
/// Entries are append-only and written in the order `append` is called;
/// no entry is ever overwritten (the extractor guarantees unique paths).
pub struct ZipStreamer {
    writer: ZipFileWriter<DuplexStream>,
    compression_level: u32,
}

impl ZipStreamer {
    /// Open a new streaming archive.
    ///
    /// Returns the append handle and the compressed byte stream the HTTP
    /// layer hands to the response body. Level 0 stores entries
    /// verbatim; levels 1-9 deflate, with the level selecting the
    /// deflate effort.
    #[must_use]
    pub fn open(compression_level: u32) -> (Self, ReaderStream<DuplexStream>) {
        let (write_half, read_half) = tokio::io::duplex(DUPLEX_BUFFER_SIZE);

        let streamer = Self {
            writer: ZipFileWriter::with_tokio(write_half),
            compression_level,
        };

        (streamer, ReaderStream::new(read_half))
    }

    fn entry(&self, name: String) -> ZipEntryBuilder {
        if self.compression_level == 0 {
            return ZipEntryBuilder::new(name.into(), Compression::Stored);
        }
        // The codec exposes effort presets rather than raw zlib levels,
        // so the 1-9 range maps onto fast/normal/maximum bands.
        let option = match self.compression_level {
            1..=3 => DeflateOption::Fast,
            4..=6 => DeflateOption::Normal,
            _ => DeflateOption::Maximum,
        };
        ZipEntryBuilder::new(name.into(), Compression::Deflate).deflate_option(option)
    }

    /// Append one named entry.
    ///
    /// Fails when the archive can no longer be written, which includes
    /// the consumer having dropped the output stream.
    pub async fn append(&mut self, name: String, bytes: &[u8]) -> Result<()> {
        let entry = self.entry(name);
        self.writer
            .write_entry_whole(entry, bytes)
            .await
            .context("Failed to write archive entry")?;
        Ok(())
    }

    /// Flush the central directory and close the archive.
    ///
    /// Once this returns, every appended entry is fully written and the
    /// output stream will end after the remaining buffered bytes drain.
    pub async fn finalize(self) -> Result<()> {
        self.writer
            .close()
            .await
            .context("Failed to finalize archive")?;
        Ok(())
    }
}
