//! Reader-to-writer pump.

use crate::domain::IterConfig;
use alloc::vec;
use chunkio_stream::{ByteReader, ByteWriter, ReadOutcome};

/// Drain `reader` into `writer` until end-of-data, using the default scratch
/// buffer size. Returns the total number of bytes copied.
///
/// See [`copy_with_config`].
pub async fn copy<R, W>(reader: &mut R, writer: &mut W) -> Result<u64, CopyError<R::Error, W::Error>>
where
    R: ByteReader,
    W: ByteWriter,
{
    copy_with_config(reader, writer, IterConfig::default()).await
}

/// Drain `reader` into `writer` until end-of-data through a scratch buffer of
/// [`IterConfig::buf_size`] bytes. Returns the total number of bytes copied.
///
/// Bytes pass through unchanged and in order. Each filled buffer is
/// resubmitted to the writer until fully consumed, so partial writes never
/// lose data. The writer is flushed once after end-of-data. A zero-byte read
/// is not end-of-data; copying simply continues, so a reader that stalls
/// forever makes this call pend forever.
///
/// # Errors
///
/// The first reader or writer failure aborts the copy and propagates
/// unchanged, tagged with the side it came from. Bytes already accepted by
/// the writer stay written.
pub async fn copy_with_config<R, W>(
    reader: &mut R,
    writer: &mut W,
    config: IterConfig,
) -> Result<u64, CopyError<R::Error, W::Error>>
where
    R: ByteReader,
    W: ByteWriter,
{
    let mut scratch = vec![0u8; config.buf_size()];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut scratch).await.map_err(CopyError::Read)? {
            ReadOutcome::Eof => break,
            ReadOutcome::Bytes(n) => n,
        };
        let mut written = 0;
        while written < n {
            written += writer
                .write(&scratch[written..n])
                .await
                .map_err(CopyError::Write)?;
        }
        total += n as u64;
    }

    writer.flush().await.map_err(CopyError::Write)?;
    Ok(total)
}

/// Errors surfaced by [`copy`] / [`copy_with_config`], tagged with the
/// failing side.
#[derive(Debug)]
pub enum CopyError<RE, WE> {
    /// The reader failed.
    Read(RE),
    /// The writer failed.
    Write(WE),
}

impl<RE: core::fmt::Display, WE: core::fmt::Display> core::fmt::Display for CopyError<RE, WE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Read(e) => write!(f, "Reader error: {}", e),
            Self::Write(e) => write!(f, "Writer error: {}", e),
        }
    }
}

impl<RE, WE> core::error::Error for CopyError<RE, WE>
where
    RE: core::fmt::Debug + core::fmt::Display,
    WE: core::fmt::Debug + core::fmt::Display,
{
}
