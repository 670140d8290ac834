//! Bridges between this crate's contracts and the embedded_io_async traits.
//!
//! The reader adapters implement `embedded_io_async::Read` so they plug into
//! that ecosystem directly, and [`FromEmbeddedIo`] adapts any
//! `embedded_io_async` reader or writer into this crate's contracts. The only
//! semantic gap is the end-of-data convention: embedded_io_async overloads a
//! zero-byte read as end-of-data, while [`ReadOutcome`] keeps the two cases
//! structurally distinct. The bridges translate at the boundary and document
//! where the translation is lossy.

use crate::adapters::{IterReader, SourceReader};
use chunkio_stream::{ByteReader, ByteWriter, Chunk, ChunkSource, ReadOutcome};
use core::convert::Infallible;

// IterReader -> embedded_io_async::Read.
//
// Lossless: for a non-empty destination the adapter only ever yields
// Bytes(n > 0) or Eof, so mapping Eof to Ok(0) cannot collide with a
// zero-byte "call again" outcome.
impl<I> embedded_io_async::ErrorType for IterReader<I> {
    type Error = Infallible;
}

impl<I> embedded_io_async::Read for IterReader<I>
where
    I: Iterator<Item = Chunk> + Send + Sync,
{
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match ByteReader::read(self, buf).await? {
            ReadOutcome::Bytes(n) => Ok(n),
            ReadOutcome::Eof => Ok(0),
        }
    }
}

// SourceReader -> embedded_io_async::Read, with the source error wrapped to
// satisfy the embedded_io_async error-kind contract.
impl<S: ChunkSource> embedded_io_async::ErrorType for SourceReader<S> {
    type Error = SourceIoError<S::Error>;
}

impl<S: ChunkSource> embedded_io_async::Read for SourceReader<S> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match ByteReader::read(self, buf).await.map_err(SourceIoError)? {
            ReadOutcome::Bytes(n) => Ok(n),
            ReadOutcome::Eof => Ok(0),
        }
    }
}

/// Wraps a chunk-source error for use where `embedded_io_async::Error` is
/// required. The underlying error is carried unchanged.
#[derive(Debug)]
pub struct SourceIoError<E>(
    /// The underlying source error.
    pub E,
);

impl<E: core::fmt::Display> core::fmt::Display for SourceIoError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Source error: {}", self.0)
    }
}

impl<E: core::fmt::Debug + core::fmt::Display> core::error::Error for SourceIoError<E> {}

impl<E: core::fmt::Debug + core::fmt::Display> embedded_io_async::Error for SourceIoError<E> {
    fn kind(&self) -> embedded_io_async::ErrorKind {
        embedded_io_async::ErrorKind::Other
    }
}

/// Adapts an `embedded_io_async` reader or writer into this crate's
/// [`ByteReader`] / [`ByteWriter`] contracts.
///
/// On the read side, `Ok(0)` for a non-empty buffer is translated to
/// [`ReadOutcome::Eof`] per the embedded_io_async convention; a zero-length
/// destination short-circuits to `Bytes(0)` without touching the inner
/// reader, since a zero-byte read from it would be indistinguishable from
/// end-of-data. Writes and flushes pass through unchanged.
///
/// # Examples
///
/// ```ignore
/// use chunkio_adapters::infrastructure::{Chunks, FromEmbeddedIo};
/// use embedded_io_adapters::tokio_1::FromTokio;
///
/// let file = tokio::fs::File::open("data.bin").await?;
/// let reader = FromEmbeddedIo::new(FromTokio::new(file));
/// let mut chunks = Chunks::new(reader);
/// while let Some(chunk) = chunks.next().await? {
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct FromEmbeddedIo<T> {
    inner: T,
}

impl<T> FromEmbeddedIo<T> {
    /// Wrap an `embedded_io_async` reader or writer.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Get a reference to the inner value.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Get a mutable reference to the inner value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the wrapper and return the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> ByteReader for FromEmbeddedIo<T>
where
    T: embedded_io_async::Read + Send + Sync,
    T::Error: core::error::Error + Send + Sync + 'static,
{
    type Error = T::Error;

    async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
        if buf.is_empty() {
            return Ok(ReadOutcome::Bytes(0));
        }
        match self.inner.read(buf).await? {
            0 => Ok(ReadOutcome::Eof),
            n => Ok(ReadOutcome::Bytes(n)),
        }
    }
}

impl<T> ByteWriter for FromEmbeddedIo<T>
where
    T: embedded_io_async::Write + Send + Sync,
    T::Error: core::error::Error + Send + Sync + 'static,
{
    type Error = T::Error;

    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.inner.write(buf).await
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush().await
    }
}
