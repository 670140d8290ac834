//! Reader adapter over a pull-based chunk stream.

use crate::domain::ChunkBuffer;
use chunkio_stream::{ByteReader, ChunkSource, ReadOutcome};

/// Adapts a pull-based chunk stream into a buffer-style reader.
///
/// Structurally the same conversion as [`IterReader`], pulling from a
/// producer that may suspend instead of a plain iterator. Each `read` call
/// either drains carried-over bytes from a previous oversized chunk or pulls
/// exactly one fresh chunk from the source; the two are never mixed in a
/// single call. Errors from the source propagate to the caller unchanged,
/// with no retry or wrapping.
///
/// Once the source reports closure the reader returns
/// [`ReadOutcome::Eof`] and the source is not pulled again.
///
/// [`IterReader`]: crate::adapters::IterReader
///
/// # Examples
///
/// ```ignore
/// use chunkio_adapters::adapters::SourceReader;
/// use chunkio_stream::ByteReader;
///
/// let mut reader = SourceReader::new(my_chunk_source);
/// let mut buf = [0u8; 4096];
/// let outcome = reader.read(&mut buf).await?;
/// ```
#[derive(Debug)]
pub struct SourceReader<S> {
    source: S,
    leftover: ChunkBuffer,
    closed: bool,
}

impl<S> SourceReader<S> {
    /// Create a reader over the given chunk source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            leftover: ChunkBuffer::new(),
            closed: false,
        }
    }

    /// Consume the adapter and return the underlying source.
    ///
    /// Bytes already pulled into the carry-over buffer are discarded.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ChunkSource> ByteReader for SourceReader<S> {
    type Error = S::Error;

    async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
        if buf.is_empty() {
            return Ok(ReadOutcome::Bytes(0));
        }
        if !self.leftover.is_empty() {
            return Ok(ReadOutcome::Bytes(self.leftover.copy_to(buf)));
        }
        if self.closed {
            return Ok(ReadOutcome::Eof);
        }
        loop {
            match self.source.pull().await? {
                None => {
                    self.closed = true;
                    return Ok(ReadOutcome::Eof);
                }
                // A zero-length chunk is a real chunk, not end-of-data;
                // pull again rather than stalling the caller at 0.
                Some(chunk) if chunk.is_empty() => continue,
                Some(chunk) => {
                    #[cfg(feature = "log")]
                    log::trace!("pulled {} byte chunk from source", chunk.len());
                    self.leftover.refill(chunk);
                    return Ok(ReadOutcome::Bytes(self.leftover.copy_to(buf)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkio_stream::Chunk;
    use core::fmt;
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct MockError;

    impl fmt::Display for MockError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Mock source error")
        }
    }

    impl core::error::Error for MockError {}

    // Mock source yielding queued chunks, optionally failing at the end.
    struct MockSource {
        queue: VecDeque<Chunk>,
        fail_on_empty: bool,
    }

    impl MockSource {
        fn new(parts: &[&[u8]]) -> Self {
            Self {
                queue: parts.iter().map(|p| p.to_vec()).collect(),
                fail_on_empty: false,
            }
        }
    }

    impl ChunkSource for MockSource {
        type Error = MockError;

        async fn pull(&mut self) -> Result<Option<Chunk>, Self::Error> {
            match self.queue.pop_front() {
                Some(chunk) => Ok(Some(chunk)),
                None if self.fail_on_empty => Err(MockError),
                None => Ok(None),
            }
        }
    }

    #[tokio::test]
    async fn test_small_destination_splits_chunks() {
        let mut reader = SourceReader::new(MockSource::new(&[b"hello", b"deno", b"foo"]));
        let mut buf = [0u8; 4];
        let mut seen: Vec<Vec<u8>> = Vec::new();

        loop {
            match reader.read(&mut buf).await.unwrap() {
                ReadOutcome::Bytes(n) => seen.push(buf[..n].to_vec()),
                ReadOutcome::Eof => break,
            }
        }

        let expected: Vec<Vec<u8>> = [&b"hell"[..], b"o", b"deno", b"foo"]
            .iter()
            .map(|p| p.to_vec())
            .collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_concatenation_is_exact_for_odd_buffer_sizes() {
        let parts: &[&[u8]] = &[b"a", b"", b"bcdefg", b"hij", b"", b"klmnopqrstuvwxyz"];
        for buf_size in [1usize, 2, 3, 5, 7, 64] {
            let mut reader = SourceReader::new(MockSource::new(parts));
            let mut buf = vec![0u8; buf_size];
            let mut out = Vec::new();
            loop {
                match reader.read(&mut buf).await.unwrap() {
                    ReadOutcome::Bytes(n) => out.extend_from_slice(&buf[..n]),
                    ReadOutcome::Eof => break,
                }
            }
            assert_eq!(out, b"abcdefghijklmnopqrstuvwxyz", "buf_size={buf_size}");
        }
    }

    #[tokio::test]
    async fn test_closed_source_is_not_pulled_again() {
        let mut source = MockSource::new(&[b"x"]);
        // Pulling past closure would error; the reader must remember closure.
        source.fail_on_empty = false;
        let mut reader = SourceReader::new(source);

        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).await.unwrap(), ReadOutcome::Bytes(1));
        assert_eq!(reader.read(&mut buf).await.unwrap(), ReadOutcome::Eof);

        // Arm the failure after closure was observed; a second Eof must come
        // from the reader's own state, not another pull.
        reader.source.fail_on_empty = true;
        assert_eq!(reader.read(&mut buf).await.unwrap(), ReadOutcome::Eof);
    }

    #[tokio::test]
    async fn test_source_error_propagates_unchanged() {
        let mut source = MockSource::new(&[b"ok"]);
        source.fail_on_empty = true;
        let mut reader = SourceReader::new(source);

        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).await.unwrap(), ReadOutcome::Bytes(2));
        assert!(reader.read(&mut buf).await.is_err());
    }

    #[tokio::test]
    async fn test_only_empty_chunks_then_close_is_plain_eof() {
        let mut reader = SourceReader::new(MockSource::new(&[b"", b"", b""]));
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).await.unwrap(), ReadOutcome::Eof);
    }
}
