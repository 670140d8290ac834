//! Iteration helpers that drain a reader into a lazy chunk sequence.

use crate::domain::IterConfig;
use alloc::vec;
use alloc::vec::Vec;
use chunkio_stream::{ByteReader, ReadOutcome, SyncByteReader};

/// Lazy, single-pass chunk sequence over a [`ByteReader`].
///
/// One scratch buffer of [`IterConfig::buf_size`] bytes is allocated at
/// construction and reused for every step, so draining a reader costs one
/// allocation regardless of its length.
///
/// # Scratch buffer contract
///
/// Each yielded chunk is a borrowed view into the scratch buffer and is
/// overwritten by the next [`next`](Chunks::next) call. Callers that need a
/// chunk beyond the next step must copy it out; the borrow checker enforces
/// this by tying the view's lifetime to the `&mut self` borrow.
///
/// # End-of-data vs. empty reads
///
/// - `Ok(None)`: the reader reached end-of-data; the sequence is over and no
///   trailing empty chunk is produced.
/// - `Ok(Some(&[]))`: the reader transferred zero bytes *this step* but is
///   not done. Empty chunks are valid and non-terminal; callers that only
///   care about payload simply skip them and call again under their own
///   retry policy.
///
/// The sequence is non-restartable: once `Ok(None)` is returned it keeps
/// being returned.
///
/// # Examples
///
/// ```ignore
/// use chunkio_adapters::infrastructure::Chunks;
///
/// let mut chunks = Chunks::new(reader);
/// while let Some(chunk) = chunks.next().await? {
///     consume(chunk); // copy if retaining past this iteration
/// }
/// ```
#[derive(Debug)]
pub struct Chunks<R> {
    reader: R,
    scratch: Vec<u8>,
}

impl<R: ByteReader> Chunks<R> {
    /// Create a chunk sequence with the default scratch buffer size.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, IterConfig::default())
    }

    /// Create a chunk sequence with an explicit configuration.
    pub fn with_config(reader: R, config: IterConfig) -> Self {
        Self {
            reader,
            scratch: vec![0u8; config.buf_size()],
        }
    }

    /// Advance one step: read into the scratch buffer and yield the filled
    /// prefix, or `None` at end-of-data.
    ///
    /// Reader failures propagate unchanged.
    pub async fn next(&mut self) -> Result<Option<&[u8]>, R::Error> {
        match self.reader.read(&mut self.scratch).await? {
            ReadOutcome::Eof => Ok(None),
            ReadOutcome::Bytes(n) => Ok(Some(&self.scratch[..n])),
        }
    }

    /// Consume the helper and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Synchronous form of [`Chunks`] for readers that never suspend.
///
/// Same algorithm and the same scratch buffer contract; only the scheduling
/// differs.
#[derive(Debug)]
pub struct SyncChunks<R> {
    reader: R,
    scratch: Vec<u8>,
}

impl<R: SyncByteReader> SyncChunks<R> {
    /// Create a chunk sequence with the default scratch buffer size.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, IterConfig::default())
    }

    /// Create a chunk sequence with an explicit configuration.
    pub fn with_config(reader: R, config: IterConfig) -> Self {
        Self {
            reader,
            scratch: vec![0u8; config.buf_size()],
        }
    }

    /// Advance one step. See [`Chunks::next`].
    pub fn next(&mut self) -> Result<Option<&[u8]>, R::Error> {
        match self.reader.read(&mut self.scratch)? {
            ReadOutcome::Eof => Ok(None),
            ReadOutcome::Bytes(n) => Ok(Some(&self.scratch[..n])),
        }
    }

    /// Consume the helper and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    // Reader over a byte slice that fills as much of the destination as it
    // has bytes for, then reports end-of-data.
    struct SliceReader {
        data: Vec<u8>,
        pos: usize,
    }

    impl SliceReader {
        fn new(data: &[u8]) -> Self {
            Self {
                data: data.to_vec(),
                pos: 0,
            }
        }
    }

    impl SyncByteReader for SliceReader {
        type Error = Infallible;

        fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
            if self.pos >= self.data.len() {
                return Ok(ReadOutcome::Eof);
            }
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(ReadOutcome::Bytes(n))
        }
    }

    impl ByteReader for SliceReader {
        type Error = Infallible;

        async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
            SyncByteReader::read(self, buf)
        }
    }

    // Reader that reports a zero-byte transfer before each real read,
    // modelling a slow producer.
    struct StutterReader {
        inner: SliceReader,
        stutter: bool,
    }

    impl ByteReader for StutterReader {
        type Error = Infallible;

        async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
            self.stutter = !self.stutter;
            if self.stutter {
                return Ok(ReadOutcome::Bytes(0));
            }
            ByteReader::read(&mut self.inner, buf).await
        }
    }

    #[tokio::test]
    async fn test_twelve_bytes_with_six_byte_buffer_yields_two_chunks() {
        let reader = SliceReader::new(b"hello worlds");
        let config = IterConfig::with_buf_size(6).unwrap();
        let mut chunks = Chunks::with_config(reader, config);

        let mut count = 0;
        let mut total = 0;
        while let Some(chunk) = chunks.next().await.unwrap() {
            count += 1;
            total += chunk.len();
        }
        assert_eq!(count, 2);
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_twelve_bytes_with_default_buffer_yields_one_chunk() {
        let reader = SliceReader::new(b"hello worlds");
        let mut chunks = Chunks::new(reader);

        let mut count = 0;
        let mut total = 0;
        while let Some(chunk) = chunks.next().await.unwrap() {
            count += 1;
            total += chunk.len();
        }
        assert_eq!(count, 1);
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_exact_multiple_has_no_trailing_empty_chunk() {
        let reader = SliceReader::new(&[7u8; 24]);
        let config = IterConfig::with_buf_size(8).unwrap();
        let mut chunks = Chunks::with_config(reader, config);

        let mut sizes = Vec::new();
        while let Some(chunk) = chunks.next().await.unwrap() {
            sizes.push(chunk.len());
        }
        assert_eq!(sizes, [8, 8, 8]);
    }

    #[tokio::test]
    async fn test_concatenation_equals_reader_output() {
        let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        for buf_size in [1usize, 3, 7, 32, 999, 1000, 4096] {
            let reader = SliceReader::new(&payload);
            let config = IterConfig::with_buf_size(buf_size).unwrap();
            let mut chunks = Chunks::with_config(reader, config);

            let mut out = Vec::new();
            while let Some(chunk) = chunks.next().await.unwrap() {
                out.extend_from_slice(chunk);
            }
            assert_eq!(out, payload, "buf_size={buf_size}");
        }
    }

    #[tokio::test]
    async fn test_zero_byte_reads_yield_empty_chunks_not_termination() {
        let inner = SliceReader::new(b"ab");
        let mut chunks = Chunks::with_config(
            StutterReader {
                inner,
                stutter: false,
            },
            IterConfig::with_buf_size(1).unwrap(),
        );

        let mut empties = 0;
        let mut out = Vec::new();
        while let Some(chunk) = chunks.next().await.unwrap() {
            if chunk.is_empty() {
                empties += 1;
            } else {
                out.extend_from_slice(chunk);
            }
        }
        assert_eq!(out, b"ab");
        assert!(empties >= 2);
    }

    #[test]
    fn test_sync_chunks_drain() {
        let reader = SliceReader::new(b"hello worlds");
        let config = IterConfig::with_buf_size(6).unwrap();
        let mut chunks = SyncChunks::with_config(reader, config);

        let mut sizes = Vec::new();
        while let Some(chunk) = chunks.next().unwrap() {
            sizes.push(chunk.len());
        }
        assert_eq!(sizes, [6, 6]);
    }

    #[test]
    fn test_sync_chunks_empty_reader_is_immediately_done() {
        let mut chunks = SyncChunks::new(SliceReader::new(b""));
        assert_eq!(chunks.next().unwrap(), None);
        assert_eq!(chunks.next().unwrap(), None);
    }
}
