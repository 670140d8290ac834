//! Reader adapter over an in-process chunk sequence.

use crate::domain::ChunkBuffer;
use chunkio_stream::{ByteReader, Chunk, ReadOutcome, SyncByteReader};
use core::convert::Infallible;

/// Adapts a synchronous sequence of chunks into a buffer-style reader.
///
/// Chunk boundaries in the sequence are invisible to the caller: each `read`
/// fills the destination from at most one chunk, carrying any remainder of an
/// oversized chunk over to subsequent calls through a [`ChunkBuffer`]. The
/// concatenation of all bytes read equals the concatenation of the sequence,
/// byte-for-byte, regardless of destination buffer sizes.
///
/// Zero-length chunks in the sequence are consumed transparently; they never
/// surface as a zero-byte read and never end the stream. The sequence is
/// consumed exactly once (non-restartable).
///
/// Implements both [`ByteReader`] and [`SyncByteReader`] since an iterator
/// never suspends.
///
/// # Examples
///
/// ```
/// use chunkio_adapters::adapters::IterReader;
/// use chunkio_stream::{ReadOutcome, SyncByteReader};
///
/// let chunks = vec![b"hello".to_vec(), b"world".to_vec()];
/// let mut reader = IterReader::new(chunks.into_iter());
///
/// let mut buf = [0u8; 4];
/// assert_eq!(reader.read(&mut buf).unwrap(), ReadOutcome::Bytes(4));
/// assert_eq!(&buf, b"hell");
/// ```
#[derive(Debug)]
pub struct IterReader<I> {
    chunks: I,
    leftover: ChunkBuffer,
}

impl<I> IterReader<I> {
    /// Create a reader over the given chunk sequence.
    pub fn new(chunks: I) -> Self {
        Self {
            chunks,
            leftover: ChunkBuffer::new(),
        }
    }

    /// Consume the adapter and return the remaining sequence.
    ///
    /// Bytes already pulled into the carry-over buffer are discarded.
    pub fn into_inner(self) -> I {
        self.chunks
    }
}

impl<I: Iterator<Item = Chunk>> IterReader<I> {
    // One read step: leftover first, otherwise pull past empty chunks.
    // Leftover bytes and a fresh pull are never mixed in the same call.
    fn read_step(&mut self, dest: &mut [u8]) -> ReadOutcome {
        if dest.is_empty() {
            return ReadOutcome::Bytes(0);
        }
        if !self.leftover.is_empty() {
            return ReadOutcome::Bytes(self.leftover.copy_to(dest));
        }
        loop {
            match self.chunks.next() {
                None => return ReadOutcome::Eof,
                Some(chunk) if chunk.is_empty() => continue,
                Some(chunk) => {
                    self.leftover.refill(chunk);
                    return ReadOutcome::Bytes(self.leftover.copy_to(dest));
                }
            }
        }
    }
}

impl<I> SyncByteReader for IterReader<I>
where
    I: Iterator<Item = Chunk> + Send + Sync,
{
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
        Ok(self.read_step(buf))
    }
}

impl<I> ByteReader for IterReader<I>
where
    I: Iterator<Item = Chunk> + Send + Sync,
{
    type Error = Infallible;

    async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error> {
        Ok(self.read_step(buf))
    }
}
