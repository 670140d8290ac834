//! Chunk source adapter over an in-process chunk sequence.

use chunkio_stream::{Chunk, ChunkSource};
use core::convert::Infallible;

/// Adapts a synchronous sequence of chunks into a pull-based chunk source.
///
/// One element in, one chunk out: each pull takes exactly the next element of
/// the sequence and hands it downstream unchanged, with no length limiting or
/// splitting. Consumers that need smaller pieces fragment oversized chunks
/// themselves, the way the reader adapters do. The source closes when the
/// sequence is exhausted.
///
/// Zero-length elements pass through as real (empty) chunks; only exhaustion
/// closes the stream. Asynchronous producers do not need this wrapper - they
/// implement [`ChunkSource`] directly.
///
/// # Examples
///
/// ```
/// use chunkio_adapters::adapters::IterSource;
/// use chunkio_stream::ChunkSource;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut source = IterSource::new(vec![b"one".to_vec(), b"two".to_vec()].into_iter());
/// assert_eq!(source.pull().await.unwrap(), Some(b"one".to_vec()));
/// assert_eq!(source.pull().await.unwrap(), Some(b"two".to_vec()));
/// assert_eq!(source.pull().await.unwrap(), None);
/// # });
/// ```
#[derive(Debug)]
pub struct IterSource<I> {
    chunks: I,
}

impl<I> IterSource<I> {
    /// Create a chunk source over the given sequence.
    pub fn new(chunks: I) -> Self {
        Self { chunks }
    }

    /// Consume the adapter and return the remaining sequence.
    pub fn into_inner(self) -> I {
        self.chunks
    }
}

impl<I> ChunkSource for IterSource<I>
where
    I: Iterator<Item = Chunk> + Send + Sync,
{
    type Error = Infallible;

    async fn pull(&mut self) -> Result<Option<Chunk>, Self::Error> {
        Ok(self.chunks.next())
    }
}
