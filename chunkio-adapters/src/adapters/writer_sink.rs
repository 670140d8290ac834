//! Sink adapter over a buffer-style writer.

use crate::adapters::SinkError;
use alloc::string::{String, ToString};
use chunkio_stream::{ByteWriter, ChunkSink};

/// Adapts a buffer-style writer into a push-based chunk sink.
///
/// The writer is allowed to consume fewer bytes than offered on any call;
/// `write` keeps resubmitting the unwritten suffix until the whole chunk is
/// drained. That loop is normal operation under partial-write semantics, not
/// error recovery: nothing is retried after a writer failure.
///
/// `write` resolves only once the chunk is fully handed to the writer, which
/// is what gives upstream producers their backpressure signal. No buffering
/// happens in the adapter itself.
///
/// After [`abort`](ChunkSink::abort), every subsequent `write` or `close`
/// fails with [`SinkError::Aborted`] carrying the abort reason.
///
/// # Examples
///
/// ```ignore
/// use chunkio_adapters::adapters::WriterSink;
/// use chunkio_stream::ChunkSink;
///
/// let mut sink = WriterSink::new(my_writer);
/// sink.write(b"hello").await?;
/// sink.close().await?;
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    aborted: Option<String>,
}

impl<W> WriterSink<W> {
    /// Create a sink backed by the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            aborted: None,
        }
    }

    /// Consume the adapter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: ByteWriter> ChunkSink for WriterSink<W> {
    type Error = SinkError<W::Error>;

    async fn write(&mut self, chunk: &[u8]) -> Result<(), Self::Error> {
        if let Some(reason) = &self.aborted {
            return Err(SinkError::Aborted(reason.clone()));
        }
        let mut written = 0;
        while written < chunk.len() {
            // A short write is not an error; resubmit the remainder.
            let n = self
                .writer
                .write(&chunk[written..])
                .await
                .map_err(SinkError::Io)?;
            #[cfg(feature = "log")]
            if n < chunk.len() - written {
                log::trace!("partial write: {} of {} bytes", n, chunk.len() - written);
            }
            written += n;
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<(), Self::Error> {
        if let Some(reason) = &self.aborted {
            return Err(SinkError::Aborted(reason.clone()));
        }
        self.writer.flush().await.map_err(SinkError::Io)
    }

    async fn abort(&mut self, reason: &str) -> Result<(), Self::Error> {
        self.aborted = Some(reason.to_string());
        Ok(())
    }
}
