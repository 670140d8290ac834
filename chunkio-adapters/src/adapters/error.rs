//! Adapter-level errors.

use alloc::string::String;

/// Errors surfaced by the sink side of a [`WriterSink`].
///
/// Underlying writer failures are carried unchanged; the adapter adds no
/// information it cannot guarantee.
///
/// [`WriterSink`]: crate::adapters::WriterSink
#[derive(Debug)]
pub enum SinkError<E> {
    /// The underlying writer failed.
    Io(E),
    /// The sink was aborted; carries the abort reason.
    Aborted(String),
}

impl<E: core::fmt::Display> core::fmt::Display for SinkError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Writer error: {}", e),
            Self::Aborted(reason) => write!(f, "Sink aborted: {}", reason),
        }
    }
}

impl<E: core::fmt::Debug + core::fmt::Display> core::error::Error for SinkError<E> {}

// Lets sinks participate in embedded_io_async error handling.
impl<E: core::fmt::Debug + core::fmt::Display> embedded_io_async::Error for SinkError<E> {
    fn kind(&self) -> embedded_io_async::ErrorKind {
        match self {
            Self::Io(_) => embedded_io_async::ErrorKind::Other,
            Self::Aborted(_) => embedded_io_async::ErrorKind::BrokenPipe,
        }
    }
}
