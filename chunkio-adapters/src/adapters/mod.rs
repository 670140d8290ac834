//! Adapter layer - the four conversions between chunk streams and
//! buffer-style I/O.
//!
//! ```text
//!     chunk producers                        buffer-style callers
//!
//!     Iterator<Item = Chunk> ──IterReader──►   ByteReader
//!     ChunkSource            ──SourceReader─►  ByteReader
//!     Iterator<Item = Chunk> ──IterSource──►   ChunkSource
//!
//!     chunk consumers                        buffer-style backends
//!
//!     ChunkSink              ◄──WriterSink──   ByteWriter
//! ```
//!
//! The two reader adapters share the domain's `ChunkBuffer` to carry bytes of
//! an oversized chunk across read calls; the sink and source adapters are
//! unbuffered, pass-through conversions. All four preserve byte order exactly
//! and propagate upstream failures unchanged.
//!
//! # Available Adapters
//!
//! - **`IterReader`**: chunk sequence → [`ByteReader`] + [`SyncByteReader`]
//! - **`SourceReader`**: pull-based chunk stream → [`ByteReader`]
//! - **`WriterSink`**: [`ByteWriter`] → push-based chunk sink
//! - **`IterSource`**: chunk sequence → pull-based chunk source
//!
//! [`ByteReader`]: chunkio_stream::ByteReader
//! [`SyncByteReader`]: chunkio_stream::SyncByteReader
//! [`ByteWriter`]: chunkio_stream::ByteWriter

mod error;
mod iter_reader;
mod iter_source;
mod source_reader;
mod writer_sink;

pub use error::SinkError;
pub use iter_reader::IterReader;
pub use iter_source::IterSource;
pub use source_reader::SourceReader;
pub use writer_sink::WriterSink;
