//! Adapters between pull-based chunk streams and buffer-style I/O.
//!
//! Many I/O consumers are written against buffer-style readers and writers
//! (fill or drain a caller-supplied buffer, report the transfer count); many
//! producers expose pull-based chunk streams (hand out whole chunks on
//! demand). This crate converts between the two shapes in both directions,
//! losslessly and with backpressure intact, and adds iteration helpers that
//! turn any reader into a lazy sequence of chunks.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! ## Domain Layer (`domain`)
//! Pure buffering logic with no infrastructure dependencies:
//! - **`ChunkBuffer`**: carry-over storage reconciling chunk boundaries with
//!   destination buffer boundaries
//! - **`IterConfig`**: validated scratch-buffer configuration
//!
//! ## Adapter Layer (`adapters`)
//! The four conversions:
//! - **`IterReader`**: chunk sequence → buffer-style reader
//! - **`SourceReader`**: pull-based chunk stream → buffer-style reader
//! - **`WriterSink`**: buffer-style writer → push-based chunk sink
//! - **`IterSource`**: chunk sequence → pull-based chunk source
//!
//! ## Infrastructure Layer (`infrastructure`)
//! High-level utilities built on the adapters:
//! - **`Chunks`** / **`SyncChunks`**: drain a reader into a lazy chunk
//!   sequence through a reused scratch buffer
//! - **`copy`**: pump a reader into a writer
//! - **`FromEmbeddedIo`** and `embedded_io_async` trait impls: bridges to
//!   that ecosystem in both directions
//!
//! # Quick Start
//!
//! ```
//! use chunkio_adapters::adapters::IterReader;
//! use chunkio_stream::{ReadOutcome, SyncByteReader};
//!
//! let chunks = vec![b"hello".to_vec(), b"deno".to_vec(), b"foo".to_vec()];
//! let mut reader = IterReader::new(chunks.into_iter());
//!
//! let mut buf = [0u8; 4];
//! let mut out = Vec::new();
//! loop {
//!     match reader.read(&mut buf).unwrap() {
//!         ReadOutcome::Bytes(n) => out.extend_from_slice(&buf[..n]),
//!         ReadOutcome::Eof => break,
//!     }
//! }
//! assert_eq!(out, b"hellodenofoo");
//! ```
//!
//! # Correctness properties
//!
//! - Bytes are delivered in the exact order they were produced upstream; no
//!   reordering, duplication, or loss, regardless of how destination buffer
//!   sizes split or merge the original chunk boundaries.
//! - "Zero bytes this call" and "end of data" never conflate; see
//!   [`chunkio_stream::ReadOutcome`].
//! - Zero-length chunks are real chunks: they never terminate a stream and
//!   never surface as a spurious end-of-data.
//! - Upstream failures propagate unchanged; nothing is retried except the
//!   intentional write-until-drained loop in `WriterSink`, which is normal
//!   operation under partial-write semantics.
//!
//! # Concurrency
//!
//! Every adapter instance is single-owner and non-reentrant; all operations
//! take `&mut self`, so a second in-flight call on the same instance is a
//! compile error rather than a defended-against race. No locks are used.
//!
//! # Features
//!
//! - `std`: Enable standard library support in `embedded-io-async`
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded targets

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

extern crate alloc;

pub mod adapters;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::{IterReader, IterSource, SinkError, SourceReader, WriterSink};
pub use domain::{ChunkBuffer, DEFAULT_BUF_SIZE, IterConfig, IterConfigError};
pub use infrastructure::{Chunks, CopyError, FromEmbeddedIo, SyncChunks, copy, copy_with_config};
