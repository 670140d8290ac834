//! Core contracts for chunk streams and buffer-style readers/writers.
//!
//! Runtime I/O comes in two incompatible shapes: pull-based chunk streams
//! (a producer hands out whole chunks on demand, a consumer accepts them one
//! at a time with backpressure) and buffer-style readers/writers (a single
//! call fills or drains a caller-supplied buffer and reports how many bytes
//! moved). This crate defines the capability traits for both shapes so that
//! adapter crates can convert between them without depending on any concrete
//! runtime.
//!
//! # The two kinds of zero
//!
//! The single most bug-prone seam in this domain is the difference between
//! "zero bytes this call, call again" and "zero bytes, forever". These are
//! kept structurally distinct by [`ReadOutcome`]: a reader returns either
//! [`ReadOutcome::Bytes`] (possibly `Bytes(0)`) or [`ReadOutcome::Eof`].
//! No numeric sentinel is ever overloaded to mean both.
//!
//! # Concurrency contract
//!
//! Every operation takes `&mut self`: each reader, writer, source, or sink
//! instance is single-owner and non-reentrant. A second in-flight call on the
//! same instance is a compile error, not a runtime race.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

extern crate alloc;

use alloc::vec::Vec;
use core::error::Error;

/// A discrete, immutable byte sequence produced or consumed as a unit by the
/// chunk-stream abstraction.
///
/// Length zero is legal and carries no special meaning; in particular a
/// zero-length chunk never signals end-of-data.
pub type Chunk = Vec<u8>;

/// Outcome of a single [`ByteReader::read`] or [`SyncByteReader::read`] call.
///
/// The two variants keep "no bytes this call" and "no bytes ever again"
/// structurally distinct:
///
/// - `Bytes(0)` means the reader transferred nothing *this time* and may be
///   called again. Callers impose their own retry or backoff policy; a
///   reader is allowed to return `Bytes(0)` indefinitely.
/// - `Eof` means zero bytes were transferred and no more ever will be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `k` bytes were copied into the destination buffer, `0 <= k <= buf.len()`.
    Bytes(usize),
    /// End of data: nothing was copied and no further bytes will be produced.
    Eof,
}

impl ReadOutcome {
    /// Returns `true` for [`ReadOutcome::Eof`].
    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Number of bytes transferred, treating `Eof` as zero.
    #[inline]
    pub const fn transferred(&self) -> usize {
        match self {
            Self::Bytes(n) => *n,
            Self::Eof => 0,
        }
    }
}

/// Buffer-style reader whose read operation may suspend.
///
/// A call fills a prefix of the caller's buffer and reports the outcome; see
/// [`ReadOutcome`] for the end-of-data convention. Implementations must not
/// retain the buffer across calls.
pub trait ByteReader: Send + Sync {
    /// Error surfaced by the underlying producer.
    type Error: Error + Send + Sync + 'static;

    /// Read up to `buf.len()` bytes into `buf`.
    ///
    /// Returns [`ReadOutcome::Bytes`] with the transfer count, or
    /// [`ReadOutcome::Eof`] once the producer is exhausted. After `Eof` the
    /// reader stays at end-of-data; further calls keep returning `Eof`.
    async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error>;
}

/// Buffer-style reader that never suspends.
///
/// Same contract as [`ByteReader`] with synchronous scheduling. Producers
/// that are synchronous by nature (in-memory sequences, memory-mapped data)
/// implement this in addition to [`ByteReader`] so fully-synchronous callers
/// can avoid an executor.
pub trait SyncByteReader: Send + Sync {
    /// Error surfaced by the underlying producer.
    type Error: Error + Send + Sync + 'static;

    /// Read up to `buf.len()` bytes into `buf`. See [`ByteReader::read`].
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, Self::Error>;
}

/// Buffer-style writer whose write operation may suspend.
///
/// A writer is allowed to consume fewer bytes than offered; callers that need
/// the whole buffer written loop over the unwritten suffix. A return of `0`
/// means "nothing consumed this call, call again" and is not an error.
pub trait ByteWriter: Send + Sync {
    /// Error surfaced by the underlying consumer.
    type Error: Error + Send + Sync + 'static;

    /// Write up to `buf.len()` bytes from `buf`, returning the number of
    /// bytes consumed (`0..=buf.len()`).
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Flush any buffered bytes to the underlying consumer.
    ///
    /// The default implementation is a no-op for writers that do not buffer.
    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Pull side of a chunk stream.
///
/// Each `pull` yields the next chunk or `None` once the stream is closed.
/// There is no "try again" state: a chunk (possibly empty) or closure are the
/// only outcomes. Once `Ok(None)` is returned the source is exhausted and
/// must not be pulled again.
///
/// Sources are exhaustible exactly once per instance (non-restartable).
/// Producers that cannot fail use [`core::convert::Infallible`] as their
/// error type.
pub trait ChunkSource: Send + Sync {
    /// Error surfaced by the underlying producer.
    type Error: Error + Send + Sync + 'static;

    /// Pull the next chunk, or `None` if the stream is closed.
    async fn pull(&mut self) -> Result<Option<Chunk>, Self::Error>;
}

/// Push side of a chunk stream.
///
/// Backpressure is expressed through acknowledgement: a caller must await the
/// completion of each `write` before issuing the next one, so a slow sink
/// naturally slows its producer without unbounded buffering.
pub trait ChunkSink: Send + Sync {
    /// Error surfaced by the underlying consumer.
    type Error: Error + Send + Sync + 'static;

    /// Accept one chunk. Resolves once the chunk is fully handed off.
    async fn write(&mut self, chunk: &[u8]) -> Result<(), Self::Error>;

    /// Signal that no further chunks will be written.
    async fn close(&mut self) -> Result<(), Self::Error>;

    /// Tear the stream down, propagating `reason` to any failure surfaced
    /// for writes issued after the abort.
    async fn abort(&mut self, reason: &str) -> Result<(), Self::Error>;
}
