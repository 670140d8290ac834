//! ChunkBuffer domain service - carry-over storage for reader adapters.
//!
//! When an upstream producer hands out whole chunks but the downstream caller
//! supplies fixed-size destination buffers, chunk boundaries and buffer
//! boundaries rarely line up. `ChunkBuffer` holds the bytes already pulled
//! from upstream but not yet copied downstream, so nothing is duplicated or
//! dropped across the boundary.

use chunkio_stream::Chunk;

/// Carry-over storage: one pending chunk plus a read offset into it.
///
/// # Invariant
///
/// `offset <= chunk.len()` at all times. The buffer is *empty* exactly when
/// `offset == chunk.len()`; an empty buffer must be refilled before it can
/// yield bytes again.
///
/// # Lifecycle
///
/// Created empty at adapter construction, refilled each time it is found
/// empty and the caller still wants bytes, and left empty once the adapter's
/// upstream is exhausted. Each instance is exclusively owned by one adapter;
/// nothing else reads or writes it.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunk: Chunk,
    offset: usize,
}

impl ChunkBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            chunk: Chunk::new(),
            offset: 0,
        }
    }

    /// `true` when every byte of the pending chunk has been copied out.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.chunk.len()
    }

    /// Number of bytes still pending delivery.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.chunk.len() - self.offset
    }

    /// Replace the spent chunk with a freshly pulled one.
    ///
    /// Must only be called on an empty buffer; refilling while bytes are
    /// still pending would drop them.
    pub fn refill(&mut self, chunk: Chunk) {
        debug_assert!(self.is_empty(), "refill would drop pending bytes");
        self.chunk = chunk;
        self.offset = 0;
    }

    /// Copy `min(dest.len(), remaining)` pending bytes into `dest` and
    /// advance the offset past them. Returns the number of bytes copied.
    pub fn copy_to(&mut self, dest: &mut [u8]) -> usize {
        let n = dest.len().min(self.remaining());
        dest[..n].copy_from_slice(&self.chunk[self.offset..self.offset + n]);
        self.offset += n;
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buf = ChunkBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn refill_then_drain_in_one_copy() {
        let mut buf = ChunkBuffer::new();
        buf.refill(b"hello".to_vec());
        assert_eq!(buf.remaining(), 5);

        let mut dest = [0u8; 8];
        let n = buf.copy_to(&mut dest);
        assert_eq!(n, 5);
        assert_eq!(&dest[..5], b"hello");
        assert!(buf.is_empty());
    }

    #[test]
    fn partial_copies_preserve_order() {
        let mut buf = ChunkBuffer::new();
        buf.refill(b"abcdef".to_vec());

        let mut dest = [0u8; 4];
        assert_eq!(buf.copy_to(&mut dest), 4);
        assert_eq!(&dest, b"abcd");
        assert_eq!(buf.remaining(), 2);

        assert_eq!(buf.copy_to(&mut dest), 2);
        assert_eq!(&dest[..2], b"ef");
        assert!(buf.is_empty());
    }

    #[test]
    fn copy_to_empty_dest_is_a_no_op() {
        let mut buf = ChunkBuffer::new();
        buf.refill(b"xyz".to_vec());
        assert_eq!(buf.copy_to(&mut []), 0);
        assert_eq!(buf.remaining(), 3);
    }

    #[test]
    fn refill_with_empty_chunk_stays_empty() {
        let mut buf = ChunkBuffer::new();
        buf.refill(Chunk::new());
        assert!(buf.is_empty());
        assert_eq!(buf.copy_to(&mut [0u8; 4]), 0);
    }
}
