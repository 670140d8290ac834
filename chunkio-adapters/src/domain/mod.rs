//! Domain layer - pure buffering logic with zero infrastructure dependencies.
//!
//! The domain layer contains the two pieces of state every conversion between
//! chunk streams and buffer-style I/O needs, and nothing else:
//!
//! - **`ChunkBuffer`**: carry-over storage for bytes pulled from upstream but
//!   not yet delivered to a downstream destination buffer
//! - **`IterConfig`**: validated scratch-buffer configuration for reader
//!   iteration
//!
//! Neither type performs I/O; both are fully testable without mocks. The
//! capability traits they mediate between (`ByteReader`, `ChunkSource`, and
//! friends) live in the `chunkio-stream` contract crate.

mod chunk_buffer;
mod iter_config;

pub use chunk_buffer::ChunkBuffer;
pub use iter_config::{DEFAULT_BUF_SIZE, IterConfig, IterConfigError};
