//! Infrastructure layer - high-level utilities built on the adapters.
//!
//! This module provides the reader-draining iteration helpers, the
//! reader-to-writer pump, and bridges to the `embedded_io_async` ecosystem.

mod copy;
mod embedded_io_impl;
mod iteration;

pub use copy::{CopyError, copy, copy_with_config};
pub use embedded_io_impl::{FromEmbeddedIo, SourceIoError};
pub use iteration::{Chunks, SyncChunks};
