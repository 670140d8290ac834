//! Iteration configuration value object.

/// Default scratch buffer size for reader iteration (32 KiB).
pub const DEFAULT_BUF_SIZE: usize = 32 * 1024;

/// Configuration for draining a reader into a chunk sequence.
///
/// Controls the size of the scratch buffer that [`Chunks`] and [`SyncChunks`]
/// reuse across iteration steps.
///
/// [`Chunks`]: crate::infrastructure::Chunks
/// [`SyncChunks`]: crate::infrastructure::SyncChunks
///
/// # Examples
///
/// ```
/// use chunkio_adapters::domain::{IterConfig, DEFAULT_BUF_SIZE};
///
/// let config = IterConfig::default();
/// assert_eq!(config.buf_size(), DEFAULT_BUF_SIZE);
///
/// let config = IterConfig::with_buf_size(6).unwrap();
/// assert_eq!(config.buf_size(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterConfig {
    buf_size: usize,
}

impl IterConfig {
    /// Create a configuration with an explicit scratch buffer size.
    ///
    /// # Errors
    ///
    /// Returns [`IterConfigError::ZeroBufSize`] if `buf_size` is zero. A
    /// zero-length scratch buffer would make every read permanently empty and
    /// the iteration loop forever, so it is rejected up front.
    pub const fn with_buf_size(buf_size: usize) -> Result<Self, IterConfigError> {
        if buf_size == 0 {
            return Err(IterConfigError::ZeroBufSize);
        }
        Ok(Self { buf_size })
    }

    /// Get the scratch buffer size in bytes.
    #[inline]
    pub const fn buf_size(&self) -> usize {
        self.buf_size
    }
}

impl Default for IterConfig {
    fn default() -> Self {
        Self {
            buf_size: DEFAULT_BUF_SIZE,
        }
    }
}

/// Errors that can occur when creating an [`IterConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterConfigError {
    /// The scratch buffer size is zero.
    ZeroBufSize,
}

impl core::fmt::Display for IterConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroBufSize => write!(f, "Scratch buffer size cannot be zero"),
        }
    }
}

impl core::error::Error for IterConfigError {}
