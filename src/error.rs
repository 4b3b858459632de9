use thiserror::Error;

/// Errors returned by [`RingBuffer`](crate::RingBuffer) operations.
///
/// Every variant is recoverable by the caller; the buffer is left unchanged
/// when one is returned.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("Invalid capacity {capacity}: a ring buffer needs at least one slot")]
    InvalidCapacity { capacity: usize },

    #[error("Buffer is empty")]
    BufferEmpty,

    #[error("Buffer overflow: all {capacity} slots are occupied")]
    BufferOverflow { capacity: usize },
}

pub type Result<T> = std::result::Result<T, RingBufferError>;
