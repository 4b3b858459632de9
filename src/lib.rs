//! # slot_ring
//!
//! A fixed-capacity circular buffer for bounded producer/consumer data flow.
//!
//! This library provides the following modules:
//! - `ring_buffer` for the [`RingBuffer`] container and its two write modes.
//! - `error` for [`RingBufferError`] returned by construction, reads and writes.
//! - `iter` for borrowing, draining and owning iterators over the buffer.
//!
//! ```
//! use slot_ring::{RingBuffer, RingBufferError};
//!
//! let mut buf = RingBuffer::new(2)?;
//! buf.write(1)?;
//! buf.write(2)?;
//! assert_eq!(buf.write(3), Err(RingBufferError::BufferOverflow { capacity: 2 }));
//!
//! buf.force_write(3);
//! assert_eq!(buf.read()?, 2);
//! assert_eq!(buf.read()?, 3);
//! # Ok::<(), RingBufferError>(())
//! ```

pub mod error;
pub mod iter;
pub mod ring_buffer;

// Re-export main structs for convenience:
pub use error::{Result, RingBufferError};
pub use ring_buffer::RingBuffer;
