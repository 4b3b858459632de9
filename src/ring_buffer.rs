use std::num::NonZeroUsize;

use tracing::trace;

use crate::error::{Result, RingBufferError};
use crate::iter::{Drain, IntoIter, Iter};

/// A fixed-capacity circular buffer.
///
/// Values are stored in a preallocated array of slots and released in the
/// order they were written. The read and write cursors wrap modulo the
/// capacity. Overflow is handled per call: [`write`](Self::write) rejects a
/// value when every slot is occupied, [`force_write`](Self::force_write)
/// evicts the oldest value instead.
///
/// The buffer has no internal synchronisation. Share it between threads by
/// wrapping the whole structure in a mutex.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    /// Slot array, its length is the capacity and never changes.
    slots: Box<[Option<T>]>,
    /// Index of the next slot to read.
    read: usize,
    /// Index of the next slot to write.
    write: usize,
    /// Number of occupied slots.
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(RingBufferError::InvalidCapacity { capacity })
    }

    /// Creates an empty buffer from an already validated capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        trace!(capacity, "allocating ring buffer");

        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Self {
            slots,
            read: 0,
            write: 0,
            len: 0,
        }
    }

    /// The number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Removes and returns the oldest value.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::BufferEmpty`] if there is nothing to read, the
    /// cursors are not moved.
    pub fn read(&mut self) -> Result<T> {
        let value = self.slots[self.read]
            .take()
            .ok_or(RingBufferError::BufferEmpty)?;

        self.read = self.advance(self.read);
        self.len -= 1;
        Ok(value)
    }

    /// Stores `value` after the newest value.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::BufferOverflow`] if every slot is occupied. The
    /// value is dropped and the buffer is unchanged.
    pub fn write(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(RingBufferError::BufferOverflow {
                capacity: self.capacity(),
            });
        }

        self.slots[self.write] = Some(value);
        self.write = self.advance(self.write);
        self.len += 1;
        Ok(())
    }

    /// Stores `value`, evicting the oldest value if the buffer is full.
    ///
    /// When the buffer is not full this is the same as [`write`](Self::write).
    pub fn force_write(&mut self, value: T) {
        if !self.is_full() {
            self.slots[self.write] = Some(value);
            self.write = self.advance(self.write);
            self.len += 1;
            return;
        }

        // Full means the cursors coincide on the oldest slot.
        debug_assert_eq!(self.read, self.write);
        trace!(slot = self.read, "evicting oldest value");

        drop(self.slots[self.read].replace(value));
        self.read = self.advance(self.read);
        self.write = self.read;
    }

    /// Drops every buffered value and resets both cursors.
    pub fn clear(&mut self) {
        trace!(discarded = self.len, "clearing ring buffer");

        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }

    /// Borrows the value the next [`read`](Self::read) would return.
    pub fn peek(&self) -> Option<&T> {
        self.slots[self.read].as_ref()
    }

    /// Iterates over the buffered values from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.read, self.len)
    }

    /// Reads every buffered value from oldest to newest.
    ///
    /// The buffer is empty once the iterator is exhausted or dropped.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.slots.len()
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
