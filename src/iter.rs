use std::iter::FusedIterator;

use crate::ring_buffer::RingBuffer;

/// Borrowing iterator over a [`RingBuffer`], oldest value first.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], start: usize, len: usize) -> Self {
        Self {
            slots,
            pos: start,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.slots[self.pos].as_ref();
        self.pos = (self.pos + 1) % self.slots.len();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Reads values out of a borrowed [`RingBuffer`] until it is empty.
///
/// Values not consumed before the drain is dropped are discarded.
#[derive(Debug)]
pub struct Drain<'a, T> {
    buf: &'a mut RingBuffer<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(buf: &'a mut RingBuffer<T>) -> Self {
        Self { buf }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.read().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.len(), Some(self.buf.len()))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.buf.clear();
    }
}

/// Owning iterator over a [`RingBuffer`], oldest value first.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    buf: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RingBuffer<T>) -> Self {
        Self { buf }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.read().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.len(), Some(self.buf.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
