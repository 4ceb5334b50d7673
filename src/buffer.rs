//! Byte accumulation buffer for unaligned encoder output
//!
//! The encoder engine emits compressed bytes in chunks that do not line up
//! with MP3 frame boundaries. This buffer holds the tail of that stream:
//! engine output is written at the end, completed frames are evicted from the
//! front, and the remainder is compacted down to offset 0.

use crate::error::BufferError;

/// Fixed-capacity byte buffer with a filled-length cursor.
///
/// Bytes `[0, filled)` are valid, contiguous, and in arrival order; the rest
/// of the region is undefined. Exclusively owned by one encoder adapter.
#[derive(Debug)]
pub struct AccumulationBuffer {
    data: Box<[u8]>,
    filled: usize,
}

impl AccumulationBuffer {
    /// Create an empty buffer of the given fixed capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            filled: 0,
        }
    }

    /// Copy `src` in at the tail.
    ///
    /// Fails with [`BufferError::Overflow`] carrying the would-be overflow
    /// amount when `src` does not fit; `filled` is left unchanged.
    pub fn append(&mut self, src: &[u8]) -> Result<(), BufferError> {
        let free = self.data.len() - self.filled;
        if src.len() > free {
            return Err(BufferError::Overflow {
                excess: src.len() - free,
            });
        }
        self.data[self.filled..self.filled + src.len()].copy_from_slice(src);
        self.filled += src.len();
        Ok(())
    }

    /// Writable tail `[filled, capacity)`, handed to the engine as its
    /// destination slice. Pair with [`commit`](Self::commit).
    pub fn spare_capacity_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.filled..]
    }

    /// Mark `n` bytes of the spare region as filled after an external write.
    pub fn commit(&mut self, n: usize) -> Result<(), BufferError> {
        let free = self.data.len() - self.filled;
        if n > free {
            return Err(BufferError::Overflow { excess: n - free });
        }
        self.filled += n;
        Ok(())
    }

    /// Read-only view of the valid region `[0, filled)`.
    pub fn valid(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Drop `n` bytes from the front and compact the remainder to offset 0.
    ///
    /// `n` must not exceed the filled length; the caller checks the frame
    /// length against [`len`](Self::len) before evicting.
    pub fn evict(&mut self, n: usize) {
        assert!(n <= self.filled, "evict past filled length");
        self.data.copy_within(n..self.filled, 0);
        self.filled -= n;
    }

    /// Number of valid bytes currently held.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Total fixed capacity.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}
