//! Bump allocator
//!
//! Every transient allocation (pixel buffers, text sources, per-frame
//! scratch) is carved out of one growable buffer and released all at once.
//!
//! Allocations are handed out as [`ArenaAlloc`] handles, an offset from the
//! arena base plus a length, and are resolved through the arena on each
//! access. Growing the backing buffer may move it, so no address is ever
//! held across an allocation.
//!
//!     use softraster::Arena;
//!
//!     let mut arena = Arena::new(16).unwrap();
//!     let a = arena.alloc(5).unwrap();
//!     arena.bytes_mut(a).unwrap().copy_from_slice(b"hello");
//!     let b = arena.alloc(64).unwrap(); // grows
//!     assert!(arena.capacity() >= 64);
//!     assert_eq!(arena.bytes(a).unwrap(), b"hello");
//!     assert_eq!(b.offset() % softraster::WORD_SIZE, 0);

use std::mem;
use std::slice;

use log::{debug, trace, warn};

use crate::error::{Error, Result};

/// Alignment and rounding unit of every allocation
pub const WORD_SIZE: usize = mem::size_of::<usize>();

const PIXEL_SIZE: usize = mem::size_of::<u32>();

fn align_up(n: usize) -> Option<usize> {
    n.checked_add(WORD_SIZE - 1).map(|v| v & !(WORD_SIZE - 1))
}

/// Location of an allocation inside an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ArenaAlloc {
    offset: usize,
    len: usize,
}

impl ArenaAlloc {
    /// Byte offset from the arena base, always word aligned
    pub fn offset(&self) -> usize {
        self.offset
    }
    /// Requested length in bytes
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Used-bytes position to [`Arena::rewind`] to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

impl Mark {
    pub fn bytes(&self) -> usize {
        self.0
    }
}

/// Growable bump allocator
///
/// Storage is kept as machine words so the base address is word aligned;
/// `used <= capacity` holds after every operation.
#[derive(Debug)]
pub struct Arena {
    words: Vec<usize>,
    used: usize,
}

impl Arena {
    /// Create an arena with at least `capacity` bytes of backing storage
    pub fn new(capacity: usize) -> Result<Self> {
        let bytes = align_up(capacity).ok_or(Error::Alloc { requested: capacity, capacity: 0 })?;
        let mut words = Vec::new();
        words
            .try_reserve_exact(bytes / WORD_SIZE)
            .map_err(|_| Error::Alloc { requested: capacity, capacity: 0 })?;
        words.resize(bytes / WORD_SIZE, 0);
        debug!("arena init: {} bytes", bytes);
        Ok(Arena { words, used: 0 })
    }

    /// Total bytes of backing storage
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_SIZE
    }
    /// Bytes handed out since creation or the last rewind
    pub fn used(&self) -> usize {
        self.used
    }
    /// Current used position, for a later [`rewind`](Arena::rewind)
    pub fn mark(&self) -> Mark {
        Mark(self.used)
    }

    /// Reserve `size` bytes, rounded up to [`WORD_SIZE`]
    ///
    /// When the new used offset reaches the capacity the buffer grows to
    /// `max(capacity * 2, used + size)`. Contents and offsets of earlier
    /// allocations are preserved. On failure the arena is left unchanged.
    pub fn alloc(&mut self, size: usize) -> Result<ArenaAlloc> {
        let capacity = self.capacity();
        let fail = Error::Alloc { requested: size, capacity };
        let new_used = match align_up(size).and_then(|n| n.checked_add(self.used)) {
            Some(n) => n,
            None => return Err(fail),
        };
        if new_used >= capacity {
            let target = capacity.saturating_mul(2).max(new_used);
            let target = align_up(target).ok_or(fail)?;
            self.grow(target, size)?;
        }
        let alloc = ArenaAlloc { offset: self.used, len: size };
        self.used = new_used;
        trace!("arena alloc: {} bytes at {} (used {})", size, alloc.offset, self.used);
        Ok(alloc)
    }

    /// Reserve room for `count` pixels
    pub fn alloc_pixels(&mut self, count: usize) -> Result<ArenaAlloc> {
        let size = count
            .checked_mul(PIXEL_SIZE)
            .ok_or(Error::Alloc { requested: usize::MAX, capacity: self.capacity() })?;
        self.alloc(size)
    }

    fn grow(&mut self, bytes: usize, requested: usize) -> Result<()> {
        let old = self.capacity();
        let extra = bytes / WORD_SIZE - self.words.len();
        self.words
            .try_reserve_exact(extra)
            .map_err(|_| Error::Alloc { requested, capacity: old })?;
        self.words.resize(bytes / WORD_SIZE, 0);
        debug!("arena grow: {} -> {} bytes", old, bytes);
        Ok(())
    }

    /// Move the used mark back to `mark`
    ///
    /// Memory is not zeroed. Handles issued after `mark` become stale.
    /// Marks ahead of the current position are ignored.
    pub fn rewind(&mut self, mark: Mark) {
        if mark.0 > self.used {
            warn!("arena rewind ahead of used mark ignored: {} > {}", mark.0, self.used);
            return;
        }
        trace!("arena rewind: {} -> {}", self.used, mark.0);
        self.used = mark.0;
    }

    /// Release the backing storage
    pub fn free(self) {
        debug!("arena free: {} bytes ({} used)", self.capacity(), self.used);
    }

    fn check(&self, a: ArenaAlloc) -> Result<()> {
        if a.end() > self.used {
            return Err(Error::StaleHandle { offset: a.offset, len: a.len, used: self.used });
        }
        Ok(())
    }

    fn raw(&self) -> &[u8] {
        // SAFETY: `usize` has no padding and every byte pattern is a valid
        // `u8`; the slice spans exactly the words owned by the vector.
        unsafe { slice::from_raw_parts(self.words.as_ptr() as *const u8, self.capacity()) }
    }

    fn raw_mut(&mut self) -> &mut [u8] {
        let len = self.capacity();
        // SAFETY: as in `raw`, and the exclusive borrow of `self` guarantees
        // no other view of the words exists.
        unsafe { slice::from_raw_parts_mut(self.words.as_mut_ptr() as *mut u8, len) }
    }

    /// Bytes of an allocation
    pub fn bytes(&self, a: ArenaAlloc) -> Result<&[u8]> {
        self.check(a)?;
        Ok(&self.raw()[a.offset..a.end()])
    }

    /// Mutable bytes of an allocation
    pub fn bytes_mut(&mut self, a: ArenaAlloc) -> Result<&mut [u8]> {
        self.check(a)?;
        Ok(&mut self.raw_mut()[a.offset..a.end()])
    }

    /// Allocation viewed as 32-bit pixels; a trailing partial pixel is dropped
    pub fn pixels(&self, a: ArenaAlloc) -> Result<&[u32]> {
        self.check(a)?;
        let base = self.words.as_ptr() as *const u32;
        // SAFETY: offsets are word aligned and words are at least as aligned
        // as `u32`; the range lies inside the checked allocation.
        Ok(unsafe { slice::from_raw_parts(base.add(a.offset / PIXEL_SIZE), a.len / PIXEL_SIZE) })
    }

    /// Allocation viewed as mutable 32-bit pixels
    pub fn pixels_mut(&mut self, a: ArenaAlloc) -> Result<&mut [u32]> {
        self.check(a)?;
        let base = self.words.as_mut_ptr() as *mut u32;
        // SAFETY: see `pixels`; `&mut self` makes the view exclusive.
        Ok(unsafe {
            slice::from_raw_parts_mut(base.add(a.offset / PIXEL_SIZE), a.len / PIXEL_SIZE)
        })
    }
}
