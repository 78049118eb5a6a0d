//! Tagseal Byte Buffers
//!
//! A heap-allocated byte buffer that carries three orthogonal capability
//! flags in addition to its contents:
//!
//! - **writable**: the buffer may be used as a destination
//! - **capacity-tracked**: the buffer knows its allocated room separately
//!   from its current logical length
//! - **length-tracked**: the buffer's logical length may be updated after a
//!   write
//!
//! Consumers query the flags through accessors and decide for themselves
//! what a buffer can be used for; the flags are a contract, not an
//! enforcement mechanism. The one place the contract matters is sizing: a
//! buffer without capacity tracking reports no spare room of its own, so
//! callers treat its current logical length as the usable size and must
//! ensure that length already equals whatever a write requires.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use thiserror::Error;

/// Errors from buffer allocation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The heap allocation for a new buffer failed
    #[error("allocation of {requested} byte buffer failed")]
    AllocationFailed {
        /// Number of bytes that was requested
        requested: usize,
    },
}

/// Capability flags describing what a [`Buffer`] supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The buffer may be written to
    pub writable: bool,
    /// The buffer knows its allocated capacity separately from its length
    pub capacity_tracked: bool,
    /// The buffer's logical length may be updated after a write
    pub length_tracked: bool,
}

impl Capabilities {
    /// All three capabilities set. What [`Buffer::alloc`] produces.
    pub const FULL: Self =
        Self { writable: true, capacity_tracked: true, length_tracked: true };

    /// Writable with no tracking. A fixed region whose logical length is
    /// its usable size.
    pub const WRITE_ONLY: Self =
        Self { writable: true, capacity_tracked: false, length_tracked: false };

    /// No capabilities at all.
    pub const NONE: Self =
        Self { writable: false, capacity_tracked: false, length_tracked: false };
}

/// A byte buffer with capability flags.
///
/// The allocated region is fixed at construction; `len` is the logical
/// content length and never exceeds the region size. Writers that need the
/// whole region use [`region_mut`](Self::region_mut); readers of the logical
/// content use [`bytes`](Self::bytes).
#[derive(Debug, Clone)]
pub struct Buffer {
    /// Allocated region; its size is the buffer's capacity
    data: Box<[u8]>,
    /// Logical content length, always <= data.len()
    len: usize,
    caps: Capabilities,
}

impl Buffer {
    /// Allocate a zero-filled buffer with the given capacity.
    ///
    /// The result is writable, capacity-tracked, and length-tracked, with
    /// logical length 0.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailed`] when the heap cannot satisfy the
    /// request.
    pub fn alloc(capacity: usize) -> Result<Self, BufferError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed { requested: capacity })?;
        data.resize(capacity, 0);
        Ok(Self { data: data.into_boxed_slice(), len: 0, caps: Capabilities::FULL })
    }

    /// A zero-filled writable buffer with no tracking capabilities.
    ///
    /// Its logical length equals `size`, which consumers treat as its
    /// usable capacity.
    pub fn fixed(size: usize) -> Self {
        Self { data: vec![0u8; size].into_boxed_slice(), len: size, caps: Capabilities::WRITE_ONLY }
    }

    /// Wrap existing bytes as a writable buffer with no tracking
    /// capabilities.
    ///
    /// The logical length equals `bytes.len()`.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self { data: bytes.into_boxed_slice(), len, caps: Capabilities::WRITE_ONLY }
    }

    /// Wrap existing bytes as a buffer with no capabilities at all.
    pub fn read_only(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self { data: bytes.into_boxed_slice(), len, caps: Capabilities::NONE }
    }

    /// Replace the capability flags, keeping contents and length.
    #[must_use]
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// The buffer's capability flags.
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Whether the buffer may be used as a write destination.
    pub fn is_writable(&self) -> bool {
        self.caps.writable
    }

    /// Whether the buffer knows its allocated capacity separately from its
    /// logical length.
    pub fn has_capacity_tracking(&self) -> bool {
        self.caps.capacity_tracked
    }

    /// Whether the buffer's logical length may be updated after a write.
    pub fn has_length_tracking(&self) -> bool {
        self.caps.length_tracked
    }

    /// Size of the allocated region in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current logical content length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical content is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The logical content: the first [`len`](Self::len) bytes of the
    /// region.
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The entire allocated region, regardless of logical length.
    pub fn region(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the entire allocated region.
    ///
    /// Callers must check [`is_writable`](Self::is_writable) first; the
    /// flag is advisory and not enforced here.
    pub fn region_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Update the logical content length.
    ///
    /// The length is capped at the allocated capacity.
    pub fn set_len(&mut self, len: usize) {
        debug_assert!(
            len <= self.data.len(),
            "logical length {len} exceeds capacity {}",
            self.data.len()
        );
        self.len = len.min(self.data.len());
    }

    /// Consume the buffer and return its logical content.
    pub fn into_vec(self) -> Vec<u8> {
        let mut data = self.data.into_vec();
        data.truncate(self.len);
        data
    }
}
