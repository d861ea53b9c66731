//! Secure handling of short-lived secret buffers.
//!
//! This module provides the constant-time comparison, zeroization, and
//! page-locking primitives that the envelope protocol relies on to keep
//! intermediate secrets (shared secrets, derived keys, Ed25519 seeds) from
//! lingering in memory or being paged to disk.
//!
//! None of this is a general-purpose secure-allocator: buffers are always
//! stack-local, sized to the exact secret they hold, and scoped to a single
//! encrypt/decrypt call.

use crate::os::{lock_memory, unlock_memory};
use zeroize::Zeroize;

/// Zeroes a buffer in a way the optimizer cannot elide.
///
/// Thin wrapper over [`zeroize::Zeroize`] so call sites read the same way
/// the rest of the crate's vocabulary does (`secure_zero`, not `.zeroize()`).
#[inline(always)]
pub(crate) fn secure_zero(buf: &mut [u8]) {
    buf.zeroize();
}

/// Compares two equal-length byte slices in constant time.
///
/// Accumulates the XOR of every byte pair before testing for zero, so the
/// number of differing bytes (and their position) does not affect timing.
/// Returns `false` immediately only when lengths differ, which is public
/// information in every call site this crate has.
#[inline(always)]
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    acc == 0
}

/// A secret buffer that is page-locked while live and always zeroed and
/// unlocked on drop.
///
/// Used for the two buffers that `decrypt` must keep out of swap for its
/// entire run: the caller's Ed25519 seed and the derived X25519 scalar.
/// Per the locking discipline, the seed is locked before the scalar and
/// buffers are unlocked in the reverse order they were locked (LIFO), so the
/// scalar is never exposed while the seed it was derived from is still
/// paged in.
pub(crate) struct LockedSecret {
    bytes: [u8; 32],
    locked: bool,
}

impl LockedSecret {
    /// Wraps `bytes` and attempts to lock its backing pages.
    ///
    /// Returns `None` if the OS refuses to lock the memory; the caller must
    /// treat that as [`crate::error::EnvelopeError::MemoryProtectionFailed`].
    pub(crate) fn new(bytes: [u8; 32]) -> Option<Self> {
        let mut this = Self {
            bytes,
            locked: false,
        };
        if !lock_memory(&mut this.bytes) {
            this.zero();
            return None;
        }
        this.locked = true;
        Some(this)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Unlocks the backing pages ahead of drop. Returns `false` if the OS
    /// call fails; the buffer is zeroed regardless.
    pub(crate) fn unlock(&mut self) -> bool {
        if !self.locked {
            return true;
        }
        let ok = unlock_memory(&mut self.bytes);
        self.locked = false;
        ok
    }

    fn zero(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for LockedSecret {
    fn drop(&mut self) {
        if self.locked {
            unlock_memory(&mut self.bytes);
        }
        self.zero();
    }
}
