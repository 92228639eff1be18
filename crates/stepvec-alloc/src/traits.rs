// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

/// What a [`RawAllocator`] is asked to do with a block.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AllocRequest {
    /// Allocate a block for the layout, or resize the supplied block to it.
    Resize(Layout),
    /// Free the supplied block. The allocator returns `None`.
    Release,
}

/// A live block previously handed out by a [`RawAllocator`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RawBlock {
    /// Start of the block.
    pub ptr: NonNull<u8>,
    /// Layout the block was allocated (or last resized) with.
    pub layout: Layout,
}

impl RawBlock {
    /// Creates a block descriptor from a pointer and its current layout.
    pub fn new(ptr: NonNull<u8>, layout: Layout) -> Self {
        Self { ptr, layout }
    }

    /// Returns `true` if the block spans zero bytes and never reached an allocator.
    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.layout.size() == 0
    }
}

/// Single-capability allocation port.
///
/// Every storage mutation of a `stepvec` container funnels through
/// [`resize_or_free`](RawAllocator::resize_or_free).
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - A `Some(ptr)` result for `Resize(layout)` is valid for reads and writes of
///   `layout.size()` bytes and aligned to `layout.align()`.
/// - When a block is resized, the first `min(old, new)` bytes are preserved.
/// - A `None` result for `Resize` leaves the supplied block valid and unchanged.
/// - `Release` frees the supplied block and returns `None`.
pub unsafe trait RawAllocator {
    /// Allocates, resizes or releases a block.
    ///
    /// # Safety
    ///
    /// - `block`, when present, must have been returned by this allocator with
    ///   exactly `block.layout`, and must not have been released since.
    /// - For `Resize(layout)` with a block, `layout.align()` must equal
    ///   `block.layout.align()`.
    /// - After a successful resize or a release, the old pointer must not be used.
    unsafe fn resize_or_free(
        &self,
        block: Option<RawBlock>,
        request: AllocRequest,
    ) -> Option<NonNull<u8>>;
}

// SAFETY: forwards to `A`, which upholds the contract.
unsafe impl<A> RawAllocator for &A
where
    A: RawAllocator + ?Sized,
{
    #[inline(always)]
    unsafe fn resize_or_free(
        &self,
        block: Option<RawBlock>,
        request: AllocRequest,
    ) -> Option<NonNull<u8>> {
        // SAFETY (PRECONDITIONS ARE MET): caller upholds the contract for `A`.
        unsafe { (**self).resize_or_free(block, request) }
    }
}

/// Aligned, non-null pointer for zero-sized layouts.
#[inline(always)]
pub(crate) fn dangling(layout: Layout) -> Option<NonNull<u8>> {
    NonNull::new(core::ptr::without_provenance_mut::<u8>(layout.align()))
}
