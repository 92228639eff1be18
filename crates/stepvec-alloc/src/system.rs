// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SystemAllocator - port over the global Rust allocator.

use alloc::alloc::{alloc, dealloc, realloc};
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::{AllocRequest, RawAllocator, RawBlock, dangling};

/// Allocator port backed by the global Rust allocator.
///
/// Zero-sized layouts are served with an aligned dangling pointer and never
/// reach the global allocator.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct SystemAllocator;

impl SystemAllocator {
    fn allocate(layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return dangling(layout);
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has a non-zero size.
        NonNull::new(unsafe { alloc(layout) })
    }

    /// # Safety
    ///
    /// `block` must be live and owned by the global allocator.
    unsafe fn release(block: RawBlock) {
        if block.is_dangling() {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): caller guarantees the block is live.
        unsafe { dealloc(block.ptr.as_ptr(), block.layout) }
    }
}

// SAFETY: every path either delegates to the global allocator, which upholds the
// same guarantees, or serves zero-sized layouts that need no storage.
unsafe impl RawAllocator for SystemAllocator {
    unsafe fn resize_or_free(
        &self,
        block: Option<RawBlock>,
        request: AllocRequest,
    ) -> Option<NonNull<u8>> {
        match (block, request) {
            (None, AllocRequest::Release) => None,
            (Some(block), AllocRequest::Release) => {
                // SAFETY (PRECONDITIONS ARE MET): caller hands over a live block.
                unsafe { Self::release(block) };
                None
            }
            (None, AllocRequest::Resize(layout)) => Self::allocate(layout),
            (Some(block), AllocRequest::Resize(layout)) if block.is_dangling() => {
                Self::allocate(layout)
            }
            (Some(block), AllocRequest::Resize(layout)) if layout.size() == 0 => {
                // SAFETY (PRECONDITIONS ARE MET): caller hands over a live block.
                unsafe { Self::release(block) };
                dangling(layout)
            }
            (Some(block), AllocRequest::Resize(layout)) => {
                // SAFETY (PRECONDITIONS ARE MET): block is live and non-empty, the
                // alignment is unchanged and `layout` already validated the new size.
                NonNull::new(unsafe {
                    realloc(block.ptr.as_ptr(), block.layout, layout.size())
                })
            }
        }
    }
}
