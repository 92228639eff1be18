// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LibcAllocator - `realloc`/`free` port.
//!
//! `realloc(NULL, n)` allocates, `realloc(p, n)` resizes and `free(p)` releases,
//! so one libc entry point covers both resize paths.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::{AllocRequest, RawAllocator, RawBlock, dangling};

/// Alignment `malloc` guarantees on every supported Unix target.
const MALLOC_ALIGN: usize = 2 * core::mem::size_of::<usize>();

/// Allocator port backed by `libc::realloc` and `libc::free`.
///
/// Layouts aligned beyond what `malloc` guarantees are refused: the request
/// returns `None` as an allocation failure.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LibcAllocator;

impl LibcAllocator {
    /// Largest alignment this allocator serves.
    pub const MAX_ALIGN: usize = MALLOC_ALIGN;

    /// # Safety
    ///
    /// `ptr` must be null or a live pointer obtained from `libc::realloc`.
    unsafe fn realloc(ptr: *mut u8, layout: Layout) -> Option<NonNull<u8>> {
        if layout.align() > Self::MAX_ALIGN {
            return None;
        }

        if layout.size() == 0 {
            if !ptr.is_null() {
                // SAFETY (PRECONDITIONS ARE MET): caller guarantees `ptr` is live.
                unsafe { libc::free(ptr.cast()) };
            }

            return dangling(layout);
        }

        // SAFETY (PRECONDITIONS ARE MET): caller guarantees `ptr` is null or live.
        NonNull::new(unsafe { libc::realloc(ptr.cast(), layout.size()) }.cast::<u8>())
    }
}

// SAFETY: `realloc` preserves contents and leaves the block untouched on failure;
// alignment is checked against what `malloc` guarantees.
unsafe impl RawAllocator for LibcAllocator {
    unsafe fn resize_or_free(
        &self,
        block: Option<RawBlock>,
        request: AllocRequest,
    ) -> Option<NonNull<u8>> {
        let ptr = match block {
            Some(block) if !block.is_dangling() => block.ptr.as_ptr(),
            _ => core::ptr::null_mut(),
        };

        match request {
            AllocRequest::Release => {
                // SAFETY (PRECONDITIONS ARE MET): `ptr` is null or a live block.
                unsafe { libc::free(ptr.cast()) };
                None
            }
            // SAFETY (PRECONDITIONS ARE MET): `ptr` is null or a live block.
            AllocRequest::Resize(layout) => unsafe { Self::realloc(ptr, layout) },
        }
    }
}
