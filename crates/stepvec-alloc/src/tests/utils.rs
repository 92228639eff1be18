// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for allocator tests.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::{AllocRequest, RawAllocator, RawBlock};

pub fn layout_of_bytes(size: usize) -> Layout {
    Layout::from_size_align(size, 8).expect("Failed to build layout")
}

pub fn allocate<A: RawAllocator>(allocator: &A, layout: Layout) -> Option<RawBlock> {
    // SAFETY: no block is passed in.
    let ptr = unsafe { allocator.resize_or_free(None, AllocRequest::Resize(layout)) }?;
    Some(RawBlock::new(ptr, layout))
}

pub fn resize<A: RawAllocator>(allocator: &A, block: RawBlock, layout: Layout) -> Option<RawBlock> {
    // SAFETY: tests only pass live blocks obtained from the same allocator.
    let ptr = unsafe { allocator.resize_or_free(Some(block), AllocRequest::Resize(layout)) }?;
    Some(RawBlock::new(ptr, layout))
}

pub fn release<A: RawAllocator>(allocator: &A, block: RawBlock) -> Option<NonNull<u8>> {
    // SAFETY: tests only pass live blocks obtained from the same allocator.
    unsafe { allocator.resize_or_free(Some(block), AllocRequest::Release) }
}

pub fn fill_pattern(block: RawBlock) {
    for i in 0..block.layout.size() {
        // SAFETY: `i` is within the block.
        unsafe { block.ptr.as_ptr().add(i).write(i as u8) };
    }
}

pub fn has_pattern(block: RawBlock, len: usize) -> bool {
    (0..len).all(|i| {
        // SAFETY: callers pass `len` <= block size.
        unsafe { block.ptr.as_ptr().add(i).read() == i as u8 }
    })
}
