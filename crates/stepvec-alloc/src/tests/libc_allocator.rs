// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::libc_allocator::LibcAllocator;
use crate::traits::{AllocRequest, RawAllocator};

use super::utils::{allocate, fill_pattern, has_pattern, layout_of_bytes, release, resize};

#[test]
fn test_libc_allocate_and_release() {
    let allocator = LibcAllocator;
    let block = allocate(&allocator, layout_of_bytes(64)).expect("Failed to allocate(..)");

    fill_pattern(block);
    assert!(has_pattern(block, 64));

    assert!(release(&allocator, block).is_none());
}

#[test]
fn test_libc_grow_preserves_contents() {
    let allocator = LibcAllocator;
    let block = allocate(&allocator, layout_of_bytes(16)).expect("Failed to allocate(..)");
    fill_pattern(block);

    let grown = resize(&allocator, block, layout_of_bytes(1 << 16)).expect("Failed to resize(..)");

    assert!(has_pattern(grown, 16));

    release(&allocator, grown);
}

#[test]
fn test_libc_refuses_over_aligned_layout() {
    let allocator = LibcAllocator;
    let layout = Layout::from_size_align(64, LibcAllocator::MAX_ALIGN * 2)
        .expect("Failed to build layout");

    assert!(allocate(&allocator, layout).is_none());
}

#[test]
fn test_libc_zero_sized_round_trip() {
    let allocator = LibcAllocator;
    let empty = allocate(&allocator, layout_of_bytes(0)).expect("Failed to allocate(..)");
    assert!(empty.is_dangling());

    let block = resize(&allocator, empty, layout_of_bytes(8)).expect("Failed to resize(..)");
    assert!(!block.is_dangling());

    let empty = resize(&allocator, block, layout_of_bytes(0)).expect("Failed to resize(..)");
    assert!(empty.is_dangling());

    assert!(release(&allocator, empty).is_none());
}

#[test]
fn test_libc_release_without_block() {
    let allocator = LibcAllocator;

    // SAFETY: no block is passed in; free(NULL) is a no-op.
    let result = unsafe { allocator.resize_or_free(None, AllocRequest::Release) };

    assert!(result.is_none());
}
