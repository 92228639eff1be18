// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};

use super::utils::{allocate, fill_pattern, has_pattern, layout_of_bytes, release, resize};

#[test]
fn test_mock_allocator_behaviour_none() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);

    let block = allocate(&mock, layout_of_bytes(32)).expect("Failed to allocate(..)");

    assert_eq!(mock.live_blocks(), 1);
    assert_eq!(mock.live_bytes(), 32);

    release(&mock, block);

    assert_eq!(mock.live_blocks(), 0);
    assert_eq!(mock.live_bytes(), 0);
}

#[test]
fn test_mock_allocator_behaviour_fail_always() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);

    assert!(allocate(&mock, layout_of_bytes(32)).is_none());
    assert!(allocate(&mock, layout_of_bytes(1)).is_none());

    assert_eq!(mock.resize_count(), 2);
    assert_eq!(mock.live_blocks(), 0);
}

#[test]
fn test_mock_allocator_behaviour_fail_at_nth_first_call() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthResize(1));

    // First call fails
    assert!(allocate(&mock, layout_of_bytes(8)).is_none());

    // Second call succeeds
    let block = allocate(&mock, layout_of_bytes(8)).expect("Failed to allocate(..)");
    release(&mock, block);
}

#[test]
fn test_mock_allocator_behaviour_fail_at_nth_keeps_block() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthResize(2));

    let block = allocate(&mock, layout_of_bytes(16)).expect("Failed to allocate(..)");
    fill_pattern(block);

    // Second call fails, the original block stays usable
    assert!(resize(&mock, block, layout_of_bytes(64)).is_none());
    assert!(has_pattern(block, 16));
    assert_eq!(mock.live_bytes(), 16);

    // Third call succeeds
    let grown = resize(&mock, block, layout_of_bytes(64)).expect("Failed to resize(..)");
    assert!(has_pattern(grown, 16));
    assert_eq!(mock.live_blocks(), 1);
    assert_eq!(mock.live_bytes(), 64);

    release(&mock, grown);
    assert_eq!(mock.live_blocks(), 0);
}

#[test]
fn test_mock_allocator_behaviour_fail_above_bytes() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAboveBytes(64));

    let block = allocate(&mock, layout_of_bytes(64)).expect("Failed to allocate(..)");

    assert!(resize(&mock, block, layout_of_bytes(65)).is_none());
    assert!(allocate(&mock, layout_of_bytes(128)).is_none());

    release(&mock, block);
}

#[test]
fn test_mock_allocator_change_behaviour() {
    let mut mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);
    assert!(allocate(&mock, layout_of_bytes(8)).is_none());

    mock.change_behaviour(MockAllocatorBehaviour::None);

    let block = allocate(&mock, layout_of_bytes(8)).expect("Failed to allocate(..)");
    release(&mock, block);
}

#[test]
fn test_mock_allocator_call_count() {
    let mock = MockAllocator::default();

    assert_eq!(mock.resize_count(), 0);
    assert_eq!(mock.release_count(), 0);

    let block = allocate(&mock, layout_of_bytes(8)).expect("Failed to allocate(..)");
    let block = resize(&mock, block, layout_of_bytes(16)).expect("Failed to resize(..)");
    assert_eq!(mock.resize_count(), 2);

    release(&mock, block);
    assert_eq!(mock.release_count(), 1);

    mock.reset_count();
    assert_eq!(mock.resize_count(), 0);
    assert_eq!(mock.release_count(), 0);
}
