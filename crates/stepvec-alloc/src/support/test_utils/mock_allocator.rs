// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;
use core::ptr::NonNull;

use crate::system::SystemAllocator;
use crate::traits::{AllocRequest, RawAllocator, RawBlock};

/// Configurable behaviour for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SystemAllocator`]).
    None,
    /// Every resize request fails.
    FailAlways,
    /// Fail the Nth resize request (1-indexed: 1 = first call fails).
    FailAtNthResize(usize),
    /// Fail any resize request asking for more than this many bytes.
    FailAboveBytes(usize),
}

/// Mock allocator for testing.
///
/// Wraps [`SystemAllocator`] but allows simulating allocation failures via
/// [`MockAllocatorBehaviour`], and keeps track of the blocks it hands out.
/// Release requests always succeed.
#[derive(Debug)]
pub struct MockAllocator {
    inner: SystemAllocator,
    behaviour: MockAllocatorBehaviour,
    resize_count: Cell<usize>,
    release_count: Cell<usize>,
    live_blocks: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl MockAllocator {
    /// Creates a new mock allocator with the specified behaviour.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            inner: SystemAllocator,
            behaviour,
            resize_count: Cell::new(0),
            release_count: Cell::new(0),
            live_blocks: Cell::new(0),
            live_bytes: Cell::new(0),
        }
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockAllocatorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the resize and release counters. Live block tracking is kept.
    pub fn reset_count(&self) {
        self.resize_count.set(0);
        self.release_count.set(0);
    }

    /// Returns how many resize requests were made, failed ones included.
    pub fn resize_count(&self) -> usize {
        self.resize_count.get()
    }

    /// Returns how many release requests were made.
    pub fn release_count(&self) -> usize {
        self.release_count.get()
    }

    /// Returns how many blocks were handed out and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.live_blocks.get()
    }

    /// Returns how many bytes the live blocks span.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.get()
    }

    fn should_fail(&self, call: usize, requested_bytes: usize) -> bool {
        match self.behaviour {
            MockAllocatorBehaviour::None => false,
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthResize(n) => call == n,
            MockAllocatorBehaviour::FailAboveBytes(limit) => requested_bytes > limit,
        }
    }
}

impl Default for MockAllocator {
    fn default() -> Self {
        Self::new(MockAllocatorBehaviour::None)
    }
}

// SAFETY: delegates to `SystemAllocator`; injected failures return `None`
// without touching the supplied block.
unsafe impl RawAllocator for MockAllocator {
    unsafe fn resize_or_free(
        &self,
        block: Option<RawBlock>,
        request: AllocRequest,
    ) -> Option<NonNull<u8>> {
        match request {
            AllocRequest::Release => {
                self.release_count.set(self.release_count.get() + 1);

                if let Some(block) = block {
                    self.live_blocks.set(self.live_blocks.get() - 1);
                    self.live_bytes.set(self.live_bytes.get() - block.layout.size());
                }

                // SAFETY (PRECONDITIONS ARE MET): caller upholds the port contract.
                unsafe { self.inner.resize_or_free(block, request) }
            }
            AllocRequest::Resize(layout) => {
                let call = self.resize_count.get() + 1;
                self.resize_count.set(call);

                if self.should_fail(call, layout.size()) {
                    return None;
                }

                // SAFETY (PRECONDITIONS ARE MET): caller upholds the port contract.
                let ptr = unsafe { self.inner.resize_or_free(block, request) }?;

                match block {
                    Some(old) => {
                        self.live_bytes
                            .set(self.live_bytes.get() - old.layout.size() + layout.size());
                    }
                    None => {
                        self.live_blocks.set(self.live_blocks.get() + 1);
                        self.live_bytes.set(self.live_bytes.get() + layout.size());
                    }
                }

                Some(ptr)
            }
        }
    }
}
