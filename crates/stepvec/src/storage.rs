// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Slot storage owned through a [`RawAllocator`].
//!
//! Every slot in `[0, capacity)` is always initialized: occupied slots hold
//! `Some(element)`, reserved slots hold `None`. Callers above this module only
//! ever see safe slices.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use stepvec_alloc::{AllocRequest, RawAllocator, RawBlock};

use crate::config::VecConfig;
use crate::error::StepVecError;

pub(crate) struct RawSlots<T, A>
where
    A: RawAllocator,
{
    block: Option<RawBlock>,
    capacity: usize,
    allocator: A,
    _marker: PhantomData<Option<T>>,
}

// SAFETY: RawSlots owns its block exclusively, like `Vec<Option<T>>`.
unsafe impl<T: Send, A: RawAllocator + Send> Send for RawSlots<T, A> {}
// SAFETY: shared access only hands out `&[Option<T>]`.
unsafe impl<T: Sync, A: RawAllocator + Sync> Sync for RawSlots<T, A> {}

impl<T, A> RawSlots<T, A>
where
    A: RawAllocator,
{
    /// Empty storage. Not usable as a container until `ensure_capacity` succeeds.
    pub(crate) fn new(allocator: A) -> Self {
        Self {
            block: None,
            capacity: 0,
            allocator,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn allocator(&self) -> &A {
        &self.allocator
    }

    #[inline(always)]
    fn slots_ptr(&self) -> NonNull<Option<T>> {
        match self.block {
            Some(block) => block.ptr.cast(),
            None => NonNull::dangling(),
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        // SAFETY (PRECONDITIONS ARE MET): the block spans `capacity` initialized slots
        // (or `capacity` is zero and the pointer is dangling but aligned).
        unsafe { core::slice::from_raw_parts(self.slots_ptr().as_ptr(), self.capacity) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        // SAFETY (PRECONDITIONS ARE MET): same as `as_slice`, and `&mut self` is exclusive.
        unsafe { core::slice::from_raw_parts_mut(self.slots_ptr().as_ptr(), self.capacity) }
    }

    /// Grows the storage to exactly `requested` slots.
    ///
    /// `0` is treated as `1`. Requests at or below the current capacity are a
    /// no-op: storage never shrinks. New slots are initialized to `None`.
    ///
    /// On failure the previous storage is left untouched.
    pub(crate) fn ensure_capacity(&mut self, requested: usize) -> Result<(), StepVecError> {
        let requested = requested.max(VecConfig::MIN_CAPACITY);

        if requested <= self.capacity {
            return Ok(());
        }

        let layout =
            Layout::array::<Option<T>>(requested).map_err(|_| StepVecError::CapacityOverflow)?;

        // SAFETY (PRECONDITIONS ARE MET): `self.block` is either absent or the live
        // block this allocator returned for an `Option<T>` array, so the alignment
        // matches `layout`.
        let ptr = unsafe {
            self.allocator
                .resize_or_free(self.block, AllocRequest::Resize(layout))
        }
        .ok_or(StepVecError::AllocationFailed { requested })?;

        let slots = ptr.cast::<Option<T>>();

        for index in self.capacity..requested {
            // SAFETY (PRECONDITIONS ARE MET): `index < requested`, inside the new block,
            // and the slot holds no value yet.
            unsafe { slots.add(index).write(None) };
        }

        self.block = Some(RawBlock::new(ptr, layout));
        self.capacity = requested;

        Ok(())
    }
}

impl<T, A> Drop for RawSlots<T, A>
where
    A: RawAllocator,
{
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): every slot in `[0, capacity)` is initialized
        // and is never read again.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [Option<T>]) };

        if let Some(block) = self.block.take() {
            // SAFETY (PRECONDITIONS ARE MET): the block is live and owned by this allocator.
            unsafe {
                self.allocator
                    .resize_or_free(Some(block), AllocRequest::Release)
            };
        }

        self.capacity = 0;
    }
}
