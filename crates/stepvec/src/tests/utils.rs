// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for stepvec tests.

use std::cell::Cell;
use std::rc::Rc;

use stepvec_alloc::RawAllocator;

use crate::step_vec::StepVec;

/// Checks the slot invariants through the public API.
pub fn assert_invariants<T, A: RawAllocator>(vec: &StepVec<T, A>) {
    assert!(
        vec.len() < vec.capacity(),
        "len {} must stay below capacity {}",
        vec.len(),
        vec.capacity()
    );

    for index in 0..vec.len() {
        assert!(
            vec.slot(index).expect("Failed to slot(..)").is_some(),
            "slot {index} below len must be occupied"
        );
    }

    for index in vec.len()..vec.capacity() {
        assert!(
            vec.slot(index).expect("Failed to slot(..)").is_none(),
            "slot {index} at or above len must be empty"
        );
    }

    assert!(vec.slot(vec.capacity()).is_err());
}

/// Element that counts how many times it is dropped.
#[derive(Debug, Clone)]
pub struct DropCounter {
    pub value: u32,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new(value: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
