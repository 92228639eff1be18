// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Container configuration and growth policy.

use core::num::NonZeroUsize;

use crate::error::StepVecError;

/// How a full container computes its next capacity.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Growth {
    /// Double the capacity (1 → 2 → 4 → 8 ...).
    #[default]
    Double,
    /// Add exactly this many slots (1 → 1+k → 1+2k ...).
    Step(NonZeroUsize),
}

impl Growth {
    /// Builds the policy from a raw step: `0` doubles, anything else is a fixed increment.
    pub fn from_step(step: usize) -> Self {
        match NonZeroUsize::new(step) {
            Some(step) => Self::Step(step),
            None => Self::Double,
        }
    }

    /// Returns the raw step this policy was built from (`0` for [`Growth::Double`]).
    pub fn step(&self) -> usize {
        match self {
            Self::Double => 0,
            Self::Step(step) => step.get(),
        }
    }

    /// Capacity that follows `current`.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::CapacityOverflow`] if the result does not fit in `usize`.
    pub fn next_capacity(&self, current: usize) -> Result<usize, StepVecError> {
        let next = match self {
            Self::Double => current.checked_mul(2),
            Self::Step(step) => current.checked_add(step.get()),
        };

        next.ok_or(StepVecError::CapacityOverflow)
    }
}

/// Creation parameters for a `StepVec`.
///
/// Values are taken as-is; a zero initial capacity is normalized to one slot
/// when the container is created.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct VecConfig {
    /// Slots allocated up front.
    pub initial_capacity: usize,

    /// Slots added on growth. `0` doubles the capacity instead.
    pub growth_step: usize,
}

impl VecConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Default growth step (doubling).
    pub const DEFAULT_GROWTH_STEP: usize = 0;

    /// Smallest capacity a live container ever has.
    pub const MIN_CAPACITY: usize = 1;

    /// Creates a config with the given initial capacity and growth step.
    pub fn new(initial_capacity: usize, growth_step: usize) -> Self {
        Self {
            initial_capacity,
            growth_step,
        }
    }

    /// Initial capacity with `0` normalized to [`VecConfig::MIN_CAPACITY`].
    pub fn normalized_capacity(&self) -> usize {
        self.initial_capacity.max(Self::MIN_CAPACITY)
    }

    /// Growth policy derived from `growth_step`.
    pub fn growth(&self) -> Growth {
        Growth::from_step(self.growth_step)
    }
}

impl Default for VecConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY, Self::DEFAULT_GROWTH_STEP)
    }
}
