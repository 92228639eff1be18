// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for stepvec.

use thiserror::Error;

/// Error type for `StepVec` operations.
///
/// Every failure leaves the container in its previous valid state.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StepVecError {
    /// The allocator could not provide storage for the requested slot count.
    #[error("allocation failed: could not provide storage for {requested} slots")]
    AllocationFailed {
        /// Slot count that was requested.
        requested: usize,
    },

    /// The requested slot count does not fit in a valid memory layout.
    ///
    /// Growth arithmetic overflowing `usize` reports this error as well.
    #[error("capacity overflow: slot count exceeds the addressable size")]
    CapacityOverflow,

    /// The element equals the container's invalid value and cannot be stored.
    #[error("element equals the container's invalid value")]
    InvalidValue,

    /// The index is outside the range the operation accepts.
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Exclusive upper bound the index was checked against.
        bound: usize,
    },
}
