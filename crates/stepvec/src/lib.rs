// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable vector with a pluggable allocator and a step-or-double growth policy.
//!
//! `StepVec<T, A>` keeps its elements in a contiguous block obtained from a
//! [`RawAllocator`]. The caller decides how memory is obtained and how fast the
//! container grows:
//!
//! - **Pluggable storage**: every allocation, resize and release goes through
//!   `A` ([`SystemAllocator`] by default, [`LibcAllocator`] on Unix, or any
//!   arena implementing [`RawAllocator`])
//! - **Predictable growth**: a growth step of `0` doubles the capacity, any
//!   other step adds exactly that many slots
//! - **Reserved slot**: `len() < capacity()` always holds and the slot at
//!   `len()` is always empty, so [`StepVec::to_array`] is a terminated view
//! - **Checked access**: out-of-range indices return
//!   [`StepVecError::IndexOutOfRange`] instead of touching memory
//! - **Failure atomicity**: when the allocator refuses to grow, the insertion
//!   fails and the container is left exactly as it was
//!
//! # Example: Doubling Growth
//!
//! ```rust
//! use stepvec::{StepVec, StepVecError};
//!
//! fn example() -> Result<(), StepVecError> {
//!     let mut vec = StepVec::create(1, 0)?;
//!
//!     let mut capacities = Vec::new();
//!     for i in 0..4 {
//!         vec.add(i)?;
//!         capacities.push(vec.capacity());
//!     }
//!
//!     assert_eq!(capacities, [2, 4, 4, 8]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Fixed Growth Step
//!
//! ```rust
//! use stepvec::{StepVec, StepVecError};
//!
//! fn example() -> Result<(), StepVecError> {
//!     let mut vec = StepVec::create(1, 3)?;
//!
//!     vec.add('a')?;
//!     assert_eq!(vec.capacity(), 4);
//!
//!     vec.try_extend(['b', 'c', 'd'])?;
//!     assert_eq!(vec.capacity(), 7);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature of `stepvec-alloc` to inject allocation
//! failures:
//!
//! ```toml
//! [dev-dependencies]
//! stepvec-alloc = { version = "*", features = ["test-utils"] }
//! ```
//!
//! ```rust,ignore
//! use stepvec::{StepVec, StepVecError, VecConfig};
//! use stepvec_alloc::test_utils::{MockAllocator, MockAllocatorBehaviour};
//!
//! let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthResize(2));
//! let mut vec = StepVec::create_in(VecConfig::new(1, 0), &mock)?;
//!
//! // Growth is the second resize request and fails
//! assert!(matches!(vec.add(1u8), Err(StepVecError::AllocationFailed { .. })));
//! assert!(vec.is_empty());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod config;
mod error;
mod step_vec;
mod storage;

pub use config::{Growth, VecConfig};
pub use error::StepVecError;
pub use step_vec::{Iter, StepVec};

#[cfg(unix)]
pub use stepvec_alloc::LibcAllocator;
pub use stepvec_alloc::{AllocRequest, RawAllocator, RawBlock, SystemAllocator};
