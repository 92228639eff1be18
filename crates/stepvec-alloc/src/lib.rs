// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw allocator port for `stepvec` containers.
//!
//! Containers never call a fixed global allocator. Every allocation, resize and
//! release goes through a single capability, [`RawAllocator::resize_or_free`],
//! which an embedding application may implement over its own arena.
//!
//! # Allocators
//!
//! ## SystemAllocator
//!
//! The default port, backed by the global Rust allocator:
//! - Uses `alloc::alloc::{alloc, realloc, dealloc}`
//! - Honors any alignment the layout asks for
//! - Available on all platforms
//!
//! ## LibcAllocator (Unix only)
//!
//! A `realloc`/`free` port in the classic C style:
//! - Uses `libc::realloc` for both allocation and resizing
//! - Uses `libc::free` for release
//! - Fails (returns `None`) for layouts aligned beyond what `malloc` guarantees
//!
//! # Contract
//!
//! - A `Resize` request without a block allocates a new block.
//! - A `Resize` request with a block resizes it, preserving contents up to the
//!   lesser of the old and new sizes. The block may move.
//! - A `Release` request frees the block (if any) and always returns `None`.
//! - A `None` result for a `Resize` request means allocation failure. The
//!   original block is left valid and untouched.
//!
//! # Example
//!
//! ```rust
//! use core::alloc::Layout;
//! use stepvec_alloc::{AllocRequest, RawAllocator, RawBlock, SystemAllocator};
//!
//! let allocator = SystemAllocator;
//! let layout = Layout::array::<u32>(4).expect("Failed to build layout");
//!
//! // SAFETY: no block is passed, so there is nothing to invalidate.
//! let ptr = unsafe { allocator.resize_or_free(None, AllocRequest::Resize(layout)) }
//!     .expect("Failed to allocate");
//!
//! // SAFETY: `ptr` was returned by this allocator for `layout`.
//! let released = unsafe {
//!     allocator.resize_or_free(Some(RawBlock::new(ptr, layout)), AllocRequest::Release)
//! };
//! assert!(released.is_none());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(unix)]
mod libc_allocator;

mod support;
mod system;
mod traits;

#[cfg(unix)]
pub use libc_allocator::LibcAllocator;

pub use system::SystemAllocator;
pub use traits::{AllocRequest, RawAllocator, RawBlock};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
