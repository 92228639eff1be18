// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator doubles for exercising allocation-failure paths.

mod mock_allocator;

pub use mock_allocator::*;
