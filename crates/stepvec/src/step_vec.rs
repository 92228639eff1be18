// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

use stepvec_alloc::{RawAllocator, SystemAllocator};

use crate::config::{Growth, VecConfig};
use crate::error::StepVecError;
use crate::storage::RawSlots;

/// Iterator over the elements of a [`StepVec`].
pub type Iter<'a, T> = core::iter::Flatten<core::slice::Iter<'a, Option<T>>>;

/// Growable vector with a pluggable allocator and a step-or-double growth policy.
///
/// Storage always keeps one reserved slot past the last element, so
/// `len() < capacity()` holds at all times and every slot in
/// `[len(), capacity())` is empty. When an insertion would consume the reserved
/// slot, the container grows first: it doubles its capacity (growth step `0`)
/// or adds exactly `growth_step` slots.
///
/// Capacity never shrinks. Every allocation goes through the allocator `A`.
///
/// # Invalid value
///
/// A container may reserve one value of `T` as invalid (see
/// [`with_invalid_value`](StepVec::with_invalid_value)). That value is refused
/// by `insert`, `add` and `set`, and terminates the sequence produced by
/// [`to_terminated`](StepVec::to_terminated).
///
/// # Example
///
/// ```rust
/// use stepvec::{StepVec, StepVecError};
///
/// fn example() -> Result<(), StepVecError> {
///     let mut vec = StepVec::create(1, 0)?;
///
///     vec.add(123)?;
///     assert_eq!(vec.capacity(), 2);
///
///     vec.add(456)?;
///     assert_eq!(vec.capacity(), 4);
///
///     vec.insert(0, 789)?;
///     assert_eq!(vec.index_of(&789), Some(0));
///     assert_eq!(vec.remove(1)?, 123);
///
///     assert_eq!(vec.to_array(), &[Some(789), Some(456), None]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct StepVec<T, A = SystemAllocator>
where
    A: RawAllocator,
{
    slots: RawSlots<T, A>,
    len: usize,
    growth: Growth,
    invalid: Option<T>,
}

impl<T> StepVec<T, SystemAllocator> {
    /// Creates a container backed by the global allocator.
    ///
    /// An `initial_capacity` of `0` is normalized to `1`. A `growth_step` of `0`
    /// doubles the capacity on growth; any other value adds exactly that many slots.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::AllocationFailed`] or [`StepVecError::CapacityOverflow`]
    /// if the initial storage cannot be allocated.
    pub fn create(initial_capacity: usize, growth_step: usize) -> Result<Self, StepVecError> {
        Self::create_in(VecConfig::new(initial_capacity, growth_step), SystemAllocator)
    }
}

impl<T, A> StepVec<T, A>
where
    A: RawAllocator,
{
    /// Creates a container whose storage is provided by `allocator`.
    ///
    /// No partially-built container is ever returned: if the initial allocation
    /// fails the allocator is dropped along with the error.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::AllocationFailed`] or [`StepVecError::CapacityOverflow`]
    /// if the initial storage cannot be allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepvec::{StepVec, StepVecError, SystemAllocator, VecConfig};
    ///
    /// fn example() -> Result<(), StepVecError> {
    ///     let vec: StepVec<u32> = StepVec::create_in(VecConfig::new(0, 3), SystemAllocator)?;
    ///
    ///     assert_eq!(vec.capacity(), 1);
    ///     assert_eq!(vec.growth().step(), 3);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn create_in(config: VecConfig, allocator: A) -> Result<Self, StepVecError> {
        let mut slots = RawSlots::new(allocator);
        slots.ensure_capacity(config.normalized_capacity())?;

        Ok(Self {
            slots,
            len: 0,
            growth: config.growth(),
            invalid: None,
        })
    }

    /// Drops every element and returns the storage to the allocator.
    ///
    /// Equivalent to dropping the container.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots. Always greater than [`len`](StepVec::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the growth policy.
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the configured invalid value, if any.
    pub fn invalid_value(&self) -> Option<&T> {
        self.invalid.as_ref()
    }

    /// Returns the allocator backing this container.
    pub fn allocator(&self) -> &A {
        self.slots.allocator()
    }

    /// Grows the storage to at least `capacity` slots.
    ///
    /// Useful before inserting many elements. Requests at or below the current
    /// capacity are a no-op; `0` is treated as `1`.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::AllocationFailed`] or [`StepVecError::CapacityOverflow`].
    /// The container is unchanged on error.
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<(), StepVecError> {
        self.slots.ensure_capacity(capacity)
    }

    #[inline(always)]
    fn check_index(index: usize, bound: usize) -> Result<(), StepVecError> {
        if index >= bound {
            return Err(StepVecError::IndexOutOfRange { index, bound });
        }

        Ok(())
    }

    fn grow_if_full(&mut self) -> Result<(), StepVecError> {
        if self.len + 1 < self.capacity() {
            return Ok(());
        }

        let capacity = self.growth.next_capacity(self.capacity())?;
        self.slots.ensure_capacity(capacity)
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, StepVecError> {
        Self::check_index(index, self.len)?;

        let slots = self.slots.as_mut_slice();
        let removed = slots[index].take();
        slots[index..self.len].rotate_left(1);
        self.len -= 1;

        Ok(removed.expect("infallible: slots below len are always occupied"))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, StepVecError> {
        Self::check_index(index, self.len)?;

        Ok(self.slots.as_slice()[index]
            .as_ref()
            .expect("infallible: slots below len are always occupied"))
    }

    /// Reads a raw slot anywhere below `capacity()`.
    ///
    /// Slots in `[len(), capacity())` read as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::IndexOutOfRange`] if `index >= capacity()`.
    pub fn slot(&self, index: usize) -> Result<Option<&T>, StepVecError> {
        Self::check_index(index, self.capacity())?;

        Ok(self.slots.as_slice()[index].as_ref())
    }

    /// Returns the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Removes every element from the tail down. Capacity is kept.
    pub fn clear(&mut self) {
        while self.len > 0 {
            self.len -= 1;
            drop(self.slots.as_mut_slice()[self.len].take());
        }
    }

    /// Returns a view of the slots `[0, len()]` inclusive.
    ///
    /// The slot at `len()` is always `None`, so the view doubles as a
    /// terminated sequence.
    pub fn to_array(&self) -> &[Option<T>] {
        &self.slots.as_slice()[..=self.len]
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots.as_slice()[..self.len].iter().flatten()
    }
}

impl<T, A> StepVec<T, A>
where
    T: PartialEq,
    A: RawAllocator,
{
    /// Reserves `invalid` as the container's invalid value.
    ///
    /// # Errors
    ///
    /// Returns [`StepVecError::InvalidValue`] if an equal element is already stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepvec::{StepVec, StepVecError};
    ///
    /// fn example() -> Result<(), StepVecError> {
    ///     let mut vec = StepVec::create(3, 1)?.with_invalid_value(b'\0')?;
    ///
    ///     vec.add(b'a')?;
    ///     assert_eq!(vec.add(b'\0'), Err(StepVecError::InvalidValue));
    ///     assert_eq!(vec.len(), 1);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn with_invalid_value(mut self, invalid: T) -> Result<Self, StepVecError> {
        if self.contains(&invalid) {
            return Err(StepVecError::InvalidValue);
        }

        self.invalid = Some(invalid);
        Ok(self)
    }

    #[inline(always)]
    fn is_invalid(&self, element: &T) -> bool {
        self.invalid.as_ref() == Some(element)
    }

    /// Inserts `element` at `index`, shifting later elements right.
    ///
    /// Grows the storage first when the insertion would consume the reserved slot.
    ///
    /// # Errors
    ///
    /// - [`StepVecError::IndexOutOfRange`] if `index > len()`
    /// - [`StepVecError::InvalidValue`] if `element` is the invalid value
    /// - [`StepVecError::AllocationFailed`] / [`StepVecError::CapacityOverflow`] if growth fails
    ///
    /// The container is unchanged on error.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), StepVecError> {
        Self::check_index(index, self.len + 1)?;

        if self.is_invalid(&element) {
            return Err(StepVecError::InvalidValue);
        }

        self.grow_if_full()?;

        let len = self.len;
        let slots = self.slots.as_mut_slice();
        slots[len] = Some(element);
        slots[index..=len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    /// Appends `element` to the end.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](StepVec::insert), minus the index check.
    pub fn add(&mut self, element: T) -> Result<(), StepVecError> {
        self.insert(self.len, element)
    }

    /// Appends every element of `iter`, stopping at the first error.
    ///
    /// Elements appended before the error stay in the container.
    ///
    /// # Errors
    ///
    /// Same as [`add`](StepVec::add).
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), StepVecError>
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.add(element)?;
        }

        Ok(())
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// - [`StepVecError::IndexOutOfRange`] if `index >= len()`
    /// - [`StepVecError::InvalidValue`] if `element` is the invalid value
    pub fn set(&mut self, index: usize, element: T) -> Result<T, StepVecError> {
        Self::check_index(index, self.len)?;

        if self.is_invalid(&element) {
            return Err(StepVecError::InvalidValue);
        }

        Ok(self.slots.as_mut_slice()[index]
            .replace(element)
            .expect("infallible: slots below len are always occupied"))
    }

    /// Returns the index of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    /// Returns `true` if an element equal to `element` is stored.
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }
}

impl<T, A> StepVec<T, A>
where
    T: Clone,
    A: RawAllocator,
{
    /// Copies the elements followed by the invalid value.
    ///
    /// Returns `None` if no invalid value is configured.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepvec::{StepVec, StepVecError};
    ///
    /// fn example() -> Result<(), StepVecError> {
    ///     let mut vec = StepVec::create(3, 1)?.with_invalid_value(b'\0')?;
    ///     vec.try_extend(*b"abc")?;
    ///
    ///     assert_eq!(vec.to_terminated().as_deref(), Some(&b"abc\0"[..]));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn to_terminated(&self) -> Option<Vec<T>> {
        let terminator = self.invalid.clone()?;

        let mut terminated = Vec::with_capacity(self.len + 1);
        terminated.extend(self.iter().cloned());
        terminated.push(terminator);

        Some(terminated)
    }
}

impl<'a, T, A> IntoIterator for &'a StepVec<T, A>
where
    A: RawAllocator,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, A, B> PartialEq<StepVec<T, B>> for StepVec<T, A>
where
    T: PartialEq,
    A: RawAllocator,
    B: RawAllocator,
{
    fn eq(&self, other: &StepVec<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

struct Elements<'a, T>(&'a [Option<T>]);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().flatten()).finish()
    }
}

impl<T, A> fmt::Debug for StepVec<T, A>
where
    T: fmt::Debug,
    A: RawAllocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth", &self.growth)
            .field("elements", &Elements(&self.slots.as_slice()[..self.len]))
            .finish()
    }
}
