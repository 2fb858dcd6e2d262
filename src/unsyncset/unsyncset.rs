//! The UnsyncSet

use std::collections::{hash_set, HashSet};
use std::{borrow, fmt, hash, iter};

use tracing::{debug, trace};

use super::failure::{Failure, Result};
use super::set::Set;

//
//  Public Interface
//

/// `UnsyncSet`
///
/// A set of unique elements, with no synchronization.
///
/// Mutation requires `&mut self`, hence sharing an `UnsyncSet` across threads
/// only ever allows reading it. See `SyncSet` for concurrent mutation.
#[derive(Clone)]
pub struct UnsyncSet<T> {
    data: HashSet<T>,
}

impl<T> UnsyncSet<T> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let set: UnsyncSet<i32> = UnsyncSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(0, set.capacity());
    /// ```
    pub fn new() -> Self { Self { data: HashSet::new() } }

    /// Creates a new, empty, instance able to hold at least `capacity`
    /// elements without reallocating.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let set: UnsyncSet<i32> = UnsyncSet::with_capacity(10);
    ///
    /// assert_eq!(0, set.len());
    /// assert!(set.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: HashSet::with_capacity(capacity) }
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let mut set = UnsyncSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let mut set = UnsyncSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.data.len() }

    /// Returns the number of elements the instance can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize { self.data.capacity() }

    /// Returns an iterator over the elements, in arbitrary order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let set = UnsyncSet::from_items([1, 2, 3]);
    ///
    /// assert_eq!(6, set.iter().sum::<i32>());
    /// ```
    pub fn iter(&self) -> hash_set::Iter<'_, T> { self.data.iter() }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains previously allocated
    /// memory.
    ///
    /// Use `shrink` to release excess memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let mut set = UnsyncSet::from_items([1, 2, 3]);
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 3);
    /// ```
    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            trace!(length = self.data.len(), "clearing set");
        }

        self.data.clear();
    }
}

impl<T: Eq + hash::Hash> UnsyncSet<T> {
    /// Creates a new instance containing `items`.
    ///
    /// Duplicates among `items` collapse into a single element.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let set = UnsyncSet::from_items([1, 2, 2, 3, 3, 3]);
    ///
    /// assert_eq!(3, set.len());
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();

        let mut data = HashSet::with_capacity(items.size_hint().0);
        data.extend(items);

        Self { data }
    }

    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let set = UnsyncSet::from_items(["Hello".to_string()]);
    ///
    /// assert!(set.contains("Hello"));
    /// assert!(!set.contains("World"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.data.contains(value)
    }

    /// Inserts a value into the set.
    ///
    /// If the value is already present, the set is left unchanged and `value`
    /// is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let mut set = UnsyncSet::new();
    ///
    /// set.insert(3);
    /// set.insert(3);
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, value: T) {
        self.data.insert(value);
    }

    /// Removes a value from the set.
    ///
    /// Does nothing if the value is not present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let mut set = UnsyncSet::from_items([3, 4, 5]);
    ///
    /// set.remove(&4);
    /// set.remove(&1022);
    ///
    /// assert_eq!(2, set.len());
    /// assert!(!set.contains(&4));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q)
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.data.remove(value);
    }

    /// Returns the elements of the set, in arbitrary order.
    ///
    /// The returned `Vec` is independent from the set: modifying it does not
    /// affect the set, and vice-versa.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let set = UnsyncSet::from_items([1, 2, 3]);
    ///
    /// let mut elements = set.to_vec();
    /// elements.sort();
    ///
    /// assert_eq!(vec![1, 2, 3], elements);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.iter().cloned().collect()
    }

    /// Reserves capacity for at least `extra` more elements.
    ///
    /// Calling this method has no effect if there is already sufficient
    /// capacity for `extra` elements.
    ///
    /// #   Errors
    ///
    /// Returns an error if sufficient space cannot be reserved to accomodate
    /// `extra` elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::failure::Failure;
    /// #   use twinset::unsyncset::UnsyncSet;
    /// //  ElementsOverflow signals that the total number of elements overflows
    /// //  `usize`.
    /// let mut set = UnsyncSet::from_items([1]);
    /// assert_eq!(Err(Failure::ElementsOverflow), set.try_reserve(usize::MAX));
    ///
    /// //  OutOfMemory signals that the memory could not be provided.
    /// let mut set: UnsyncSet<i32> = UnsyncSet::new();
    /// assert_eq!(Err(Failure::OutOfMemory), set.try_reserve(usize::MAX));
    ///
    /// //  Fortunately, in general, `try_reserve` should succeed.
    /// assert_eq!(Ok(()), set.try_reserve(6));
    /// assert!(set.capacity() >= 6);
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<()> {
        self.data.try_reserve(extra).map_err(|_| {
            let failure = Failure::from_reserve(self.data.len(), extra);
            debug!(extra, %failure, "failed to reserve capacity");
            failure
        })
    }

    /// Reserves capacity for at least `extra` more elements.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if sufficient space cannot be reserved to accomodate `extra`
    /// elements.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).unwrap_or_else(panic_from_failure);
    }

    /// Shrinks the instance.
    ///
    /// This method releases excess capacity, retaining just enough to
    /// accomodate the current elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::unsyncset::UnsyncSet;
    /// let mut set = UnsyncSet::with_capacity(100);
    /// set.insert(1);
    ///
    /// set.shrink();
    /// assert!(set.capacity() < 100);
    /// ```
    pub fn shrink(&mut self) { self.data.shrink_to_fit(); }
}

impl<T: Eq + hash::Hash> Set<T> for UnsyncSet<T> {
    fn contains(&self, item: &T) -> bool { UnsyncSet::contains(self, item) }

    fn insert(&mut self, item: T) { UnsyncSet::insert(self, item) }

    fn remove(&mut self, item: &T) { UnsyncSet::remove(self, item) }

    fn len(&self) -> usize { UnsyncSet::len(self) }

    fn is_empty(&self) -> bool { UnsyncSet::is_empty(self) }

    fn clear(&mut self) { UnsyncSet::clear(self) }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        UnsyncSet::to_vec(self)
    }
}

impl<T> Default for UnsyncSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug> fmt::Debug for UnsyncSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UnsyncSet")
            .field("length", &self.data.len())
            .field("elements", &self.data)
            .finish()
    }
}

/// Two sets are equal if they have the same members.
impl<T: Eq + hash::Hash> PartialEq for UnsyncSet<T> {
    fn eq(&self, other: &Self) -> bool { self.data == other.data }
}

impl<T: Eq + hash::Hash> Eq for UnsyncSet<T> {}

impl<T: Eq + hash::Hash> iter::FromIterator<T> for UnsyncSet<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Self::from_items(collection)
    }
}

impl<T: Eq + hash::Hash> iter::Extend<T> for UnsyncSet<T> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.data.extend(collection);
    }
}

impl<T> IntoIterator for UnsyncSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { self.data.into_iter() }
}

impl<'a, T> IntoIterator for &'a UnsyncSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.data.iter() }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) {
    panic!("{}", failure);
}

#[cfg(test)]
mod tests {

use std::collections::HashSet;

use super::UnsyncSet;
use crate::utils::tester::{SpyCount, SpyElement};

fn sorted(set: &UnsyncSet<i32>) -> Vec<i32> {
    let mut elements = set.to_vec();
    elements.sort();
    elements
}

#[test]
fn new_empty() {
    let set: UnsyncSet<i32> = UnsyncSet::from_items([]);

    assert_eq!(0, set.len());
    assert!(set.is_empty());
    assert!(!set.contains(&1));
}

#[test]
fn new_with_items() {
    let set = UnsyncSet::from_items([1, 2, 3]);

    assert_eq!(3, set.len());
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(set.contains(&3));
    assert!(!set.contains(&5));
}

#[test]
fn new_with_duplicate_items() {
    let set = UnsyncSet::from_items([1, 2, 2, 3, 3, 3]);

    assert_eq!(3, set.len());
    assert_eq!(vec![1, 2, 3], sorted(&set));
}

#[test]
fn new_sized_to_input() {
    let set = UnsyncSet::from_items(0..100);

    assert!(set.capacity() >= 100);
}

#[test]
fn insert_new_item() {
    let mut set = UnsyncSet::new();
    set.insert(1);

    assert!(set.contains(&1));
    assert_eq!(1, set.len());
}

#[test]
fn insert_existing_item() {
    let mut set = UnsyncSet::from_items([1, 2, 3]);
    set.insert(2);

    assert_eq!(3, set.len());
    assert!(set.contains(&2));
}

#[test]
fn insert_existing_item_drops_newcomer() {
    let count = SpyCount::zero();

    let mut set = UnsyncSet::new();
    set.insert(SpyElement::new(1, &count));
    set.insert(SpyElement::new(1, &count));

    assert_eq!(1, set.len());
    assert_eq!(1, count.get());
}

#[test]
fn remove_existing_item() {
    let items = [3, 4, 5, 6, 7];
    let mut set = UnsyncSet::from_items(items);
    set.remove(&4);

    assert_eq!(4, set.len());
    assert!(!set.contains(&4));
    assert_eq!(vec![3, 5, 6, 7], sorted(&set));
}

#[test]
fn remove_missing_item() {
    let mut set = UnsyncSet::from_items([3, 4, 5, 6, 7]);
    set.remove(&1022);

    assert_eq!(5, set.len());
    assert!(!set.contains(&1022));
    assert_eq!(vec![3, 4, 5, 6, 7], sorted(&set));
}

#[test]
fn remove_drops_item() {
    let count = SpyCount::zero();

    let mut set = UnsyncSet::new();
    set.insert(SpyElement::new(1, &count));
    set.insert(SpyElement::new(2, &count));
    assert_eq!(2, count.get());

    set.remove(&SpyElement::new(1, &count));

    assert_eq!(1, set.len());
    assert_eq!(1, count.get());
}

#[test]
fn membership_follows_last_operation() {
    let mut set = UnsyncSet::new();
    let mut model = HashSet::new();

    //  A deterministic, scrambled, sequence of inserts and removes.
    for i in 0..1000u32 {
        let value = i.wrapping_mul(7919) % 61;

        if i % 3 == 0 {
            set.remove(&value);
            model.remove(&value);
        } else {
            set.insert(value);
            model.insert(value);
        }

        assert_eq!(model.len(), set.len());
    }

    for value in 0..61 {
        assert_eq!(model.contains(&value), set.contains(&value), "{}", value);
    }
}

#[test]
fn size_after_modifications() {
    let mut set = UnsyncSet::from_items([1, 2, 3]);
    assert_eq!(3, set.len());

    set.insert(4);
    assert_eq!(4, set.len());

    set.remove(&1);
    assert_eq!(3, set.len());
}

#[test]
fn clear_empty() {
    let mut set: UnsyncSet<i32> = UnsyncSet::new();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(0, set.len());
}

#[test]
fn clear_non_empty() {
    let items = [3, 4, 5];
    let mut set = UnsyncSet::from_items(items);
    set.clear();

    assert!(set.is_empty());
    assert_eq!(0, set.len());

    for item in &items {
        assert!(!set.contains(item));
    }
}

#[test]
fn clear_drops_items() {
    let count = SpyCount::zero();

    let mut set = UnsyncSet::from_items((0..5).map(|id| SpyElement::new(id, &count)));
    assert_eq!(5, count.get());

    set.clear();
    assert_eq!(0, count.get());
}

#[test]
fn to_vec_empty() {
    let set: UnsyncSet<i32> = UnsyncSet::new();

    assert!(set.to_vec().is_empty());
}

#[test]
fn to_vec_single() {
    let set = UnsyncSet::from_items([42]);

    assert_eq!(vec![42], set.to_vec());
}

#[test]
fn to_vec_after_modifications() {
    let mut set = UnsyncSet::from_items([1, 2, 3]);
    set.insert(4);
    set.remove(&2);

    assert_eq!(vec![1, 3, 4], sorted(&set));
}

#[test]
fn to_vec_independence() {
    let set = UnsyncSet::from_items([1, 2, 3]);

    let mut elements = set.to_vec();
    elements[0] = 999;
    elements.push(1000);

    assert!(!set.contains(&999));
    assert!(!set.contains(&1000));
    assert_eq!(vec![1, 2, 3], sorted(&set));
}

#[test]
fn reserve_shrink() {
    let mut set = UnsyncSet::new();
    set.reserve(64);
    assert!(set.capacity() >= 64);

    set.extend([1, 2, 3]);
    set.shrink();

    assert!(set.capacity() >= 3);
    assert!(set.capacity() < 64);
}

#[test]
#[should_panic(expected = "ElementsOverflow")]
fn reserve_overflow() {
    let mut set = UnsyncSet::from_items([1]);
    set.reserve(usize::MAX);
}

#[test]
fn trait_debug() {
    use std::fmt::Write;

    let set = UnsyncSet::from_items([1]);

    let mut sink = String::new();
    let _ = write!(sink, "{:?}", set);

    assert_eq!("UnsyncSet { length: 1, elements: {1} }", sink);
}

#[test]
fn trait_partial_eq() {
    let left = UnsyncSet::from_items([1, 2, 3]);
    let right = UnsyncSet::from_items([3, 2, 1, 1]);

    assert_eq!(left, right);
    assert_ne!(left, UnsyncSet::from_items([1, 2]));
}

#[test]
fn trait_from_iterator() {
    let set: UnsyncSet<_> = [1, 2, 3, 4, 5].iter().copied().collect();

    assert_eq!(5, set.len());
}

#[test]
fn trait_into_iterator() {
    let set = UnsyncSet::from_items([1]);

    for e in &set {
        assert_eq!(&1, e);
    }

    for e in set {
        assert_eq!(1, e);
    }
}

}   //  mod tests
