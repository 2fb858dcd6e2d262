//! The SyncSet

use std::{borrow, fmt, hash, iter};

use parking_lot::RwLock;

use super::SyncSetReader;

use super::failure::Result;
use super::set::Set;
use super::unsyncset::UnsyncSet;

//
//  Public Interface
//

/// `SyncSet`
///
/// A set of unique elements, safe to share and mutate across threads.
///
/// Each operation is atomic: read operations hold the read lock, and write
/// operations hold the write lock, for their whole duration. A sequence of
/// operations, such as `contains` followed by `insert`, is not.
pub struct SyncSet<T> {
    //  Only ever accessed through a guard, or through `&mut self`.
    set: RwLock<UnsyncSet<T>>,
}

impl<T> SyncSet<T> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set: SyncSet<i32> = SyncSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(0, set.capacity());
    /// ```
    pub fn new() -> Self { Self::from(UnsyncSet::new()) }

    /// Creates a new, empty, instance able to hold at least `capacity`
    /// elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(UnsyncSet::with_capacity(capacity))
    }

    /// Creates a `SyncSetReader`.
    ///
    /// A `SyncSetReader` is a read-only view of the `SyncSet` instance it is
    /// created from which it reflects updates.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// let reader = set.reader();
    ///
    /// set.insert(1);
    /// assert!(reader.contains(&1));
    /// ```
    pub fn reader(&self) -> SyncSetReader<'_, T> { SyncSetReader::new(self) }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.set.read().is_empty() }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.set.read().len() }

    /// Returns the number of elements the instance can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize { self.set.read().capacity() }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains previously allocated
    /// memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([1, 2, 3]);
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&self) { self.set.write().clear() }

    /// Returns a mutable reference to the underlying `UnsyncSet`.
    ///
    /// No locking is necessary, as `&mut self` statically guarantees that the
    /// instance is not shared.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let mut set = SyncSet::from_items([1, 2, 3]);
    ///
    /// set.get_mut().insert(4);
    /// assert_eq!(4, set.len());
    /// ```
    pub fn get_mut(&mut self) -> &mut UnsyncSet<T> { self.set.get_mut() }

    /// Consumes the instance, returning the underlying `UnsyncSet`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([1, 2, 3]);
    ///
    /// let set = set.into_inner();
    /// assert_eq!(3, set.len());
    /// ```
    pub fn into_inner(self) -> UnsyncSet<T> { self.set.into_inner() }
}

impl<T: Eq + hash::Hash> SyncSet<T> {
    /// Creates a new instance containing `items`.
    ///
    /// Duplicates among `items` collapse into a single element.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([1, 2, 2, 3, 3, 3]);
    ///
    /// assert_eq!(3, set.len());
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(UnsyncSet::from_items(items))
    }

    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// set.insert(1);
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&0));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.set.read().contains(value)
    }

    /// Inserts a value into the set.
    ///
    /// If the value is already present, the set is left unchanged and `value`
    /// is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    ///
    /// set.insert(3);
    /// set.insert(3);
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&self, value: T) { self.set.write().insert(value) }

    /// Inserts multiple values in the set, under a single acquisition of the
    /// lock.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// set.extend([1, 2, 3, 3]);
    ///
    /// assert_eq!(3, set.len());
    /// ```
    pub fn extend<C>(&self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.set.write().extend(collection)
    }

    /// Removes a value from the set.
    ///
    /// Does nothing if the value is not present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([3, 4, 5]);
    ///
    /// set.remove(&4);
    /// set.remove(&1022);
    ///
    /// assert_eq!(2, set.len());
    /// ```
    pub fn remove<Q>(&self, value: &Q)
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.set.write().remove(value)
    }

    /// Returns the elements of the set, in arbitrary order.
    ///
    /// The returned `Vec` is independent from the set, and reflects its
    /// content at a single point in time.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([1, 2, 3]);
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
        self.set.read().to_vec()
    }

    /// Creates a snapshot of the set.
    ///
    /// The snapshot is an independent `UnsyncSet`, it does not reflect
    /// further updates.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([1, 2, 3]);
    /// let snapshot = set.snapshot();
    ///
    /// set.insert(4);
    ///
    /// assert_eq!(4, set.len());
    /// assert_eq!(3, snapshot.len());
    /// ```
    pub fn snapshot(&self) -> UnsyncSet<T>
    where
        T: Clone,
    {
        UnsyncSet::clone(&self.set.read())
    }

    /// Reserves capacity for at least `extra` more elements.
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
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::from_items([1]);
    ///
    /// assert_eq!(Err(Failure::ElementsOverflow), set.try_reserve(usize::MAX));
    /// assert_eq!(Ok(()), set.try_reserve(6));
    /// ```
    pub fn try_reserve(&self, extra: usize) -> Result<()> {
        self.set.write().try_reserve(extra)
    }

    /// Reserves capacity for at least `extra` more elements.
    ///
    /// #   Panics
    ///
    /// Panics if sufficient space cannot be reserved to accomodate `extra`
    /// elements.
    pub fn reserve(&self, extra: usize) { self.set.write().reserve(extra) }

    /// Shrinks the instance, releasing excess capacity.
    pub fn shrink(&self) { self.set.write().shrink() }
}

impl<T: Eq + hash::Hash> Set<T> for SyncSet<T> {
    fn contains(&self, item: &T) -> bool { SyncSet::contains(self, item) }

    fn insert(&mut self, item: T) { SyncSet::insert(&*self, item) }

    fn remove(&mut self, item: &T) { SyncSet::remove(&*self, item) }

    fn len(&self) -> usize { SyncSet::len(self) }

    fn is_empty(&self) -> bool { SyncSet::is_empty(self) }

    fn clear(&mut self) { SyncSet::clear(&*self) }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        SyncSet::to_vec(self)
    }
}

/// A shared reference to a `SyncSet` is itself a handle, allowing a set shared
/// across threads to be manipulated through the `Set` trait.
///
/// #   Example
///
/// ```
/// #   use twinset::set::Set;
/// #   use twinset::syncset::SyncSet;
/// fn fill<S: Set<u32>>(mut set: S) {
///     for i in 0..4 { set.insert(i) }
/// }
///
/// let set: SyncSet<u32> = SyncSet::new();
/// std::thread::scope(|scope| {
///     scope.spawn(|| fill(&set));
///     scope.spawn(|| fill(&set));
/// });
///
/// assert_eq!(4, set.len());
/// ```
impl<'a, T: Eq + hash::Hash> Set<T> for &'a SyncSet<T> {
    fn contains(&self, item: &T) -> bool { SyncSet::contains(*self, item) }

    fn insert(&mut self, item: T) { SyncSet::insert(*self, item) }

    fn remove(&mut self, item: &T) { SyncSet::remove(*self, item) }

    fn len(&self) -> usize { SyncSet::len(*self) }

    fn is_empty(&self) -> bool { SyncSet::is_empty(*self) }

    fn clear(&mut self) { SyncSet::clear(*self) }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        SyncSet::to_vec(*self)
    }
}

impl<T> Default for SyncSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T> From<UnsyncSet<T>> for SyncSet<T> {
    fn from(set: UnsyncSet<T>) -> Self { Self { set: RwLock::new(set) } }
}

impl<T: fmt::Debug> fmt::Debug for SyncSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SyncSet")
            .field("set", &*self.set.read())
            .finish()
    }
}

impl<T: Eq + hash::Hash> iter::FromIterator<T> for SyncSet<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Self::from_items(collection)
    }
}

//  mod tests
