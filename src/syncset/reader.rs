//! A Reader of the SyncSet.
//!
//! The `SyncSetReader` is read-only, and reflects updates to the referred
//! `SyncSet`.

use std::{borrow, fmt, hash};

use super::SyncSet;

use super::unsyncset::UnsyncSet;

/// `SyncSetReader`
///
/// A `SyncSetReader` is an up-to-date read-only view of the `SyncSet` it was
/// created from.
///
/// It always reflects updates to the underlying instance, each access taking
/// the read lock of the instance for its duration.
///
/// A `SyncSetReader` can be sent across threads whenever its `SyncSet` can be
/// shared.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use twinset::syncset::SyncSet;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let set = SyncSet::new();
/// set.insert(Rc::new(3));
///
/// ensure_send(set.reader());
/// ```
pub struct SyncSetReader<'a, T> {
    set: &'a SyncSet<T>,
}

impl<'a, T> SyncSetReader<'a, T> {
    //  Creates a new instance.
    pub(crate) fn new(set: &'a SyncSet<T>) -> Self { Self { set } }

    /// Returns whether the `SyncSet` instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// let reader = set.reader();
    /// assert!(reader.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!reader.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.set.is_empty() }

    /// Returns the number of elements contained in the `SyncSet` instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// let reader = set.reader();
    /// assert_eq!(0, reader.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, reader.len());
    /// ```
    pub fn len(&self) -> usize { self.set.len() }
}

impl<'a, T: Eq + hash::Hash> SyncSetReader<'a, T> {
    /// Returns `true` if the `SyncSet` instance contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// let reader = set.reader();
    /// assert!(!reader.contains(&1));
    ///
    /// set.insert(1);
    /// assert!(reader.contains(&1));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.set.contains(value)
    }

    /// Returns the elements of the `SyncSet` instance, in arbitrary order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.set.to_vec()
    }

    /// Creates a snapshot of the `SyncSet` instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use twinset::syncset::SyncSet;
    /// let set = SyncSet::new();
    /// let reader = set.reader();
    /// let snapshot = reader.snapshot();
    ///
    /// set.insert(1);
    ///
    /// assert!(reader.contains(&1));
    /// assert!(!snapshot.contains(&1));
    /// ```
    pub fn snapshot(&self) -> UnsyncSet<T>
    where
        T: Clone,
    {
        self.set.snapshot()
    }
}

impl<'a, T> Clone for SyncSetReader<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for SyncSetReader<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for SyncSetReader<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SyncSetReader")
            .field("set", self.set)
            .finish()
    }
}

//  mod tests
