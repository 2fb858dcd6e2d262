//! #   The Set contract.
//!
//! The `Set` trait captures the operations common to both `UnsyncSet` and
//! `SyncSet`, allowing code to be written once for either.
//!
//! The `new_set` function picks the variant at run-time, returning a
//! `SetHandle`; the `new_unsync_set` and `new_sync_set` functions state the
//! choice explicitly and return the concrete type.
//!
//! #   Example: picking at run-time
//!
//! ```
//! use twinset::set::{self, Set};
//!
//! for thread_safe in [false, true] {
//!     let mut set = set::new_set(thread_safe, [1, 2, 3]);
//!
//!     assert!(set.contains(&1));
//!     assert!(!set.contains(&5));
//!
//!     set.insert(5);
//!     set.remove(&1);
//!
//!     assert_eq!(3, set.len());
//! }
//! ```
//!
//! #   Example: picking at compile-time
//!
//! ```
//! use twinset::set;
//!
//! let local = set::new_unsync_set([1, 2, 3]);
//! let shared = set::new_sync_set([1, 2, 3]);
//!
//! std::thread::scope(|scope| {
//!     scope.spawn(|| shared.insert(4));
//! });
//!
//! assert_eq!(3, local.len());
//! assert_eq!(4, shared.len());
//! ```

use std::hash;

use tracing::debug;

use super::syncset::SyncSet;
use super::unsyncset::UnsyncSet;

/// `Set`
///
/// The operations of a set of unique elements.
///
/// None of the operations can fail: inserting an existing element, or removing
/// a missing one, leaves the set unchanged.
pub trait Set<T> {
    /// Returns `true` if the set contains `item`.
    fn contains(&self, item: &T) -> bool;

    /// Inserts `item` into the set, if not already present.
    fn insert(&mut self, item: T);

    /// Removes `item` from the set, if present.
    fn remove(&mut self, item: &T);

    /// Returns the number of elements of the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no element.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Removes all elements from the set.
    fn clear(&mut self);

    /// Returns the elements of the set, in arbitrary order.
    ///
    /// The returned `Vec` is independent from the set.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

/// A set, either synchronized or not.
pub type SetHandle<'a, T> = Box<dyn Set<T> + Send + Sync + 'a>;

/// Creates a new set containing `items`, synchronized if `thread_safe`.
///
/// Duplicates among `items` collapse into a single element.
///
/// #   Example
///
/// ```
/// use twinset::set::{self, Set};
///
/// let set = set::new_set(false, [1, 2, 2, 3, 3, 3]);
///
/// assert_eq!(3, set.len());
///
/// let set = set::new_set::<i32, _>(true, []);
///
/// assert!(set.is_empty());
/// ```
pub fn new_set<'a, T, I>(thread_safe: bool, items: I) -> SetHandle<'a, T>
where
    T: Eq + hash::Hash + Send + Sync + 'a,
    I: IntoIterator<Item = T>,
{
    let set: SetHandle<'a, T> = if thread_safe {
        Box::new(new_sync_set(items))
    } else {
        Box::new(new_unsync_set(items))
    };

    debug!(thread_safe, length = set.len(), "created set");

    set
}

/// Creates a new `UnsyncSet` containing `items`.
pub fn new_unsync_set<T, I>(items: I) -> UnsyncSet<T>
where
    T: Eq + hash::Hash,
    I: IntoIterator<Item = T>,
{
    UnsyncSet::from_items(items)
}

/// Creates a new `SyncSet` containing `items`.
pub fn new_sync_set<T, I>(items: I) -> SyncSet<T>
where
    T: Eq + hash::Hash,
    I: IntoIterator<Item = T>,
{
    SyncSet::from_items(items)
}

//  mod tests
