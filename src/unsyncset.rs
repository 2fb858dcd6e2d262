//! #   The UnsyncSet.
//!
//! The `UnsyncSet` is a set of unique elements, without any synchronization
//! overhead.
//!
//! ##  Under the covers.
//!
//! Under the covers the `UnsyncSet` is a thin layer over the standard
//! `HashSet`, with its default hasher.
//!
//! The main consequences are:
//!
//! -   Elements must implement `Eq` and `Hash`.
//! -   The order in which elements are iterated on, or exported, is arbitrary
//!     and may differ from one instance to the next.
//!
//! #   Example: basic
//!
//! General usage of `UnsyncSet` involves inserting elements, either at
//! construction or with `insert`, then querying membership.
//!
//! ```
//! use twinset::unsyncset::UnsyncSet;
//!
//! let mut set = UnsyncSet::from_items([1, 2, 3]);
//! set.insert(4);
//! set.remove(&1);
//!
//! assert_eq!(3, set.len());
//! assert!(set.contains(&4));
//! assert!(!set.contains(&1));
//!
//! for e in &set {
//!     println!("{}", e);
//! }
//! ```
//!
//! #   Example: exporting elements
//!
//! `to_vec` exports a copy of the elements, which may be freely modified.
//!
//! ```
//! use twinset::unsyncset::UnsyncSet;
//!
//! let set = UnsyncSet::from_items([1, 2, 3]);
//!
//! let mut elements = set.to_vec();
//! elements.clear();
//!
//! assert_eq!(3, set.len());
//! ```
//!
//! #   Example: sharing is reading
//!
//! The `UnsyncSet` is `Sync` whenever its elements are, yet sharing it only
//! ever grants read access: mutation requires exclusive access.
//!
//! ```compile_fail
//! use twinset::unsyncset::UnsyncSet;
//!
//! let set = UnsyncSet::from_items([1, 2, 3]);
//!
//! std::thread::scope(|scope| {
//!     scope.spawn(|| set.insert(4));
//!     scope.spawn(|| set.contains(&4));
//! });
//! ```
//!
//! To mutate a set from multiple threads, use a `SyncSet`.

mod unsyncset;

pub use self::unsyncset::UnsyncSet;

use super::failure;
use super::set;
