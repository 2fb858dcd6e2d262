//! #   The SyncSet.
//!
//! The `SyncSet` is the concurrent equivalent of the `UnsyncSet`: it offers the
//! same operations, all through a shared reference.
//!
//! ##  Under the covers.
//!
//! Under the covers the `SyncSet` is an `UnsyncSet` guarded by a reader-writer
//! lock.
//!
//! The main consequences are:
//!
//! -   Reading operations (`contains`, `len`, `is_empty`, `to_vec`) may
//!     proceed concurrently with one another, and block while a write is in
//!     progress.
//! -   Writing operations (`insert`, `remove`, `clear`) are exclusive.
//! -   Each operation is atomic, yet a sequence of operations is not. Checking
//!     `contains` before calling `insert` may race with another thread.
//! -   The lock is not poisoned by a panic, such as a panicking `Hash`
//!     implementation; the set remains usable afterwards.
//!
//! #   Example: basic
//!
//! ```
//! use twinset::syncset::SyncSet;
//!
//! let set = SyncSet::from_items([1, 2, 3]);
//! set.insert(4);
//! set.remove(&1);
//!
//! assert_eq!(3, set.len());
//! assert!(set.contains(&4));
//! assert!(!set.contains(&1));
//! ```
//!
//! #   Example: sharing is caring
//!
//! The core property of `SyncSet` is its ability to be written to from multiple
//! threads at once.
//!
//! For read-only access, it is possible to create:
//!
//! -   A `SyncSetReader`, a read-only view of the `SyncSet` which reflects
//!     updates, at the cost of acquiring the read lock on each access.
//! -   A snapshot, an independent `UnsyncSet` copied from the `SyncSet` under a
//!     single acquisition of the read lock, which does not reflect updates and
//!     is synchronization-free.
//!
//! ```
//! use twinset::syncset::SyncSet;
//!
//! let set = SyncSet::new();
//! set.extend([1, 2, 3]);
//!
//! let reader = set.reader();
//! let snapshot = set.snapshot();  // could be reader.snapshot()
//!
//! std::thread::scope(|scope| {
//!     scope.spawn(|| set.insert(4));
//!     scope.spawn(|| set.insert(5));
//! });
//!
//! assert_eq!(5, reader.len());
//! assert_eq!(3, snapshot.len());
//! ```

mod reader;
mod syncset;

pub use self::reader::SyncSetReader;
pub use self::syncset::SyncSet;

use super::failure;
use super::set;
use super::unsyncset;
