//  Lints
#![allow(clippy::module_inception)]

//! #   The Twinset Library
//!
//! A set of unique elements, in two flavors:
//! -   The `UnsyncSet`: a set without any synchronization overhead.
//! -   The `SyncSet`: an `UnsyncSet` behind a reader-writer lock, safe to mutate from multiple threads.
//!
//! Both flavors implement the `Set` trait, and the `set` module provides the functions to construct either, at
//! run-time or at compile-time.

pub mod failure;
pub mod set;
pub mod syncset;
pub mod unsyncset;

#[cfg(test)]
mod utils;
