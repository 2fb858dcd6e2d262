//! The Failure and Result types of this library.
//!
//! The operations of the sets never fail, with the exception of explicitly
//! reserving capacity. The cause of such an error is then represented as a
//! `Failure`.
//!
//! The faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.

use std::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of elements cannot be calculated due to overflowing.
    ElementsOverflow,
    /// The allocator could not allocate memory, or the amount of memory to
    /// allocate could not be calculated.
    OutOfMemory,
}

impl Failure {
    //  Classifies the failure to reserve `extra` more slots in a set of `len`.
    pub(crate) fn from_reserve(len: usize, extra: usize) -> Self {
        if len.checked_add(extra).is_none() {
            Failure::ElementsOverflow
        } else {
            Failure::OutOfMemory
        }
    }
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;
