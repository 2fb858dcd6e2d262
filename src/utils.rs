//! Internal utilities.

pub mod tester;
