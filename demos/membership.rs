//! A simple membership example.
//!
//! Creates a set of three integers, without synchronization, and checks whether a present and an absent element are
//! contained.
//!
//! Debug logs go to stderr, stdout only carries the results.

extern crate twinset;

use tracing::Level;

use twinset::set::{self, Set};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let set = set::new_set(false, [1, 2, 3]);

    println!("contains 1: {}", set.contains(&1));
    println!("contains 5: {}", set.contains(&5));
}
