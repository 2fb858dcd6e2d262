//! Internal testing utilities

use std::hash;
use std::sync::atomic::{AtomicUsize, Ordering};

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of live instances, helpful to ensure that
//  removed, cleared, or rejected elements are dropped.
//
//  Equality and hashing only consider the `id`.
pub struct SpyElement<'a> {
    id: u32,
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(id: u32, count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { id, count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

impl<'a> PartialEq for SpyElement<'a> {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl<'a> Eq for SpyElement<'a> {}

impl<'a> hash::Hash for SpyElement<'a> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { self.id.hash(state) }
}

//  A value which may panic when hashed.
//
//  Equality only considers the value, so that a panicky instance can be used to
//  look up a normal one... and panic.
#[derive(Clone, Debug)]
pub struct PanickyHash(pub u32, bool);

impl PanickyHash {
    //  Creates a normal instance.
    pub fn new(value: u32) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: u32) -> Self { Self(value, true) }
}

impl PartialEq for PanickyHash {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl Eq for PanickyHash {}

impl hash::Hash for PanickyHash {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        if self.1 { panic!("Oh No!") }

        self.0.hash(state)
    }
}
