//! Shared heap cells for container values.
//!
//! Container values (lists, tuples, sets, maps) are held behind `Heap<T>`
//! so that a value graph can alias and even contain itself. The cell
//! address doubles as the reference identity the compiler uses to detect
//! cycles: two clones of the same `Heap` share one address, two separately
//! built cells never do.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, mutable cell holding a container's backing store.
///
/// The constructor is crate-private: callers build container values through
/// the factory methods on [`Value`](crate::Value), which is the only way
/// heap cells enter a value graph.
pub struct Heap<T>(Arc<RwLock<T>>);

impl<T> Heap<T> {
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(RwLock::new(value)))
    }

    /// Get read access to the backing store.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Get write access to the backing store.
    ///
    /// This is how self-referential graphs are built: clone the container
    /// value, then push the clone into its own backing store.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Address of the shared allocation.
    ///
    /// Stable for the lifetime of the cell and shared by all clones; used
    /// as the reference identity for cycle detection.
    pub fn address(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl<T> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

// Debug prints the address only. Printing the contents would recurse
// forever on a self-containing value.
impl<T> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heap(0x{:x})", self.address())
    }
}
