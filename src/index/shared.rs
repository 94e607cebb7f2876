use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::index::SpatialIndex;

/// An atomically swappable handle over an immutable [`SpatialIndex`].
///
/// Readers take [`load`](Self::load) snapshots and keep answering from them
/// while a rebuilt index is swapped in; a snapshot is never partially built.
/// Rebuilds happen off to the side: construct the new index, then
/// [`replace`](Self::replace) it in one pointer store.
pub struct SharedIndex {
    inner: ArcSwap<SpatialIndex>,
}

impl SharedIndex {
    pub fn new(index: SpatialIndex) -> Self {
        Self { inner: ArcSwap::from_pointee(index) }
    }

    /// Get the current index snapshot.
    #[inline]
    pub fn load(&self) -> Arc<SpatialIndex> {
        self.inner.load_full()
    }

    /// Swap in a rebuilt index, returning the one it replaces.
    pub fn replace(&self, index: SpatialIndex) -> Arc<SpatialIndex> {
        self.inner.swap(Arc::new(index))
    }
}
