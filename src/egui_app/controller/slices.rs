//! Revision counters that let consumers watch one part of the store.
//!
//! Every mutating store action bumps the counters of the slices it touches.
//! A [`SliceWatcher`] remembers the last revision it saw, so polling it once
//! per frame reports exactly the changes to that slice and nothing else.

use super::FacilityStore;

/// Independently observable parts of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slice {
    /// Manifest, loaded facility, loading and error flags.
    Catalog,
    /// Current floor.
    Floor,
    /// Active size filters and sidebar visibility.
    Filters,
    /// Selected unit.
    Selection,
    /// Target viewport and its motion tag.
    Viewport,
    Tooltip,
    Phase,
}

impl Slice {
    pub const ALL: [Slice; 7] = [
        Slice::Catalog,
        Slice::Floor,
        Slice::Filters,
        Slice::Selection,
        Slice::Viewport,
        Slice::Tooltip,
        Slice::Phase,
    ];

    fn index(self) -> usize {
        match self {
            Slice::Catalog => 0,
            Slice::Floor => 1,
            Slice::Filters => 2,
            Slice::Selection => 3,
            Slice::Viewport => 4,
            Slice::Tooltip => 5,
            Slice::Phase => 6,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SliceRevisions {
    counters: [u64; Slice::ALL.len()],
}

impl SliceRevisions {
    pub(crate) fn bump(&mut self, slice: Slice) {
        let counter = &mut self.counters[slice.index()];
        *counter = counter.wrapping_add(1);
    }

    pub(crate) fn get(&self, slice: Slice) -> u64 {
        self.counters[slice.index()]
    }
}

/// Change detector for a single slice.
#[derive(Clone, Debug)]
pub struct SliceWatcher {
    slice: Slice,
    seen: u64,
}

impl SliceWatcher {
    /// Start watching from the store's current revision.
    pub fn new(store: &FacilityStore, slice: Slice) -> Self {
        Self {
            slice,
            seen: store.revision(slice),
        }
    }

    /// True once per batch of changes to the watched slice.
    pub fn changed(&mut self, store: &FacilityStore) -> bool {
        let current = store.revision(self.slice);
        if current == self.seen {
            return false;
        }
        self.seen = current;
        true
    }
}
