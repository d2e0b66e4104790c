use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{IndexRange, Rendered};

#[cfg(feature = "std")]
type IndexMap<V> = HashMap<usize, V>;
#[cfg(not(feature = "std"))]
type IndexMap<V> = BTreeMap<usize, V>;

/// Render cache and garbage pool.
///
/// An index is live, garbage, or absent; entries only move between the two maps with a
/// remove-then-insert so the key sets stay disjoint.
pub(crate) struct Residency<R> {
    live: IndexMap<Rendered<R>>,
    garbage: IndexMap<Rendered<R>>,
}

impl<R> Residency<R> {
    pub(crate) fn new() -> Self {
        Self {
            live: IndexMap::new(),
            garbage: IndexMap::new(),
        }
    }

    pub(crate) fn is_live(&self, index: usize) -> bool {
        self.live.contains_key(&index)
    }

    pub(crate) fn is_garbage(&self, index: usize) -> bool {
        self.garbage.contains_key(&index)
    }

    pub(crate) fn live_len(&self) -> usize {
        self.live.len()
    }

    pub(crate) fn garbage_len(&self) -> usize {
        self.garbage.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Rendered<R>> {
        self.live.get(&index)
    }

    pub(crate) fn live_indices(&self) -> Vec<usize> {
        sorted_keys(&self.live)
    }

    pub(crate) fn garbage_indices(&self) -> Vec<usize> {
        sorted_keys(&self.garbage)
    }

    pub(crate) fn live_outside(&self, range: IndexRange) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .live
            .keys()
            .copied()
            .filter(|&i| !range.contains(i))
            .collect();
        out.sort_unstable();
        out
    }

    pub(crate) fn for_each_live(&self, mut f: impl FnMut(&Rendered<R>)) {
        for item in self.live.values() {
            f(item);
        }
    }

    /// Inserts a freshly rendered item into the cache.
    pub(crate) fn admit(&mut self, item: Rendered<R>) {
        let index = item.index();
        debug_assert!(
            !self.garbage.contains_key(&index),
            "admit: index {index} is still in the garbage pool"
        );
        let prev = self.live.insert(index, item);
        debug_assert!(prev.is_none(), "admit: index {index} rendered twice");
    }

    /// Moves a live item into the garbage pool and returns it there.
    pub(crate) fn evict(&mut self, index: usize) -> Option<&mut Rendered<R>> {
        let item = self.live.remove(&index)?;
        Some(insert_fresh(&mut self.garbage, index, item))
    }

    /// Moves a garbage item back into the cache and returns it there.
    pub(crate) fn revive(&mut self, index: usize) -> Option<&mut Rendered<R>> {
        let item = self.garbage.remove(&index)?;
        Some(insert_fresh(&mut self.live, index, item))
    }

    /// Empties the garbage pool, in index order.
    pub(crate) fn drain_garbage(&mut self) -> Vec<Rendered<R>> {
        drain_sorted(&mut self.garbage)
    }

    /// Empties both maps, garbage first.
    pub(crate) fn drain_all(&mut self) -> Vec<Rendered<R>> {
        let mut out = drain_sorted(&mut self.garbage);
        out.extend(drain_sorted(&mut self.live));
        out
    }
}

fn insert_fresh<R>(
    map: &mut IndexMap<Rendered<R>>,
    index: usize,
    item: Rendered<R>,
) -> &mut Rendered<R> {
    debug_assert!(
        !map.contains_key(&index),
        "index {index} is both live and garbage"
    );
    map.entry(index).or_insert(item)
}

fn sorted_keys<V>(map: &IndexMap<V>) -> Vec<usize> {
    let mut out: Vec<usize> = map.keys().copied().collect();
    out.sort_unstable();
    out
}

fn drain_sorted<R>(map: &mut IndexMap<Rendered<R>>) -> Vec<Rendered<R>> {
    let mut out: Vec<Rendered<R>> = core::mem::take(map).into_values().collect();
    out.sort_unstable_by_key(|item| item.index());
    out
}
