use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::llrb::Llrb;

// Single {key, value} entry in the map. The backing tree orders
// entries by key alone, so a lookup probes with just a key and never
// fabricates a value.
struct Entry<K, V> {
    key: K,
    value: V,
}

type EntryCmp<K, V> = fn(&Entry<K, V>, &Entry<K, V>) -> Ordering;

fn entry_cmp<K, V>(a: &Entry<K, V>, b: &Entry<K, V>) -> Ordering
where
    K: Ord,
{
    a.key.cmp(&b.key)
}

/// LlrbMap is an ordered map of {key, value} entries, backed by an
/// [`Llrb`] tree ordered by key.
pub struct LlrbMap<K, V>
where
    K: Ord,
{
    tree: Llrb<Entry<K, V>, EntryCmp<K, V>>,
}

impl<K, V> LlrbMap<K, V>
where
    K: Ord,
{
    /// Create an empty map, ordered by the key type's natural order.
    pub fn new() -> LlrbMap<K, V> {
        let cmp: EntryCmp<K, V> = entry_cmp;
        LlrbMap {
            tree: Llrb::new(cmp),
        }
    }

    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.tree
            .replace_or_insert(Entry { key, value })
            .map(|entry| entry.value)
    }

    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .get_by(|entry: &Entry<K, V>| entry.key.borrow().cmp(key))
            .map(|entry| &entry.value)
    }

    /// Delete key from the map and return its value. If key is not
    /// present, then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .delete_by(|entry: &Entry<K, V>| entry.key.borrow().cmp(key))
            .map(|entry| entry.value)
    }

    /// Check whether key is present in the map.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Call `iter` for every {key, value} entry, in ascending order of
    /// keys. Returning `false` from `iter` stops the walk immediately.
    pub fn range<F>(&self, mut iter: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.tree
            .ascend(|entry: &Entry<K, V>| iter(&entry.key, &entry.value));
    }

    /// Return number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove all entries from the map.
    pub fn clear(&mut self) {
        self.tree.clear()
    }
}

impl<K, V> Default for LlrbMap<K, V>
where
    K: Ord,
{
    fn default() -> LlrbMap<K, V> {
        LlrbMap::new()
    }
}
