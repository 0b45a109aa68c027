use std::borrow::Borrow;

use crate::llrb::{Iter, Llrb, OrdCmp};

/// LlrbSet is an ordered set of unique elements, backed by an [`Llrb`]
/// tree ordered by the element type's natural order.
pub struct LlrbSet<T>
where
    T: Ord,
{
    tree: Llrb<T, OrdCmp<T>>,
}

impl<T> LlrbSet<T>
where
    T: Ord,
{
    /// Create an empty set.
    pub fn new() -> LlrbSet<T> {
        LlrbSet {
            tree: Llrb::new_ordered(),
        }
    }

    /// Insert `item` into the set. Return whether an equal element was
    /// already present; if so it is replaced by `item`.
    pub fn insert(&mut self, item: T) -> bool {
        self.tree.replace_or_insert(item).is_some()
    }

    /// Delete `item` from the set. Return whether the element was
    /// present.
    pub fn delete<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .delete_by(|x: &T| x.borrow().cmp(item))
            .is_some()
    }

    /// Check whether `item` is present in the set.
    pub fn has<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_by(|x: &T| x.borrow().cmp(item)).is_some()
    }

    /// Call `iter` for every element, in ascending order. Returning
    /// `false` from `iter` stops the walk immediately.
    pub fn range<F>(&self, iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.tree.ascend(iter)
    }

    /// Return an iterator over all elements, in ascending order.
    pub fn iter(&self) -> Iter<T, OrdCmp<T>> {
        self.tree.iter()
    }

    /// Return number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove all elements from the set.
    pub fn clear(&mut self) {
        self.tree.clear()
    }
}

impl<T> Default for LlrbSet<T>
where
    T: Ord,
{
    fn default() -> LlrbSet<T> {
        LlrbSet::new()
    }
}

impl<T> std::iter::FromIterator<T> for LlrbSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> LlrbSet<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = LlrbSet::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}
