use std::{
    cmp::Ordering,
    mem,
    ops::{Bound, Deref, DerefMut},
};

use rand::Rng;

use crate::depth::Depth;
use crate::error::Error;

// TODO: consider making the batch size configurable.
const ITER_LIMIT: usize = 100;

/// Three-way comparator over `T` based on its natural [`Ord`] order,
/// used by trees built with [`Llrb::new_ordered`].
pub type OrdCmp<T> = fn(&T, &T) -> Ordering;

/// Llrb manages a single instance of an in-memory ordered container
/// using a [left-leaning-red-black][llrb] tree.
///
/// Elements are totally ordered by the comparator supplied at
/// construction time; no two stored elements compare equal, inserting
/// an equal element replaces the stored one. The comparator is part of
/// the tree's type, so a tree can never exist without one.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Option<Box<Node<T>>>,
    cmp: C,
    n_count: usize, // number of elements in the tree.
}

/// Different ways to construct a new Llrb instance.
impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty instance of Llrb ordered by `cmp`, a total-order
    /// three-way comparison over the element type. The comparator is
    /// fixed for the tree's lifetime.
    pub fn new(cmp: C) -> Llrb<T, C> {
        Llrb {
            root: Default::default(),
            cmp,
            n_count: Default::default(),
        }
    }
}

impl<T> Llrb<T, OrdCmp<T>>
where
    T: Ord,
{
    /// Create an empty instance of Llrb ordered by the element type's
    /// natural order.
    pub fn new_ordered() -> Llrb<T, OrdCmp<T>> {
        let cmp: OrdCmp<T> = T::cmp;
        Llrb::new(cmp)
    }
}

impl<T> std::iter::FromIterator<T> for Llrb<T, OrdCmp<T>>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Llrb<T, OrdCmp<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Llrb::new_ordered();
        for item in iter {
            tree.replace_or_insert(item);
        }
        tree
    }
}

/// Maintenance API.
impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Return number of elements in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this instance is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return quickly with basic statistics, only entries() and
    /// node_size() methods are valid with this statistics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<T>>())
    }
}

type Upsert<T> = (Box<Node<T>>, Option<T>);

type Delete<T> = (Option<Box<Node<T>>>, Option<T>);

/// Write operations on Llrb instance.
impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Insert `item` into the tree. If an element comparing equal is
    /// already present, overwrite it in place and return the previous
    /// element, otherwise insert a new element and return `None`.
    pub fn replace_or_insert(&mut self, item: T) -> Option<T> {
        let node = self.root.take();
        let (mut root, prev) = Self::upsert(&self.cmp, node, item);
        root.set_black();
        self.root = Some(root);
        match prev {
            prev @ Some(_) => prev,
            None => {
                self.n_count += 1;
                None
            }
        }
    }

    /// Delete the element comparing equal to `item` and return it,
    /// where `item` is used as a search probe only. If no such element
    /// is present, delete is effectively a no-op.
    pub fn delete(&mut self, item: &T) -> Option<T> {
        let node = self.root.take();
        let cmp = &self.cmp;
        let (root, deleted) = Self::do_delete(node, &|x: &T| cmp(x, item));
        self.root = match root {
            None => None,
            Some(mut root) => {
                root.set_black();
                Some(root)
            }
        };
        if deleted.is_some() {
            self.n_count -= 1;
        }
        deleted
    }

    /// Delete the element located by `find` and return it. `find` shall
    /// return the ordering of its argument relative to the target, and
    /// must be consistent with this tree's comparator. Useful to locate
    /// an element by a projection of it, like a key field, without
    /// constructing a whole element.
    pub fn delete_by<F>(&mut self, find: F) -> Option<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let (root, deleted) = Self::do_delete(self.root.take(), &find);
        self.root = match root {
            None => None,
            Some(mut root) => {
                root.set_black();
                Some(root)
            }
        };
        if deleted.is_some() {
            self.n_count -= 1;
        }
        deleted
    }

    /// Delete the minimum element and return it, or `None` if the tree
    /// is empty.
    pub fn delete_min(&mut self) -> Option<T> {
        let (root, deleted) = match Self::delete_min_node(self.root.take()) {
            (None, deleted) => (None, deleted),
            (Some(mut root), deleted) => {
                root.set_black();
                (Some(root), deleted)
            }
        };
        self.root = root;
        if deleted.is_some() {
            self.n_count -= 1;
        }
        deleted
    }

    /// Delete the maximum element and return it, or `None` if the tree
    /// is empty.
    pub fn delete_max(&mut self) -> Option<T> {
        let (root, deleted) = match Self::delete_max_node(self.root.take()) {
            (None, deleted) => (None, deleted),
            (Some(mut root), deleted) => {
                root.set_black();
                (Some(root), deleted)
            }
        };
        self.root = root;
        if deleted.is_some() {
            self.n_count -= 1;
        }
        deleted
    }

    /// Remove all elements, releasing ownership of the whole tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.n_count = 0;
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure elements are in sort-order, as per the comparator.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<T>>
    where
        T: Clone,
    {
        let root = self.root.as_ref().map(Deref::deref);
        let (red, nb, d) = (is_red(root), 0, 0);
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<T>>());
        stats.set_depths(Depth::new());
        let blacks = Self::validate_tree(&self.cmp, root, red, nb, d, &mut stats)?;
        stats.set_blacks(blacks);
        Ok(stats)
    }
}

/// Read operations on Llrb instance.
impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Get a reference to the element comparing equal to `item`, where
    /// `item` is used as a search probe only.
    pub fn get(&self, item: &T) -> Option<&T> {
        let cmp = &self.cmp;
        self.get_by(|x: &T| cmp(x, item))
    }

    /// Get a reference to the element located by `find`. `find` shall
    /// return the ordering of its argument relative to the target, and
    /// must be consistent with this tree's comparator.
    pub fn get_by<F>(&self, find: F) -> Option<&T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut node = self.root.as_ref().map(Deref::deref);
        while let Some(nref) = node {
            node = match find(&nref.item) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(&nref.item),
            };
        }
        None
    }

    /// Check whether an element comparing equal to `item` is present.
    pub fn has(&self, item: &T) -> bool {
        self.get(item).is_some()
    }

    /// Return a random element from this instance.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        let mut nref = self.root.as_ref().map(Deref::deref)?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => nref.left_deref(),
                1 => nref.right_deref(),
                _ => unreachable!(),
            };
            if at_depth == 0 || next.is_none() {
                break Some(&nref.item);
            }
            at_depth -= 1;
            nref = next.unwrap();
        }
    }

    /// Return an iterator over all elements, in ascending order.
    pub fn iter(&self) -> Iter<T, C> {
        Iter {
            tree: self,
            node_iter: vec![].into_iter(),
            after: Some(Bound::Unbounded),
            limit: ITER_LIMIT,
        }
    }
}

/// Range operations on Llrb instance. Each walker visits elements in
/// sort-order, reverse sort-order for the descend variants, calling
/// `iter` once per element. Subtrees that cannot contain in-range
/// elements are pruned from the walk. Returning `false` from `iter`
/// stops the walk immediately.
impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Call `iter` for every element, in ascending order.
    pub fn ascend<F>(&self, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, false, None, None, &mut iter);
    }

    /// Call `iter` for every element within `[greater_or_equal, less_than)`,
    /// in ascending order.
    pub fn ascend_range<F>(&self, greater_or_equal: &T, less_than: &T, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, false, Some(greater_or_equal), Some(less_than), &mut iter);
    }

    /// Call `iter` for every element within `[first, pivot)`, in
    /// ascending order.
    pub fn ascend_less_than<F>(&self, pivot: &T, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, false, None, Some(pivot), &mut iter);
    }

    /// Call `iter` for every element within `[pivot, last]`, in
    /// ascending order.
    pub fn ascend_greater_or_equal<F>(&self, pivot: &T, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, false, Some(pivot), None, &mut iter);
    }

    /// Call `iter` for every element, in descending order.
    pub fn descend<F>(&self, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, true, None, None, &mut iter);
    }

    /// Call `iter` for every element within `(greater_than, less_or_equal]`,
    /// in descending order.
    pub fn descend_range<F>(&self, less_or_equal: &T, greater_than: &T, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, true, Some(less_or_equal), Some(greater_than), &mut iter);
    }

    /// Call `iter` for every element within `[pivot, first]`, in
    /// descending order.
    pub fn descend_less_or_equal<F>(&self, pivot: &T, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, true, Some(pivot), None, &mut iter);
    }

    /// Call `iter` for every element within `(pivot, last]`, in
    /// descending order.
    pub fn descend_greater_than<F>(&self, pivot: &T, mut iter: F)
    where
        F: FnMut(&T) -> bool,
    {
        let root = self.root.as_ref().map(Deref::deref);
        self.iterate(root, true, None, Some(pivot), &mut iter);
    }

    fn iterate<F>(
        &self,
        node: Option<&Node<T>>,
        desc: bool,
        start: Option<&T>,
        end: Option<&T>,
        iter: &mut F,
    ) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let node = match node {
            None => return true,
            Some(node) => node,
        };

        let (left, right) = (node.left_deref(), node.right_deref());
        let cmp = &self.cmp;
        if !desc {
            if let Some(end) = end {
                // node and its right subtree are at or past the end.
                if cmp(&node.item, end) != Ordering::Less {
                    return self.iterate(left, desc, start, Some(end), iter);
                }
            }
            if let Some(start) = start {
                // node and its left subtree fall short of the start.
                if cmp(&node.item, start) == Ordering::Less {
                    return self.iterate(right, desc, Some(start), end, iter);
                }
            }
            if !self.iterate(left, desc, start, end, iter) {
                return false;
            }
            if !iter(&node.item) {
                return false;
            }
            self.iterate(right, desc, start, end, iter)
        } else {
            if let Some(end) = end {
                if cmp(&node.item, end) != Ordering::Greater {
                    return self.iterate(right, desc, start, Some(end), iter);
                }
            }
            if let Some(start) = start {
                if cmp(&node.item, start) == Ordering::Greater {
                    return self.iterate(left, desc, Some(start), end, iter);
                }
            }
            if !self.iterate(right, desc, start, end, iter) {
                return false;
            }
            if !iter(&node.item) {
                return false;
            }
            self.iterate(left, desc, start, end, iter)
        }
    }
}

impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn upsert(cmp: &C, node: Option<Box<Node<T>>>, item: T) -> Upsert<T> {
        let mut node = match node {
            None => return (Node::new(item, false /*red*/), None),
            Some(node) => node,
        };

        match cmp(&node.item, &item) {
            Ordering::Greater => {
                let (left, prev) = Self::upsert(cmp, node.left.take(), item);
                node.left = Some(left);
                (fixup(node), prev)
            }
            Ordering::Less => {
                let (right, prev) = Self::upsert(cmp, node.right.take(), item);
                node.right = Some(right);
                (fixup(node), prev)
            }
            Ordering::Equal => {
                let prev = mem::replace(&mut node.item, item);
                (fixup(node), Some(prev))
            }
        }
    }

    fn do_delete<F>(node: Option<Box<Node<T>>>, find: &F) -> Delete<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };

        if find(&node.item) == Ordering::Greater {
            // target, if present at all, is in the left subtree.
            if node.left.is_none() {
                return (Some(node), None);
            }
            let ok = !is_red(node.left_deref());
            if ok && !is_red(node.left.as_ref().unwrap().left_deref()) {
                node = move_red_left(node);
            }
            let (left, deleted) = Self::do_delete(node.left.take(), find);
            node.left = left;
            (Some(fixup(node)), deleted)
        } else {
            if is_red(node.left_deref()) {
                node = rotate_right(node);
            }

            if find(&node.item) == Ordering::Equal && node.right.is_none() {
                return (None, Some(node.item));
            }

            let ok = node.right.is_some() && !is_red(node.right_deref());
            if ok && !is_red(node.right.as_ref().unwrap().left_deref()) {
                node = move_red_right(node);
            }

            if find(&node.item) == Ordering::Equal {
                // swap in the minimum of the right subtree, detached
                // from that subtree via delete_min_node.
                let (right, min) = Self::delete_min_node(node.right.take());
                node.right = right;
                let min = match min {
                    Some(min) => min,
                    None => panic!("do_delete(): fatal logic, call the programmer"),
                };
                let deleted = mem::replace(&mut node.item, min);
                (Some(fixup(node)), Some(deleted))
            } else {
                let (right, deleted) = Self::do_delete(node.right.take(), find);
                node.right = right;
                (Some(fixup(node)), deleted)
            }
        }
    }

    fn delete_min_node(node: Option<Box<Node<T>>>) -> Delete<T> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            return (None, Some(node.item));
        }
        let left = node.left_deref();
        if !is_red(left) && !is_red(left.unwrap().left_deref()) {
            node = move_red_left(node);
        }
        let (left, deleted) = Self::delete_min_node(node.left.take());
        node.left = left;
        (Some(fixup(node)), deleted)
    }

    fn delete_max_node(node: Option<Box<Node<T>>>) -> Delete<T> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        // convert a left-leaning red link into a right-leaning shape
        // the right-descent below can handle.
        if is_red(node.left_deref()) {
            node = rotate_right(node);
        }
        if node.right.is_none() {
            return (None, Some(node.item));
        }
        let right = node.right_deref();
        if !is_red(right) && !is_red(right.unwrap().left_deref()) {
            node = move_red_right(node);
        }
        let (right, deleted) = Self::delete_max_node(node.right.take());
        node.right = right;
        (Some(fixup(node)), deleted)
    }

    fn validate_tree(
        cmp: &C,
        node: Option<&Node<T>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        stats: &mut Stats,
    ) -> Result<usize, Error<T>>
    where
        T: Clone,
    {
        let node = match node {
            None => {
                stats.depths.as_mut().unwrap().sample(depth);
                return Ok(nb);
            }
            Some(node) => node,
        };

        let red = !node.is_black();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (node.left_deref(), node.right_deref());
        let lblacks = Self::validate_tree(cmp, left, red, nb, depth + 1, stats)?;
        let rblacks = Self::validate_tree(cmp, right, red, nb, depth + 1, stats)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        if let Some(left) = left {
            if cmp(&left.item, &node.item) != Ordering::Less {
                return Err(Error::SortError(left.item.clone(), node.item.clone()));
            }
        }
        if let Some(right) = right {
            if cmp(&right.item, &node.item) != Ordering::Greater {
                return Err(Error::SortError(right.item.clone(), node.item.clone()));
            }
        }
        Ok(lblacks)
    }
}

//--------- rotation routines for 2-3 algorithm ----------------

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//             /    (r)                 (r)  \
//            /       \                 /     \
//          left       x             node      xr
//                    / \            /  \
//                  xl   xr       left   xl
//
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if is_black(node.right_deref()) {
        panic!("rotate_left(): rotating a black link ? call the programmer");
    }
    let mut x = node.right.take().unwrap();
    node.right = x.left.take();
    x.black = node.black;
    node.set_red();
    x.left = Some(node);
    x
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//            (r)   \                   (r)  \
//           /       \                 /      \
//          x       right             xl      node
//         / \                                / \
//       xl   xr                             xr  right
//
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if is_black(node.left_deref()) {
        panic!("rotate_right(): rotating a black link ? call the programmer");
    }
    let mut x = node.left.take().unwrap();
    node.left = x.right.take();
    x.black = node.black;
    node.set_red();
    x.right = Some(node);
    x
}

//        (x)                   (!x)
//         |                     |
//        node                  node
//        / \                   / \
//      (y) (z)              (!y) (!z)
//     /      \              /      \
//   left    right         left    right
//
fn flip<T>(node: &mut Node<T>) {
    node.left.as_mut().unwrap().toggle_link();
    node.right.as_mut().unwrap().toggle_link();
    node.toggle_link();
}

// canonical bottom-up repair, applied on every return from a recursive
// insert/delete call: undo a right-leaning red link, break up a
// left-leaning double red, then push a 4-node split upward.
fn fixup<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if is_red(node.right_deref()) && !is_red(node.left_deref()) {
        node = rotate_left(node);
    }
    node = {
        let left = node.left_deref();
        if is_red(left) && is_red(left.unwrap().left_deref()) {
            rotate_right(node)
        } else {
            node
        }
    };
    if is_red(node.left_deref()) && is_red(node.right_deref()) {
        flip(node.deref_mut());
    }
    node
}

// push a red link onto the left side before descending into it, so the
// descent never lands on a 2-node.
fn move_red_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    flip(node.deref_mut());
    if is_red(node.right.as_ref().unwrap().left_deref()) {
        node.right = Some(rotate_right(node.right.take().unwrap()));
        node = rotate_left(node);
        flip(node.deref_mut());
    }
    node
}

// mirror of move_red_left, for right side descents.
fn move_red_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    flip(node.deref_mut());
    if is_red(node.left.as_ref().unwrap().left_deref()) {
        node = rotate_right(node);
        flip(node.deref_mut());
    }
    node
}

// absence of a node is black, never red.
fn is_red<T>(node: Option<&Node<T>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

fn is_black<T>(node: Option<&Node<T>>) -> bool {
    node.map_or(true, |node| node.is_black())
}

/// Iterator over all elements in an [`Llrb`] instance, in ascending
/// order. Elements are cloned out of the tree in batches.
pub struct Iter<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    tree: &'a Llrb<T, C>,
    node_iter: std::vec::IntoIter<T>,
    after: Option<Bound<T>>,
    limit: usize,
}

impl<'a, T, C> Iter<'a, T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    fn scan_iter(
        &self,
        node: Option<&Node<T>>,
        acc: &mut Vec<T>, // accumulator for batch of elements
    ) -> bool {
        let node = match node {
            None => return true,
            Some(node) => node,
        };

        let (left, right) = (node.left_deref(), node.right_deref());
        match &self.after {
            None => return false,
            Some(Bound::Included(after)) | Some(Bound::Excluded(after)) => {
                if (self.tree.cmp)(&node.item, after) != Ordering::Greater {
                    return self.scan_iter(right, acc);
                }
            }
            Some(Bound::Unbounded) => (),
        }

        if !self.scan_iter(left, acc) {
            return false;
        }

        acc.push(node.item.clone());
        if acc.len() >= self.limit {
            return false;
        }

        self.scan_iter(right, acc)
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.node_iter.next() {
            None => {
                let mut acc: Vec<T> = Vec::with_capacity(self.limit);
                let root = self.tree.root.as_ref().map(Deref::deref);
                self.scan_iter(root, &mut acc);
                self.after = acc.last().map(|x| Bound::Excluded(x.clone()));
                self.node_iter = acc.into_iter();
                self.node_iter.next()
            }
            item @ Some(_) => item,
        }
    }
}

/// Node corresponds to a single element in Llrb instance.
#[derive(Clone)]
pub struct Node<T> {
    item: T,
    black: bool,                 // store: black or red
    left: Option<Box<Node<T>>>,  // store: left child
    right: Option<Box<Node<T>>>, // store: right child
}

// Primary operations on a single node.
impl<T> Node<T> {
    // CREATE operation
    fn new(item: T, black: bool) -> Box<Node<T>> {
        Box::new(Node {
            item,
            black,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn left_deref(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    fn right_deref(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.black
    }
}

/// Statistics on [`Llrb`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Llrb::stats`] method.
/// * To get full statistics via [`Llrb::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of elements in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number of elements in [`Llrb`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size in bytes, including overhead for `Llrb<T, C>`
    /// bookkeeping. Although the overhead is constant, the node size
    /// varies based on the element type.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        if self.depths.as_ref().unwrap().samples() == 0 {
            None
        } else {
            self.depths.clone()
        }
    }
}
