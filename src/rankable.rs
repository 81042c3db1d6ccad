//! The capabilities a sequence needs before it can be ranked.
//!
//! Every ranking function only reads a [`Rankable`] through its length and
//! the tie relation between two positions. Sequences that also implement
//! [`Sortable`] can be put in ascending order with [`sort`] first.

/// A finite sequence of elements, addressed by their position `0..len()`.
///
/// Ranking functions assume the sequence is already sorted by the ranking
/// criterion, so that tied elements are adjacent.
pub trait Rankable {
    /// The number of elements in the sequence.
    fn len(&self) -> usize;

    /// Shorthand for `self.len() == 0`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the elements at `i` and `j` are tied.
    fn rank_eq(&self, i: usize, j: usize) -> bool;
}

/// A [`Rankable`] sequence which can also be reordered in place.
///
/// `less` has to agree with [`Rankable::rank_eq`]: tied elements are neither
/// less nor greater than each other.
pub trait Sortable: Rankable {
    /// Returns true if the element at `i` should be ranked before the
    /// element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: PartialEq> Rankable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn rank_eq(&self, i: usize, j: usize) -> bool {
        self[i] == self[j]
    }
}

impl<T: PartialOrd> Sortable for [T] {
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<T: PartialEq> Rankable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn rank_eq(&self, i: usize, j: usize) -> bool {
        self[i] == self[j]
    }
}

impl<T: PartialOrd> Sortable for Vec<T> {
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

impl<R: Rankable + ?Sized> Rankable for &R {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn rank_eq(&self, i: usize, j: usize) -> bool {
        (**self).rank_eq(i, j)
    }
}

impl<R: Rankable + ?Sized> Rankable for &mut R {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn rank_eq(&self, i: usize, j: usize) -> bool {
        (**self).rank_eq(i, j)
    }
}

impl<R: Sortable + ?Sized> Sortable for &mut R {
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}

/// Ranks a slice of records by a key extracted from each record. Two records
/// are tied when their keys are equal.
///
/// ```
/// use rankers::{ByKey, standard_rank};
///
/// let mut players = [("ann", 44), ("bob", 42), ("cid", 42), ("dan", 39)];
/// let mut by_score = ByKey::new(&mut players, |p| std::cmp::Reverse(p.1));
/// rankers::sort(&mut by_score);
/// assert_eq!(standard_rank(&by_score), vec![1.0, 2.0, 2.0, 4.0]);
/// ```
pub struct ByKey<'a, T, F> {
    items: &'a mut [T],
    key: F,
}

impl<'a, T, F> ByKey<'a, T, F> {
    pub fn new<K>(items: &'a mut [T], key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        ByKey { items, key }
    }

    /// The records, in their current order.
    pub fn items(&self) -> &[T] {
        &*self.items
    }
}

impl<T, K, F> Rankable for ByKey<'_, T, F>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn rank_eq(&self, i: usize, j: usize) -> bool {
        (self.key)(&self.items[i]) == (self.key)(&self.items[j])
    }
}

impl<T, K, F> Sortable for ByKey<'_, T, F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    fn less(&self, i: usize, j: usize) -> bool {
        (self.key)(&self.items[i]) < (self.key)(&self.items[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j)
    }
}

/// Sort `data` in ascending order according to [`Sortable::less`].
///
/// The elements of `data` are permuted in place. Tied elements may end up in
/// any relative order, which never changes the ranks they receive. Uses
/// heapsort, so only `less` and `swap` are needed.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n < 2 {
        return;
    }
    for start in (0..n / 2).rev() {
        sift_down(data, start, n);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

// Restore the max-heap property for the subtree at `root`, only looking at
// positions below `end`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}

/// Returns true if no element of `data` is less than the element before it.
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    let n = data.len();
    if n >= 2 {
        for i in 0..(n - 1) {
            if data.less(i + 1, i) {
                return false;
            }
        }
    }
    true
}
