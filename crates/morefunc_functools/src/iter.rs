//! Sequence helpers.

use std::collections::VecDeque;
use std::hash::Hash;
use std::iter::FusedIterator;

use morefunc_foundation::PSet;

/// Returns the first item matching `predicate`, or `default` if none does.
#[must_use]
pub fn find_or<I, P>(predicate: P, iter: I, default: I::Item) -> I::Item
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_iter().find(predicate).unwrap_or(default)
}

/// Returns the final item, consuming the whole iterator.
#[must_use]
pub fn last<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().last()
}

/// Chains a sequence of sequences into one.
pub fn concat<I>(iters: I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iters.into_iter().flatten()
}

/// Sliding windows of width `n`, one starting at every item.
///
/// Windows near the end are padded with `fill`, so there are exactly as many
/// windows as input items. A width of zero yields nothing.
///
/// ```
/// use morefunc_functools::nwise;
///
/// let windows: Vec<_> = nwise([1, 2, 3], 2, 0).collect();
/// assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 0]]);
/// ```
pub fn nwise<I>(iter: I, n: usize, fill: I::Item) -> NWise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    NWise {
        source: iter.into_iter(),
        window: VecDeque::with_capacity(n),
        n,
        fill,
        primed: false,
    }
}

/// Iterator returned by [`nwise`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct NWise<I: Iterator> {
    source: I,
    window: VecDeque<I::Item>,
    n: usize,
    fill: I::Item,
    primed: bool,
}

impl<I> Iterator for NWise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n == 0 {
            return None;
        }
        if self.primed {
            self.window.pop_front();
            if let Some(item) = self.source.next() {
                self.window.push_back(item);
            }
        } else {
            self.window.extend(self.source.by_ref().take(self.n));
            self.primed = true;
        }
        if self.window.is_empty() {
            return None;
        }

        let mut out: Vec<_> = self.window.iter().cloned().collect();
        out.resize(self.n, self.fill.clone());
        Some(out)
    }
}

impl<I> FusedIterator for NWise<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

/// Returns `(a - b, b - a)`.
#[must_use]
pub fn disjoint_symmetric_diff<T>(a: &PSet<T>, b: &PSet<T>) -> (PSet<T>, PSet<T>)
where
    T: Clone + Eq + Hash,
{
    (a.difference(b), b.difference(a))
}
