use std::ops::Range;

use crate::rankable::Rankable;

/// An iterator over the tie runs of a sorted [`Rankable`].
///
/// Every position belongs to exactly one run, and runs are returned from
/// left to right. A run continues as long as the next element is tied with
/// the first element of the run.
///
/// ```
/// use rankers::TieRuns;
///
/// let scores = [10, 20, 20, 40, 50];
/// let runs: Vec<_> = TieRuns::new(&scores[..]).collect();
/// assert_eq!(runs, vec![0..1, 1..3, 3..4, 4..5]);
/// ```
pub struct TieRuns<'a, R: ?Sized> {
    data: &'a R,
    start: usize,
}

impl<'a, R: Rankable + ?Sized> TieRuns<'a, R> {
    pub fn new(data: &'a R) -> Self {
        TieRuns { data, start: 0 }
    }
}

impl<R: Rankable + ?Sized> Iterator for TieRuns<'_, R> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.data.len();
        let i = self.start;
        if i >= n {
            return None;
        }
        let mut j = i + 1;
        while j < n && self.data.rank_eq(i, j) {
            j += 1;
        }
        self.start = j;
        debug_assert!(i < j);
        Some(i..j)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.data.len().saturating_sub(self.start);
        if left == 0 {
            (0, Some(0))
        } else {
            // Everything left could be one run, or every element its own run
            (1, Some(left))
        }
    }
}

impl<R: Rankable + ?Sized> std::iter::FusedIterator for TieRuns<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_empty() {
        let v: Vec<u32> = Vec::new();
        assert_eq!(TieRuns::new(&v).next(), None);
    }

    #[test]
    fn runs_all_tied() {
        let v = vec![5, 5, 5];
        let runs: Vec<_> = TieRuns::new(&v).collect();
        assert_eq!(runs, vec![0..3]);
    }

    #[test]
    fn runs_no_ties() {
        let v = vec![1, 2, 3];
        let runs: Vec<_> = TieRuns::new(&v).collect();
        assert_eq!(runs, vec![0..1, 1..2, 2..3]);
    }

    #[quickcheck]
    fn qc_runs_partition(xs: Vec<u8>) -> bool {
        let mut v = xs;
        v.sort();
        let mut expected_start = 0;
        for run in TieRuns::new(&v) {
            if run.start != expected_start || run.is_empty() {
                return false;
            }
            if run.clone().any(|k| v[k] != v[run.start]) {
                return false;
            }
            // Runs are maximal
            if run.end < v.len() && v[run.end] == v[run.start] {
                return false;
            }
            expected_start = run.end;
        }
        expected_start == v.len()
    }
}
