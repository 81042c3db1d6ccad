use crate::{rankable::Rankable, runs::TieRuns};

/// Fractional ranking ("1 2.5 2.5 4"): tied elements share the mean of the
/// positions they would have under [`ordinal_rank`](super::ordinal_rank).
///
/// `data` must already be sorted, see [`Rankable`]. The sum of all ranks is
/// always `n * (n + 1) / 2`, the same as for ordinal ranking.
///
/// ```
/// use rankers::fractional_rank;
///
/// assert_eq!(fractional_rank(&[10, 20, 20, 40, 50][..]), vec![1.0, 2.5, 2.5, 4.0, 5.0]);
/// ```
pub fn fractional_rank<R: Rankable + ?Sized>(data: &R) -> Vec<f64> {
    let mut ranks = Vec::with_capacity(data.len());
    for run in TieRuns::new(data) {
        let len = run.len() as f64;
        let sum: f64 = run.clone().map(|i| (i + 1) as f64).sum();
        let mean = sum / len;
        ranks.extend(run.map(|_| mean));
    }
    debug_assert!(ranks.len() == data.len());
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_example() {
        assert_eq!(fractional_rank(&vec![10, 20, 20, 40, 50]), vec![1.0, 2.5, 2.5, 4.0, 5.0]);
    }

    #[test]
    fn fractional_all_tied() {
        assert_eq!(fractional_rank(&vec![5, 5, 5]), vec![2.0, 2.0, 2.0]);
        assert_eq!(fractional_rank(&vec![5, 5, 5, 5]), vec![2.5, 2.5, 2.5, 2.5]);
    }

    #[test]
    fn fractional_run_in_middle() {
        // Positions 2, 3, 4 and 5 share (2 + 3 + 4 + 5) / 4
        assert_eq!(
            fractional_rank(&vec![1, 7, 7, 7, 7, 9]),
            vec![1.0, 3.5, 3.5, 3.5, 3.5, 6.0]
        );
    }

    #[quickcheck]
    fn qc_fractional_run_sums(xs: Vec<u8>) -> bool {
        let mut v = xs;
        v.sort();
        let ranks = fractional_rank(&v);
        TieRuns::new(&v).all(|run| {
            let len = run.len() as f64;
            let p = (run.start + 1) as f64;
            let sum: f64 = ranks[run].iter().sum();
            sum == len * p + len * (len - 1.0) / 2.0
        })
    }

    #[quickcheck]
    fn qc_fractional_total(xs: Vec<u8>) -> bool {
        let mut v = xs;
        v.sort();
        let n = v.len() as f64;
        let total: f64 = fractional_rank(&v).iter().sum();
        total == n * (n + 1.0) / 2.0
    }
}
