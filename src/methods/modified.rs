use crate::{rankable::Rankable, runs::TieRuns};

/// Modified competition ranking ("1334"): tied elements share the position of
/// the last element they are tied with.
///
/// `data` must already be sorted, see [`Rankable`].
///
/// ```
/// use rankers::modified_rank;
///
/// assert_eq!(modified_rank(&[10, 20, 20, 40, 50][..]), vec![1.0, 3.0, 3.0, 4.0, 5.0]);
/// ```
pub fn modified_rank<R: Rankable + ?Sized>(data: &R) -> Vec<f64> {
    let mut ranks = Vec::with_capacity(data.len());
    for run in TieRuns::new(data) {
        let k = run.end as f64;
        ranks.extend(run.map(|_| k));
    }
    debug_assert!(ranks.len() == data.len());
    ranks
}
