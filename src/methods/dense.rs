use crate::rankable::Rankable;

/// Dense ranking ("1223"): every tie run gets the next unused integer, so the
/// rank counts distinct groups rather than positions.
///
/// `data` must already be sorted, see [`Rankable`].
///
/// ```
/// use rankers::dense_rank;
///
/// assert_eq!(dense_rank(&[10, 20, 20, 40, 50][..]), vec![1.0, 2.0, 2.0, 3.0, 4.0]);
/// ```
pub fn dense_rank<R: Rankable + ?Sized>(data: &R) -> Vec<f64> {
    let n = data.len();
    let mut ranks = Vec::with_capacity(n);
    let mut k: usize = 0;
    for i in 0..n {
        if i == 0 || !data.rank_eq(i, i - 1) {
            k += 1;
        }
        ranks.push(k as f64);
    }
    ranks
}
