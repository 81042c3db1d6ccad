use crate::rankable::Rankable;

/// Standard competition ranking ("1224"): tied elements share the position of
/// the first element they are tied with.
///
/// `data` must already be sorted, see [`Rankable`].
///
/// ```
/// use rankers::standard_rank;
///
/// assert_eq!(standard_rank(&[10, 20, 20, 40, 50][..]), vec![1.0, 2.0, 2.0, 4.0, 5.0]);
/// ```
pub fn standard_rank<R: Rankable + ?Sized>(data: &R) -> Vec<f64> {
    let n = data.len();
    let mut ranks = Vec::with_capacity(n);
    let mut k = 0;
    for i in 0..n {
        if i == 0 || !data.rank_eq(i, i - 1) {
            k = i + 1;
        }
        ranks.push(k as f64);
    }
    ranks
}
