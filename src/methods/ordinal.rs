use crate::rankable::Rankable;

/// Ordinal ranking ("1234"): every element gets its own position, ties are
/// broken by the current order of `data`.
///
/// ```
/// use rankers::ordinal_rank;
///
/// assert_eq!(ordinal_rank(&[10, 20, 20, 40, 50][..]), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn ordinal_rank<R: Rankable + ?Sized>(data: &R) -> Vec<f64> {
    (1..=data.len()).map(|k| k as f64).collect()
}
