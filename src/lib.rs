//! Ranking of sorted sequences, with the usual ways of handling ties.
//!
//! A sequence is anything implementing [`Rankable`]: it has a length, and can
//! tell whether two of its positions are tied. Given such a sequence, already
//! sorted by whatever is being ranked, every method returns one `f64` rank per
//! position:
//! - [`standard_rank`], ties share the first position of their run.
//! - [`modified_rank`], ties share the last position of their run.
//! - [`dense_rank`], ties share the next unused integer.
//! - [`ordinal_rank`], ties are ignored.
//! - [`fractional_rank`], ties share the mean of their positions.
//!
//! Ranking never reorders the sequence. If it is not sorted yet, a
//! [`Sortable`] sequence can be sorted in place with [`sort`] first.
//!
//! Example usage:
//! ```
//! use rankers::{sort, dense_rank, fractional_rank};
//!
//! let mut times = vec![9.58, 9.69, 9.63, 9.69];
//! sort(&mut times);
//! assert_eq!(times, [9.58, 9.63, 9.69, 9.69]);
//! assert_eq!(dense_rank(&times), [1.0, 2.0, 3.0, 3.0]);
//! assert_eq!(fractional_rank(&times), [1.0, 2.0, 3.5, 3.5]);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod generators;
pub mod methods;
pub mod rankable;
mod runs;

pub use methods::{
    dense_rank,
    fractional_rank,
    modified_rank,
    ordinal_rank,
    standard_rank,
    RankMethod,
};
pub use rankable::{is_sorted, sort, ByKey, Rankable, Sortable};
pub use runs::TieRuns;

/// Commonly used traits
pub mod prelude {
    pub use super::rankable::{Rankable, Sortable};
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a standard rng generated from `Gen`
    pub fn std_rng(g: &mut Gen) -> StdRng {
        let mut seed = [0u8; 32];
        for i in 0..32 {
            seed[i] = Arbitrary::arbitrary(g);
        }
        StdRng::from_seed(seed)
    }

    #[test]
    fn ranks_unsorted_records() {
        let mut results = [("amy", 3), ("ben", 1), ("cat", 3), ("dov", 2)];
        let mut by_points = ByKey::new(&mut results, |r| std::cmp::Reverse(r.1));
        sort(&mut by_points);
        let ranks = standard_rank(&by_points);
        let names: Vec<_> = by_points.items().iter().map(|r| r.0).collect();
        assert_eq!(names[2..], ["dov", "ben"]);
        assert_eq!(ranks, [1.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn scenario_ten_to_fifty() {
        let v = vec![10, 20, 20, 40, 50];
        assert_eq!(standard_rank(&v), [1.0, 2.0, 2.0, 4.0, 5.0]);
        assert_eq!(modified_rank(&v), [1.0, 3.0, 3.0, 4.0, 5.0]);
        assert_eq!(dense_rank(&v), [1.0, 2.0, 2.0, 3.0, 4.0]);
        assert_eq!(ordinal_rank(&v), [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(fractional_rank(&v), [1.0, 2.5, 2.5, 4.0, 5.0]);
    }

    #[quickcheck]
    fn qc_sort_then_rank(seed: u64, tie_percent: u8) -> bool {
        let chance = f64::from(tie_percent % 101) / 100.0;
        let generator = generators::TiedScores::new(40, chance).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ours = generator.sample_shuffled(&mut rng);
        let mut std_sorted = ours.clone();
        std_sorted.sort();
        sort(&mut ours);
        RankMethod::ALL.into_iter().all(|m| m.rank(&ours) == m.rank(&std_sorted))
    }
}
