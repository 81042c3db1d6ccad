//! The five ways of handling ties when ranking.
//!
//! Every method takes a sorted [`Rankable`] and returns one rank per element,
//! where the element at position `i` gets the rank at index `i`. Ranks start
//! at 1.
//!
//! | method                      | 10 | 20  | 20  | 40 | 50 |
//! |-----------------------------|----|-----|-----|----|----|
//! | [`standard_rank`]           | 1  | 2   | 2   | 4  | 5  |
//! | [`modified_rank`]           | 1  | 3   | 3   | 4  | 5  |
//! | [`dense_rank`]              | 1  | 2   | 2   | 3  | 4  |
//! | [`ordinal_rank`]            | 1  | 2   | 3   | 4  | 5  |
//! | [`fractional_rank`]         | 1  | 2.5 | 2.5 | 4  | 5  |
use std::{fmt, str::FromStr};

use crate::rankable::{is_sorted, sort, Rankable, Sortable};

mod dense;
pub use dense::dense_rank;
mod fractional;
pub use fractional::fractional_rank;
mod modified;
pub use modified::modified_rank;
mod ordinal;
pub use ordinal::ordinal_rank;
mod standard;
pub use standard::standard_rank;

/// A tie-breaking policy, for when the method is chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RankMethod {
    /// See [`standard_rank`]
    Standard,
    /// See [`modified_rank`]
    Modified,
    /// See [`dense_rank`]
    Dense,
    /// See [`ordinal_rank`]
    Ordinal,
    /// See [`fractional_rank`]
    Fractional,
}

impl RankMethod {
    pub const ALL: [RankMethod; 5] = [
        RankMethod::Standard,
        RankMethod::Modified,
        RankMethod::Dense,
        RankMethod::Ordinal,
        RankMethod::Fractional,
    ];

    /// Rank the already sorted `data` using this method.
    pub fn rank<R: Rankable + ?Sized>(self, data: &R) -> Vec<f64> {
        match self {
            RankMethod::Standard => standard_rank(data),
            RankMethod::Modified => modified_rank(data),
            RankMethod::Dense => dense_rank(data),
            RankMethod::Ordinal => ordinal_rank(data),
            RankMethod::Fractional => fractional_rank(data),
        }
    }

    /// Like [`RankMethod::rank`], but first checks that `data` is sorted.
    ///
    /// ```
    /// use rankers::RankMethod;
    ///
    /// assert!(RankMethod::Dense.rank_checked(&vec![1, 2, 2]).is_ok());
    /// assert!(RankMethod::Dense.rank_checked(&vec![2, 1, 2]).is_err());
    /// ```
    pub fn rank_checked<S: Sortable + ?Sized>(self, data: &S) -> Result<Vec<f64>, &'static str> {
        if !is_sorted(data) {
            return Err("Sequence is not sorted");
        }
        Ok(self.rank(data))
    }

    /// Sort `data` in place and then rank it. The permutation of `data` is
    /// kept, so the rank at index `i` belongs to the element now at `i`.
    ///
    /// ```
    /// use rankers::RankMethod;
    ///
    /// let mut scores = vec![40, 20, 10, 20];
    /// let ranks = RankMethod::Modified.rank_sorted(&mut scores);
    /// assert_eq!(scores, [10, 20, 20, 40]);
    /// assert_eq!(ranks, [1.0, 3.0, 3.0, 4.0]);
    /// ```
    pub fn rank_sorted<S: Sortable + ?Sized>(self, data: &mut S) -> Vec<f64> {
        sort(data);
        self.rank(&*data)
    }

    pub fn name(self) -> &'static str {
        match self {
            RankMethod::Standard => "standard",
            RankMethod::Modified => "modified",
            RankMethod::Dense => "dense",
            RankMethod::Ordinal => "ordinal",
            RankMethod::Fractional => "fractional",
        }
    }
}

impl fmt::Display for RankMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RankMethod {
    type Err = &'static str;

    /// Parse a method from its lowercase name, e.g. `"dense"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or("Unknown ranking method")
    }
}
