//! Random inputs for exercising the ranking methods.
mod tied_scores;
pub use tied_scores::TiedScores;
