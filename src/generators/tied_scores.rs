//! Sorted score lists where neighbouring scores are tied at random.
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rand_distr::{Bernoulli, Distribution, Geometric};

/// Samples sorted lists of `len` scores, where every score is tied with the
/// one before it with probability `tie_chance`. Untied neighbours differ by
/// `1 + g`, with `g` geometrically distributed.
///
/// ```
/// use rankers::{generators::TiedScores, fractional_rank};
///
/// let scores = TiedScores::new(100, 0.3).unwrap().sample_seeded(7);
/// let total: f64 = fractional_rank(&scores).iter().sum();
/// assert_eq!(total, 5050.0);
/// ```
#[derive(Clone, Debug)]
pub struct TiedScores {
    len: usize,
    ties: Bernoulli,
    gaps: Geometric,
}

impl TiedScores {
    pub fn new(len: usize, tie_chance: f64) -> Result<Self, &'static str> {
        let ties = Bernoulli::new(tie_chance).map_err(|_| "Tie chance must be in [0, 1]")?;
        let gaps = Geometric::new(0.5).map_err(|_| "Invalid gap distribution")?;
        Ok(TiedScores { len, ties, gaps })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample an ascending list of scores using random numbers from `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<u32> {
        let mut scores = Vec::with_capacity(self.len);
        let mut current: u32 = 0;
        for i in 0..self.len {
            if i > 0 && !self.ties.sample(rng) {
                let gap = u32::try_from(self.gaps.sample(rng)).unwrap_or(u32::MAX);
                current = current.saturating_add(1).saturating_add(gap);
            }
            scores.push(current);
        }
        scores
    }

    /// Same as [`TiedScores::sample`], but reproducible from `seed`.
    pub fn sample_seeded(&self, seed: u64) -> Vec<u32> {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        self.sample(&mut rng)
    }

    /// Sample scores and then shuffle them, so they have to be sorted before
    /// ranking.
    pub fn sample_shuffled<R: Rng>(&self, rng: &mut R) -> Vec<u32> {
        let mut scores = self.sample(rng);
        scores.shuffle(rng);
        scores
    }
}
