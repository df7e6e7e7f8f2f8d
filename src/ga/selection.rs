//! Parent-selection policies.
//!
//! Selection picks the two parents for each crossover from the fitness
//! ranking of the previous generation. Two independent policies are kept
//! as an explicit configuration choice.

use rand::Rng;

/// Parent-selection policy.
///
/// Both policies operate on the generation's fitness ranking: a slice of
/// `(population index, weight)` pairs sorted ascending by weight (best
/// first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw both parents uniformly from the best `k` ranked entries,
    /// redrawing the second until the two are distinct.
    TopRandom(usize),

    /// Rank-weighted draw over the triangular distribution of ranks
    /// (rank 1 = best, and the draw weight of a rank is its rank number).
    /// The two parents are drawn independently and may coincide.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::TopRandom(10)
    }
}

impl Selection {
    /// Picks the population indices of two parents from `ranked`.
    ///
    /// # Panics
    /// Panics if `ranked` is empty, or — for [`Selection::TopRandom`] —
    /// holds fewer than two entries. Configuration validation rules both
    /// out before a run starts.
    pub fn select_parents<R: Rng>(&self, ranked: &[(usize, f64)], rng: &mut R) -> (usize, usize) {
        assert!(!ranked.is_empty(), "cannot select from an empty ranking");

        match *self {
            Selection::TopRandom(pool) => {
                let pool = pool.min(ranked.len());
                let first = ranked[rng.random_range(0..pool)].0;
                let mut second = ranked[rng.random_range(0..pool)].0;
                while second == first {
                    second = ranked[rng.random_range(0..pool)].0;
                }
                (first, second)
            }
            Selection::Rank => (rank_weighted(ranked, rng), rank_weighted(ranked, rng)),
        }
    }
}

/// One rank-weighted draw: the cumulative rank sum crosses a uniform
/// threshold below the triangular total n(n+1)/2.
fn rank_weighted<R: Rng>(ranked: &[(usize, f64)], rng: &mut R) -> usize {
    let n = ranked.len();
    let total = n * (n + 1) / 2;
    let stop = rng.random_range(0..total);
    let mut cumulative = 0usize;
    for (rank, entry) in ranked.iter().enumerate() {
        cumulative += rank + 1;
        if cumulative > stop {
            return entry.0;
        }
    }
    ranked[n - 1].0 // threshold fallback
}
