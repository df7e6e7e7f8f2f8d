//! Pairing candidates encoded as permutations.

use super::config::Crossover;
use crate::error::{Error, Result};
use rand::Rng;
use std::collections::HashMap;
use std::ops::Index;

const UNSET: usize = usize::MAX;

/// A candidate pairing of the graph's odd-degree vertices.
///
/// Holds a permutation of the odd-vertex indices; consecutive entries
/// `(0,1), (2,3), …` are the matched pairs. The entry set is fixed for a
/// run — mutation and crossover only rearrange it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genotype {
    genes: Vec<usize>,
}

impl Genotype {
    /// Builds a genotype from a gene list, validating uniqueness and even
    /// length.
    pub fn new(genes: Vec<usize>) -> Result<Self> {
        if genes.len() % 2 != 0 {
            return Err(Error::OddGenotypeLength { len: genes.len() });
        }
        for (i, gene) in genes.iter().enumerate() {
            if genes[..i].contains(gene) {
                return Err(Error::NonUniqueGenes);
            }
        }
        Ok(Self { genes })
    }

    /// Number of genes (always even).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the genotype is empty (graph had no odd vertices).
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene list as a slice.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// The matched pairs: consecutive genes two at a time.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.genes.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Swaps the values at two distinct random positions.
    ///
    /// Always preserves permutation validity, and — because all genes are
    /// unique — always changes exactly two positions.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let n = self.genes.len();
        if n < 2 {
            return;
        }
        let first = rng.random_range(0..n);
        let mut second = rng.random_range(0..n);
        while second == first {
            second = rng.random_range(0..n);
        }
        self.genes.swap(first, second);
    }

    /// Windowed exchange-map crossover producing two children.
    ///
    /// A window `[lo, hi)` is cut from two random points (sorted for
    /// [`Crossover::TwoPoint`]; `lo = 0` for [`Crossover::OnePoint`]) and
    /// copied verbatim into each child from its own parent. Positions
    /// outside the window start as the opposite parent's value; whenever
    /// that value is already present, the position-aligned exchange map
    /// between the two windows is followed until an unused value appears.
    /// The walk is bounded by the exchange-map size — a well-formed
    /// permutation crossover always terminates within it, so running out
    /// is reported as the fatal [`Error::CrossoverExhausted`].
    ///
    /// Fails with [`Error::GenotypeLengthMismatch`] when the parents have
    /// different lengths. Crossing a genotype with itself yields two
    /// children equal to the original.
    pub fn crossover<R: Rng>(
        parent1: &Genotype,
        parent2: &Genotype,
        mode: Crossover,
        rng: &mut R,
    ) -> Result<(Genotype, Genotype)> {
        if parent1.len() != parent2.len() {
            return Err(Error::GenotypeLengthMismatch {
                left: parent1.len(),
                right: parent2.len(),
            });
        }
        let len = parent1.len();
        if len < 2 {
            return Ok((parent1.clone(), parent2.clone()));
        }

        let first = rng.random_range(0..len);
        let second = rng.random_range(0..len);
        let (lo, hi) = match mode {
            Crossover::OnePoint => (0, second),
            Crossover::TwoPoint => (first.min(second), first.max(second)),
        };

        let mut genes1 = vec![UNSET; len];
        let mut genes2 = vec![UNSET; len];
        let mut exchange1: HashMap<usize, usize> = HashMap::new();
        let mut exchange2: HashMap<usize, usize> = HashMap::new();

        for i in lo..hi {
            genes1[i] = parent1.genes[i];
            genes2[i] = parent2.genes[i];
            exchange1.insert(genes1[i], genes2[i]);
            exchange2.insert(genes2[i], genes1[i]);
        }

        for i in 0..len {
            if genes1[i] == UNSET {
                genes1[i] = resolve(parent2.genes[i], &genes1, &exchange1)?;
            }
            if genes2[i] == UNSET {
                genes2[i] = resolve(parent1.genes[i], &genes2, &exchange2)?;
            }
        }

        Ok((Genotype { genes: genes1 }, Genotype { genes: genes2 }))
    }
}

/// Follows the exchange map from `candidate` until a value not yet in
/// `genes` is found, walking at most `exchange.len()` steps.
fn resolve(candidate: usize, genes: &[usize], exchange: &HashMap<usize, usize>) -> Result<usize> {
    let mut value = candidate;
    let mut budget = exchange.len();
    while genes.contains(&value) {
        value = *exchange.get(&value).ok_or(Error::CrossoverExhausted)?;
        if budget == 0 {
            return Err(Error::CrossoverExhausted);
        }
        budget -= 1;
    }
    Ok(value)
}

impl Index<usize> for Genotype {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.genes[index]
    }
}
