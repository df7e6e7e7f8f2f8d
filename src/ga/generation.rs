//! Populations of pairing candidates.

use super::genotype::Genotype;
use crate::error::Result;
use crate::paths::ConnectionCache;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::{Index, IndexMut};

/// A fixed-size population of genotypes over one odd-vertex set.
#[derive(Debug, Clone)]
pub struct Generation {
    members: Vec<Genotype>,
}

impl Generation {
    /// Builds `size` random pairings by Fisher–Yates shuffling the
    /// odd-vertex index list.
    pub fn random<R: Rng>(odd_vertices: &[usize], size: usize, rng: &mut R) -> Self {
        let members = (0..size)
            .map(|_| {
                let mut genes = odd_vertices.to_vec();
                genes.shuffle(rng);
                // Shuffling a unique even-length list keeps it valid.
                Genotype::new(genes).expect("shuffled odd-vertex list is a valid genotype")
            })
            .collect();
        Self { members }
    }

    /// Population size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Read-only view of the population.
    pub fn members(&self) -> &[Genotype] {
        &self.members
    }

    /// Evaluates every genotype and returns `(population index, weight)`
    /// sorted ascending by weight (best first).
    ///
    /// A genotype's weight is the total shortest-path cost over its
    /// consecutive pairs, resolved through the connection cache.
    pub fn ranked(&self, connections: &mut ConnectionCache) -> Result<Vec<(usize, f64)>> {
        let mut ranking = Vec::with_capacity(self.members.len());
        for (index, genotype) in self.members.iter().enumerate() {
            let mut weight = 0.0;
            for (a, b) in genotype.pairs() {
                weight += connections.get_connection(a, b)?.weight();
            }
            ranking.push((index, weight));
        }
        ranking.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(ranking)
    }
}

impl Index<usize> for Generation {
    type Output = Genotype;

    fn index(&self, index: usize) -> &Genotype {
        &self.members[index]
    }
}

impl IndexMut<usize> for Generation {
    fn index_mut(&mut self, index: usize) -> &mut Genotype {
        &mut self.members[index]
    }
}
