//! Deterministic random source construction.
//!
//! Every stochastic routine in the crate takes an `R: Rng` parameter
//! instead of reaching for an ambient generator, so a run seeded through
//! [`create_rng`] is reproducible bit-for-bit. PCG is used because its
//! sequences are stable across platforms and releases.

use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Creates a seeded, platform-stable random generator.
///
/// The same seed always yields the same sequence, which the test suite
/// and any caller that needs reproducible runs rely on.
pub fn create_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(a.random_range(0..1_000_000u64), b.random_range(0..1_000_000u64));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let seq_a: Vec<u64> = (0..16).map(|_| a.random()).collect();
        let seq_b: Vec<u64> = (0..16).map(|_| b.random()).collect();
        assert_ne!(seq_a, seq_b);
    }
}
