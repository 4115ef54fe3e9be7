//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Generate a random `usize` in the range `[0, len)`.
    ///
    /// Callers guarantee `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Production RNG backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates an RNG with a fixed seed, for reproducible sessions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_stays_below_len() {
        let mut rng = SystemRng::seeded(7);
        for len in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_index(len) < len);
            }
        }
    }

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut a = SystemRng::seeded(42);
        let mut b = SystemRng::seeded(42);
        let left: Vec<usize> = (0..32).map(|_| a.next_index(1000)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.next_index(1000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_single_element_range_always_returns_zero() {
        let mut rng = SystemRng::from_entropy();
        for _ in 0..100 {
            assert_eq!(rng.next_index(1), 0);
        }
    }
}
