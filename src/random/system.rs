//! Operating system entropy.

use rand::RngCore;
use rand::rngs::OsRng;

use super::{RandomError, RandomSource};

/// Draws from the operating system CSPRNG.
///
/// Stateless: every value shares the one OS entropy handle, so copies are free
/// and concurrent use from any number of threads is safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SystemRandom {
    #[inline]
    fn word(&self) -> Result<u64, RandomError> {
        let mut buf = [0u8; 8];
        OsRng.try_fill_bytes(&mut buf).map_err(RandomError::new)?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl RandomSource for SystemRandom {
    /// Uniform in `[0, bound)` by rejection sampling: words in the tail that
    /// would over-represent low residues are discarded and redrawn.
    fn next(&self, bound: usize) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::msg("bound must be greater than zero"));
        }
        let bound = bound as u64;

        // 2^64 mod bound
        let tail = (u64::MAX % bound + 1) % bound;
        let ceiling = u64::MAX - tail;

        loop {
            let word = self.word()?;
            if word <= ceiling {
                return Ok((word % bound) as usize);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_below_bound() {
        for bound in [1, 2, 3, 7, 10, 26, 95, 1000, usize::MAX] {
            for _ in 0..200 {
                assert!(SystemRandom.next(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        for _ in 0..100 {
            assert_eq!(SystemRandom.next(1).unwrap(), 0);
        }
    }

    #[test]
    fn zero_bound_is_an_error() {
        assert!(SystemRandom.next(0).is_err());
    }

    #[test]
    fn covers_every_value_of_a_small_bound() {
        let mut seen = [0usize; 6];
        for _ in 0..6000 {
            seen[SystemRandom.next(6).unwrap()] += 1;
        }
        // Expected 1000 per bucket; the bound is many standard deviations wide.
        for count in seen {
            assert!((800..1200).contains(&count), "bucket count {count}");
        }
    }
}
