//! Entropy estimates for a password length and pool size.

use std::fmt;

/// Bits of entropy in `length` characters drawn uniformly from `pool_size`.
///
/// Treats every position as a free draw from the whole pool, which slightly
/// overstates passwords with large per-set minimums.
pub fn bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}
