use log::{trace, warn};

use super::builder::Builder;
use super::charset::{self, CharSet};
use super::error::Error;
use super::password::Password;
use super::shuffle::shuffle;
use crate::random::{RandomError, RandomSource, SystemRandom, draw};

/// Immutable password generator.
///
/// Holds the registered sets, their aggregate minimum and pool size, and the
/// randomness source. Nothing here changes after [`Builder::build`], so a
/// generator can be shared across threads whenever its source can.
#[derive(Debug, Clone)]
pub struct Generator<R = SystemRandom> {
    charsets: Vec<CharSet>,
    min_total: usize,
    pool_size: usize,
    random: R,
}

impl Generator {
    pub fn builder() -> Builder<SystemRandom> {
        Builder::new()
    }
}

impl<R: RandomSource> Generator<R> {
    pub(crate) fn from_parts(
        charsets: Vec<CharSet>,
        min_total: usize,
        pool_size: usize,
        random: R,
    ) -> Self {
        Self {
            charsets,
            min_total,
            pool_size,
            random,
        }
    }

    pub fn charsets(&self) -> &[CharSet] {
        &self.charsets
    }

    /// Sum of every set's minimum.
    pub fn min_total(&self) -> usize {
        self.min_total
    }

    /// Sum of every set's size.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    /// Generate a password whose length is drawn uniformly from `[min, max]`,
    /// with `min` raised to [`min_total`](Self::min_total) when it is lower.
    pub fn generate(&self, min: usize, max: usize) -> Result<Password, Error> {
        self.try_generate(min, max).inspect_err(|e| {
            if e.is_random() {
                warn!("password generation aborted: {e}");
            }
        })
    }

    fn try_generate(&self, min: usize, max: usize) -> Result<Password, Error> {
        let length = self.select_length(min, max)?;
        trace!("selected length {length} from [{min}, {max}]");

        let mut password = self.select_chars(length)?;
        shuffle(&self.random, password.as_mut_slice())?;
        Ok(password)
    }

    /// Draw a length from `[max(min, min_total), max]`.
    pub fn select_length(&self, min: usize, max: usize) -> Result<usize, Error> {
        let invalid = Error::InvalidLength {
            min,
            max,
            required: self.min_total,
        };
        if max < min || max < self.min_total {
            return Err(invalid);
        }

        let min = min.max(self.min_total);
        let Some(span) = (max - min).checked_add(1) else {
            return Err(invalid);
        };
        Ok(min + draw(&self.random, span)?)
    }

    /// Draw `length` characters: every set's minimum first, in registration
    /// order, then the remainder from the whole pool.
    ///
    /// The result is grouped by set and must be shuffled before use.
    pub fn select_chars(&self, length: usize) -> Result<Password, Error> {
        if length < self.min_total {
            return Err(Error::InvalidLength {
                min: length,
                max: length,
                required: self.min_total,
            });
        }

        let mut chars = Password::with_capacity(length);

        for set in &self.charsets {
            for _ in 0..set.min() {
                let k = draw(&self.random, set.len())?;
                chars.push(set.chars()[k]);
            }
        }

        for _ in 0..length - self.min_total {
            let k = draw(&self.random, self.pool_size)?;
            let (set, offset) = charset::locate(&self.charsets, k).ok_or_else(|| {
                RandomError::msg(format!("draw {k} fell outside pool of {}", self.pool_size))
            })?;
            chars.push(self.charsets[set].chars()[offset]);
        }

        Ok(chars)
    }
}
