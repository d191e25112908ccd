use log::debug;

use super::charset::CharSet;
use super::error::Error;
use super::generate::Generator;
use crate::random::{RandomSource, SystemRandom};

/// Collects character sets and an optional randomness source, in call order.
///
/// ```
/// use passforge::pass::{DIGITS, Generator, LOWERCASE};
///
/// let generator = Generator::builder()
///     .with_charset(LOWERCASE, 1)
///     .with_charset(DIGITS, 2)
///     .build()?;
/// let password = generator.generate(12, 16)?;
/// assert!((12..=16).contains(&password.len()));
/// # Ok::<(), passforge::pass::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder<R> {
    charsets: Vec<CharSet>,
    min_total: usize,
    pool_size: usize,
    random: R,
}

impl Builder<SystemRandom> {
    pub(crate) fn new() -> Self {
        Self {
            charsets: Vec::new(),
            min_total: 0,
            pool_size: 0,
            random: SystemRandom,
        }
    }
}

impl<R> Builder<R> {
    /// Register the characters of `chars` as one set, at least `min` of which
    /// end up in every password.
    pub fn with_charset(self, chars: impl AsRef<str>, min: usize) -> Self {
        self.with_chars(chars.as_ref().chars(), min)
    }

    pub fn with_chars(mut self, chars: impl IntoIterator<Item = char>, min: usize) -> Self {
        let set = CharSet::new(chars, min);
        self.min_total = self.min_total.saturating_add(set.min());
        self.pool_size += set.len();
        self.charsets.push(set);
        self
    }

    /// Replace the randomness source. Defaults to [`SystemRandom`].
    pub fn with_random<S>(self, random: S) -> Builder<S> {
        Builder {
            charsets: self.charsets,
            min_total: self.min_total,
            pool_size: self.pool_size,
            random,
        }
    }
}

impl<R: RandomSource> Builder<R> {
    pub fn build(self) -> Result<Generator<R>, Error> {
        if self.pool_size == 0 {
            return Err(Error::NoCharacters);
        }
        if let Some(index) = self
            .charsets
            .iter()
            .position(|set| set.is_empty() && set.min() > 0)
        {
            return Err(Error::EmptyCharSet {
                index,
                min: self.charsets[index].min(),
            });
        }

        debug!(
            "generator ready: {} set(s), min total {}, pool size {}",
            self.charsets.len(),
            self.min_total,
            self.pool_size
        );

        Ok(Generator::from_parts(
            self.charsets,
            self.min_total,
            self.pool_size,
            self.random,
        ))
    }
}
