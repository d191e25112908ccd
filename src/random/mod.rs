//! Bounded random draws.
//!
//! Generation never reads an entropy source directly. Every draw goes
//! through [`RandomSource`], so callers can script exact sequences in tests
//! (see [`Sequence`]) while production code uses [`SystemRandom`].

mod error;
mod sequence;
mod system;

use std::sync::Arc;

pub use error::RandomError;
pub use sequence::Sequence;
pub use system::SystemRandom;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` must be greater than zero.
    fn next(&self, bound: usize) -> Result<usize, RandomError>;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    #[inline]
    fn next(&self, bound: usize) -> Result<usize, RandomError> {
        (**self).next(bound)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    #[inline]
    fn next(&self, bound: usize) -> Result<usize, RandomError> {
        (**self).next(bound)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    #[inline]
    fn next(&self, bound: usize) -> Result<usize, RandomError> {
        (**self).next(bound)
    }
}

/// Draw from `random`, rejecting out-of-range results from misbehaving sources
/// instead of letting them index past a slice.
#[inline]
pub(crate) fn draw<R: RandomSource + ?Sized>(random: &R, bound: usize) -> Result<usize, RandomError> {
    let k = random.next(bound)?;
    if k >= bound {
        return Err(RandomError::msg(format!(
            "random source returned {k} for bound {bound}"
        )));
    }
    Ok(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(usize);

    impl RandomSource for Constant {
        fn next(&self, _bound: usize) -> Result<usize, RandomError> {
            Ok(self.0)
        }
    }

    #[test]
    fn draw_passes_in_range_values() {
        assert_eq!(draw(&Constant(3), 4).unwrap(), 3);
    }

    #[test]
    fn draw_rejects_out_of_range_values() {
        let err = draw(&Constant(4), 4).unwrap_err();
        assert!(err.to_string().contains("returned 4 for bound 4"));
    }

    #[test]
    fn wrappers_forward_to_inner_source() {
        let boxed: Box<dyn RandomSource> = Box::new(Constant(1));
        let shared = Arc::new(Constant(2));

        assert_eq!(boxed.next(10).unwrap(), 1);
        assert_eq!(shared.next(10).unwrap(), 2);
        assert_eq!((&shared).next(10).unwrap(), 2);
    }
}
