use std::collections::VecDeque;
use std::sync::Mutex;

use super::{RandomError, RandomSource};

/// Replays a fixed list of draws, then fails.
///
/// Every requested bound is recorded, so tests can check both what a
/// generator produced and how it asked for it.
#[derive(Debug, Default)]
pub struct Sequence {
    draws: Mutex<VecDeque<usize>>,
    bounds: Mutex<Vec<usize>>,
}

impl Sequence {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
            bounds: Mutex::new(Vec::new()),
        }
    }

    /// Bounds requested so far, oldest first.
    pub fn bounds(&self) -> Vec<usize> {
        self.bounds.lock().map(|b| b.clone()).unwrap_or_default()
    }

    pub fn remaining(&self) -> usize {
        self.draws.lock().map(|d| d.len()).unwrap_or(0)
    }
}

impl RandomSource for Sequence {
    fn next(&self, bound: usize) -> Result<usize, RandomError> {
        self.bounds
            .lock()
            .map_err(|_| RandomError::msg("sequence lock poisoned"))?
            .push(bound);
        self.draws
            .lock()
            .map_err(|_| RandomError::msg("sequence lock poisoned"))?
            .pop_front()
            .ok_or_else(|| RandomError::msg("sequence exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_fails() {
        let seq = Sequence::new([3, 1]);
        assert_eq!(seq.next(5).unwrap(), 3);
        assert_eq!(seq.remaining(), 1);
        assert_eq!(seq.next(2).unwrap(), 1);
        assert!(seq.next(9).is_err());
        assert_eq!(seq.bounds(), vec![5, 2, 9]);
    }
}
