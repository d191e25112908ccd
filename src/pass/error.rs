use thiserror::Error;

use crate::random::RandomError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no characters specified")]
    NoCharacters,

    #[error("character set {index} is empty but requires at least {min} character(s)")]
    EmptyCharSet { index: usize, min: usize },

    #[error("invalid password length: min {min}, max {max}, set minimums need {required}")]
    InvalidLength {
        min: usize,
        max: usize,
        required: usize,
    },

    #[error(transparent)]
    Random(#[from] RandomError),
}

impl Error {
    /// The randomness source failed, as opposed to a bad configuration or request.
    pub fn is_random(&self) -> bool {
        matches!(self, Error::Random(_))
    }
}
