use std::error::Error as StdError;

use thiserror::Error;

/// A randomness source failed to produce a value.
#[derive(Debug, Error)]
#[error("random source failed: {source}")]
pub struct RandomError {
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl RandomError {
    /// Wrap any underlying error, e.g. an OS entropy failure or a custom source's own error type.
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self {
            source: source.into(),
        }
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }
}
