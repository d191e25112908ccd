//! Password generation.
//!
//! A [`Generator`] is configured once through its [`Builder`] and then produces
//! any number of independent passwords. Each call picks a length, draws the
//! per-set minimums, fills the rest from the whole pool and shuffles the result.

mod builder;
mod charset;
pub mod entropy;
mod error;
mod generate;
mod password;
mod shuffle;

pub use builder::Builder;
pub use charset::{CharSet, DIGITS, LOWERCASE, UPPERCASE};
pub use error::Error;
pub use generate::Generator;
pub use password::Password;
pub use shuffle::shuffle;
