//! Password generation from caller-defined character sets.
//!
//! Each set carries a minimum count. A password's length is drawn uniformly
//! from the requested range (raised to the sum of minimums when needed), the
//! minimums are drawn set by set, the remainder comes from all sets combined,
//! and the result is shuffled so set order does not leak into the output.
//!
//! ```
//! use passforge::pass::{DIGITS, Generator, LOWERCASE, UPPERCASE};
//!
//! let generator = Generator::builder()
//!     .with_charset(LOWERCASE, 1)
//!     .with_charset(UPPERCASE, 2)
//!     .with_charset(DIGITS, 3)
//!     .with_charset("~!@#$%^&*", 4)
//!     .build()?;
//!
//! let password = generator.generate(8, 20)?;
//! assert!((10..=20).contains(&password.len()));
//! # Ok::<(), passforge::pass::Error>(())
//! ```

pub mod pass;
pub mod random;

pub use pass::{Error, Generator, Password};
pub use random::{RandomError, RandomSource, SystemRandom};
