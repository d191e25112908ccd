//! CLI settings: the generator layout plus output preferences.

mod file;

use passforge::pass::{DIGITS, Error, Generator, LOWERCASE, UPPERCASE};

pub use file::{default_path, parse_set_min};

pub const DEFAULT_SPECIAL: &str = "~!@#$%^&*()-_=+[]{};:,.?";
pub const HEX: &str = "0123456789abcdef";

/// Per-set minimums are `None` when the set is left out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub min_length: usize,
    pub max_length: usize,
    pub number_of_passwords: usize,
    pub lowercase_min: Option<usize>,
    pub uppercase_min: Option<usize>,
    pub digits_min: Option<usize>,
    pub special_min: Option<usize>,
    pub special_chars: Vec<char>,
    pub to_clipboard: bool,
    pub show_entropy: bool,
}

impl Settings {
    pub fn load() -> std::io::Result<Self> {
        file::load(&default_path())
    }

    pub fn save(&self) -> std::io::Result<()> {
        file::save(self, &default_path())
    }

    /// Build a generator over the enabled sets, in the order lower, upper,
    /// digits, special.
    pub fn generator(&self) -> Result<Generator, Error> {
        let mut builder = Generator::builder();
        if let Some(min) = self.lowercase_min {
            builder = builder.with_charset(LOWERCASE, min);
        }
        if let Some(min) = self.uppercase_min {
            builder = builder.with_charset(UPPERCASE, min);
        }
        if let Some(min) = self.digits_min {
            builder = builder.with_charset(DIGITS, min);
        }
        if let Some(min) = self.special_min {
            builder = builder.with_chars(self.special_chars.iter().copied(), min);
        }
        builder.build()
    }

    /// A single lowercase hex set with no minimum.
    pub fn use_hex(&mut self) {
        self.lowercase_min = None;
        self.uppercase_min = None;
        self.digits_min = None;
        self.special_chars = HEX.chars().collect();
        self.special_min = Some(0);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 16,
            max_length: 24,
            number_of_passwords: 1,
            lowercase_min: Some(1),
            uppercase_min: Some(1),
            digits_min: Some(1),
            special_min: Some(1),
            special_chars: DEFAULT_SPECIAL.chars().collect(),
            to_clipboard: false,
            show_entropy: false,
        }
    }
}
