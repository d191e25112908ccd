//! CLI context - bundles settings, flags, and clipboard state.

use std::fmt::Write as _;
use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use passforge::pass::entropy::{self, Strength};
use passforge::{Error, Generator};
use zeroize::{Zeroize, Zeroizing};

use super::help::print_help;
use super::{CliFlags, prompts};
use crate::settings::{self, Settings};
use crate::terminal::{box_bottom, box_line, box_top, format_number};

/// Why [`Context::run`] stopped early.
pub enum Exit {
    /// Info flag handled or the user aborted; not an error.
    Done,
    Failed(Error),
    /// Writing passwords to stdout failed, e.g. a closed pipe.
    Output(io::Error),
}

impl From<Error> for Exit {
    fn from(e: Error) -> Self {
        Exit::Failed(e)
    }
}

pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse `args` and pick the starting settings.
    pub fn new(args: Vec<String>) -> Result<Self, super::ParseError> {
        let flags = super::parse(&args)?;

        let settings = starting_settings(&flags, Settings::load);

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), Exit> {
        prompts::set_quiet(self.flags.quiet);
        self.handle_info_flags()?;
        self.configure()?;
        self.handle_save();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Apply CLI flags, then open the clipboard if output goes there.
    fn configure(&mut self) -> Result<(), Exit> {
        apply_flags(&self.flags, &mut self.settings);

        if self.settings.to_clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(e) => {
                    debug!("clipboard unavailable: {e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Exit::Done);
                    }
                    self.settings.to_clipboard = false;
                }
            }
        }

        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save() {
            Ok(()) => prompts::settings_saved(&settings::default_path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// Generate passwords and print them or copy them to the clipboard.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let generator = self.settings.generator()?;
        let count = self.settings.number_of_passwords.max(1);

        let mut passwords = Zeroizing::new(String::new());
        for _ in 0..count {
            let password = generator.generate(self.settings.min_length, self.settings.max_length)?;
            let _ = writeln!(passwords, "{password}");
        }

        if self.settings.show_entropy && !prompts::quiet() {
            self.print_summary(&generator, count);
        }

        match self.clipboard.as_mut() {
            Some(ctx) => match ctx.set_contents(passwords.trim_end().to_string()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            },
            None => {
                write_passwords(&mut io::stdout().lock(), &passwords).map_err(Exit::Output)?;
            }
        }

        Ok(())
    }

    fn print_summary(&self, generator: &Generator, count: usize) {
        let pool = generator.pool_size();
        let shortest = self.settings.min_length.max(generator.min_total());
        let longest = self.settings.max_length;
        let low = entropy::bits(shortest, pool);
        let high = entropy::bits(longest, pool);

        box_top("Entropy");
        if shortest == longest {
            box_line(&format!("{:.1} bits ({})", low, Strength::from_bits(low)));
        } else {
            box_line(&format!(
                "{:.1}-{:.1} bits ({} to {})",
                low,
                high,
                Strength::from_bits(low),
                Strength::from_bits(high)
            ));
        }
        box_line(&format!(
            "Length {shortest}-{longest} \u{2022} Pool: {pool} chars in {} set(s) \u{2022} Count: {}",
            generator.charsets().len(),
            format_number(count)
        ));
        box_bottom();
        println!();
    }
}

fn write_passwords<W: io::Write>(out: &mut W, passwords: &str) -> io::Result<()> {
    out.write_all(passwords.as_bytes())?;
    out.flush()
}

/// Saved settings with `--saved`, defaults otherwise. A settings file that
/// cannot be read falls back to defaults with a warning.
fn starting_settings<F>(flags: &CliFlags, load: F) -> Settings
where
    F: FnOnce() -> io::Result<Settings>,
{
    if !flags.saved {
        return Settings::default();
    }
    load().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    })
}

/// Apply CLI flags on top of `settings`.
///
/// `--length` sets both bounds before `--min`/`--max` adjust them,
/// `--no-special` wins over `--special`, and `--hex` replaces every set.
fn apply_flags(flags: &CliFlags, settings: &mut Settings) {
    if let Some(len) = flags.length {
        settings.min_length = len;
        settings.max_length = len;
    }
    if let Some(min) = flags.min {
        settings.min_length = min;
    }
    if let Some(max) = flags.max {
        settings.max_length = max;
    }
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }

    if let Some(min) = flags.lower {
        settings.lowercase_min = min;
    }
    if let Some(min) = flags.upper {
        settings.uppercase_min = min;
    }
    if let Some(min) = flags.digits {
        settings.digits_min = min;
    }
    if let Some(min) = flags.special {
        settings.special_min = min;
    }
    if let Some(ref chars) = flags.symbols {
        settings.special_chars = chars.chars().collect();
    }
    if flags.no_special {
        settings.special_min = None;
    }
    if flags.hex {
        settings.use_hex();
    }
    if flags.entropy {
        settings.show_entropy = true;
    }
    if flags.clipboard {
        settings.to_clipboard = true;
    }
}
