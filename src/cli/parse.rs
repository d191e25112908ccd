use std::fmt;

use super::CliFlags;
use crate::settings::parse_set_min;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse `args`, skipping the program name in `args[0]`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut args = args.iter().skip(1);

    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .map(String::as_str)
                .ok_or_else(|| ParseError::MissingValue(arg.clone()))
        };

        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--no-special" => flags.no_special = true,
            "--hex" => flags.hex = true,
            "--entropy" => flags.entropy = true,
            "-l" | "--length" => flags.length = Some(number(value()?)?),
            "--min" => flags.min = Some(number(value()?)?),
            "--max" => flags.max = Some(number(value()?)?),
            "-n" | "--number" => flags.number = Some(number(value()?)?),
            "--lower" => flags.lower = Some(set_min(value()?)?),
            "--upper" => flags.upper = Some(set_min(value()?)?),
            "--digits" => flags.digits = Some(set_min(value()?)?),
            "--special" => flags.special = Some(set_min(value()?)?),
            "--symbols" => flags.symbols = Some(value()?.to_string()),
            _ => return Err(ParseError::UnknownArg(arg.clone())),
        }
    }

    Ok(flags)
}

fn number(s: &str) -> Result<usize, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

fn set_min(s: &str) -> Result<Option<usize>, ParseError> {
    parse_set_min(s).ok_or_else(|| ParseError::InvalidNumber(s.to_string()))
}
