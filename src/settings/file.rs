//! Settings file persistence.
//!
//! One comma-separated line. Commas and pipes inside the special character
//! list are escaped with a leading `|`. A disabled set is written as `-`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 10;

pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os("PASSFORGE_CONFIG") {
        return PathBuf::from(path);
    }
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let special_chars: String = settings
        .special_chars
        .iter()
        .map(|&c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect();

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{}\n",
        settings.min_length,
        settings.max_length,
        settings.number_of_passwords,
        set_min_str(settings.lowercase_min),
        set_min_str(settings.uppercase_min),
        set_min_str(settings.digits_min),
        set_min_str(settings.special_min),
        special_chars,
        settings.to_clipboard,
        settings.show_entropy,
    );

    fs::write(path, data)?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

/// Load settings from `path`. A missing or malformed file is replaced with
/// defaults; individual fields that fail to parse keep their default.
pub fn load(path: &Path) -> io::Result<Settings> {
    let defaults = Settings::default();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            save(&defaults, path)?;
            return Ok(defaults);
        }
        Err(e) => return Err(e),
    };
    let line = contents.lines().next().unwrap_or("");

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            "settings file {} has {} field(s), expected {FIELDS}; rewriting defaults",
            path.display(),
            parts.len()
        );
        save(&defaults, path)?;
        return Ok(defaults);
    }

    Ok(Settings {
        min_length: parts[0].parse().unwrap_or(defaults.min_length),
        max_length: parts[1].parse().unwrap_or(defaults.max_length),
        number_of_passwords: parts[2].parse().unwrap_or(defaults.number_of_passwords),
        lowercase_min: parse_set_min(&parts[3]).unwrap_or(defaults.lowercase_min),
        uppercase_min: parse_set_min(&parts[4]).unwrap_or(defaults.uppercase_min),
        digits_min: parse_set_min(&parts[5]).unwrap_or(defaults.digits_min),
        special_min: parse_set_min(&parts[6]).unwrap_or(defaults.special_min),
        special_chars: parts[7].chars().collect(),
        to_clipboard: parts[8].parse().unwrap_or(defaults.to_clipboard),
        show_entropy: parts[9].parse().unwrap_or(defaults.show_entropy),
    })
}

fn set_min_str(min: Option<usize>) -> String {
    min.map_or_else(|| "-".to_string(), |m| m.to_string())
}

/// `-` disables the set; anything else must be a count.
pub fn parse_set_min(s: &str) -> Option<Option<usize>> {
    match s {
        "-" => Some(None),
        _ => s.parse().ok().map(Some),
    }
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '|' {
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
