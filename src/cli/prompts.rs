//! Warnings, errors and yes/no prompts on stderr.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings, confirmations and prompts.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Quiet mode or stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red, always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Falls back silently when prompts are skipped.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
