//! Command line front end.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;

use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> u8 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try `passforge --help`");
            return 1;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed(e)) => {
            prompts::error(&format!("Error: {e}"));
            2
        }
        Err(Exit::Output(e)) => {
            prompts::error(&format!("Failed to write passwords: {e}"));
            2
        }
    }
}
