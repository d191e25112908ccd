use crate::settings::{DEFAULT_SPECIAL, Settings};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    let defaults = Settings::default();

    box_top("Passforge");
    box_line_center("Password generator with per-set minimums");
    box_line("");
    box_line("Each password draws the minimum count from every enabled set, fills");
    box_line("the rest from all sets combined, then shuffles. The length is random");
    box_line("within --min/--max, raised to the sum of minimums when lower.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Length:");
    box_opt("  -l, --length <N>", "Exact length (sets both --min and --max)");
    box_opt(
        "      --min <N>",
        &format!("Shortest length (default: {})", defaults.min_length),
    );
    box_opt(
        "      --max <N>",
        &format!("Longest length (default: {})", defaults.max_length),
    );
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_line("");
    box_line(" Character sets (N is a minimum count, - disables the set):");
    box_opt("      --lower <N|->", "Lowercase a-z (default: 1)");
    box_opt("      --upper <N|->", "Uppercase A-Z (default: 1)");
    box_opt("      --digits <N|->", "Digits 0-9 (default: 1)");
    box_opt("      --special <N|->", "Symbols from --symbols (default: 1)");
    box_opt(
        "      --symbols <STR>",
        &format!("Symbol set (default: {DEFAULT_SPECIAL})"),
    );
    box_opt("      --no-special", "Same as --special -");
    box_opt("      --hex", "Lowercase hex only (0-9, a-f)");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("      --entropy", "Print an entropy summary first");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_opt(
        "      --save",
        "Save the effective settings ($PASSFORGE_CONFIG or ~/.config/passforge/settings)",
    );
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_bottom();
}
