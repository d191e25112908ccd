//! Box drawing for help and summary output.

pub const BOX_WIDTH: usize = 72;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// `┌─ Title ──────┐`
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
        return;
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    println!("┌{title_part}{}┐", "─".repeat(remaining));
}

/// `│ content      │`, left aligned. Overlong content runs past the border.
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(content.chars().count());
    println!("│ {content}{} │", " ".repeat(padding));
}

pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(content.chars().count());
    let left = total / 2;
    println!("│ {}{content}{} │", " ".repeat(left), " ".repeat(total - left));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// A help option: flag column, then the description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 26;
    let desc_col = INNER_WIDTH - FLAG_COL;

    let lines = wrap(desc, desc_col);
    let mut flag = format!("{flag:<FLAG_COL$}");
    for line in lines {
        box_line(&format!("{flag}{line}"));
        flag = " ".repeat(FLAG_COL);
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
