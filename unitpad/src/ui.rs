//! Console output helpers

use sib_units::UnitEntry;

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
}

/// Red `[✗] message` line
pub fn error_line(message: &str) -> String {
    format!("{}[✗]{} {}", colors::BRIGHT_RED, colors::RESET, message)
}

/// Print an error line to stderr
pub fn print_error(message: &str) {
    eprintln!("{}", error_line(message));
}

/// Plain-text table of display units, one row per unit
pub fn render_unit_table(entries: &[UnitEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("UNIT".len());

    let mut out = format!(
        "{}{:<4}  {:<name_width$}  {:>8}  {}{}\n",
        colors::BOLD,
        "CODE",
        "UNIT",
        "DECIMALS",
        "DESCRIPTION",
        colors::RESET,
        name_width = name_width
    );
    for entry in entries {
        out.push_str(&format!(
            "{:<4}  {:<name_width$}  {:>8}  {}\n",
            entry.code,
            entry.name,
            entry.decimals,
            entry.description,
            name_width = name_width
        ));
    }
    out
}
