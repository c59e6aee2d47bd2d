/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Erase from the cursor to the end of the line.
pub const CLEAR_EOL: &str = "\x1b[K";

/// Greyed placeholder for empty optional text fields.
pub fn dash_if_empty(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}—{RESET}")
    } else {
        value.to_string()
    }
}
