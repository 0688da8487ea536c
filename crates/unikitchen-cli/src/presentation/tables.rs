//! Table formatting utilities for CLI output.

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// Counts characters rather than bytes, so umlauts in recipe names never
/// split a code point.
///
/// # Examples
///
/// ```rust
/// use unikitchen_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Käse", 10), "Käse");
/// assert_eq!(truncate_string("Käsespätzle", 8), "Käses...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}
