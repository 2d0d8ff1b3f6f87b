/// Removes a single trailing `\n` or `\r\n`, leaving all other whitespace intact
///
/// This is the normalization used for match content and history keys.
///
/// # Examples
///
/// ```
/// use linesweep::utils::strip_line_ending;
///
/// assert_eq!(strip_line_ending("  foo \r\n"), "  foo ");
/// assert_eq!(strip_line_ending("bar"), "bar");
/// ```
pub fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Returns the terminator `line` ends with (`"\r\n"`, `"\n"` or `""`)
pub fn line_ending(line: &str) -> &str {
    &line[strip_line_ending(line).len()..]
}
