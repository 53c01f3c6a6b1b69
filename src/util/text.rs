// src/util/text.rs

/// Extract the first non-empty line of a note body, shortened for listings.
///
/// Lines are trimmed. When the line is longer than `max_chars` characters it
/// is cut and an ellipsis appended, so the result never exceeds `max_chars`
/// characters.
///
/// # Examples
///
/// ```
/// use notehub::util::text::preview;
///
/// let content = "\n  Buy milk  \nand bread";
/// assert_eq!(preview(content, 20), "Buy milk");
/// assert_eq!(preview("A rather long line", 8), "A rathe…");
/// ```
pub fn preview(content: &str, max_chars: usize) -> String {
    let line = content
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = line.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
