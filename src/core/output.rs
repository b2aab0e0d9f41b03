//! Compact output rendering helpers for CLI surfaces.
//!
//! Keeps table cells and status output bounded and readable.

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Pad or truncate a cell to exactly `width` display characters.
pub fn pad_cell(content: &str, width: usize) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let len = collapsed.chars().count();
    if len > width {
        let keep = width.saturating_sub(3);
        let head: String = collapsed.chars().take(keep).collect();
        return format!("{}{}", head, &"..."[..width.min(3)]);
    }
    format!("{}{}", collapsed, " ".repeat(width - len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_line_collapses_whitespace() {
        assert_eq!(compact_line("a\n  b\tc", 20), "a b c");
    }

    #[test]
    fn test_compact_line_bounds_length() {
        assert_eq!(compact_line("abcdefgh", 4), "abcd...");
        assert_eq!(compact_line("abcd", 4), "abcd");
    }

    #[test]
    fn test_pad_cell_pads_short_content() {
        assert_eq!(pad_cell("ab", 5), "ab   ");
    }

    #[test]
    fn test_pad_cell_truncates_to_exact_width() {
        let cell = pad_cell("abcdefgh", 5);
        assert_eq!(cell, "ab...");
        assert_eq!(cell.chars().count(), 5);
    }
}
