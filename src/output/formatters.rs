//! Formatting utilities for terminal output

/// Lay words out in a grid of `columns` columns, row-major
///
/// Each cell is padded to the widest word plus two spaces; trailing
/// whitespace is trimmed from each line.
#[must_use]
pub fn format_columns(words: &[&str], columns: usize) -> String {
    if words.is_empty() {
        return String::new();
    }
    let columns = columns.max(1);
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0) + 2;

    words
        .chunks(columns)
        .map(|row| {
            let line: String = row.iter().map(|w| format!("{w:<width$}")).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Singular or plural noun for a count
#[must_use]
pub const fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}
