//! Formatting utilities for terminal output

use crate::core::Letter;

/// Format letters as tiles, e.g. `[A] [C] [T]`
#[must_use]
pub fn letter_tiles(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(|l| format!("[{l}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated word list, or a placeholder when empty
#[must_use]
pub fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "(none yet)".to_string()
    } else {
        words.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::new).collect()
    }

    #[test]
    fn tiles_keep_order() {
        assert_eq!(letter_tiles(&letters("TAC")), "[T] [A] [C]");
        assert_eq!(letter_tiles(&[]), "");
    }

    #[test]
    fn word_list_placeholder() {
        assert_eq!(word_list(&[]), "(none yet)");
        assert_eq!(
            word_list(&["CAT".to_string(), "DOG".to_string()]),
            "CAT, DOG"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
