//! Word list loading utilities
//!
//! Reads word lists from files and normalises raw lines into uppercase
//! alphabetic words.

use super::LoadError;
use std::fs;
use std::path::Path;

/// Load the raw lines of a word list file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use scrambled::wordlists::loader::read_lines;
///
/// let lines = read_lines("data/common.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Normalise one line: trim, uppercase, keep only `^[A-Z]+$`
///
/// Blank lines, `#` comments and tokens with digits, punctuation or
/// non-ASCII letters yield `None`.
#[must_use]
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Normalise every entry of a list, dropping invalid ones
///
/// # Examples
/// ```
/// use scrambled::wordlists::loader::normalize_all;
///
/// let words = normalize_all(&["cat", "don't", "", "Dog"]);
/// assert_eq!(words, vec!["CAT", "DOG"]);
/// ```
#[must_use]
pub fn normalize_all<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| normalize_line(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_line_uppercases() {
        assert_eq!(normalize_line("  apple \r"), Some("APPLE".to_string()));
    }

    #[test]
    fn normalize_line_skips_comments_and_blanks() {
        assert_eq!(normalize_line("# heading"), None);
        assert_eq!(normalize_line("   "), None);
    }

    #[test]
    fn normalize_line_rejects_non_alphabetic() {
        assert_eq!(normalize_line("e-mail"), None);
        assert_eq!(normalize_line("abc1"), None);
        assert_eq!(normalize_line("café"), None);
    }

    #[test]
    fn normalize_all_skips_invalid() {
        let words = normalize_all(&["crane", "toolong!", "ab c", "slate"]);
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn read_lines_missing_file() {
        let err = read_lines("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn read_lines_from_temp_file() {
        let path = std::env::temp_dir().join(format!("scrambled-loader-{}.txt", std::process::id()));
        fs::write(&path, "one\ntwo\n\nthree\n").unwrap();

        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(normalize_all(&lines), vec!["ONE", "TWO", "THREE"]);
    }
}
