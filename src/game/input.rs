//! Pending word buffer and keystroke diffing
//!
//! Front ends report the whole text of the input field after each edit. The
//! ledger only understands single-letter reserve/release steps, so each new
//! snapshot is compared with the previous one at the first point where they
//! diverge: everything after it in the old text was removed, everything after
//! it in the new text was inserted.

/// Letters removed and inserted by one input event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDiff {
    /// Characters of the previous text after the divergence point, in order
    pub removed: Vec<char>,
    /// Characters of the new text after the divergence point, in order
    pub inserted: Vec<char>,
}

impl InputDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty()
    }
}

/// Compare two input snapshots at their first divergence
///
/// Both texts are compared case-insensitively; returned characters are
/// uppercased.
///
/// # Examples
/// ```
/// use scrambled::game::input::diff;
///
/// // Typing one letter
/// let d = diff("CA", "CAT");
/// assert!(d.removed.is_empty());
/// assert_eq!(d.inserted, vec!['T']);
///
/// // Replacing a middle letter re-types the tail
/// let d = diff("CAT", "COT");
/// assert_eq!(d.removed, vec!['A', 'T']);
/// assert_eq!(d.inserted, vec!['O', 'T']);
/// ```
#[must_use]
pub fn diff(previous: &str, current: &str) -> InputDiff {
    let previous: Vec<char> = previous.chars().map(|c| c.to_ascii_uppercase()).collect();
    let current: Vec<char> = current.chars().map(|c| c.to_ascii_uppercase()).collect();

    let common = previous
        .iter()
        .zip(current.iter())
        .take_while(|(a, b)| a == b)
        .count();

    InputDiff {
        removed: previous[common..].to_vec(),
        inserted: current[common..].to_vec(),
    }
}

/// The word the player is composing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    text: String,
}

impl PendingInput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Last accepted snapshot of the input field, uppercased
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Diff a new snapshot against the current text
    #[must_use]
    pub fn diff_to(&self, current: &str) -> InputDiff {
        diff(&self.text, current)
    }

    /// Accept a snapshot as the new current text
    pub fn set(&mut self, current: &str) {
        self.text = current.to_ascii_uppercase();
    }

    /// Text after appending one character
    #[must_use]
    pub fn with_pushed(&self, ch: char) -> String {
        let mut next = self.text.clone();
        next.push(ch);
        next
    }

    /// Text after deleting the last character
    #[must_use]
    pub fn with_popped(&self) -> String {
        let mut next = self.text.clone();
        next.pop();
        next
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
