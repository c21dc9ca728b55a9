//! Tile normalization
//!
//! Grid cells hold arbitrary string tokens. Before a tile is appended to a
//! candidate word it is uppercased, and a bare `Q` expands to `QU` the way the
//! physical die face prints it.

/// Normalize a raw grid token into the text it contributes to a word
///
/// # Examples
/// ```
/// use boggle_solver::core::normalize_tile;
///
/// assert_eq!(normalize_tile("q"), "QU");
/// assert_eq!(normalize_tile("Qu"), "QU");
/// assert_eq!(normalize_tile("st"), "ST");
/// assert_eq!(normalize_tile("a"), "A");
/// ```
#[must_use]
pub fn normalize_tile(raw: &str) -> String {
    let upper = raw.to_uppercase();
    if upper == "Q" {
        "QU".to_string()
    } else {
        upper
    }
}

/// A tile after normalization, with its length in characters cached
///
/// Word length rules count characters, not bytes, so the count is kept
/// alongside the text to avoid rescanning during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    text: String,
    char_len: usize,
}

impl Tile {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let text = normalize_tile(raw);
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn char_len(&self) -> usize {
        self.char_len
    }
}
