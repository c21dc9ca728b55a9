//! Word tracing command
//!
//! Shows where a word lies on a grid and whether it would be reported.

use crate::core::{Dictionary, Grid, MIN_WORD_LEN, word_score};
use crate::solver::{Path, find_path};

/// Result of tracing a word
pub struct TraceResult {
    pub word: String,
    pub grid: Grid,
    pub path: Option<Path>,
    pub in_dictionary: bool,
    pub points: u32,
}

impl TraceResult {
    /// Whether a solve of this grid would report the word
    #[must_use]
    pub fn would_be_found(&self) -> bool {
        self.path.is_some() && self.in_dictionary && self.points > 0
    }
}

/// Trace `word` on `grid` and check it against the dictionary
///
/// # Errors
///
/// Returns an error if the word is empty.
pub fn trace_word(word: &str, grid: Grid, dictionary: &Dictionary) -> Result<TraceResult, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }

    let path = find_path(&grid, word);
    let upper = word.to_uppercase();
    let points = if upper.chars().count() >= MIN_WORD_LEN {
        word_score(&upper)
    } else {
        0
    };

    Ok(TraceResult {
        word: word.to_lowercase(),
        grid,
        path,
        in_dictionary: dictionary.contains(&upper),
        points,
    })
}
