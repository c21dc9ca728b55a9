//! Boggle scoring by word length

/// Shortest word the solver reports, in characters
pub const MIN_WORD_LEN: usize = 3;

/// Points for a word of the given character length
///
/// # Examples
/// ```
/// use boggle_solver::core::points_for_len;
///
/// assert_eq!(points_for_len(2), 0);
/// assert_eq!(points_for_len(4), 1);
/// assert_eq!(points_for_len(8), 11);
/// ```
#[must_use]
pub const fn points_for_len(len: usize) -> u32 {
    match len {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Points for a word
#[must_use]
pub fn word_score(word: &str) -> u32 {
    points_for_len(word.chars().count())
}

/// Total points for a list of words
#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| word_score(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table() {
        assert_eq!(word_score("ab"), 0);
        assert_eq!(word_score("abc"), 1);
        assert_eq!(word_score("quit"), 1);
        assert_eq!(word_score("quite"), 2);
        assert_eq!(word_score("quiets"), 3);
        assert_eq!(word_score("quieter"), 5);
        assert_eq!(word_score("quietest"), 11);
        assert_eq!(word_score("quietness"), 11);
    }

    #[test]
    fn total_sums_words() {
        assert_eq!(total_score(&["tap", "tape", "taper"]), 4);
        assert_eq!(total_score::<&str>(&[]), 0);
    }
}
