//! Dictionary of valid words
//!
//! Words are uppercased on ingestion so lookups are case-insensitive.

use rustc_hash::FxHashSet;

/// A set of uppercase words with O(1) average lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
    longest: usize,
}

impl Dictionary {
    /// Build a dictionary from any sequence of words
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "CAT", "Dog"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("DOG"));
    /// ```
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_uppercase())
            .collect();
        let longest = words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0);
        Self { words, longest }
    }

    /// Check membership of an already-uppercased word
    #[inline]
    #[must_use]
    pub fn contains(&self, upper: &str) -> bool {
        self.words.contains(upper)
    }

    /// Length in characters of the longest word
    #[inline]
    #[must_use]
    pub const fn longest(&self) -> usize {
        self.longest
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Dictionary slot of a solver
///
/// An empty `Configured` dictionary is valid and distinct from `Unconfigured`:
/// both yield no words, but only `Unconfigured` skips traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DictionaryState {
    #[default]
    Unconfigured,
    Configured(Dictionary),
}

impl DictionaryState {
    #[must_use]
    pub const fn dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Configured(dictionary) => Some(dictionary),
            Self::Unconfigured => None,
        }
    }
}
