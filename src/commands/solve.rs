//! Grid solving command
//!
//! Solves one grid against a dictionary and gathers the words with scores.

use crate::core::{Grid, word_score};
use crate::solver::{Boggle, TraversalType};
use std::time::{Duration, Instant};

/// Sample grid used by the demo command
pub const DEMO_GRID: [[&str; 4]; 4] = [
    ["T", "A", "P", "E"],
    ["E", "R", "S", "O"],
    ["N", "I", "L", "D"],
    ["Qu", "S", "T", "E"],
];

/// Configuration for solving a grid
pub struct SolveConfig {
    pub grid: Grid,
    pub traversal: TraversalType,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            traversal: TraversalType::default(),
            parallel: false,
        }
    }

    /// Configuration for the built-in sample grid
    ///
    /// # Panics
    /// Will not panic - the sample grid is a fixed valid rectangle.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Grid::new(DEMO_GRID).expect("demo grid is rectangular"))
    }
}

/// A found word and its points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
}

/// Result of solving a grid
pub struct SolveResult {
    pub grid: Grid,
    pub words: Vec<FoundWord>,
    pub total_score: u32,
    pub dictionary_size: usize,
    pub duration: Duration,
}

impl SolveResult {
    /// The longest found word, first alphabetically on ties
    #[must_use]
    pub fn longest(&self) -> Option<&FoundWord> {
        self.words
            .iter()
            .max_by(|a, b| {
                a.word
                    .chars()
                    .count()
                    .cmp(&b.word.chars().count())
                    .then_with(|| b.word.cmp(&a.word))
            })
    }
}

/// Solve a grid against the given dictionary words
pub fn solve_grid<W: AsRef<str>>(config: SolveConfig, dictionary: &[W]) -> SolveResult {
    let start = Instant::now();

    let mut boggle = Boggle::unconfigured(config.traversal);
    boggle.set_parsed_grid(config.grid.clone());
    boggle.set_dictionary(dictionary);

    let solution = if config.parallel {
        boggle.solve_parallel()
    } else {
        boggle.solve()
    };

    let words: Vec<FoundWord> = solution
        .into_iter()
        .map(|word| {
            let points = word_score(&word);
            FoundWord { word, points }
        })
        .collect();
    let total_score = words.iter().map(|w| w.points).sum();

    SolveResult {
        grid: config.grid,
        words,
        total_score,
        dictionary_size: dictionary.len(),
        duration: start.elapsed(),
    }
}
