//! Main Boggle solver interface

use super::board::Board;
use super::path::{Path, find_path};
use super::traversal::{StackTraversal, Traversal};
use crate::core::{Dictionary, DictionaryState, Grid, GridState};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{debug, trace};

/// Main Boggle solver
///
/// Holds a grid and a dictionary and finds every dictionary word of three or
/// more characters that can be spelled along a self-avoiding chain of
/// adjacent cells. Invalid input never fails; it leaves the solver
/// unconfigured and every solve returns an empty list.
///
/// # Examples
/// ```
/// use boggle_solver::solver::Boggle;
///
/// let mut boggle = Boggle::new([["A", "B"], ["C", "D"]], ["abcd", "aa", "ab"]);
/// assert_eq!(boggle.solve(), vec!["abcd"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Boggle<T = StackTraversal> {
    traversal: T,
    grid: GridState,
    dictionary: DictionaryState,
    solution: Vec<String>,
}

impl Boggle {
    /// Create a solver using explicit-stack traversal
    ///
    /// Path depth is bounded only by the number of cells, so the default
    /// keeps it off the call stack.
    pub fn new<G, R, S, D, W>(grid: G, dictionary: D) -> Self
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
        D: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::with_traversal(StackTraversal, grid, dictionary)
    }
}

impl<T: Traversal> Boggle<T> {
    /// Create a solver with the given traversal, grid and dictionary
    pub fn with_traversal<G, R, S, D, W>(traversal: T, grid: G, dictionary: D) -> Self
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
        D: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut boggle = Self::unconfigured(traversal);
        boggle.set_grid(grid);
        boggle.set_dictionary(dictionary);
        boggle
    }

    /// Create a solver with neither grid nor dictionary
    pub const fn unconfigured(traversal: T) -> Self {
        Self {
            traversal,
            grid: GridState::Unconfigured,
            dictionary: DictionaryState::Unconfigured,
            solution: Vec::new(),
        }
    }

    /// Replace the grid
    ///
    /// An empty, jagged or zero-width grid leaves the solver without a grid.
    pub fn set_grid<G, R, S>(&mut self, grid: G)
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grid = match Grid::new(grid) {
            Ok(grid) => {
                debug!(rows = grid.rows(), cols = grid.cols(), "grid configured");
                GridState::Configured(grid)
            }
            Err(error) => {
                debug!(%error, "grid rejected");
                GridState::Unconfigured
            }
        };
    }

    /// Replace the grid with an already validated one
    pub fn set_parsed_grid(&mut self, grid: Grid) {
        self.grid = GridState::Configured(grid);
    }

    /// Remove the grid
    pub fn clear_grid(&mut self) {
        self.grid = GridState::Unconfigured;
    }

    /// Replace the dictionary
    ///
    /// Words are matched case-insensitively. An empty sequence is a valid,
    /// empty dictionary.
    pub fn set_dictionary<D, W>(&mut self, dictionary: D)
    where
        D: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let dictionary = Dictionary::from_words(dictionary);
        debug!(words = dictionary.len(), "dictionary configured");
        self.dictionary = DictionaryState::Configured(dictionary);
    }

    /// Remove the dictionary
    pub fn clear_dictionary(&mut self) {
        self.dictionary = DictionaryState::Unconfigured;
    }

    #[must_use]
    pub const fn grid_state(&self) -> &GridState {
        &self.grid
    }

    #[must_use]
    pub const fn dictionary_state(&self) -> &DictionaryState {
        &self.dictionary
    }

    /// The words found by the most recent solve
    #[must_use]
    pub fn solution(&self) -> &[String] {
        &self.solution
    }

    /// Find all words, sorted ascending and lowercase
    ///
    /// Returns an empty list when the grid or dictionary is missing.
    pub fn solve(&mut self) -> Vec<String> {
        let Some(board) = self.board() else {
            debug!("solve skipped: solver not configured");
            return Vec::new();
        };

        let start = Instant::now();
        let mut found = FxHashSet::default();
        for root in board.cells() {
            trace!(row = root.0, col = root.1, "walking root");
            self.traversal.walk(&board, root, &mut found);
        }

        self.finish(found, start)
    }

    /// Locate one path spelling `word` on the current grid
    ///
    /// Returns `None` without a grid or when the word cannot be spelled.
    #[must_use]
    pub fn find_path(&self, word: &str) -> Option<Path> {
        self.grid.grid().and_then(|grid| find_path(grid, word))
    }

    fn board(&self) -> Option<Board<'_>> {
        let grid = self.grid.grid()?;
        let dictionary = self.dictionary.dictionary()?;
        Some(Board::new(grid, dictionary))
    }

    fn finish(&mut self, found: FxHashSet<String>, start: Instant) -> Vec<String> {
        let mut words: Vec<String> = found.into_iter().collect();
        words.sort_unstable();

        debug!(
            words = words.len(),
            elapsed = ?start.elapsed(),
            "solve finished"
        );

        self.solution.clone_from(&words);
        words
    }
}

impl<T: Traversal + Sync> Boggle<T> {
    /// Find all words, walking root cells on the rayon thread pool
    ///
    /// Each root owns its visited matrix, so roots run independently and the
    /// result equals [`Boggle::solve`].
    pub fn solve_parallel(&mut self) -> Vec<String> {
        let Some(board) = self.board() else {
            debug!("solve skipped: solver not configured");
            return Vec::new();
        };

        let start = Instant::now();
        let roots: Vec<(usize, usize)> = board.cells().collect();
        let found = roots
            .par_iter()
            .map(|&root| {
                let mut found = FxHashSet::default();
                self.traversal.walk(&board, root, &mut found);
                found
            })
            .reduce(FxHashSet::default, |mut all, part| {
                all.extend(part);
                all
            });

        self.finish(found, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MIN_WORD_LEN;
    use crate::solver::path::is_valid_path;
    use crate::solver::traversal::{RecursiveTraversal, TraversalType};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const NO_WORDS: [&str; 0] = [];

    fn three_by_three() -> [[&'static str; 3]; 3] {
        [["A", "B", "C"], ["D", "E", "F"], ["G", "H", "I"]]
    }

    #[test]
    fn normal_input() {
        let mut boggle = Boggle::new(three_by_three(), ["ABC", "AEI", "DEF"]);
        let solution = boggle.solve();
        assert_eq!(solution, vec!["abc", "aei", "def"]);
    }

    #[test]
    fn qu_logic() {
        let grid = [["Q", "A", "R"], ["X", "Z", "T"], ["C", "V", "B"]];
        let mut boggle = Boggle::new(grid, ["QUARTZ"]);
        assert!(boggle.solve().contains(&"quartz".to_string()));
    }

    #[test]
    fn qu_tile_spells_quit() {
        let grid = [["Q", "I", "X"], ["Y", "T", "Z"], ["A", "B", "C"]];
        let mut boggle = Boggle::new(grid, ["QUIT"]);
        assert_eq!(boggle.solve(), vec!["quit"]);
    }

    #[test]
    fn literal_qu_and_st_tiles() {
        let grid = [["QU", "I"], ["ST", "T"]];
        let mut boggle = Boggle::new(grid, ["quit", "stir", "quist", "qit"]);
        assert_eq!(boggle.solve(), vec!["quist", "quit"]);
    }

    #[test]
    fn single_qu_tile_meets_no_length() {
        // "QU" alone is two characters; a QU tile plus one letter is three
        let grid = [["Q", "A"]];
        let mut boggle = Boggle::new(grid, ["QU", "QUA"]);
        assert_eq!(boggle.solve(), vec!["qua"]);
    }

    #[test]
    fn min_word_length() {
        let mut boggle = Boggle::new(three_by_three(), ["AB", "A"]);
        assert!(boggle.solve().is_empty());
    }

    #[test]
    fn empty_grid() {
        let mut boggle = Boggle::new(Vec::<Vec<&str>>::new(), ["APPLE"]);
        assert!(boggle.solve().is_empty());
        assert_eq!(boggle.grid_state(), &GridState::Unconfigured);
    }

    #[test]
    fn empty_row_grid() {
        let mut boggle = Boggle::new(vec![vec!["A", "B"], vec![]], ["ABA"]);
        assert!(boggle.solve().is_empty());
    }

    #[test]
    fn jagged_grid() {
        let mut boggle = Boggle::new(vec![vec!["A", "B"], vec!["A"]], ["ABA"]);
        assert!(boggle.solve().is_empty());
        assert_eq!(boggle.grid_state(), &GridState::Unconfigured);
    }

    #[test]
    fn empty_dictionary() {
        let mut boggle = Boggle::new([["A", "B"], ["C", "D"]], NO_WORDS);
        assert!(boggle.solve().is_empty());
        assert!(boggle.dictionary_state().dictionary().is_some());
    }

    #[test]
    fn unconfigured_dictionary() {
        let mut boggle = Boggle::new([["A", "B"], ["C", "D"]], ["abc"]);
        boggle.clear_dictionary();
        assert!(boggle.solve().is_empty());
        assert_eq!(boggle.dictionary_state(), &DictionaryState::Unconfigured);
    }

    #[test]
    fn default_solver_is_unconfigured() {
        let mut boggle: Boggle = Boggle::default();
        assert!(boggle.solve().is_empty());
        assert!(boggle.find_path("abc").is_none());
    }

    #[test]
    fn non_alphabetical_chars() {
        let mut boggle = Boggle::new([["1", "2"], ["3", "4"]], ["123", "1234", "12a"]);
        assert_eq!(boggle.solve(), vec!["123", "1234"]);
    }

    #[test]
    fn case_insensitivity() {
        let mut boggle = Boggle::new([["a", "B"], ["c", "D"]], ["abcd"]);
        assert!(boggle.solve().contains(&"abcd".to_string()));
    }

    #[test]
    fn no_tile_reuse() {
        let mut boggle = Boggle::new([["A", "B"], ["C", "D"]], ["AA", "ABC", "ABA"]);
        assert_eq!(boggle.solve(), vec!["abc"]);
    }

    #[test]
    fn no_valid_words() {
        let mut boggle = Boggle::new([["A", "B"], ["C", "D"]], ["HELLO", "WORLD"]);
        assert!(boggle.solve().is_empty());
    }

    #[test]
    fn large_grid() {
        let grid = [
            ["A", "B", "C", "D"],
            ["E", "F", "G", "H"],
            ["I", "J", "K", "L"],
            ["M", "N", "O", "P"],
        ];
        let mut boggle = Boggle::new(grid, ["ABCD", "AFKP", "DGJK", "AFKPA"]);
        assert_eq!(boggle.solve(), vec!["abcd", "afkp", "dgjk"]);
    }

    #[test]
    fn multiple_occurrences() {
        let mut boggle = Boggle::new([["A", "B"], ["B", "A"]], ["ABA"]);
        let solution = boggle.solve();
        assert_eq!(solution.iter().filter(|w| *w == "aba").count(), 1);
    }

    #[test]
    fn solve_is_idempotent_and_cached() {
        let mut boggle = Boggle::new(three_by_three(), ["ABC", "AEI", "DEF", "IHG"]);
        let first = boggle.solve();
        let second = boggle.solve();
        assert_eq!(first, second);
        assert_eq!(boggle.solution(), first.as_slice());
    }

    #[test]
    fn setters_reconfigure() {
        let mut boggle = Boggle::new(three_by_three(), ["ABC"]);
        assert_eq!(boggle.solve(), vec!["abc"]);

        boggle.set_dictionary(["GHI", "CFI"]);
        assert_eq!(boggle.solve(), vec!["cfi", "ghi"]);

        boggle.set_grid(Vec::<Vec<String>>::new());
        assert!(boggle.solve().is_empty());

        boggle.set_parsed_grid(Grid::parse("ghi/def/abc").unwrap());
        assert_eq!(boggle.solve(), vec!["cfi", "ghi"]);
    }

    #[test]
    fn find_path_on_solver() {
        let boggle = Boggle::new(three_by_three(), NO_WORDS);
        let path = boggle.find_path("aei").unwrap();
        assert_eq!(path, vec![(0, 0), (1, 1), (2, 2)]);
        assert!(boggle.find_path("aci").is_none());
    }

    #[test]
    fn traversals_and_parallel_agree() {
        let grid = [
            ["T", "A", "P", "E"],
            ["E", "R", "S", "O"],
            ["N", "I", "L", "D"],
            ["Qu", "S", "T", "E"],
        ];
        let words = ["tap", "tape", "tern", "sold", "quire", "list", "sled", "pest"];

        let mut recursive = Boggle::with_traversal(RecursiveTraversal, grid, words);
        let mut stack = Boggle::new(grid, words);
        let mut dynamic =
            Boggle::with_traversal(TraversalType::from_name("recursive"), grid, words);

        let expected = recursive.solve();
        assert_eq!(
            expected,
            vec!["list", "quire", "sled", "sold", "tap", "tape", "tern"]
        );
        assert_eq!(stack.solve(), expected);
        assert_eq!(dynamic.solve(), expected);
        assert_eq!(recursive.solve_parallel(), expected);
        assert_eq!(stack.solve_parallel(), expected);
    }

    /// Random small grids over a tiny alphabet, checked against the
    /// properties every solution must satisfy
    #[test]
    fn random_grids_satisfy_solution_properties() {
        let mut rng = StdRng::seed_from_u64(2024);
        let alphabet = ["A", "B", "E", "Q", "ST", "R"];

        for _ in 0..40 {
            let rows = rng.random_range(1..=3);
            let cols = rng.random_range(1..=3);
            let grid: Vec<Vec<String>> = (0..rows)
                .map(|_| {
                    (0..cols)
                        .map(|_| alphabet[rng.random_range(0..alphabet.len())].to_string())
                        .collect()
                })
                .collect();

            let words: Vec<String> = (0..60)
                .map(|_| {
                    let len = rng.random_range(1..=4);
                    (0..len)
                        .map(|_| alphabet[rng.random_range(0..alphabet.len())].to_lowercase())
                        .collect()
                })
                .collect();
            let dictionary = Dictionary::from_words(&words);

            let mut boggle = Boggle::new(grid.clone(), &words);
            let solution = boggle.solve();
            let checked = Grid::new(grid).unwrap();

            assert!(solution.windows(2).all(|pair| pair[0] < pair[1]));
            for word in &solution {
                assert!(word.chars().count() >= 3, "'{word}' is too short");
                assert!(dictionary.contains(&word.to_uppercase()));
                let path = boggle.find_path(word).unwrap();
                assert!(is_valid_path(&checked, &path, word));
            }

            assert_eq!(boggle.solve(), solution);
            assert_eq!(boggle.solve_parallel(), solution);
        }
    }

    /// Every dictionary word that can be traced with three or more
    /// characters must be found
    #[test]
    fn traced_words_are_found() {
        let grid = [["S", "T", "A"], ["E", "R", "Q"], ["N", "I", "T"]];
        let candidates = [
            "star", "stare", "rest", "sent", "tin", "quit", "quite", "rent", "zzz", "ta",
        ];
        let mut boggle = Boggle::new(grid, candidates);
        let solution = boggle.solve();

        for word in candidates {
            let traceable =
                boggle.find_path(word).is_some() && word.chars().count() >= MIN_WORD_LEN;
            assert_eq!(
                solution.contains(&word.to_string()),
                traceable,
                "mismatch for '{word}'"
            );
        }
    }

    #[test]
    fn long_strip_solves_without_deep_recursion() {
        let mut boggle = Boggle::new(vec![vec!["A"; 5000]], ["AAA"]);
        assert_eq!(boggle.solve(), vec!["aaa"]);
    }

    #[test]
    fn long_strip_solves_in_parallel() {
        let mut boggle = Boggle::new(vec![vec!["a"; 2000]; 1], ["aaa", "aaaa"]);
        assert_eq!(boggle.solve_parallel(), vec!["aaa", "aaaa"]);
    }
}
