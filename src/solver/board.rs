//! Search view of a configured solver
//!
//! A Board pairs a grid's normalized tiles with the dictionary for the
//! duration of one solve.

use crate::core::{Dictionary, Grid, MIN_WORD_LEN, Tile};
use rustc_hash::FxHashSet;

/// Normalized tiles of a grid plus the dictionary they are checked against
pub struct Board<'a> {
    grid: &'a Grid,
    tiles: Vec<Vec<Tile>>,
    dictionary: &'a Dictionary,
}

impl<'a> Board<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        Self {
            grid,
            tiles: normalized_tiles(grid),
            dictionary,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[row][col]
    }

    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.neighbors(row, col)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// A visited matrix with every cell free
    #[must_use]
    pub fn fresh_visited(&self) -> Vec<Vec<bool>> {
        vec![vec![false; self.cols()]; self.rows()]
    }

    /// Record `word` if it is long enough and in the dictionary
    ///
    /// `word` is the uppercase accumulator and `char_len` its length in
    /// characters. Hits are stored lowercase. Prefixes longer than every
    /// dictionary word skip the hash lookup.
    #[inline]
    pub fn record(&self, word: &str, char_len: usize, found: &mut FxHashSet<String>) {
        if (MIN_WORD_LEN..=self.dictionary.longest()).contains(&char_len)
            && self.dictionary.contains(word)
        {
            found.insert(word.to_lowercase());
        }
    }
}

/// Normalize every tile of a grid
#[must_use]
pub fn normalized_tiles(grid: &Grid) -> Vec<Vec<Tile>> {
    grid.row_iter()
        .map(|row| row.iter().map(|raw| Tile::new(raw)).collect())
        .collect()
}
