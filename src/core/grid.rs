//! Boggle grid representation
//!
//! A Grid is a non-empty rectangle of raw string tokens. Tokens are stored as
//! given; normalization happens when a word is spelled.

use std::fmt;

/// The eight neighbour offsets (orthogonal and diagonal)
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<String>>,
    cols: usize,
}

/// Reasons a grid is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    EmptyRow(usize),
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid has no rows"),
            Self::EmptyRow(row) => write!(f, "Grid row {row} is empty"),
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid row {row} has {found} tiles, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from rows of tokens
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - There are no rows
    /// - Any row is empty
    /// - Rows differ in length
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Grid;
    ///
    /// let grid = Grid::new([["A", "B"], ["C", "D"]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    ///
    /// assert!(Grid::new(Vec::<Vec<&str>>::new()).is_err());
    /// assert!(Grid::new(vec![vec!["A", "B"], vec!["C"]]).is_err());
    /// ```
    pub fn new<G, R, S>(rows: G) -> Result<Self, GridError>
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tiles: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let cols = tiles.first().ok_or(GridError::Empty)?.len();

        for (i, row) in tiles.iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::EmptyRow(i));
            }
            if row.len() != cols {
                return Err(GridError::Jagged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        Ok(Self { tiles, cols })
    }

    /// Parse a grid from text
    ///
    /// Rows are separated by `/` or newlines. A row containing whitespace is
    /// split on whitespace, otherwise every character is its own tile.
    /// Blank rows are ignored.
    ///
    /// # Errors
    /// Returns `GridError` if the parsed rows do not form a valid grid.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Grid;
    ///
    /// let grid = Grid::parse("ab/cd").unwrap();
    /// assert_eq!(grid.tile(1, 0), "c");
    ///
    /// let grid = Grid::parse("Qu a\nst e").unwrap();
    /// assert_eq!(grid.tile(0, 0), "Qu");
    /// assert_eq!(grid.tile(1, 0), "st");
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows = text
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.contains(char::is_whitespace) {
                    line.split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<String>>()
                } else {
                    line.chars().map(String::from).collect()
                }
            });

        Self::new(rows)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get the raw token at a position
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    #[inline]
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> &str {
        &self.tiles[row][col]
    }

    /// Iterate over the raw rows
    pub fn row_iter(&self) -> impl Iterator<Item = &[String]> {
        self.tiles.iter().map(Vec::as_slice)
    }

    /// In-bounds neighbours of a cell, in offset order
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows() && c < self.cols).then_some((r, c))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Grid slot of a solver: either a valid grid or nothing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridState {
    #[default]
    Unconfigured,
    Configured(Grid),
}

impl GridState {
    #[must_use]
    pub const fn grid(&self) -> Option<&Grid> {
        match self {
            Self::Configured(grid) => Some(grid),
            Self::Unconfigured => None,
        }
    }
}

impl From<Result<Grid, GridError>> for GridState {
    fn from(result: Result<Grid, GridError>) -> Self {
        result.map_or(Self::Unconfigured, Self::Configured)
    }
}
