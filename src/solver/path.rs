//! Locating a word on the grid
//!
//! Finds one self-avoiding chain of adjacent cells whose normalized tiles
//! spell a given word. Used to show where a found word lies and to check
//! solver output.

use super::board::normalized_tiles;
use crate::core::{Grid, Tile};

/// A path through the grid as `(row, col)` cells
pub type Path = Vec<(usize, usize)>;

/// Find a path spelling `word`, ignoring case
///
/// Returns the first path found in row-major root order, or `None` if the
/// word cannot be spelled. The dictionary plays no part here.
///
/// # Examples
/// ```
/// use boggle_solver::core::Grid;
/// use boggle_solver::solver::find_path;
///
/// let grid = Grid::parse("q i x/y t z").unwrap();
/// assert_eq!(find_path(&grid, "quit"), Some(vec![(0, 0), (0, 1), (1, 1)]));
/// assert_eq!(find_path(&grid, "qit"), None);
/// ```
#[must_use]
pub fn find_path(grid: &Grid, word: &str) -> Option<Path> {
    let target = word.to_uppercase();
    if target.is_empty() {
        return None;
    }

    let tiles = normalized_tiles(grid);
    let mut visited = vec![vec![false; grid.cols()]; grid.rows()];
    let mut path = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if trace(grid, &tiles, (row, col), &target, &mut visited, &mut path) {
                return Some(path);
            }
        }
    }

    None
}

fn trace(
    grid: &Grid,
    tiles: &[Vec<Tile>],
    (row, col): (usize, usize),
    remaining: &str,
    visited: &mut [Vec<bool>],
    path: &mut Path,
) -> bool {
    if visited[row][col] {
        return false;
    }
    let Some(rest) = remaining.strip_prefix(tiles[row][col].text()) else {
        return false;
    };

    path.push((row, col));
    if rest.is_empty() {
        return true;
    }

    visited[row][col] = true;
    let spelled = grid
        .neighbors(row, col)
        .any(|next| trace(grid, tiles, next, rest, visited, path));
    visited[row][col] = false;

    if !spelled {
        path.pop();
    }
    spelled
}

/// Check that `path` is self-avoiding, 8-connected and spells `word`
#[must_use]
pub fn is_valid_path(grid: &Grid, path: &[(usize, usize)], word: &str) -> bool {
    let in_bounds = path
        .iter()
        .all(|&(row, col)| row < grid.rows() && col < grid.cols());
    if path.is_empty() || !in_bounds {
        return false;
    }

    let connected = path
        .windows(2)
        .all(|pair| grid.neighbors(pair[0].0, pair[0].1).any(|cell| cell == pair[1]));

    let mut cells = path.to_vec();
    cells.sort_unstable();
    cells.dedup();
    let self_avoiding = cells.len() == path.len();

    let spelled: String = path
        .iter()
        .map(|&(row, col)| Tile::new(grid.tile(row, col)).text().to_string())
        .collect();

    connected && self_avoiding && spelled == word.to_uppercase()
}
