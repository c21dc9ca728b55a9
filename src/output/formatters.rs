//! Formatting utilities for terminal output

use crate::core::Grid;

/// Width of the widest tile, in characters
#[must_use]
pub fn tile_width(grid: &Grid) -> usize {
    grid.row_iter()
        .flatten()
        .map(|tile| tile.chars().count())
        .max()
        .unwrap_or(1)
}

/// Pad a tile on the right to a fixed width
#[must_use]
pub fn pad_tile(tile: &str, width: usize) -> String {
    format!("{tile:<width$}")
}

/// Format a path as `(row,col)` steps joined by arrows
#[must_use]
pub fn path_to_string(path: &[(usize, usize)]) -> String {
    path.iter()
        .map(|(row, col)| format!("({row},{col})"))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Lay words out in rows of `columns` entries, each padded to the longest word
#[must_use]
pub fn word_columns<S: AsRef<str>>(words: &[S], columns: usize) -> Vec<String> {
    let width = words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    words
        .chunks(columns.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{:<width$}", w.as_ref()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}
