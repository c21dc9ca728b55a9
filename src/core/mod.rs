//! Core domain types for Boggle
//!
//! Grids, dictionaries, tiles, dice and scoring. Everything here is pure and
//! independent of how the grid is searched.

pub mod dice;
mod dictionary;
mod grid;
mod score;
mod tile;

pub use dictionary::{Dictionary, DictionaryState};
pub use grid::{Grid, GridError, GridState, NEIGHBOR_OFFSETS};
pub use score::{MIN_WORD_LEN, points_for_len, total_score, word_score};
pub use tile::{Tile, normalize_tile};
