//! Dice rolling command
//!
//! Shakes the classic dice into a fresh grid.

use crate::core::{Grid, GridError, dice};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Roll a 4x4 grid, reproducibly when a seed is given
///
/// # Errors
///
/// Returns `GridError` only if the dice produce a malformed grid.
pub fn roll_grid(seed: Option<u64>) -> Result<Grid, GridError> {
    let rows = match seed {
        Some(seed) => dice::roll(&mut StdRng::seed_from_u64(seed)),
        None => dice::roll(&mut rand::rng()),
    };
    Grid::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::CLASSIC_SIZE;

    #[test]
    fn roll_grid_is_square() {
        let grid = roll_grid(None).unwrap();
        assert_eq!(grid.rows(), CLASSIC_SIZE);
        assert_eq!(grid.cols(), CLASSIC_SIZE);
    }

    #[test]
    fn seeded_rolls_repeat() {
        assert_eq!(roll_grid(Some(5)).unwrap(), roll_grid(Some(5)).unwrap());
    }
}
