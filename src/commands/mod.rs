//! Command implementations

pub mod roll;
pub mod solve;
pub mod trace;

pub use roll::roll_grid;
pub use solve::{DEMO_GRID, FoundWord, SolveConfig, SolveResult, solve_grid};
pub use trace::{TraceResult, trace_word};
