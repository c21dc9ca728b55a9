//! Boggle Solver
//!
//! Finds every dictionary word hidden in a Boggle grid by exhaustive
//! depth-first search over self-avoiding paths of adjacent tiles.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::solver::Boggle;
//!
//! let grid = [["Q", "I", "X"], ["Y", "T", "Z"], ["A", "B", "C"]];
//! let mut boggle = Boggle::new(grid, ["quit", "cab", "it"]);
//!
//! assert_eq!(boggle.solve(), vec!["quit"]);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
