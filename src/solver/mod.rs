//! Boggle solving
//!
//! The solver owns grid and dictionary state; traversals enumerate paths.

mod board;
mod engine;
pub mod path;
pub mod traversal;

pub use board::Board;
pub use engine::Boggle;
pub use path::{Path, find_path, is_valid_path};
pub use traversal::{RecursiveTraversal, StackTraversal, Traversal, TraversalType};
