//! Word lists for Boggle solving
//!
//! Provides an embedded default list plus file loading.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
