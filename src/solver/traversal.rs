//! Path enumeration strategies
//!
//! Defines the Traversal trait and its recursive and explicit-stack
//! implementations. Both walk every self-avoiding path from a root cell and
//! produce the same words.

use super::board::Board;
use rustc_hash::FxHashSet;

/// A way of walking every simple path that starts at one root cell
pub trait Traversal {
    /// Walk all paths rooted at `root`, inserting dictionary hits into `found`
    ///
    /// The visited matrix is owned by this call and starts all-false.
    fn walk(&self, board: &Board<'_>, root: (usize, usize), found: &mut FxHashSet<String>);
}

/// Enum wrapper for all traversal types
///
/// Allows runtime selection of traversal while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalType {
    /// Call-stack recursion, limited by thread stack size on long paths
    Recursive(RecursiveTraversal),
    /// Explicit heap-allocated stack, safe for very long paths (default)
    Stack(StackTraversal),
}

impl Traversal for TraversalType {
    fn walk(&self, board: &Board<'_>, root: (usize, usize), found: &mut FxHashSet<String>) {
        match self {
            Self::Recursive(t) => t.walk(board, root, found),
            Self::Stack(t) => t.walk(board, root, found),
        }
    }
}

impl Default for TraversalType {
    fn default() -> Self {
        Self::Stack(StackTraversal)
    }
}

impl TraversalType {
    /// Create traversal from name string
    ///
    /// Supported names: "recursive", "stack", "iterative".
    /// Defaults to stack if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "recursive" => Self::Recursive(RecursiveTraversal),
            _ => Self::Stack(StackTraversal),
        }
    }
}

/// Depth-first search with backtracking on the call stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursiveTraversal;

impl Traversal for RecursiveTraversal {
    fn walk(&self, board: &Board<'_>, root: (usize, usize), found: &mut FxHashSet<String>) {
        let mut visited = board.fresh_visited();
        let mut word = String::new();
        extend(board, root, &mut visited, &mut word, 0, found);
    }
}

fn extend(
    board: &Board<'_>,
    (row, col): (usize, usize),
    visited: &mut [Vec<bool>],
    word: &mut String,
    prefix_chars: usize,
    found: &mut FxHashSet<String>,
) {
    if visited[row][col] {
        return;
    }

    let tile = board.tile(row, col);
    let prefix_len = word.len();
    word.push_str(tile.text());
    let char_len = prefix_chars + tile.char_len();

    board.record(word, char_len, found);

    visited[row][col] = true;
    for next in board.neighbors(row, col) {
        extend(board, next, visited, word, char_len, found);
    }
    visited[row][col] = false;

    word.truncate(prefix_len);
}

/// Depth-first search driven by an explicit stack of enter/leave steps
///
/// Visits paths in the same order as [`RecursiveTraversal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackTraversal;

enum Step {
    Enter {
        cell: (usize, usize),
        prefix_len: usize,
        prefix_chars: usize,
    },
    Leave((usize, usize)),
}

impl Traversal for StackTraversal {
    fn walk(&self, board: &Board<'_>, root: (usize, usize), found: &mut FxHashSet<String>) {
        let mut visited = board.fresh_visited();
        let mut word = String::new();
        let mut stack = vec![Step::Enter {
            cell: root,
            prefix_len: 0,
            prefix_chars: 0,
        }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter {
                    cell: (row, col),
                    prefix_len,
                    prefix_chars,
                } => {
                    if visited[row][col] {
                        continue;
                    }

                    // Drop whatever a finished sibling subtree left behind
                    word.truncate(prefix_len);
                    let tile = board.tile(row, col);
                    word.push_str(tile.text());
                    let char_len = prefix_chars + tile.char_len();

                    board.record(&word, char_len, found);

                    visited[row][col] = true;
                    stack.push(Step::Leave((row, col)));

                    // Reversed so the first neighbour is popped first
                    let mark = stack.len();
                    let len = word.len();
                    stack.extend(board.neighbors(row, col).map(|cell| Step::Enter {
                        cell,
                        prefix_len: len,
                        prefix_chars: char_len,
                    }));
                    stack[mark..].reverse();
                }
                Step::Leave((row, col)) => visited[row][col] = false,
            }
        }
    }
}
