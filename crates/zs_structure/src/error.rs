use thiserror::Error;

use crate::Pair;

/// Errors raised when a structure representation is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("unmatched '(' at position {0}")]
    UnmatchedOpen(usize),

    #[error("unmatched ')' at position {0}")]
    UnmatchedClose(usize),

    #[error("invalid dot-bracket character '{token}' at position {position}")]
    InvalidToken { token: char, position: usize },

    #[error("pair {pair} does not fit into a structure of length {length}")]
    OutOfRange { pair: Pair, length: usize },

    #[error("position {0} is paired more than once")]
    Conflict(usize),

    #[error("pairs {first} and {second} are crossing")]
    Crossing { first: Pair, second: Pair },
}
