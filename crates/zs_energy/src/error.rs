use std::path::PathBuf;
use thiserror::Error;

/// Input sequences must use the closed RNA alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("invalid nucleotide '{base}' at position {position}")]
    InvalidBase { base: char, position: usize },

    #[error("sequence of length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum EnergyError {
    /// A lookup miss: the parameter table does not cover a loop the
    /// recursion constructed. Always fatal.
    #[error("energy table has no entry for '{0}'")]
    MissingEntry(String),

    #[error("unrecognized energy table key '{0}'")]
    InvalidKey(String),

    #[error("energy table entry '{key}' is not finite ({value})")]
    NonFinite { key: String, value: f64 },

    #[error("failed to read energy table '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed energy table: {0}")]
    Json(#[from] serde_json::Error),
}
