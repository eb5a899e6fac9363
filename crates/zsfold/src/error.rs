use std::path::PathBuf;
use thiserror::Error;

use zs_energy::EnergyError;
use zs_energy::SequenceError;

#[derive(Debug, Error)]
pub enum FoldError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Energy(#[from] EnergyError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration '{path}': {source}", path = .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
