use std::path::Path;
use std::path::PathBuf;
use log::info;
use serde::Deserialize;
use serde::Serialize;
use zs_energy::EnergyTable;

use crate::FoldError;

/// Default minimum sequence distance `j - i` of a base pair.
pub const MINPAIRDIST: usize = 5;

/// Below this a hairpin would enclose fewer than three unpaired bases.
pub const MIN_SUPPORTED_PAIR_DIST: usize = 4;

/// Folding settings, as read from a JSON file.
///
/// ```json
/// { "min_pair_dist": 5, "parameters": "turner.json" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoldConfig {
    pub min_pair_dist: usize,
    /// Energy table file. The built-in table is used if absent.
    pub parameters: Option<PathBuf>,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            min_pair_dist: MINPAIRDIST,
            parameters: None,
        }
    }
}

impl FoldConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, FoldError> {
        let content = std::fs::read_to_string(path).map_err(|source| FoldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| FoldError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FoldError> {
        if self.min_pair_dist < MIN_SUPPORTED_PAIR_DIST {
            return Err(FoldError::Config(format!(
                "min_pair_dist must be at least {MIN_SUPPORTED_PAIR_DIST}, got {}",
                self.min_pair_dist
            )));
        }
        Ok(())
    }

    /// Load the configured energy table and check that it covers every
    /// loop a fold with this configuration can ask for.
    pub fn energy_table(&self) -> Result<EnergyTable, FoldError> {
        self.validate()?;
        let table = match &self.parameters {
            Some(path) => {
                info!("Loading energy parameters from {}.", path.display());
                EnergyTable::from_json_file(path)?
            }
            None => {
                info!("Using built-in energy parameters.");
                EnergyTable::default()
            }
        };
        table.validate(self.min_pair_dist)?;
        Ok(table)
    }
}
