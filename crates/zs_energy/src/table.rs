//! A lookup table of loop energies.
//!
//! Parameter files are flat JSON objects mapping key strings (see the
//! `keys` module) to energies in kcal/mol:
//!
//! ```json
//! { "GCGC": -3.26, "bulge1": 3.8, "hairpinG4": 5.6, "interiorAA30+": 4.47 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use ahash::AHashMap;
use log::debug;

use crate::LoopKey;
use crate::EnergyError;
use crate::EnergyModel;
use crate::default::DEFAULT_TABLE;

#[derive(Debug, Clone)]
pub struct EnergyTable {
    entries: AHashMap<LoopKey, f64>,
}

impl EnergyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self { entries: AHashMap::default() }
    }

    /// Build a table with one entry per key, computed by `f`.
    pub fn from_fn<I, F>(keys: I, mut f: F) -> Self
    where
        I: IntoIterator<Item = LoopKey>,
        F: FnMut(&LoopKey) -> f64,
    {
        let entries = keys.into_iter()
            .map(|key| {
                let value = f(&key);
                (key, value)
            })
            .collect();
        Self { entries }
    }

    /// Insert or override an entry, returning the previous value.
    pub fn insert(&mut self, key: LoopKey, value: f64) -> Option<f64> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &LoopKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every key a fold with `min_pair_dist` may construct is
    /// present, and that all values are finite.
    pub fn validate(&self, min_pair_dist: usize) -> Result<(), EnergyError> {
        for (key, &value) in self.entries.iter() {
            if !value.is_finite() {
                return Err(EnergyError::NonFinite { key: key.to_string(), value });
            }
        }
        match LoopKey::constructible(min_pair_dist)
            .into_iter()
            .find(|key| !self.entries.contains_key(key))
        {
            Some(key) => Err(EnergyError::MissingEntry(key.to_string())),
            None => Ok(()),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, EnergyError> {
        let raw: BTreeMap<String, f64> = serde_json::from_str(s)?;
        let mut entries = AHashMap::with_capacity(raw.len());
        for (name, value) in raw {
            if !value.is_finite() {
                return Err(EnergyError::NonFinite { key: name, value });
            }
            let key = name.parse::<LoopKey>()?;
            if entries.insert(key, value).is_some() {
                return Err(EnergyError::InvalidKey(name));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, EnergyError> {
        let content = std::fs::read_to_string(path).map_err(|source| EnergyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&content)?;
        debug!("Read {} energy parameters from {}.", table.len(), path.display());
        Ok(table)
    }

    /// Serialize to the parameter file format, with sorted keys.
    pub fn to_json_string(&self) -> Result<String, EnergyError> {
        let sorted: BTreeMap<String, f64> = self.entries
            .iter()
            .map(|(key, &value)| (key.to_string(), value))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

impl Default for EnergyTable {
    /// The built-in parameter set.
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl EnergyModel for EnergyTable {
    fn lookup(&self, key: &LoopKey) -> Result<f64, EnergyError> {
        self.get(key).ok_or_else(|| EnergyError::MissingEntry(key.to_string()))
    }
}
