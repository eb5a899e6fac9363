//! The zsfold crate.
//!
//! Minimum free energy folding of a single RNA sequence, after Zuker and
//! Stiegler (1981), with a deliberately simple loop model:
//!  - hairpin, stacking, bulge and interior loops are charged by the
//!    energy model,
//!  - a loop closing two branches (bifurcation) is free,
//!  - unpaired bases outside of any loop are free.
//!
//! Two mutually recursive dynamic programs do the work: the exterior
//! recursion folds a free substring, the enclosed recursion folds the
//! inside of a committed closing pair. Both are memoized by substring
//! *content*, so their results are always relative to their own input.
//!
//! ```no_run
//! use zs_energy::EnergyTable;
//! use zsfold::Folder;
//!
//! let table = EnergyTable::default();
//! let mfe = Folder::new(&table).fold_str("GGGGAAAACCCC").unwrap();
//! println!("{} ({:.2})", mfe.structure(), mfe.energy());
//! ```

mod error;
mod config;
mod fold;
mod cache;
mod branches;
mod exterior;
mod enclosed;
mod folder;
mod input;

pub use error::*;
pub use config::*;
pub use fold::*;
pub use folder::*;
pub use input::*;

#[cfg(test)]
mod testutil;
