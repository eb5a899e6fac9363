//! The zs_energy crate.
//!
//! Provides the nucleotide alphabet and the loop energy model for
//! the simplified Zuker–Stiegler folding in `zsfold`:
//!  - `Base` and `RnaSequence`, validated at the boundary,
//!  - typed loop keys and their parameter-file string form,
//!  - the `EnergyModel` trait with hairpin, stack, bulge and interior costs,
//!  - `EnergyTable`, including a built-in default parameter set.
//!

mod error;
mod base;
mod keys;
mod model;
mod table;
mod default;

pub use error::*;
pub use base::*;
pub use keys::*;
pub use model::*;
pub use table::*;

/// Loop lengths at or above this value share the saturated `30+` bin.
pub const LENGTH_CEILING: usize = 30;
