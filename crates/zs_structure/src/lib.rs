//! The zs_structure crate.
//!
//! Secondary structure representations used by the zsfold engine:
//!  - base pairs and pairing lists (local and global coordinates),
//!  - dot-bracket rendering and parsing,
//!  - pair tables for structural sanity checks.
//!

mod error;
mod pair_list;
mod dotbracket;
mod pair_table;

pub use error::*;
pub use pair_list::*;
pub use dotbracket::*;
pub use pair_table::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for nucleic acids,
/// especially with a folding algorithm that is quartic in the loop length.
/// Beware that `P1KEY` needs to be *twice as large* (in bits) as `NAIDX`, since
/// pairs `(NAIDX, NAIDX)` are compacted into one `P1KEY`.
pub type NAIDX = u16;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u32;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};

