//! Small, exactly representable parameter sets for hand-checked tests.

use zs_energy::LoopKey;
use zs_energy::LengthBin;
use zs_energy::EnergyTable;

use crate::MINPAIRDIST;

pub(crate) const STACK: f64 = -3.0;
pub(crate) const HAIRPIN: f64 = 5.5;
pub(crate) const LONG_HAIRPIN: f64 = 30.0;
pub(crate) const LOOP: f64 = 20.0;

/// Every stack is worth `STACK`, hairpins up to 9 unpaired bases cost
/// `HAIRPIN`, longer ones `LONG_HAIRPIN`, bulges and interior loops `LOOP`.
pub(crate) fn uniform_table() -> EnergyTable {
    EnergyTable::from_fn(LoopKey::constructible(MINPAIRDIST), |key| match key {
        LoopKey::Stack(_) => STACK,
        LoopKey::Hairpin(_, bin) if bin.length() < 10 => HAIRPIN,
        LoopKey::Hairpin(..) => LONG_HAIRPIN,
        LoopKey::Bulge(_) | LoopKey::Interior(..) => LOOP,
    })
}

pub(crate) fn hairpin_key(closing: char, len: usize) -> LoopKey {
    format!("hairpin{closing}{}", LengthBin::from_len(len)).parse().unwrap()
}

pub(crate) fn bulge_key(len: usize) -> LoopKey {
    LoopKey::Bulge(LengthBin::from_len(len))
}

pub(crate) fn interior_key(class: &str, len: usize) -> LoopKey {
    format!("interior{class}{}", LengthBin::from_len(len)).parse().unwrap()
}
