//! The built-in parameter set.
//!
//! Watson–Crick stacking energies and loop initiation terms in kcal/mol at
//! 37°C, in the spirit of the Turner nearest-neighbour parameters. Loops
//! longer than the tabulated lengths are extrapolated logarithmically.

use once_cell::sync::Lazy;

use crate::Base;
use crate::LoopKey;
use crate::LengthBin;
use crate::PairClass;
use crate::ClosingClass;
use crate::EnergyTable;

pub(crate) static DEFAULT_TABLE: Lazy<EnergyTable> = Lazy::new(builtin);

/// 1.75·RT at 37°C.
const EXTRAPOLATION: f64 = 1.07856;

/// Penalty for each A–U closure of a loop.
const TERMINAL_AU: f64 = 0.45;

const HAIRPIN: [(usize, f64); 7] = [(3, 5.4), (4, 5.6), (5, 5.7), (6, 5.4), (7, 6.0), (8, 5.5), (9, 6.4)];
const BULGE: [(usize, f64); 6] = [(1, 3.8), (2, 2.8), (3, 3.2), (4, 3.6), (5, 4.0), (6, 4.4)];
const INTERIOR: [(usize, f64); 5] = [(2, 0.5), (3, 1.6), (4, 1.1), (5, 2.0), (6, 2.0)];

/// Outer pair (5', 3') followed by inner pair (5', 3').
const STACKS: [([Base; 4], f64); 16] = {
    use Base::*;
    [
        ([A, U, A, U], -0.93), ([A, U, U, A], -1.10), ([A, U, C, G], -2.24), ([A, U, G, C], -2.08),
        ([U, A, A, U], -1.33), ([U, A, U, A], -0.93), ([U, A, C, G], -2.35), ([U, A, G, C], -2.11),
        ([C, G, A, U], -2.11), ([C, G, U, A], -2.08), ([C, G, C, G], -3.26), ([C, G, G, C], -2.36),
        ([G, C, A, U], -2.35), ([G, C, U, A], -2.24), ([G, C, C, G], -3.42), ([G, C, G, C], -3.26),
    ]
};

fn initiation(tabulated: &[(usize, f64)], len: usize) -> f64 {
    if let Some(&(_, e)) = tabulated.iter().find(|&&(l, _)| l == len) {
        return e;
    }
    let (longest, e) = tabulated[tabulated.len() - 1];
    e + EXTRAPOLATION * (len as f64 / longest as f64).ln()
}

fn builtin() -> EnergyTable {
    let mut table = EnergyTable::new();

    for class in [ClosingClass::Weak, ClosingClass::Strong] {
        let penalty = match class {
            ClosingClass::Weak => TERMINAL_AU,
            ClosingClass::Strong => 0.0,
        };
        for bin in LengthBin::starting_at(HAIRPIN[0].0) {
            table.insert(LoopKey::Hairpin(class, bin), initiation(&HAIRPIN, bin.length()) + penalty);
        }
    }

    for bin in LengthBin::starting_at(BULGE[0].0) {
        table.insert(LoopKey::Bulge(bin), initiation(&BULGE, bin.length()));
    }

    for class in PairClass::ALL {
        let penalty = match class {
            PairClass::Strong => 0.0,
            PairClass::Mixed => TERMINAL_AU,
            PairClass::Weak => 2.0 * TERMINAL_AU,
        };
        for bin in LengthBin::starting_at(INTERIOR[0].0) {
            table.insert(LoopKey::Interior(class, bin), initiation(&INTERIOR, bin.length()) + penalty);
        }
    }

    for (bases, e) in STACKS {
        table.insert(LoopKey::Stack(bases), e);
    }
    table
}
