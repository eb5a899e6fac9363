use zs_structure::LocalPairs;

/// Energy of a region that cannot hold the requested structure.
/// Larger than any achievable energy, so it never wins a comparison.
pub const INFEASIBLE: f64 = f64::INFINITY;

/// A (sub)fold: free energy plus pairs relative to the folded substring.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    energy: f64,
    pairs: LocalPairs,
}

impl Fold {
    pub fn new(energy: f64, pairs: LocalPairs) -> Self {
        Self { energy, pairs }
    }

    /// Nothing paired, nothing charged.
    pub fn open() -> Self {
        Self::new(0.0, LocalPairs::new())
    }

    pub fn infeasible() -> Self {
        Self::new(INFEASIBLE, LocalPairs::new())
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn pairs(&self) -> &LocalPairs {
        &self.pairs
    }

    pub fn into_pairs(self) -> LocalPairs {
        self.pairs
    }

    pub fn is_feasible(&self) -> bool {
        self.energy.is_finite()
    }

    /// A candidate with `energy` replaces this fold if it is feasible and
    /// not worse. Equal energies favour the later candidate.
    pub(crate) fn admits(&self, energy: f64) -> bool {
        energy.is_finite() && energy <= self.energy
    }

    pub(crate) fn keep_best(&mut self, candidate: Fold) {
        if self.admits(candidate.energy) {
            *self = candidate;
        }
    }
}
