//! Candidate inner pairs of a loop, and the two-branch search.
//!
//! Every inner pair that may close a substructure inside a loop is a
//! `Branch`. The single-pair loops (stack, bulge, interior) pick one
//! branch, a bifurcation picks two disjoint ones. The two-branch search
//! is a plain nested enumeration over the sorted branch list; it only
//! depends on `BranchSet`, so it can be swapped for something smarter.

use std::rc::Rc;
use zs_energy::Base;
use zs_energy::EnergyModel;
use zs_structure::Pair;
use zs_structure::LocalPairs;
use zs_structure::NAIDX;

use crate::Fold;
use crate::FoldError;
use crate::folder::FoldContext;

/// An inner pair (i, j) in *interior* coordinates, together with the
/// best fold enclosed by it.
#[derive(Debug, Clone)]
pub(crate) struct Branch {
    pub i: usize,
    pub j: usize,
    pub fold: Rc<Fold>,
}

impl Branch {
    /// Add this branch to the pairs of the enclosing substring, whose
    /// position 0 is the closing base right before the interior.
    pub fn place_into(&self, pairs: &mut LocalPairs) {
        let offset = (self.i + 1) as NAIDX;
        pairs.push(Pair::new(offset, (self.j + 1) as NAIDX));
        pairs.extend_adjusted(self.fold.pairs(), offset);
    }
}

/// All branches of one interior, sorted by (i, j).
#[derive(Debug, Clone, Default)]
pub(crate) struct BranchSet(Vec<Branch>);

impl BranchSet {
    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The best combination of two disjoint branches, enumerated in
    /// lexicographic (i1, j1, i2, j2) order. Ties go to the later one.
    pub fn best_two(&self) -> Option<(&Branch, &Branch, f64)> {
        let mut best: Option<(&Branch, &Branch, f64)> = None;
        for (x, first) in self.0.iter().enumerate() {
            let start = x + self.0[x..].partition_point(|b| b.i <= first.j);
            for second in &self.0[start..] {
                let energy = first.fold.energy() + second.fold.energy();
                if energy.is_finite() && best.is_none_or(|(_, _, e)| energy <= e) {
                    best = Some((first, second, energy));
                }
            }
        }
        best
    }
}

impl<M: EnergyModel> FoldContext<'_, M> {
    /// Collect every complementary (i, j) with j - i >= min_pair_dist.
    pub(crate) fn branches(&mut self, interior: &[Base]) -> Result<BranchSet, FoldError> {
        let mut branches = Vec::new();
        for i in 0..interior.len() {
            for j in (i + self.min_pair_dist)..interior.len() {
                if !interior[i].pairs_with(interior[j]) {
                    continue;
                }
                let fold = self.enclosed(&interior[i..=j])?;
                branches.push(Branch { i, j, fold });
            }
        }
        Ok(BranchSet(branches))
    }
}
