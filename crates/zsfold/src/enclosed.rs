//! The enclosed recursion: fold the inside of a committed closing pair.
//!
//! `seq[0]` and `seq[last]` form the closing pair. Three hypotheses
//! compete for the interior: a hairpin (nothing paired), a single inner
//! pair (stack, bulge or interior loop), or two branches (bifurcation,
//! which is free of charge). They are evaluated in that order.

use std::rc::Rc;
use zs_energy::Base;
use zs_energy::EnergyModel;
use zs_structure::LocalPairs;

use crate::Fold;
use crate::FoldError;
use crate::branches::BranchSet;
use crate::folder::FoldContext;

impl<M: EnergyModel> FoldContext<'_, M> {
    pub(crate) fn enclosed(&mut self, seq: &[Base]) -> Result<Rc<Fold>, FoldError> {
        if seq.len() < 2 {
            return Ok(Rc::new(Fold::infeasible()));
        }
        if let Some(hit) = self.cache.enclosed(seq) {
            return Ok(hit);
        }

        let interior = &seq[1..seq.len() - 1];
        let branches = self.branches(interior)?;

        let mut best = self.hairpin(seq)?;
        best.keep_best(self.single_inner_pair(seq, &branches)?);
        best.keep_best(two_branches(&branches));
        Ok(self.cache.store_enclosed(seq, best))
    }

    fn hairpin(&self, seq: &[Base]) -> Result<Fold, FoldError> {
        let loop_len = seq.len() - 2;
        if loop_len + 1 < self.min_pair_dist {
            return Ok(Fold::infeasible());
        }
        Ok(Fold::new(self.model.hairpin(seq[0], loop_len)?, LocalPairs::new()))
    }

    fn single_inner_pair(&self, seq: &[Base], branches: &BranchSet) -> Result<Fold, FoldError> {
        let mut best = Fold::infeasible();
        if branches.is_empty() {
            return Ok(best);
        }
        let outer = (seq[0], seq[seq.len() - 1]);
        let interior = &seq[1..seq.len() - 1];
        let last = interior.len() - 1;

        for branch in branches.iter() {
            let (i, j) = (branch.i, branch.j);
            let inner = (interior[i], interior[j]);
            let closing = match (i == 0, j == last) {
                (true, true) => self.model.stack(outer, inner)?,
                (true, false) => self.model.bulge(last - j, outer, inner)?,
                (false, true) => self.model.bulge(i, outer, inner)?,
                (false, false) => self.model.interior(outer.0, inner.0, i + last - j)?,
            };
            let energy = closing + branch.fold.energy();
            if best.admits(energy) {
                let mut pairs = LocalPairs::new();
                branch.place_into(&mut pairs);
                best = Fold::new(energy, pairs);
            }
        }
        Ok(best)
    }
}

fn two_branches(branches: &BranchSet) -> Fold {
    let Some((first, second, energy)) = branches.best_two() else {
        return Fold::infeasible();
    };
    let mut pairs = LocalPairs::new();
    first.place_into(&mut pairs);
    second.place_into(&mut pairs);
    Fold::new(energy, pairs)
}
