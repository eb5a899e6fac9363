//! The exterior recursion: fold a substring whose ends are free.

use std::rc::Rc;
use zs_energy::Base;
use zs_energy::EnergyModel;
use zs_structure::Pair;
use zs_structure::LocalPairs;
use zs_structure::NAIDX;

use crate::Fold;
use crate::FoldError;
use crate::folder::FoldContext;

impl<M: EnergyModel> FoldContext<'_, M> {
    /// Either `seq[0]` stays unpaired, or it pairs with some downstream
    /// complementary `seq[k]`, which splits the problem into the enclosed
    /// fold of `seq[..=k]` and the exterior fold of `seq[k + 1..]`.
    pub(crate) fn exterior(&mut self, seq: &[Base]) -> Result<Rc<Fold>, FoldError> {
        if seq.len() < self.min_pair_dist + 1 {
            return Ok(Rc::new(Fold::open()));
        }
        if let Some(hit) = self.cache.exterior(seq) {
            return Ok(hit);
        }

        let rest = self.exterior(&seq[1..])?;
        let mut best = Fold::new(rest.energy(), rest.pairs().adjust(1));

        let partner = seq[0].complement();
        for k in self.min_pair_dist..seq.len() {
            if seq[k] != partner {
                continue;
            }
            let inside = self.enclosed(&seq[..=k])?;
            let tail = self.exterior(&seq[k + 1..])?;
            let energy = inside.energy() + tail.energy();
            if best.admits(energy) {
                let mut pairs = LocalPairs::with_pair(Pair::new(0, k as NAIDX));
                pairs.extend_adjusted(inside.pairs(), 0);
                pairs.extend_adjusted(tail.pairs(), (k + 1) as NAIDX);
                best = Fold::new(energy, pairs);
            }
        }
        Ok(self.cache.store_exterior(seq, best))
    }
}

#[cfg(test)]
mod tests {
    use zs_energy::RnaSequence;
    use zs_structure::Pair;

    use crate::Folder;
    use crate::testutil::*;

    #[test]
    fn test_too_short_to_pair() {
        let table = uniform_table();
        let folder = Folder::new(&table);
        for s in ["", "G", "AUGC", "GAAAC"] {
            let seq = RnaSequence::try_from(s).unwrap();
            let fold = folder.fold_exterior(&seq).unwrap();
            assert_eq!(fold.energy(), 0.0);
            assert!(fold.pairs().is_empty());
        }
    }

    #[test]
    fn test_unpaired_when_nothing_pays_off() {
        // Hairpins cost more than they gain without stacking.
        let table = uniform_table();
        let seq = RnaSequence::try_from("GAAAAAAC").unwrap();
        let fold = Folder::new(&table).fold_exterior(&seq).unwrap();
        assert_eq!(fold.energy(), 0.0);
        assert!(fold.pairs().is_empty());
    }

    #[test]
    fn test_suffix_results_are_shifted() {
        let mut table = uniform_table();
        table.insert(hairpin_key('G', 5), -1.0);

        let seq = RnaSequence::try_from("AGAAAAACGAAAAAC").unwrap();
        let fold = Folder::new(&table).fold_exterior(&seq).unwrap();
        assert_eq!(fold.energy(), -2.0);
        assert_eq!(
            fold.into_pairs().into_global(seq.len()).pairs(),
            &[Pair::new(1, 7), Pair::new(8, 14)]
        );
    }
}
